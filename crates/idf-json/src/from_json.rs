// Dweve IDF - Input Data File toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! epJSON to document conversion

use crate::error::{kind_of, JsonConversionError};
use crate::schema::scalar;
use idf_core::{Document, FieldMap, Instance, Schema};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

/// Key recording an instance's position in the original legacy file.
pub const IDF_ORDER_KEY: &str = "idf_order";

/// Convert epJSON text to a document.
///
/// Object type keys are resolved case-insensitively against `schema`;
/// unknown types are kept as written so validation can report them.
/// Instances are ordered by their `idf_order` when present.
///
/// # Examples
///
/// ```
/// let schema = idf_test::fixtures::standard_schema();
/// let doc = idf_json::from_json(
///     r#"{"Zone": {"B": {"x_origin": 2, "idf_order": 2}, "A": {"idf_order": 1}}}"#,
///     &schema,
/// )
/// .unwrap();
///
/// let names: Vec<_> = doc.instances("Zone").unwrap().keys().cloned().collect();
/// assert_eq!(names, ["A", "B"]);
/// ```
pub fn from_json(text: &str, schema: &Schema) -> Result<Document, JsonConversionError> {
    let value: JsonValue = serde_json::from_str(text)?;
    from_json_value(&value, schema)
}

/// Convert a parsed epJSON value to a document.
pub fn from_json_value(value: &JsonValue, schema: &Schema) -> Result<Document, JsonConversionError> {
    let root = value
        .as_object()
        .ok_or_else(|| JsonConversionError::InvalidRoot(kind_of(value).to_string()))?;

    let mut document = Document::new();
    for (raw_type, instances) in root {
        let object_type = schema.resolve(raw_type).unwrap_or(raw_type.as_str());
        let object_schema = schema.object_type(object_type);
        // Unknown types keep any array as their repeating group.
        let is_extension = |key: &str| match object_schema {
            Some(ot) => ot.extension_key() == Some(key),
            None => true,
        };

        let instances = instances
            .as_object()
            .ok_or_else(|| JsonConversionError::InvalidObjectType {
                object_type: object_type.to_string(),
                found: kind_of(instances).to_string(),
            })?;

        let mut ordered = Vec::with_capacity(instances.len());
        for (name, body) in instances {
            let body = body
                .as_object()
                .ok_or_else(|| JsonConversionError::InvalidInstance {
                    object_type: object_type.to_string(),
                    name: name.clone(),
                    found: kind_of(body).to_string(),
                })?;
            let order = body.get(IDF_ORDER_KEY).and_then(JsonValue::as_u64);
            let instance = instance(object_type, name, body, &is_extension)?;
            ordered.push((order, name, instance));
        }
        // Unordered instances go last, in key order.
        ordered.sort_by_key(|(order, _, _)| order.unwrap_or(u64::MAX));

        let map = document.ensure_type(object_type);
        for (_, name, instance) in ordered {
            map.insert(name.clone(), instance);
        }
    }

    debug!(
        object_types = document.object_types().count(),
        instances = document.total_instances(),
        "converted epJSON"
    );
    Ok(document)
}

fn instance(
    object_type: &str,
    name: &str,
    body: &Map<String, JsonValue>,
    is_extension: &dyn Fn(&str) -> bool,
) -> Result<Instance, JsonConversionError> {
    let invalid = |field: &str, value: &JsonValue| JsonConversionError::InvalidValue {
        object_type: object_type.to_string(),
        name: name.to_string(),
        field: field.to_string(),
        found: kind_of(value).to_string(),
    };

    let mut instance = Instance::new();
    for (key, value) in body {
        if key == IDF_ORDER_KEY {
            continue;
        }
        match value {
            JsonValue::Array(entries) if is_extension(key) => {
                for entry in entries {
                    let entry = entry.as_object().ok_or_else(|| invalid(key, entry))?;
                    let mut fields = FieldMap::new();
                    for (field, value) in entry {
                        let scalar = scalar(value).ok_or_else(|| invalid(field, value))?;
                        fields.insert(field.clone(), scalar);
                    }
                    instance.extensions.push(fields);
                }
            }
            _ => {
                let scalar = scalar(value).ok_or_else(|| invalid(key, value))?;
                instance.fields.insert(key.clone(), scalar);
            }
        }
    }
    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use idf_core::Scalar;
    use idf_test::fixtures::standard_schema;
    use serde_json::json;

    #[test]
    fn test_fields_and_extensions() {
        let doc = from_json_value(
            &json!({"Foo": {"F1": {
                "a": 1,
                "b": 2.5,
                "extensions": [{"x": 10, "y": 20}, {"x": 30}]
            }}}),
            &standard_schema(),
        )
        .unwrap();
        let foo = doc.get("Foo", "F1").unwrap();
        assert_eq!(foo.get("a"), Some(&Scalar::Integer(1)));
        assert_eq!(foo.get("b"), Some(&Scalar::Real(2.5)));
        assert_eq!(foo.extensions.len(), 2);
        assert_eq!(foo.extensions[1].len(), 1);
    }

    #[test]
    fn test_type_keys_resolve_case_insensitively() {
        let doc = from_json_value(&json!({"ZONE": {"Z1": {}}}), &standard_schema()).unwrap();
        assert!(doc.contains("Zone", "Z1"));
    }

    #[test]
    fn test_unknown_type_kept() {
        let doc = from_json_value(&json!({"Gizmo": {"G": {"q": "v"}}}), &standard_schema())
            .unwrap();
        assert!(doc.contains("Gizmo", "G"));
    }

    #[test]
    fn test_idf_order() {
        let doc = from_json_value(
            &json!({"Zone": {
                "C": {"idf_order": 1},
                "A": {},
                "B": {"idf_order": 2}
            }}),
            &standard_schema(),
        )
        .unwrap();
        let names: Vec<&str> = doc
            .instances("Zone")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["C", "B", "A"]);
        assert!(doc.get("Zone", "C").unwrap().get(IDF_ORDER_KEY).is_none());
    }

    #[test]
    fn test_invalid_values() {
        let schema = standard_schema();
        assert!(matches!(
            from_json_value(&json!([]), &schema),
            Err(JsonConversionError::InvalidRoot(_))
        ));
        assert!(matches!(
            from_json_value(&json!({"Zone": []}), &schema),
            Err(JsonConversionError::InvalidObjectType { .. })
        ));
        assert!(matches!(
            from_json_value(&json!({"Zone": {"Z": 1}}), &schema),
            Err(JsonConversionError::InvalidInstance { .. })
        ));
        let err = from_json_value(&json!({"Zone": {"Z": {"x_origin": true}}}), &schema)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field \"x_origin\" in \"Zone\" instance \"Z\" has unsupported value boolean"
        );
        assert!(matches!(
            from_json_value(&json!({"Zone": {"Z": {"x_origin": [1]}}}), &schema),
            Err(JsonConversionError::InvalidValue { .. })
        ));
    }
}
