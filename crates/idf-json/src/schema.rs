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

//! epJSON schema loading.
//!
//! Builds the typed [`Schema`] from an epJSON schema document:
//!
//! ```text
//! {
//!   "properties": {
//!     "<Object Type>": {
//!       "patternProperties": { "<pattern>": { "properties": {...}, "required": [...] } },
//!       "name": { "retaincase": true },
//!       "legacy_idd": { "fields": [...], "extensibles": [...], "extension": "...",
//!                       "alphas": {...}, "numerics": {...} },
//!       "min_fields": 3, "minProperties": 1, "maxProperties": 1
//!     }
//!   },
//!   "required": ["Building"]
//! }
//! ```

use crate::error::{kind_of, JsonConversionError};
use idf_core::{
    partition_fields, Bound, EnumField, EnumValue, ExtensibleGroup, FieldPartition, FieldSchema,
    FieldType, LegacyLayout, NumericBounds, ObjectTypeSchema, Scalar, ScalarField, Schema,
    UnionBranch,
};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use tracing::debug;

/// The `legacy_idd` block of an object type.
#[derive(Debug, Deserialize)]
struct LegacyIdd {
    #[serde(default)]
    fields: Vec<String>,
    #[serde(default)]
    extensibles: Vec<String>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    alphas: Option<PartitionIdd>,
    #[serde(default)]
    numerics: Option<PartitionIdd>,
}

#[derive(Debug, Default, Deserialize)]
struct PartitionIdd {
    #[serde(default)]
    fields: Vec<String>,
    #[serde(default)]
    extensions: Vec<String>,
}

impl From<PartitionIdd> for FieldPartition {
    fn from(partition: PartitionIdd) -> Self {
        FieldPartition {
            fields: partition.fields,
            extensions: partition.extensions,
        }
    }
}

/// Load a schema from epJSON schema text.
///
/// # Examples
///
/// ```
/// let schema = idf_json::load_schema(r#"{
///     "properties": {
///         "Zone": {
///             "patternProperties": {
///                 ".*": { "properties": { "x_origin": { "type": "number" } } }
///             },
///             "name": { "type": "string" },
///             "legacy_idd": { "fields": ["name", "x_origin"] }
///         }
///     }
/// }"#).unwrap();
///
/// let zone = schema.resolve_object_type("ZONE").unwrap();
/// assert_eq!(zone.legacy.numerics.fields, ["x_origin"]);
/// ```
pub fn load_schema(text: &str) -> Result<Schema, JsonConversionError> {
    let value: JsonValue = serde_json::from_str(text)?;
    load_schema_value(&value)
}

/// Load a schema from an already parsed epJSON schema document.
pub fn load_schema_value(value: &JsonValue) -> Result<Schema, JsonConversionError> {
    let root = value
        .as_object()
        .ok_or_else(|| JsonConversionError::InvalidRoot(kind_of(value).to_string()))?;
    let properties = root
        .get("properties")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| {
            JsonConversionError::InvalidSchema("missing top-level \"properties\" object".into())
        })?;

    let mut object_types = Vec::with_capacity(properties.len());
    for (name, definition) in properties {
        object_types.push(object_type(name, definition)?);
    }

    let required = string_list(root.get("required"));
    debug!(object_types = object_types.len(), "loaded schema");
    Ok(Schema::new(object_types, required))
}

fn object_type(name: &str, definition: &JsonValue) -> Result<ObjectTypeSchema, JsonConversionError> {
    let invalid = |what: &str| {
        JsonConversionError::InvalidSchema(format!("object type \"{}\": {}", name, what))
    };
    let definition = definition
        .as_object()
        .ok_or_else(|| invalid("definition is not an object"))?;

    let instance = definition
        .get("patternProperties")
        .and_then(JsonValue::as_object)
        .and_then(|patterns| patterns.values().next())
        .and_then(JsonValue::as_object)
        .ok_or_else(|| invalid("missing \"patternProperties\""))?;

    let legacy_idd: LegacyIdd = match definition.get("legacy_idd") {
        Some(block) => serde_json::from_value(block.clone())
            .map_err(|err| invalid(&format!("bad \"legacy_idd\": {}", err)))?,
        None => return Err(invalid("missing \"legacy_idd\"")),
    };

    let mut fields = BTreeMap::new();
    if let Some(properties) = instance.get("properties").and_then(JsonValue::as_object) {
        for (key, property) in properties {
            fields.insert(key.clone(), field_schema(property));
        }
    }

    let mut schema = ObjectTypeSchema {
        name: name.to_string(),
        fields,
        required: string_list(instance.get("required")),
        name_retaincase: definition
            .get("name")
            .map(|n| flag(n.get("retaincase"))),
        min_fields: count(definition.get("min_fields")).unwrap_or(0),
        min_properties: count(definition.get("minProperties")),
        max_properties: count(definition.get("maxProperties")),
        ..ObjectTypeSchema::default()
    };
    schema.legacy = legacy_layout(&schema, legacy_idd);
    Ok(schema)
}

/// Build the positional layout, deriving the alpha/numeric partition from
/// field types when the schema does not list it.
fn legacy_layout(schema: &ObjectTypeSchema, idd: LegacyIdd) -> LegacyLayout {
    let (alphas, numerics) = match (idd.alphas, idd.numerics) {
        (None, None) => {
            let (alphas, numerics) = partition_fields(&idd.fields, |f| {
                schema.field(f).map(FieldSchema::is_numeric)
            });
            let (ext_alphas, ext_numerics) = partition_fields(&idd.extensibles, |f| {
                group_field_is_numeric(schema, idd.extension.as_deref(), f)
            });
            (
                FieldPartition {
                    fields: alphas,
                    extensions: ext_alphas,
                },
                FieldPartition {
                    fields: numerics,
                    extensions: ext_numerics,
                },
            )
        }
        (alphas, numerics) => (
            alphas.unwrap_or_default().into(),
            numerics.unwrap_or_default().into(),
        ),
    };
    LegacyLayout {
        fields: idd.fields,
        extensibles: idd.extensibles,
        extension: idd.extension,
        alphas,
        numerics,
    }
}

/// Whether a repeating group field is numeric, looked up before the layout
/// is attached to the object type.
fn group_field_is_numeric(
    schema: &ObjectTypeSchema,
    extension: Option<&str>,
    field: &str,
) -> Option<bool> {
    match schema.field(extension?) {
        Some(FieldSchema::Extensible(group)) => group.fields.get(field).map(FieldSchema::is_numeric),
        _ => None,
    }
}

fn field_schema(property: &JsonValue) -> FieldSchema {
    let field_type = property
        .get("type")
        .and_then(JsonValue::as_str)
        .and_then(FieldType::parse);
    let default = property.get("default").and_then(scalar);
    let retaincase = flag(property.get("retaincase"));

    if let Some(values) = property.get("enum").and_then(JsonValue::as_array) {
        return FieldSchema::Enum(EnumField {
            field_type,
            values: enum_values(values),
            default,
            retaincase,
        });
    }

    if field_type == Some(FieldType::Array) {
        let items = property.get("items");
        let mut group = ExtensibleGroup {
            required: string_list(items.and_then(|i| i.get("required"))),
            ..ExtensibleGroup::default()
        };
        if let Some(properties) = items
            .and_then(|i| i.get("properties"))
            .and_then(JsonValue::as_object)
        {
            for (key, item) in properties {
                group.fields.insert(key.clone(), field_schema(item));
            }
        }
        return FieldSchema::Extensible(group);
    }

    let any_of = property
        .get("anyOf")
        .and_then(JsonValue::as_array)
        .map(|branches| {
            branches
                .iter()
                .map(|branch| UnionBranch {
                    field_type: branch
                        .get("type")
                        .and_then(JsonValue::as_str)
                        .and_then(FieldType::parse),
                    bounds: bounds(branch),
                    values: branch
                        .get("enum")
                        .and_then(JsonValue::as_array)
                        .map(|v| enum_values(v))
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    FieldSchema::Scalar(ScalarField {
        field_type,
        bounds: bounds(property),
        any_of,
        default,
        retaincase,
    })
}

/// Numeric bounds. `exclusiveMinimum`/`exclusiveMaximum` may be a flag on
/// `minimum`/`maximum` or the bound value itself.
fn bounds(property: &JsonValue) -> NumericBounds {
    NumericBounds {
        minimum: bound(property.get("minimum"), property.get("exclusiveMinimum")),
        maximum: bound(property.get("maximum"), property.get("exclusiveMaximum")),
    }
}

fn bound(limit: Option<&JsonValue>, exclusive: Option<&JsonValue>) -> Option<Bound> {
    match exclusive {
        Some(JsonValue::Number(n)) => n.as_f64().map(|value| Bound {
            value,
            exclusive: true,
        }),
        Some(JsonValue::Bool(flag)) => limit.and_then(JsonValue::as_f64).map(|value| Bound {
            value,
            exclusive: *flag,
        }),
        _ => limit.and_then(JsonValue::as_f64).map(|value| Bound {
            value,
            exclusive: false,
        }),
    }
}

fn enum_values(values: &[JsonValue]) -> Vec<EnumValue> {
    values
        .iter()
        .filter_map(|v| match v {
            JsonValue::String(s) => Some(EnumValue::Str(s.clone())),
            JsonValue::Number(n) => n.as_i64().map(EnumValue::Int),
            _ => None,
        })
        .collect()
}

/// A JSON scalar as a document value.
pub(crate) fn scalar(value: &JsonValue) -> Option<Scalar> {
    match value {
        JsonValue::String(s) => Some(Scalar::String(s.clone())),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Some(Scalar::Integer(i)),
            None => n.as_f64().map(Scalar::Real),
        },
        _ => None,
    }
}

fn string_list(value: Option<&JsonValue>) -> Vec<String> {
    value
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn flag(value: Option<&JsonValue>) -> bool {
    value.and_then(JsonValue::as_bool).unwrap_or(false)
}

fn count(value: Option<&JsonValue>) -> Option<usize> {
    value
        .and_then(JsonValue::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}
