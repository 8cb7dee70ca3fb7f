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

//! Document to epJSON conversion

use crate::error::JsonConversionError;
use crate::from_json::IDF_ORDER_KEY;
use idf_core::{Document, FieldMap, Scalar, Schema};
use serde_json::{Map, Number, Value as JsonValue};

/// Configuration for epJSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Record each instance's position as `idf_order`
    pub include_idf_order: bool,
    /// Pretty-print the output text
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            include_idf_order: true,
            pretty: true,
        }
    }
}

/// Convert a document to epJSON text.
pub fn to_json(
    document: &Document,
    schema: &Schema,
    config: &ToJsonConfig,
) -> Result<String, JsonConversionError> {
    let value = to_json_value(document, schema, config)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Convert a document to an epJSON value.
///
/// Every object type must be in `schema`, which supplies the key the
/// repeating group is stored under.
pub fn to_json_value(
    document: &Document,
    schema: &Schema,
    config: &ToJsonConfig,
) -> Result<JsonValue, JsonConversionError> {
    let mut root = Map::with_capacity(document.object_types().count());
    let mut order = 0u64;

    for (type_name, instances) in document.object_types() {
        let object_type = schema
            .object_type(type_name)
            .ok_or_else(|| JsonConversionError::UnknownObjectType(type_name.clone()))?;

        let mut objects = Map::with_capacity(instances.len());
        for (name, instance) in instances {
            let mut body = fields_to_json(&instance.fields);

            if !instance.extensions.is_empty() {
                let key = object_type.extension_key().ok_or_else(|| {
                    JsonConversionError::InvalidValue {
                        object_type: type_name.clone(),
                        name: name.clone(),
                        field: "extensions".to_string(),
                        found: "array".to_string(),
                    }
                })?;
                let entries = instance
                    .extensions
                    .iter()
                    .map(|entry| JsonValue::Object(fields_to_json(entry)))
                    .collect();
                body.insert(key.to_string(), JsonValue::Array(entries));
            }

            if config.include_idf_order {
                order += 1;
                body.insert(IDF_ORDER_KEY.to_string(), JsonValue::from(order));
            }
            objects.insert(name.clone(), JsonValue::Object(body));
        }
        root.insert(type_name.clone(), JsonValue::Object(objects));
    }

    Ok(JsonValue::Object(root))
}

fn fields_to_json(fields: &FieldMap) -> Map<String, JsonValue> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), scalar_to_json(value)))
        .collect()
}

fn scalar_to_json(value: &Scalar) -> JsonValue {
    match value {
        Scalar::String(s) => JsonValue::String(s.clone()),
        Scalar::Integer(i) => JsonValue::Number(Number::from(*i)),
        Scalar::Real(r) => Number::from_f64(*r)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
    }
}
