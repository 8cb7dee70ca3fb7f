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

//! Errors for epJSON conversion and schema loading.

use idf_core::{IdfError, IdfErrorKind};

/// Errors that can occur while loading a schema or converting epJSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonConversionError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Root value must be an object
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// An object type must map instance names to objects
    #[error("Object type \"{object_type}\" must be a JSON object, found {found}")]
    InvalidObjectType { object_type: String, found: String },

    /// An instance must be a JSON object
    #[error("Instance \"{name}\" of \"{object_type}\" must be a JSON object, found {found}")]
    InvalidInstance {
        object_type: String,
        name: String,
        found: String,
    },

    /// A field value that has no IDF representation
    #[error("Field \"{field}\" in \"{object_type}\" instance \"{name}\" has unsupported value {found}")]
    InvalidValue {
        object_type: String,
        name: String,
        field: String,
        found: String,
    },

    /// Object type missing from the schema
    #[error("Object type \"{0}\" not found in schema")]
    UnknownObjectType(String),

    /// The schema document is malformed
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

impl From<serde_json::Error> for JsonConversionError {
    fn from(err: serde_json::Error) -> Self {
        JsonConversionError::ParseError(err.to_string())
    }
}

impl From<JsonConversionError> for IdfError {
    fn from(err: JsonConversionError) -> Self {
        let kind = match err {
            JsonConversionError::InvalidSchema(_) => IdfErrorKind::Schema,
            _ => IdfErrorKind::Conversion,
        };
        IdfError::new(kind, err.to_string(), 0)
    }
}

/// Short description of a JSON value's kind, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: JsonConversionError = err.into();
        assert!(matches!(err, JsonConversionError::ParseError(_)));
    }

    #[test]
    fn test_into_idf_error() {
        let err: IdfError = JsonConversionError::InvalidSchema("no properties".into()).into();
        assert_eq!(err.kind, IdfErrorKind::Schema);
        assert!(err.message.contains("no properties"));

        let err: IdfError = JsonConversionError::UnknownObjectType("Zone".into()).into();
        assert_eq!(err.kind, IdfErrorKind::Conversion);
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&serde_json::json!([1])), "array");
        assert_eq!(kind_of(&serde_json::json!(null)), "null");
    }
}
