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

//! IDF epJSON Conversion
//!
//! Loads epJSON schema documents into the typed [`idf_core::Schema`] and
//! converts IDF documents to and from epJSON, the structured JSON form of
//! an input file:
//!
//! ```text
//! { "<Object Type>": { "<instance name>": { "<field>": <value>, "<group key>": [ {...} ] } } }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use idf_json::{from_json, load_schema, to_json, ToJsonConfig};
//!
//! let schema = load_schema(idf_test::fixtures::STANDARD_SCHEMA_JSON).unwrap();
//! let decoded = idf_core::decode("Zone, Core, 1.5;", &schema);
//!
//! let json = to_json(&decoded.document, &schema, &ToJsonConfig::default()).unwrap();
//! let back = from_json(&json, &schema).unwrap();
//! assert_eq!(back, decoded.document);
//! ```

mod error;
mod from_json;
mod schema;
mod to_json;

pub use error::JsonConversionError;
pub use from_json::{from_json, from_json_value, IDF_ORDER_KEY};
pub use schema::{load_schema, load_schema_value};
pub use to_json::{to_json, to_json_value, ToJsonConfig};
