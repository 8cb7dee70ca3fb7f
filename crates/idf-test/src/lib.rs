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

//! Shared test fixtures for the IDF crates.
//!
//! Provides one standard schema (in code and as an epJSON schema document),
//! legacy text samples that exercise it, the documents those samples decode
//! to, and invalid inputs paired with the diagnostics they must produce.
//!
//! # Quick Start
//!
//! ```rust
//! use idf_test::fixtures;
//!
//! let schema = fixtures::standard_schema();
//! let decoded = idf_core::decode(fixtures::OFFICE_IDF, &schema);
//! assert!(decoded.success);
//! assert_eq!(decoded.document, fixtures::office_document());
//! ```

use idf_core::{Document, Schema};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Document)>;

/// Canonical test fixtures.
pub mod fixtures;

pub use fixtures::*;

/// Returns all document fixtures as (name, legacy text) pairs.
pub fn fixtures_as_idf(schema: &Schema) -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| {
            let text = idf_core::encode(&fixture_fn(), schema)
                .unwrap_or_else(|e| format!("! Error encoding: {}", e));
            (name, text)
        })
        .collect()
}
