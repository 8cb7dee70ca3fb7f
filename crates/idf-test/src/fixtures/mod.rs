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

//! Canonical fixtures for the standard schema.
//!
//! - **schemas**: the standard schema, built in code and as epJSON text
//! - **inputs**: legacy text samples
//! - **documents**: decoded forms of the text samples
//! - **errors**: inputs that must fail to decode or to validate
//! - **builders**: fluent builders for custom documents

pub mod builders;
mod documents;
pub mod errors;
mod inputs;
mod schemas;

pub use documents::*;
pub use inputs::*;
pub use schemas::*;

use crate::FixtureList;

/// Returns all document fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("foo", foo_document),
        ("office", office_document),
        ("empty", empty),
    ]
}
