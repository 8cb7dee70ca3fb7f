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

//! Case-insensitive object type resolution.
//!
//! Legacy input may spell object types in any case (`ZONE`, `zone`,
//! `Zone`). The resolver maps every spelling to the canonical schema key
//! through an upper-cased index built once when the schema is loaded.

use std::collections::HashMap;

/// ASCII upper-casing used for every case-insensitive comparison.
pub fn make_upper_case(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Maps arbitrary-case object type names to canonical names.
///
/// # Examples
///
/// ```
/// use idf_core::ObjectTypeResolver;
///
/// let resolver = ObjectTypeResolver::new(["Zone", "BuildingSurface:Detailed"]);
/// assert_eq!(resolver.resolve("zone"), Some("Zone"));
/// assert_eq!(resolver.resolve("BUILDINGSURFACE:DETAILED"), Some("BuildingSurface:Detailed"));
/// assert_eq!(resolver.resolve("Zonee"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectTypeResolver {
    by_upper: HashMap<String, String>,
}

impl ObjectTypeResolver {
    /// Build the index from canonical names.
    pub fn new<I, S>(canonical: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let by_upper = canonical
            .into_iter()
            .map(|name| {
                let name = name.into();
                (make_upper_case(&name), name)
            })
            .collect();
        Self { by_upper }
    }

    /// Resolve `name` to its canonical spelling.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.by_upper
            .get(&make_upper_case(name))
            .map(String::as_str)
    }

    /// Number of registered object types.
    pub fn len(&self) -> usize {
        self.by_upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_upper.is_empty()
    }
}
