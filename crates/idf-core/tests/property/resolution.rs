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

//! Property-based tests for case-insensitive object type resolution.

use idf_core::{decode, make_upper_case};
use idf_test::fixtures::{standard_schema, STANDARD_OBJECT_TYPES};
use proptest::prelude::*;

/// Apply a case mask to `text`.
fn recase(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every spelling of a known type resolves to its canonical name.
    #[test]
    fn prop_resolution_ignores_case(
        index in 0..STANDARD_OBJECT_TYPES.len(),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let schema = standard_schema();
        let canonical = STANDARD_OBJECT_TYPES[index];
        let spelled = recase(canonical, &mask);
        prop_assert_eq!(schema.resolve(&spelled), Some(canonical));
    }

    /// Property: unknown names stay unresolved.
    #[test]
    fn prop_unknown_names_do_not_resolve(name in "Xyzzy[A-Za-z:]{0,12}") {
        let schema = standard_schema();
        prop_assert_eq!(schema.resolve(&name), None);
    }

    /// Property: decoded instances are filed under the canonical spelling.
    #[test]
    fn prop_decode_stores_canonical_type(mask in prop::collection::vec(any::<bool>(), 1..8)) {
        let schema = standard_schema();
        let keyword = recase("Zone", &mask);
        let decoded = decode(&format!("{}, Z1, 1;", keyword), &schema);
        prop_assert_eq!(decoded.document.count("Zone"), 1);
    }

    /// Property: upper-casing is idempotent and ASCII-only.
    #[test]
    fn prop_make_upper_case(text in "\\PC{0,24}") {
        let upper = make_upper_case(&text);
        prop_assert_eq!(make_upper_case(&upper), upper.clone());
        prop_assert_eq!(upper.len(), text.len());
        prop_assert_eq!(upper, text.to_ascii_uppercase());
    }
}
