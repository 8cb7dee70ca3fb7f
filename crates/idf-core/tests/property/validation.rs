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

//! Property-based tests for validation.

use idf_core::{decode, validate, DiagnosticKind};
use idf_test::fixtures::standard_schema;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: validating twice yields identical diagnostics.
    #[test]
    fn prop_validation_is_idempotent(
        a in -10.0_f64..10.0,
        month in -2_i64..16,
        terrain in prop::sample::select(vec!["City", "Moon", "urban", ""]),
    ) {
        let schema = standard_schema();
        let text = format!(
            "Building, HQ, 0, {};\nFoo, F, {};\nRunPeriod, R, {}, 1, 12, 31;",
            terrain, a, month
        );
        let document = decode(&text, &schema).document;
        let before = document.clone();

        let first = validate(&document, &schema);
        let second = validate(&document, &schema);
        prop_assert_eq!(first, second);
        prop_assert_eq!(document, before);
    }

    /// Property: an exclusive minimum of zero rejects exactly the values <= 0.
    #[test]
    fn prop_exclusive_minimum(a in -5.0_f64..5.0) {
        let schema = standard_schema();
        let document = decode(&format!("Building, HQ;\nFoo, F, {:?};", a), &schema).document;
        let range_errors = validate(&document, &schema)
            .errors()
            .iter()
            .filter(|d| d.kind() == DiagnosticKind::Range)
            .count();
        prop_assert_eq!(range_errors, usize::from(a <= 0.0));
    }

    /// Property: integer bounds are inclusive.
    #[test]
    fn prop_month_bounds(month in -5_i64..20) {
        let schema = standard_schema();
        let document = decode(
            &format!("Building, HQ;\nRunPeriod, R, {}, 1, 12, 31;", month),
            &schema,
        )
        .document;
        let has_range_error = validate(&document, &schema)
            .errors()
            .iter()
            .any(|d| d.kind() == DiagnosticKind::Range);
        prop_assert_eq!(has_range_error, !(1..=12).contains(&month));
    }
}
