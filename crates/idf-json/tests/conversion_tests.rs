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

//! Schema loading and epJSON conversion against the shared fixtures.

use idf_core::{decode, validate, Document, Instance, Scalar};
use idf_json::{from_json, load_schema, to_json, to_json_value, ToJsonConfig};
use idf_test::fixtures::{self, standard_schema, STANDARD_SCHEMA_JSON};
use proptest::prelude::*;

#[test]
fn test_loaded_schema_matches_built_schema() {
    let loaded = load_schema(STANDARD_SCHEMA_JSON).unwrap();
    let built = standard_schema();

    assert_eq!(loaded.len(), built.len());
    assert_eq!(loaded.required(), built.required());
    for expected in built.object_types() {
        let actual = loaded
            .object_type(&expected.name)
            .unwrap_or_else(|| panic!("{} missing", expected.name));
        assert_eq!(actual, expected, "object type {}", expected.name);
    }
}

#[test]
fn test_office_through_loaded_schema() {
    let schema = load_schema(STANDARD_SCHEMA_JSON).unwrap();
    let decoded = decode(fixtures::OFFICE_IDF, &schema);
    assert!(decoded.success);
    assert_eq!(decoded.document, fixtures::office_document());
    assert!(!validate(&decoded.document, &schema).has_errors());
}

#[test]
fn test_epjson_text_round_trip() {
    let schema = standard_schema();
    let text = to_json(&fixtures::office_document(), &schema, &ToJsonConfig::default()).unwrap();
    assert!(text.contains("\"idf_order\": 1"));
    let document = from_json(&text, &schema).unwrap();
    assert_eq!(document, fixtures::office_document());
}

#[test]
fn test_epjson_input_validates_like_legacy_input() {
    let schema = standard_schema();
    let text = r#"{
        "Building": {"HQ": {"terrain": "Moon"}},
        "Foo": {"F1": {"a": 0}}
    }"#;
    let document = from_json(text, &schema).unwrap();
    let diagnostics = validate(&document, &schema);
    assert_eq!(diagnostics.error_count(), 2);
}

fn foo_instance() -> impl Strategy<Value = Instance> {
    let number = prop_oneof![
        any::<i64>().prop_map(Scalar::Integer),
        (-1.0e9_f64..1.0e9).prop_map(Scalar::Real),
    ];
    (
        number.clone(),
        prop::collection::vec((number.clone(), number), 0..4),
    )
        .prop_map(|(a, groups)| {
            groups.into_iter().fold(
                Instance::new().with_field("a", a),
                |inst, (x, y)| inst.with_extension([("x", x), ("y", y)]),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: epJSON conversion preserves documents.
    #[test]
    fn prop_epjson_round_trip(instances in prop::collection::vec(foo_instance(), 0..6)) {
        let schema = standard_schema();
        let mut document = Document::new();
        for (i, instance) in instances.into_iter().enumerate() {
            document.insert("Foo", format!("F{}", i), instance);
        }
        let value = to_json_value(&document, &schema, &ToJsonConfig::default()).unwrap();
        let back = idf_json::from_json_value(&value, &schema).unwrap();
        prop_assert_eq!(back, document);
    }
}
