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

//! Decoder and validator behavior on complete inputs.

use idf_core::{
    decode, decode_with_options, encode, validate, DecodeOptions, DiagnosticKind, Scalar,
    Severity,
};
use idf_test::fixtures::{self, errors, standard_schema};

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_foo_scenario() {
    let decoded = decode(fixtures::FOO_IDF, &fixtures::foo_schema());
    assert!(decoded.success);

    let instance = decoded.document.get("Foo", "Inst1").unwrap();
    assert_eq!(instance.get("a"), Some(&Scalar::Integer(1)));
    assert_eq!(instance.get("b"), Some(&Scalar::Integer(2)));
    assert_eq!(instance.extensions.len(), 2);
    assert_eq!(instance.extensions[0]["x"], Scalar::Integer(10));
    assert_eq!(instance.extensions[0]["y"], Scalar::Integer(20));
    assert_eq!(instance.extensions[1]["x"], Scalar::Integer(30));
    assert_eq!(instance.extensions[1]["y"], Scalar::Integer(40));
}

#[test]
fn test_office_decodes_cleanly() {
    let schema = standard_schema();
    let decoded = decode(fixtures::OFFICE_IDF, &schema);
    assert!(decoded.success);
    assert!(decoded.diagnostics.is_empty());
    assert_eq!(decoded.document, fixtures::office_document());
    assert_eq!(decoded.document.total_instances(), 9);
}

#[test]
fn test_keywords_resolve_case_insensitively() {
    let schema = standard_schema();
    let decoded = decode(fixtures::MIXED_CASE_IDF, &schema);
    assert!(decoded.success);

    let building = decoded.document.get("Building", "HQ").unwrap();
    assert_eq!(building.get("terrain"), Some(&Scalar::from("Suburbs")));

    let zone = decoded.document.get("Zone", "West Zone").unwrap();
    assert_eq!(zone.get("volume"), Some(&Scalar::from("Autocalculate")));
    assert_eq!(
        zone.get("zone_inside_convection_algorithm"),
        Some(&Scalar::from("TARP"))
    );

    let coil = decoded.document.get("Coil:Cooling:Water", "Coil One").unwrap();
    assert_eq!(coil.get("availability_schedule_name"), Some(&Scalar::from("")));
    assert_eq!(coil.get("design_water_flow_rate"), Some(&Scalar::from("Autosize")));
}

#[test]
fn test_blank_fields_are_empty_strings() {
    let schema = standard_schema();
    let decoded = decode(fixtures::BLANKS_IDF, &schema);
    assert!(decoded.success);

    let zone = decoded.document.get("Zone", "Blank Zone").unwrap();
    for field in ["x_origin", "multiplier", "volume"] {
        assert_eq!(zone.get(field), Some(&Scalar::from("")), "field {}", field);
    }
    assert!(!validate(&decoded.document, &schema).has_errors());
}

#[test]
fn test_min_fields_padding() {
    let decoded = decode("Coil:Cooling:Water, C1;", &standard_schema());
    let coil = decoded.document.get("Coil:Cooling:Water", "C1").unwrap();
    assert_eq!(coil.get("availability_schedule_name"), Some(&Scalar::from("")));
    assert_eq!(coil.get("design_water_flow_rate"), Some(&Scalar::from("")));
    assert_eq!(coil.get("design_inlet_water_temperature"), None);
}

#[test]
fn test_extensible_arity() {
    let schema = fixtures::foo_schema();
    for rows in 0..6 {
        let mut text = String::from("Foo, F, 1, 2");
        for row in 0..rows {
            text.push_str(&format!(", {}, {}", row, row * 10));
        }
        text.push(';');
        let decoded = decode(&text, &schema);
        let instance = decoded.document.get("Foo", "F").unwrap();
        assert_eq!(instance.extensions.len(), rows);
        assert!(instance.extensions.iter().all(|e| e.len() == 2));
    }
}

#[test]
fn test_partial_group_is_flushed() {
    let decoded = decode("Foo, F, 1, 2, 10, 20, 30;", &fixtures::foo_schema());
    let instance = decoded.document.get("Foo", "F").unwrap();
    assert_eq!(instance.extensions.len(), 2);
    assert_eq!(instance.extensions[1].len(), 1);
    assert_eq!(instance.extensions[1]["x"], Scalar::Integer(30));
}

#[test]
fn test_unknown_object_type_is_skipped() {
    let schema = standard_schema();
    let decoded = decode("Building, HQ;\nFrobnicator, X, 1;\nZone, Z1;", &schema);
    assert!(decoded.success);
    assert_eq!(decoded.document.count("Zone"), 1);

    let errors = decoded.diagnostics.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), DiagnosticKind::UnknownObjectType);
    assert!(errors[0].message().contains("Frobnicator"));
    assert_eq!(errors[0].line(), Some(2));
}

#[test]
fn test_lexical_error_resynchronizes() {
    let schema = standard_schema();
    let decoded = decode("Zone, `Z1;\nZone, Z2;", &schema);
    assert!(!decoded.success);
    assert!(decoded.document.contains("Zone", "Z2"));
    assert!(!decoded.document.contains("Zone", "`Z1"));
    assert_eq!(decoded.diagnostics.errors()[0].kind(), DiagnosticKind::Lexical);
    assert!(decoded.into_result().is_err());
}

#[test]
fn test_invalid_samples() {
    let schema = standard_schema();
    for (name, text, kind) in errors::invalid_idf_samples() {
        let decoded = decode(text, &schema);
        assert!(!decoded.success, "{}", name);
        assert_eq!(decoded.diagnostics.errors()[0].kind(), kind, "{}", name);
    }
}

#[test]
fn test_duplicate_names() {
    let schema = standard_schema();
    let decoded = decode("Zone, Z1;\nZone, Z1, 5;", &schema);
    let warnings = decoded.diagnostics.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind(), DiagnosticKind::DuplicateName);
    assert_eq!(warnings[0].message(), "Duplicate name found. name: \"Z1\"");
    // last one wins
    let zone = decoded.document.get("Zone", "Z1").unwrap();
    assert_eq!(zone.get("x_origin"), Some(&Scalar::Integer(5)));
}

#[test]
fn test_run_period_duplicates_are_exempt() {
    let schema = standard_schema();
    let text = "RunPeriod, R, 1, 1, 6, 30;\nRunPeriod, R, 7, 1, 12, 31;";
    assert!(decode(text, &schema).diagnostics.is_empty());

    let strict = DecodeOptions::builder().no_exemptions().build();
    let decoded = decode_with_options(text, &schema, &strict);
    assert_eq!(decoded.diagnostics.warning_count(), 1);
}

#[test]
fn test_unnamed_objects_get_synthesized_names() {
    let decoded = decode("Version, 9.6;\nVersion, 9.5;", &standard_schema());
    assert!(decoded.document.contains("Version", "Version 1"));
    assert!(decoded.document.contains("Version", "Version 2"));
    assert!(decoded.diagnostics.is_empty());
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_office_validates() {
    let schema = standard_schema();
    let diagnostics = validate(&fixtures::office_document(), &schema);
    assert_eq!(diagnostics.error_count(), 0, "{:?}", diagnostics.errors());
    // integer fields receiving numbers are advisory only
    assert!(diagnostics
        .warnings()
        .iter()
        .all(|w| w.severity() == Severity::Warning && w.kind() == DiagnosticKind::TypeMismatch));
}

#[test]
fn test_exclusive_minimum_scenario() {
    let schema = standard_schema();

    let at_bound = decode("Building, HQ;\nFoo, F1, 0;", &schema).document;
    let diagnostics = validate(&at_bound, &schema);
    assert_eq!(diagnostics.error_count(), 1);
    assert!(diagnostics.errors()[0].message().contains("exclusive minimum"));

    let above = decode("Building, HQ;\nFoo, F1, 0.0001;", &schema).document;
    assert_eq!(validate(&above, &schema).error_count(), 0);
}

#[test]
fn test_semantically_invalid_samples() {
    let schema = standard_schema();
    for (name, text, kind) in errors::semantically_invalid_samples() {
        let decoded = decode(text, &schema);
        let diagnostics = validate(&decoded.document, &schema);
        assert!(
            diagnostics.errors().iter().any(|d| d.kind() == kind),
            "{}: {:?}",
            name,
            diagnostics.errors()
        );
    }
}

#[test]
fn test_range_message_wording() {
    let schema = standard_schema();
    let doc = decode("Building, HQ;\n\nRunPeriod, R, 0, 1, 12, 31;", &schema).document;
    let diagnostics = validate(&doc, &schema);
    assert_eq!(
        diagnostics.errors()[0].message(),
        "Out of Range: Value \"0\" for field \"begin_month\" in object \"RunPeriod\" parsed at line 3 is less than the minimum"
    );
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn test_office_round_trip() {
    let schema = standard_schema();
    let text = encode(&fixtures::office_document(), &schema).unwrap();
    let decoded = decode(&text, &schema);
    assert!(decoded.success);
    assert_eq!(decoded.document, fixtures::office_document());
}

#[test]
fn test_encode_unknown_type_fails() {
    let doc = fixtures::office_document();
    assert!(encode(&doc, &fixtures::foo_schema()).is_err());
}
