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

//! Error fixtures.
//!
//! Inputs that fail to decode, and inputs that decode but break a schema
//! rule, each paired with the diagnostic kind they must produce.

use idf_core::DiagnosticKind;

/// Legacy text that fails to decode against the standard schema.
pub fn invalid_idf_samples() -> Vec<(&'static str, &'static str, DiagnosticKind)> {
    vec![
        ("empty", "", DiagnosticKind::EmptyInput),
        ("whitespace_only", "  \t\n  ", DiagnosticKind::EmptyInput),
        ("invalid_character", "Zone, Z1, `bad;", DiagnosticKind::Lexical),
        ("invalid_name_character", "Zone, `Z1;", DiagnosticKind::Lexical),
        ("newline_escape", "Zone, Z\\n1;", DiagnosticKind::Lexical),
        ("extra_fields", "Building, HQ, 1, City, 0.04, 99;", DiagnosticKind::ExtraFields),
    ]
}

/// Legacy text that decodes but fails validation against the standard
/// schema. Each sample also carries a valid `Building` so only the named
/// rule is broken.
pub fn semantically_invalid_samples() -> Vec<(&'static str, &'static str, DiagnosticKind)> {
    vec![
        (
            "enum_mismatch",
            "Building, HQ, 0, Moon;",
            DiagnosticKind::Enum,
        ),
        (
            "exclusive_minimum",
            "Building, HQ;\nFoo, F1, 0;",
            DiagnosticKind::Range,
        ),
        (
            "exclusive_maximum",
            "Building, HQ;\nZoneHVAC:IdealLoadsAirSystem, L1, N1, 100;",
            DiagnosticKind::Range,
        ),
        (
            "maximum",
            "Building, HQ;\nRunPeriod, R1, 13, 1, 12, 31;",
            DiagnosticKind::Range,
        ),
        (
            "string_in_number_field",
            "Building, HQ, north;",
            DiagnosticKind::TypeMismatch,
        ),
        (
            "malformed_number",
            "Building, HQ;\nZone, Z1, 1.2.3;",
            DiagnosticKind::TypeMismatch,
        ),
        (
            "missing_required_field",
            "Building, HQ;\nRunPeriod, R1, 1, 1;",
            DiagnosticKind::RequiredField,
        ),
        (
            "missing_required_object",
            "Zone, Z1;",
            DiagnosticKind::RequiredObject,
        ),
        (
            "max_properties",
            "Building, HQ;\nBuilding, Annex;",
            DiagnosticKind::PropertyCount,
        ),
    ]
}
