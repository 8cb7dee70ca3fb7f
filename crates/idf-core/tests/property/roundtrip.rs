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

//! Property-based tests for encode/decode round trips.

use idf_core::{decode, encode, Document, Instance, Scalar};
use idf_test::fixtures::{foo_schema, standard_schema};
use proptest::prelude::*;

fn number() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        (-1_000_000_i64..1_000_000).prop_map(Scalar::Integer),
        (-1.0e6_f64..1.0e6).prop_map(Scalar::Real),
        (1.0e-9_f64..1.0e-3).prop_map(Scalar::Real),
    ]
}

/// Text with no delimiters, no escapes and no surrounding whitespace.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 :/._-]{0,20}[A-Za-z0-9]"
}

/// A numeric field as written by hand: plain, signed, exponent, overflowing
/// and non-numeric spellings, or blank.
fn numeric_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,6}",
        "[+-]?[0-9]{1,4}\\.[0-9]{0,4}",
        "[0-9]\\.[0-9]{1,3}[eE][+-]?[0-9]{1,3}",
        prop::sample::select(vec![
            "1e999",
            "-1E999",
            "1e-400",
            "4.9e-324",
            "1.7976931348623157e308",
            "99999999999999999999",
            "-9223372036854775808",
            "-0.0",
            "12abc",
        ])
        .prop_map(String::from),
        Just(String::new()),
        text(),
    ]
}

/// A string field, possibly blank or carrying escapes.
fn string_token() -> impl Strategy<Value = String> {
    prop_oneof![
        text(),
        Just(String::new()),
        "-?[0-9]{1,4}(\\.[0-9]{1,2})?",
        r"[A-Za-z]{1,6}(\\\\|\\t)[A-Za-z]{1,6}",
    ]
}

/// One statement without its name: type keyword spelling and field tokens.
fn statement() -> impl Strategy<Value = (&'static str, Vec<String>)> {
    let foo = (
        prop::sample::select(vec!["Foo", "FOO", "foo"]),
        prop::collection::vec(numeric_token(), 0..9),
    );
    let coil = (
        prop::sample::select(vec!["Coil:Cooling:Water", "COIL:COOLING:WATER"]),
        (
            string_token(),
            prop_oneof![numeric_token(), Just("autosize".to_string())],
            numeric_token(),
            prop::sample::select(vec!["", "simpleanalysis", "DETAILEDANALYSIS"]),
            0..=4usize,
        )
            .prop_map(|(schedule, flow, temp, analysis, len)| {
                let mut tokens = vec![schedule, flow, temp, analysis.to_string()];
                tokens.truncate(len);
                tokens
            }),
    );
    let schedule = (
        prop::sample::select(vec!["Schedule:Compact", "schedule:compact"]),
        prop::collection::vec(string_token(), 0..8),
    );
    prop_oneof![foo, coil, schedule]
}

/// Legacy text for a list of statements, each with a distinct name.
fn idf_text() -> impl Strategy<Value = String> {
    prop::collection::vec((statement(), any::<bool>()), 1..8).prop_map(|statements| {
        let mut text = String::from("! generated\n");
        for (i, ((keyword, tokens), commented)) in statements.into_iter().enumerate() {
            let sep = if commented { ",  !- field\n  " } else { ", " };
            text.push_str(keyword);
            text.push_str(sep);
            text.push_str(&format!("Object {}", i));
            for token in tokens {
                text.push_str(sep);
                text.push_str(&token);
            }
            text.push_str(";\n");
        }
        text
    })
}

fn foo_instance() -> impl Strategy<Value = Instance> {
    (
        number(),
        number(),
        prop::collection::vec((number(), number()), 0..6),
    )
        .prop_map(|(a, b, groups)| {
            groups.into_iter().fold(
                Instance::new().with_field("a", a).with_field("b", b),
                |inst, (x, y)| inst.with_extension([("x", x), ("y", y)]),
            )
        })
}

fn schedule_instance() -> impl Strategy<Value = Instance> {
    (text(), prop::collection::vec(text(), 0..10)).prop_map(|(limits, data)| {
        data.into_iter().fold(
            Instance::new().with_field("schedule_type_limits_name", limits),
            |inst, field| inst.with_extension([("field", field)]),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: numeric fields and repeating groups survive a round trip.
    #[test]
    fn prop_foo_round_trip(instances in prop::collection::vec(foo_instance(), 1..8)) {
        let schema = foo_schema();
        let mut document = Document::new();
        for (i, instance) in instances.into_iter().enumerate() {
            document.insert("Foo", format!("Foo Item {}", i), instance);
        }

        let text = encode(&document, &schema).unwrap();
        let decoded = decode(&text, &schema);
        prop_assert!(decoded.success, "{:?}", decoded.diagnostics);
        prop_assert_eq!(decoded.document, document);
    }

    /// Property: string fields survive a round trip unchanged.
    #[test]
    fn prop_schedule_round_trip(name in text(), instance in schedule_instance()) {
        let schema = standard_schema();
        let mut document = Document::new();
        document.insert("Schedule:Compact", name, instance);

        let text = encode(&document, &schema).unwrap();
        let decoded = decode(&text, &schema);
        prop_assert!(decoded.success, "{:?}", decoded.diagnostics);
        prop_assert_eq!(decoded.document, document);
    }

    /// Property: escaped characters in strings survive a round trip.
    #[test]
    fn prop_escaped_strings_round_trip(
        prefix in "[A-Za-z]{1,8}",
        special in prop::sample::select(vec!['\\', '\t']),
        suffix in "[A-Za-z]{1,8}",
    ) {
        let schema = standard_schema();
        let value = format!("{}{}{}", prefix, special, suffix);
        let mut document = Document::new();
        document.insert(
            "Schedule:Compact",
            "S",
            Instance::new().with_field("schedule_type_limits_name", value),
        );

        let text = encode(&document, &schema).unwrap();
        prop_assert_eq!(decode(&text, &schema).document, document);
    }

    /// Property: any decoded document survives encode and decode unchanged,
    /// including blank fields, partial groups, padding and extreme numbers.
    #[test]
    fn prop_decoded_text_round_trip(text in idf_text()) {
        let schema = standard_schema();
        let decoded = decode(&text, &schema);
        prop_assert!(decoded.success, "{}: {:?}", text, decoded.diagnostics);
        let document = decoded.document;

        let encoded = encode(&document, &schema).unwrap();
        let again = decode(&encoded, &schema);
        prop_assert!(again.success, "{}: {:?}", encoded, again.diagnostics);
        prop_assert_eq!(again.document, document, "{}", encoded);
    }
}
