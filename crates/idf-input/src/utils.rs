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

//! Lookup and name-checking helpers used by input consumers.

use idf_core::{make_upper_case, Diagnostic, DiagnosticKind, Diagnostics};

const NUMERIC_CHARS: &str = "0123456789.+-EeDd";

/// Index of the first exact match of `item` in `list`.
pub fn find_item_in_list<S: AsRef<str>>(item: &str, list: &[S]) -> Option<usize> {
    list.iter().position(|entry| entry.as_ref() == item)
}

/// Index of the first case-insensitive match of `item` in `list`.
pub fn find_item<S: AsRef<str>>(item: &str, list: &[S]) -> Option<usize> {
    find_item_in_list(item, list).or_else(|| {
        let upper = make_upper_case(item);
        list.iter()
            .position(|entry| make_upper_case(entry.as_ref()) == upper)
    })
}

/// Check that `name` may be added to `existing`.
///
/// Reports a severe diagnostic for a case-insensitive duplicate and another
/// for a blank name. `context` prefixes each message, typically the object
/// type being read.
///
/// ```
/// use idf_input::verify_name;
///
/// let found = verify_name("Core", &["CORE"], "Zone");
/// assert_eq!(found.errors()[0].message(), "Zone, duplicate name=Core");
/// ```
pub fn verify_name<S: AsRef<str>>(name: &str, existing: &[S], context: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    if find_item(name, existing).is_some() {
        diagnostics.push(
            Diagnostic::severe(
                DiagnosticKind::InvalidName,
                format!("{}, duplicate name={}", context, name),
            )
            .with_object_type(context),
        );
    }
    if name.is_empty() {
        diagnostics.push(
            Diagnostic::severe(DiagnosticKind::InvalidName, format!("{}, cannot be blank", context))
                .with_object_type(context),
        );
    }
    diagnostics
}

/// Read numeric text the way legacy input does.
///
/// Surrounding whitespace is ignored and `D`/`d` is accepted as the
/// exponent marker. Blank text reads as zero. Returns `None` for anything
/// that is not a number.
///
/// ```
/// use idf_input::process_number;
///
/// assert_eq!(process_number(" 1.5D3 "), Some(1500.0));
/// assert_eq!(process_number(""), Some(0.0));
/// assert_eq!(process_number("Autosize"), None);
/// ```
pub fn process_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    if !text.chars().all(|c| NUMERIC_CHARS.contains(c)) {
        return None;
    }
    text.replace(['D', 'd'], "E").parse::<f64>().ok()
}
