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

//! Positional projection of one instance.
//!
//! Consumers read an object as two arrays in legacy field order: alphas
//! (strings) and numerics (reals). Positional fields come first, followed by
//! one copy of the group fields per repeating group entry. Blank fields take
//! the schema default and keep their blank flag, so callers can tell an
//! authored value from a substituted one.

use idf_core::{make_upper_case, FieldSchema, Instance, ObjectTypeSchema, Scalar, NAME_FIELD};

/// Numeric value standing for `Autosize` / `Autocalculate`.
pub const AUTOSIZE_SENTINEL: f64 = -99999.0;

/// One projected field.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemField<T> {
    /// Schema field name
    pub name: String,
    pub value: T,
    /// `true` if the input left the field empty or omitted it
    pub blank: bool,
}

/// An instance projected onto its legacy alpha and numeric fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectItem {
    /// Canonical object type
    pub object_type: String,
    /// Instance name as written in the input
    pub name: String,
    pub alphas: Vec<ItemField<String>>,
    pub numerics: Vec<ItemField<f64>>,
    /// Alpha fields present in the instance
    pub num_alphas: usize,
    /// Numeric fields present in the instance
    pub num_numerics: usize,
}

impl ObjectItem {
    /// First alpha field with the given name.
    pub fn alpha(&self, field: &str) -> Option<&ItemField<String>> {
        self.alphas.iter().find(|f| f.name == field)
    }

    /// First numeric field with the given name.
    pub fn numeric(&self, field: &str) -> Option<&ItemField<f64>> {
        self.numerics.iter().find(|f| f.name == field)
    }

    pub fn alpha_values(&self) -> Vec<&str> {
        self.alphas.iter().map(|f| f.value.as_str()).collect()
    }

    pub fn numeric_values(&self) -> Vec<f64> {
        self.numerics.iter().map(|f| f.value).collect()
    }
}

/// Maximum argument counts of an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxArgs {
    pub args: usize,
    pub alphas: usize,
    pub numerics: usize,
}

impl MaxArgs {
    pub(crate) fn new(alphas: usize, numerics: usize) -> Self {
        Self {
            args: alphas + numerics,
            alphas,
            numerics,
        }
    }
}

/// Project `instance` onto the legacy layout of `object_type`.
pub(crate) fn project(object_type: &ObjectTypeSchema, name: &str, instance: &Instance) -> ObjectItem {
    let layout = &object_type.legacy;
    let mut item = ObjectItem {
        object_type: object_type.name.clone(),
        name: name.to_string(),
        alphas: Vec::with_capacity(layout.alphas.fields.len()),
        numerics: Vec::with_capacity(layout.numerics.fields.len()),
        num_alphas: 0,
        num_numerics: 0,
    };

    for field in &layout.alphas.fields {
        if field == NAME_FIELD && object_type.has_name_field() {
            let value = if object_type.name_retaincase.unwrap_or(false) {
                name.to_string()
            } else {
                make_upper_case(name)
            };
            item.alphas.push(ItemField {
                name: field.clone(),
                value,
                blank: name.is_empty(),
            });
            item.num_alphas += 1;
            continue;
        }
        let value = instance.get(field);
        item.num_alphas += usize::from(value.is_some());
        item.alphas
            .push(alpha_field(field, value, object_type.field(field)));
    }
    for entry in &instance.extensions {
        for field in &layout.alphas.extensions {
            let value = entry.get(field);
            item.num_alphas += usize::from(value.is_some());
            item.alphas
                .push(alpha_field(field, value, object_type.extensible_field(field)));
        }
    }

    for field in &layout.numerics.fields {
        let value = instance.get(field);
        item.num_numerics += usize::from(value.is_some());
        item.numerics
            .push(numeric_field(field, value, object_type.field(field)));
    }
    for entry in &instance.extensions {
        for field in &layout.numerics.extensions {
            let value = entry.get(field);
            item.num_numerics += usize::from(value.is_some());
            item.numerics
                .push(numeric_field(field, value, object_type.extensible_field(field)));
        }
    }

    item
}

fn alpha_field(name: &str, value: Option<&Scalar>, schema: Option<&FieldSchema>) -> ItemField<String> {
    let (text, blank) = match value {
        Some(Scalar::String(s)) if !s.is_empty() => (s.clone(), false),
        Some(number @ (Scalar::Integer(_) | Scalar::Real(_))) => {
            return ItemField {
                name: name.to_string(),
                value: number.to_string(),
                blank: false,
            };
        }
        _ => match schema.and_then(FieldSchema::default_value) {
            Some(default) => (default.to_string(), true),
            None => (String::new(), true),
        },
    };
    let retaincase = schema.map_or(false, FieldSchema::retaincase);
    ItemField {
        name: name.to_string(),
        value: if retaincase { text } else { make_upper_case(&text) },
        blank,
    }
}

fn numeric_field(name: &str, value: Option<&Scalar>, schema: Option<&FieldSchema>) -> ItemField<f64> {
    let (value, blank) = match value {
        Some(Scalar::Integer(i)) => (*i as f64, false),
        Some(Scalar::Real(r)) => (*r, false),
        // Any keyword left in a numeric field reads as autosize.
        Some(Scalar::String(s)) if !s.is_empty() => (AUTOSIZE_SENTINEL, false),
        _ => (blank_numeric(schema.and_then(FieldSchema::default_value)), true),
    };
    ItemField {
        name: name.to_string(),
        value,
        blank,
    }
}

fn blank_numeric(default: Option<&Scalar>) -> f64 {
    match default {
        Some(Scalar::String(_)) => AUTOSIZE_SENTINEL,
        Some(Scalar::Integer(i)) => *i as f64,
        Some(Scalar::Real(r)) => *r,
        None => 0.0,
    }
}
