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

//! Schema validation of a decoded document.
//!
//! Validation is a second pass over the finished [`Document`]. It walks the
//! document's own structure (object type -> instance -> field, field ->
//! repeating group entries) and checks each level against the schema:
//!
//! - unknown object types and field keys
//! - enum membership (case-insensitive for strings)
//! - numeric bounds, each independently exclusive
//! - declared type agreement (warnings for numbers, errors for strings)
//! - required fields per instance and per group entry
//! - minProperties / maxProperties per object type
//! - required object types for the whole input
//!
//! Validation never stops early and never mutates the document, so running
//! it twice yields identical diagnostics.

use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::document::{Document, FieldMap, Instance, InstanceMap, Scalar};
use crate::lex::SourcePos;
use crate::schema::{
    EnumField, EnumValue, ExtensibleGroup, FieldSchema, FieldType, ObjectTypeSchema, ScalarField,
    Schema,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Substring marking object types expanded by the parametric preprocessor.
const PARAMETRIC_MARKER: &str = "Parametric:";

/// Substring marking object types expanded by ExpandObjects.
const TEMPLATE_MARKER: &str = "Template";

/// Validate `document` against `schema`.
///
/// # Examples
///
/// ```
/// use idf_core::{decode, validate, FieldSchema, ObjectTypeSchema, Schema};
///
/// let foo = ObjectTypeSchema::builder("Foo")
///     .name_field(false)
///     .field("a", FieldSchema::number().with_minimum(0.0, true))
///     .build()
///     .unwrap();
/// let schema = Schema::new([foo], Vec::new());
///
/// let doc = decode("Foo, F1, 0;", &schema).document;
/// let diagnostics = validate(&doc, &schema);
/// assert_eq!(diagnostics.error_count(), 1);
/// assert!(diagnostics.errors()[0].message().contains("exclusive minimum"));
/// ```
pub fn validate(document: &Document, schema: &Schema) -> Diagnostics {
    Validator::new(schema).run(document)
}

/// Where in the document a check is happening.
#[derive(Debug, Clone, Copy)]
struct Scope<'a> {
    object_type: &'a str,
    pos: SourcePos,
}

impl Scope<'_> {
    /// ` at line N`, or nothing when the position is unknown.
    fn at_line(&self) -> String {
        if self.pos.is_known() {
            format!(" at line {}", self.pos.line())
        } else {
            String::new()
        }
    }
}

/// Required-field flags for one scope, reset per instance or group entry.
struct RequiredFlags<'s> {
    flags: BTreeMap<&'s str, bool>,
}

impl<'s> RequiredFlags<'s> {
    fn new(required: &'s [String]) -> Self {
        Self {
            flags: required.iter().map(|r| (r.as_str(), false)).collect(),
        }
    }

    fn satisfy(&mut self, key: &str) {
        if let Some(seen) = self.flags.get_mut(key) {
            *seen = true;
        }
    }

    fn missing(&self) -> impl Iterator<Item = &'s str> + '_ {
        self.flags
            .iter()
            .filter(|(_, seen)| !**seen)
            .map(|(name, _)| *name)
    }
}

/// Two-pass validator: holds the schema and accumulates diagnostics.
pub struct Validator<'s> {
    schema: &'s Schema,
    diagnostics: Diagnostics,
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Walk the whole document and return the accumulated diagnostics.
    pub fn run(mut self, document: &Document) -> Diagnostics {
        let mut seen_types: BTreeSet<&str> = BTreeSet::new();

        for (type_name, instances) in document.object_types() {
            let first_pos = instances
                .values()
                .next()
                .map(|inst| inst.pos)
                .unwrap_or_default();
            self.check_preprocessor(type_name, first_pos);

            match self.schema.object_type(type_name) {
                Some(object_type) => {
                    seen_types.insert(type_name.as_str());
                    self.object_type(object_type, instances);
                }
                None => self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::UnknownObjectType,
                        format!("Object type \"{}\" not found in schema", type_name),
                    )
                    .with_object_type(type_name.as_str())
                    .with_pos(first_pos),
                ),
            }
        }

        for required in self.schema.required() {
            if !seen_types.contains(required.as_str()) {
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::RequiredObject,
                        format!("Required object \"{}\" was not provided in input file", required),
                    )
                    .with_object_type(required.as_str()),
                );
            }
        }

        info!(
            "Number of validation warnings: {}",
            self.diagnostics.warning_count()
        );
        info!(
            "Number of validation errors: {}",
            self.diagnostics.error_count()
        );
        self.diagnostics
    }

    fn check_preprocessor(&mut self, type_name: &str, pos: SourcePos) {
        let scope = Scope {
            object_type: type_name,
            pos,
        };
        let message = if type_name.contains(PARAMETRIC_MARKER) {
            format!(
                "You must run Parametric Preprocessor for \"{}\"{}",
                type_name,
                scope.at_line()
            )
        } else if type_name.contains(TEMPLATE_MARKER) {
            format!(
                "You must run the ExpandObjects program for \"{}\"{}",
                type_name,
                scope.at_line()
            )
        } else {
            return;
        };
        self.diagnostics.push(
            Diagnostic::error(DiagnosticKind::Preprocessor, message)
                .with_object_type(type_name)
                .with_pos(pos),
        );
    }

    /// Check every instance of one type, then the type's instance count.
    fn object_type(&mut self, object_type: &ObjectTypeSchema, instances: &InstanceMap) {
        debug!(object_type = %object_type.name, instances = instances.len(), "validating");
        let mut last_pos = SourcePos::default();

        for instance in instances.values() {
            last_pos = instance.pos;
            self.instance(object_type, instance);
        }

        let count = instances.len();
        let scope = Scope {
            object_type: &object_type.name,
            pos: last_pos,
        };
        if let Some(min) = object_type.min_properties {
            if count < min {
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::PropertyCount,
                        format!(
                            "minProperties for object \"{}\"{} was not met",
                            object_type.name,
                            scope.at_line()
                        ),
                    )
                    .with_object_type(&object_type.name)
                    .with_pos(last_pos),
                );
            }
        }
        if let Some(max) = object_type.max_properties {
            if count > max {
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::PropertyCount,
                        format!(
                            "maxProperties for object \"{}\"{} was exceeded",
                            object_type.name,
                            scope.at_line()
                        ),
                    )
                    .with_object_type(&object_type.name)
                    .with_pos(last_pos),
                );
            }
        }
    }

    fn instance(&mut self, object_type: &ObjectTypeSchema, instance: &Instance) {
        let scope = Scope {
            object_type: &object_type.name,
            pos: instance.pos,
        };
        let mut required = RequiredFlags::new(&object_type.required);

        for (key, value) in &instance.fields {
            match object_type.field(key) {
                Some(field) => {
                    required.satisfy(key);
                    self.value(scope, key, field, value);
                }
                None => self.unknown_key(scope, key),
            }
        }

        if !instance.extensions.is_empty() {
            match (object_type.extension_key(), object_type.extensible_group()) {
                (Some(key), Some(group)) => {
                    required.satisfy(key);
                    for entry in &instance.extensions {
                        self.group_entry(scope, group, entry);
                    }
                }
                _ => self.unknown_key(scope, object_type.extension_key().unwrap_or("extensions")),
            }
        }

        for field in required.missing() {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::RequiredField,
                    format!(
                        "Required field \"{}\" in object \"{}\" ending{} was not provided",
                        field,
                        scope.object_type,
                        scope.at_line()
                    ),
                )
                .with_object_type(scope.object_type)
                .with_field(field)
                .with_pos(scope.pos),
            );
        }
    }

    fn group_entry(&mut self, scope: Scope<'_>, group: &ExtensibleGroup, entry: &FieldMap) {
        let mut required = RequiredFlags::new(&group.required);

        for (key, value) in entry {
            match group.fields.get(key) {
                Some(field) => {
                    required.satisfy(key);
                    self.value(scope, key, field, value);
                }
                None => self.unknown_key(scope, key),
            }
        }

        for field in required.missing() {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::RequiredExtensibleField,
                    format!(
                        "Required extensible field \"{}\" in object \"{}\" ending{} was not provided",
                        field,
                        scope.object_type,
                        scope.at_line()
                    ),
                )
                .with_object_type(scope.object_type)
                .with_field(field)
                .with_pos(scope.pos),
            );
        }
    }

    fn unknown_key(&mut self, scope: Scope<'_>, key: &str) {
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::UnknownField,
                format!(
                    "Key \"{}\" in object \"{}\"{} not found in schema",
                    key,
                    scope.object_type,
                    scope.at_line()
                ),
            )
            .with_object_type(scope.object_type)
            .with_field(key)
            .with_pos(scope.pos),
        );
    }

    fn value(&mut self, scope: Scope<'_>, key: &str, field: &FieldSchema, value: &Scalar) {
        match field {
            FieldSchema::Enum(field) => self.enum_value(scope, key, field, value),
            FieldSchema::Scalar(field) => match value {
                Scalar::String(text) => self.string_value(scope, key, field, text),
                Scalar::Integer(_) | Scalar::Real(_) => self.numeric_value(scope, key, field, value),
            },
            FieldSchema::Extensible(_) => self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::TypeMismatch,
                    format!(
                        "In object \"{}\"{}: field \"{}\" must be an array but has value \"{}\"",
                        scope.object_type,
                        scope.at_line(),
                        key,
                        value
                    ),
                )
                .with_object_type(scope.object_type)
                .with_field(key)
                .with_pos(scope.pos),
            ),
        }
    }

    fn enum_value(&mut self, scope: Scope<'_>, key: &str, field: &EnumField, value: &Scalar) {
        let found = match value {
            Scalar::String(text) => field.values.iter().any(|v| v.matches_str(text)),
            Scalar::Integer(i) => field.values.contains(&EnumValue::Int(*i)),
            Scalar::Real(r) => field
                .values
                .iter()
                .any(|v| matches!(v, EnumValue::Int(i) if *i as f64 == *r)),
        };
        if !found {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::Enum,
                    format!(
                        "In object \"{}\"{}: \"{}\" was not found in the enum",
                        scope.object_type,
                        scope.at_line(),
                        value
                    ),
                )
                .with_object_type(scope.object_type)
                .with_field(key)
                .with_pos(scope.pos),
            );
        }
    }

    fn numeric_value(&mut self, scope: Scope<'_>, key: &str, field: &ScalarField, value: &Scalar) {
        let Some(number) = value.as_f64() else {
            return;
        };
        // With a union, the numeric branch comes first.
        let (bounds, declared) = match field.any_of.first() {
            Some(branch) => (&branch.bounds, branch.field_type),
            None => (&field.bounds, field.field_type),
        };

        let below = bounds.minimum.and_then(|min| {
            if min.exclusive && number <= min.value {
                Some("is less than or equal to the exclusive minimum")
            } else if !min.exclusive && number < min.value {
                Some("is less than the minimum")
            } else {
                None
            }
        });
        let above = bounds.maximum.and_then(|max| {
            if max.exclusive && number >= max.value {
                Some("exceeds or equals exclusive maximum")
            } else if !max.exclusive && number > max.value {
                Some("exceeds maximum")
            } else {
                None
            }
        });
        for violation in [below, above].into_iter().flatten() {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::Range,
                    format!(
                        "Out of Range: Value \"{}\" for field \"{}\" in object \"{}\" parsed{} {}",
                        value,
                        key,
                        scope.object_type,
                        scope.at_line(),
                        violation
                    ),
                )
                .with_object_type(scope.object_type)
                .with_field(key)
                .with_pos(scope.pos),
            );
        }

        if let Some(declared) = declared {
            if declared != FieldType::Number {
                self.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::TypeMismatch,
                        format!(
                            "In object \"{}\"{}, type == {} but parsed value = {}",
                            scope.object_type,
                            scope.at_line(),
                            declared,
                            value
                        ),
                    )
                    .with_object_type(scope.object_type)
                    .with_field(key)
                    .with_pos(scope.pos),
                );
            }
        }
    }

    fn string_value(&mut self, scope: Scope<'_>, key: &str, field: &ScalarField, text: &str) {
        if !field.any_of.is_empty() {
            let accepts_string = field
                .any_of
                .iter()
                .any(|branch| branch.field_type == Some(FieldType::String));
            if !accepts_string {
                self.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::TypeMismatch,
                        format!(
                            "type == string was not found in anyOf in object \"{}\"{}",
                            scope.object_type,
                            scope.at_line()
                        ),
                    )
                    .with_object_type(scope.object_type)
                    .with_field(key)
                    .with_pos(scope.pos),
                );
            }
            return;
        }

        if let Some(declared) = field.field_type {
            if declared != FieldType::String && !text.is_empty() {
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::TypeMismatch,
                        format!(
                            "In object \"{}\"{}: field \"{}\" has value \"{}\" but type == {}",
                            scope.object_type,
                            scope.at_line(),
                            key,
                            text,
                            declared
                        ),
                    )
                    .with_object_type(scope.object_type)
                    .with_field(key)
                    .with_pos(scope.pos),
                );
            }
        }
    }
}
