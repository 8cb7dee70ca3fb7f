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

//! Schema-driven decoding of legacy IDF text.
//!
//! The decoder walks the token stream statement by statement. Each
//! statement starts with an object type keyword, resolved case-insensitively
//! against the schema, followed by values assigned to the type's legacy
//! positional fields. Once the positional fields are exhausted, further
//! values cycle through the repeating group fields and each completed cycle
//! becomes one entry of the instance's `extensions`.
//!
//! Failures never abort the whole input: a bad statement is reported,
//! skipped up to its `;`, and decoding resumes with the next one.
//!
//! # Examples
//!
//! ```
//! use idf_core::{decode, FieldSchema, ObjectTypeSchema, Scalar, Schema};
//!
//! let foo = ObjectTypeSchema::builder("Foo")
//!     .name_field(false)
//!     .field("a", FieldSchema::number())
//!     .build()
//!     .unwrap();
//! let schema = Schema::new([foo], Vec::new());
//!
//! let decoded = decode("FOO, Inst1, 1.5;", &schema);
//! assert!(decoded.success);
//! let inst = decoded.document.get("Foo", "Inst1").unwrap();
//! assert_eq!(inst.get("a"), Some(&Scalar::Real(1.5)));
//! ```

use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::document::{Document, FieldMap, Instance, Scalar};
use crate::error::{IdfError, IdfResult};
use crate::lex::{LexError, SourcePos, Token, Tokenizer};
use crate::schema::{FieldSchema, ObjectTypeSchema, Schema, NAME_FIELD};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Object type whose instances may legitimately share a name.
pub const DUPLICATE_NAME_EXEMPT: &str = "RunPeriod";

/// Decoder configuration.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Object types exempt from the duplicate name warning.
    pub duplicate_name_exempt: BTreeSet<String>,
    /// Stop decoding once this many instances have been stored.
    pub max_objects: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            duplicate_name_exempt: BTreeSet::from([DUPLICATE_NAME_EXEMPT.to_string()]),
            max_objects: None,
        }
    }
}

impl DecodeOptions {
    pub fn builder() -> DecodeOptionsBuilder {
        DecodeOptionsBuilder::new()
    }
}

/// Builder for [`DecodeOptions`].
///
/// ```
/// use idf_core::DecodeOptions;
///
/// let opts = DecodeOptions::builder()
///     .exempt_duplicates("Schedule:Day:Interval")
///     .build();
/// assert!(opts.duplicate_name_exempt.contains("RunPeriod"));
/// assert!(opts.duplicate_name_exempt.contains("Schedule:Day:Interval"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecodeOptionsBuilder {
    options: DecodeOptions,
}

impl DecodeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object type to the duplicate name exemption list.
    pub fn exempt_duplicates(mut self, object_type: impl Into<String>) -> Self {
        self.options.duplicate_name_exempt.insert(object_type.into());
        self
    }

    /// Warn on duplicates for every object type.
    pub fn no_exemptions(mut self) -> Self {
        self.options.duplicate_name_exempt.clear();
        self
    }

    pub fn max_objects(mut self, limit: usize) -> Self {
        self.options.max_objects = Some(limit);
        self
    }

    pub fn build(self) -> DecodeOptions {
        self.options
    }
}

/// Result of decoding.
#[derive(Debug, Clone, Default)]
pub struct Decoded {
    pub document: Document,
    pub diagnostics: Diagnostics,
    /// `false` if any statement failed lexically or structurally, or the
    /// input was empty.
    pub success: bool,
}

impl Decoded {
    /// Turn a failed decode into an error carrying the first error
    /// diagnostic.
    pub fn into_result(self) -> IdfResult<Document> {
        if self.success {
            return Ok(self.document);
        }
        match self.diagnostics.errors().first() {
            Some(first) => {
                let err = IdfError::syntax(first.message(), first.line().unwrap_or(0));
                Err(match first.pos() {
                    Some(pos) => err.with_column(pos.column()),
                    None => err,
                })
            }
            None => Err(IdfError::syntax("decoding failed", 0)),
        }
    }
}

/// Decode legacy text with default options.
pub fn decode(text: &str, schema: &Schema) -> Decoded {
    decode_with_options(text, schema, &DecodeOptions::default())
}

/// Decode legacy text.
pub fn decode_with_options(text: &str, schema: &Schema, options: &DecodeOptions) -> Decoded {
    let mut decoder = Decoder {
        tok: Tokenizer::new(text),
        schema,
        options,
        decoded: Decoded {
            success: true,
            ..Decoded::default()
        },
    };

    if text.trim().is_empty() {
        decoder.report(Diagnostic::error(DiagnosticKind::EmptyInput, "input is empty"));
        decoder.decoded.success = false;
        return decoder.decoded;
    }

    decoder.run();
    debug!(
        object_types = decoder.decoded.document.object_types().count(),
        instances = decoder.decoded.document.total_instances(),
        success = decoder.decoded.success,
        "decoded input"
    );
    decoder.decoded
}

/// Why a statement was abandoned.
enum Failure {
    Lex(LexError),
    ExtraFields(SourcePos),
}

impl From<LexError> for Failure {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

/// What one statement produced.
struct Parsed {
    name: Option<String>,
    instance: Instance,
}

struct Decoder<'a> {
    tok: Tokenizer<'a>,
    schema: &'a Schema,
    options: &'a DecodeOptions,
    decoded: Decoded,
}

impl<'a> Decoder<'a> {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.decoded.diagnostics.push(diagnostic);
    }

    fn run(&mut self) {
        loop {
            match self.tok.look_ahead() {
                Token::End => break,
                Token::None => {
                    let err = self.tok.invalid_character();
                    self.fail_statement(Failure::Lex(err), None);
                }
                Token::Exclamation => {
                    self.tok.next_token();
                    self.tok.eat_comment();
                }
                _ => {
                    if self.limit_reached() {
                        break;
                    }
                    self.statement();
                }
            }
        }
    }

    fn limit_reached(&mut self) -> bool {
        let Some(limit) = self.options.max_objects else {
            return false;
        };
        if self.decoded.document.total_instances() < limit {
            return false;
        }
        self.tok.eat_whitespace();
        let pos = self.tok.position();
        self.report(
            Diagnostic::error(
                DiagnosticKind::LimitExceeded,
                format!("Object limit of {} exceeded at line {}", limit, pos.line()),
            )
            .with_pos(pos),
        );
        self.decoded.success = false;
        true
    }

    fn statement(&mut self) {
        self.tok.eat_whitespace();
        let start = self.tok.position();
        let raw_type = match self.tok.parse_string() {
            Ok(raw) => raw,
            Err(err) => return self.fail_statement(Failure::Lex(err), None),
        };

        let schema = self.schema;
        let Some(object_type) = schema.resolve_object_type(&raw_type) else {
            let line = self.tok.current_line().trim().to_string();
            self.report(
                Diagnostic::error(
                    DiagnosticKind::UnknownObjectType,
                    format!(
                        "Object type \"{}\" at line {} not found in schema: {}",
                        raw_type,
                        start.line(),
                        line
                    ),
                )
                .with_object_type(raw_type)
                .with_pos(start),
            );
            self.tok.skip_statement();
            return;
        };

        match self.object(object_type) {
            Ok(parsed) => self.store(object_type, parsed),
            Err(failure) => self.fail_statement(failure, Some(&object_type.name)),
        }
    }

    /// Report a failed statement and resynchronize after its `;`.
    fn fail_statement(&mut self, failure: Failure, object_type: Option<&str>) {
        self.decoded.success = false;
        let diagnostic = match failure {
            Failure::Lex(err) => {
                let pos = err.pos();
                Diagnostic::error(DiagnosticKind::Lexical, err.to_string()).with_pos(pos)
            }
            Failure::ExtraFields(pos) => Diagnostic::error(
                DiagnosticKind::ExtraFields,
                format!(
                    "extra field(s) at line {} (column {}): {}",
                    pos.line(),
                    pos.column(),
                    self.tok.current_line().trim()
                ),
            )
            .with_pos(pos),
        };
        let diagnostic = match object_type {
            Some(name) => diagnostic.with_object_type(name),
            None => diagnostic,
        };
        self.report(diagnostic);
        self.tok.skip_statement();
    }

    fn store(&mut self, object_type: &ObjectTypeSchema, parsed: Parsed) {
        let type_name = object_type.name.as_str();
        let explicit = parsed.name.is_some();
        let name = parsed.name.unwrap_or_else(|| {
            format!("{} {}", type_name, self.decoded.document.count(type_name) + 1)
        });

        if explicit
            && self.decoded.document.contains(type_name, &name)
            && !self.options.duplicate_name_exempt.contains(type_name)
        {
            self.report(
                Diagnostic::warning(
                    DiagnosticKind::DuplicateName,
                    format!("Duplicate name found. name: \"{}\"", name),
                )
                .with_object_type(type_name)
                .with_pos(parsed.instance.pos),
            );
        }

        debug!(object_type = type_name, name = %name, "decoded object");
        self.decoded.document.insert(type_name, name, parsed.instance);
    }

    /// Parse one object body; the type keyword has been consumed.
    fn object(&mut self, object_type: &ObjectTypeSchema) -> Result<Parsed, Failure> {
        let legacy = &object_type.legacy;
        let group_len = legacy.extensibles.len();

        let mut name: Option<String> = None;
        let mut fields = FieldMap::new();
        let mut extensions: Vec<FieldMap> = Vec::new();
        let mut entry = FieldMap::new();

        let mut field_index = 0usize;
        let mut group_index = 0usize;
        let mut value_parsed = false;
        // The delimiter right after the type keyword opens the field list.
        let mut awaiting_first_delimiter = true;

        loop {
            match self.tok.look_ahead() {
                Token::None => return Err(Failure::Lex(self.tok.invalid_character())),
                Token::End => {
                    self.report(
                        Diagnostic::warning(
                            DiagnosticKind::UnterminatedObject,
                            format!(
                                "Object \"{}\" is missing its terminating semicolon",
                                object_type.name
                            ),
                        )
                        .with_object_type(&object_type.name)
                        .with_pos(self.tok.position()),
                    );
                    break;
                }
                Token::Exclamation => {
                    self.tok.next_token();
                    self.tok.eat_comment();
                }
                token @ (Token::Comma | Token::Semicolon) => {
                    if awaiting_first_delimiter {
                        awaiting_first_delimiter = false;
                    } else {
                        if !value_parsed {
                            // consecutive delimiters: a blank field
                            if field_index < legacy.fields.len() {
                                let field = &legacy.fields[field_index];
                                if field == NAME_FIELD {
                                    name = Some(String::new());
                                } else {
                                    fields.insert(field.clone(), Scalar::String(String::new()));
                                }
                            } else if group_len > 0 {
                                let field = &legacy.extensibles[group_index % group_len];
                                entry.insert(field.clone(), Scalar::String(String::new()));
                                group_index += 1;
                                if group_index % group_len == 0 {
                                    extensions.push(std::mem::take(&mut entry));
                                }
                            }
                        }
                        if field_index < legacy.fields.len() {
                            field_index += 1;
                        }
                        value_parsed = false;
                    }
                    self.tok.next_token();
                    if token == Token::Semicolon {
                        let min_fields = object_type.min_fields.min(legacy.fields.len());
                        for field in legacy.fields.iter().take(min_fields).skip(field_index) {
                            if field == NAME_FIELD {
                                name.get_or_insert_with(String::new);
                            } else {
                                fields
                                    .entry(field.clone())
                                    .or_insert_with(|| Scalar::String(String::new()));
                            }
                        }
                        break;
                    }
                }
                _ if awaiting_first_delimiter => {
                    let pos = self.tok.position();
                    return Err(Failure::ExtraFields(pos));
                }
                _ if value_parsed => {
                    // a second value without a delimiter cannot happen with
                    // well-formed tokens; treat it as structural garbage
                    return Err(Failure::ExtraFields(self.tok.position()));
                }
                _ => {
                    value_parsed = true;
                    if field_index < legacy.fields.len() {
                        let field = &legacy.fields[field_index];
                        if field == NAME_FIELD {
                            name = Some(self.tok.parse_string()?);
                        } else if let Some(schema) = object_type.field(field) {
                            let value = self.value(schema)?;
                            fields.insert(field.clone(), value);
                        } else {
                            let pos = self.tok.position();
                            self.report(
                                Diagnostic::warning(
                                    DiagnosticKind::UnknownField,
                                    format!("Field {} was not found at line {}", field, pos.line()),
                                )
                                .with_object_type(&object_type.name)
                                .with_field(field)
                                .with_pos(pos),
                            );
                            self.tok.parse_string()?;
                        }
                    } else if group_len > 0 {
                        let field = &legacy.extensibles[group_index % group_len];
                        let value = match object_type.extensible_field(field) {
                            Some(schema) => self.value(schema)?,
                            None => Scalar::String(self.tok.parse_string()?),
                        };
                        entry.insert(field.clone(), value);
                        group_index += 1;
                        if group_index % group_len == 0 {
                            extensions.push(std::mem::take(&mut entry));
                        }
                    } else {
                        return Err(Failure::ExtraFields(self.tok.position()));
                    }
                }
            }
        }

        if !entry.is_empty() {
            extensions.push(entry);
        }

        Ok(Parsed {
            name,
            instance: Instance {
                fields,
                extensions,
                pos: self.tok.position(),
            },
        })
    }

    /// Parse one value guided by its field schema.
    ///
    /// Numeric fields, and untyped fields whose text starts like a number,
    /// try a numeric scan first and fall back to a string. Strings are
    /// normalized to the schema's spelling of enum and keyword values.
    fn value(&mut self, schema: &FieldSchema) -> Result<Scalar, LexError> {
        let numeric_first = match schema.declared_type() {
            Some(declared) => declared.is_numeric(),
            None => self.tok.look_ahead() == Token::Number,
        };
        if numeric_first {
            if let Ok(number) = self.tok.parse_number() {
                return Ok(number.into());
            }
        }

        let text = self.tok.parse_string()?;
        Ok(Scalar::String(match schema.canonical_spelling(&text) {
            Some(canonical) => canonical.to_string(),
            None => text,
        }))
    }
}
