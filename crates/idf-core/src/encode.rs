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

//! Encoding of structured documents back into legacy IDF text.
//!
//! Fields are written in the schema's positional order. A field the
//! instance does not carry is skipped, but if a later field is present the
//! skipped positions are written as empty values so every value stays in
//! its slot. Trailing absent fields are dropped.

use crate::document::{Document, FieldMap, Scalar};
use crate::error::{IdfError, IdfResult};
use crate::schema::{Schema, NAME_FIELD};
use std::borrow::Cow;

/// Separator written before every field value.
pub const FIELD_SEPARATOR: &str = ",\n  ";

/// Terminator written after every object.
pub const OBJECT_TERMINATOR: &str = ";\n\n";

/// Render a document as legacy text.
///
/// # Errors
///
/// Fails if the document contains an object type the schema does not
/// describe, since its positional layout is unknown.
///
/// # Examples
///
/// ```
/// use idf_core::{decode, encode, FieldSchema, ObjectTypeSchema, Schema};
///
/// let foo = ObjectTypeSchema::builder("Foo")
///     .name_field(false)
///     .field("a", FieldSchema::number())
///     .field("b", FieldSchema::number())
///     .build()
///     .unwrap();
/// let schema = Schema::new([foo], Vec::new());
///
/// let doc = decode("Foo, Inst1, , 2;", &schema).document;
/// let text = encode(&doc, &schema).unwrap();
/// assert_eq!(text, "Foo,\n  Inst1,\n  ,\n  2;\n\n");
/// assert_eq!(decode(&text, &schema).document, doc);
/// ```
pub fn encode(document: &Document, schema: &Schema) -> IdfResult<String> {
    let mut out = String::new();

    for (type_name, instances) in document.object_types() {
        let object_type = schema.object_type(type_name).ok_or_else(|| {
            IdfError::schema(format!("Object type \"{}\" not found in schema", type_name))
        })?;
        let legacy = &object_type.legacy;

        for (name, instance) in instances {
            out.push_str(&object_type.name);
            let mut writer = FieldWriter {
                out: &mut out,
                skipped: 0,
            };

            for field in &legacy.fields {
                if field == NAME_FIELD {
                    writer.write(Some(escape(name)));
                } else {
                    writer.write(instance.fields.get(field).map(render));
                }
            }
            for entry in &instance.extensions {
                write_entry(&mut writer, &legacy.extensibles, entry);
            }

            out.push_str(OBJECT_TERMINATOR);
        }
    }

    Ok(out)
}

fn write_entry(writer: &mut FieldWriter<'_>, fields: &[String], entry: &FieldMap) {
    for field in fields {
        writer.write(entry.get(field).map(render));
    }
}

/// Writes values while deferring the separators of absent fields.
struct FieldWriter<'a> {
    out: &'a mut String,
    skipped: usize,
}

impl FieldWriter<'_> {
    fn write(&mut self, value: Option<Cow<'_, str>>) {
        match value {
            None => self.skipped += 1,
            Some(text) => {
                for _ in 0..self.skipped {
                    self.out.push_str(FIELD_SEPARATOR);
                }
                self.skipped = 0;
                self.out.push_str(FIELD_SEPARATOR);
                self.out.push_str(&text);
            }
        }
    }
}

fn render(value: &Scalar) -> Cow<'_, str> {
    match value {
        Scalar::String(s) => escape(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Escape characters the tokenizer would otherwise reinterpret.
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\t', '\u{8}']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\u{8}' => escaped.push_str("\\b"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
