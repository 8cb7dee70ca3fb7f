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

//! Core parser, schema model and validator for IDF input files.
//!
//! An IDF file is a sequence of objects, each an object-type keyword
//! followed by comma-separated field values and terminated by `;`. Lines
//! starting with `!` are comments. The schema names every object type, the
//! positional order of its fields and the repeating group that may follow.
//!
//! The pipeline runs in two passes:
//!
//! 1. [`decode`] tokenizes the text and builds a schema-shaped [`Document`],
//!    resolving object types case-insensitively and collecting lexical
//!    diagnostics.
//! 2. [`validate`] walks the finished document and checks it against the
//!    [`Schema`]: enums, numeric bounds, declared types, required fields and
//!    property counts.
//!
//! [`encode`] renders a document back to legacy text.
//!
//! # Examples
//!
//! ```
//! use idf_core::{decode, encode, validate, FieldSchema, ObjectTypeSchema, Schema};
//!
//! let zone = ObjectTypeSchema::builder("Zone")
//!     .name_field(false)
//!     .field("x_origin", FieldSchema::number().with_default(0.0))
//!     .build()
//!     .unwrap();
//! let schema = Schema::new([zone], Vec::new());
//!
//! let decoded = decode("ZONE, Core, 4.5;", &schema);
//! assert!(decoded.success);
//! assert_eq!(decoded.document.count("Zone"), 1);
//! assert!(validate(&decoded.document, &schema).is_empty());
//!
//! let text = encode(&decoded.document, &schema).unwrap();
//! assert!(text.starts_with("Zone,\n  Core,\n  4.5;"));
//! ```
//!
//! # Lexical Analysis
//!
//! The [`lex`] module exposes the tokenizer on its own, for tools that need
//! token-level access (syntax highlighting, statement counting).

mod decode;
mod diagnostic;
mod document;
mod encode;
mod error;
pub mod lex;
mod resolve;
mod schema;
mod validate;

pub use decode::{
    decode, decode_with_options, DecodeOptions, DecodeOptionsBuilder, Decoded,
    DUPLICATE_NAME_EXEMPT,
};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use document::{format_real, Document, FieldMap, Instance, InstanceMap, Scalar};
pub use encode::{encode, FIELD_SEPARATOR, OBJECT_TERMINATOR};
pub use error::{IdfError, IdfErrorKind, IdfResult};
pub use resolve::{make_upper_case, ObjectTypeResolver};
pub use schema::{
    partition_fields, Bound, EnumField, EnumValue, ExtensibleGroup, FieldPartition, FieldSchema,
    FieldType, LegacyLayout, NumericBounds, ObjectTypeBuilder, ObjectTypeSchema, ScalarField,
    Schema, UnionBranch, NAME_FIELD,
};
pub use validate::{validate, Validator};
