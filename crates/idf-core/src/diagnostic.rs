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

//! Diagnostics accumulated while decoding and validating.

use crate::lex::SourcePos;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Advisory; never fatal
    Warning,
    /// Counted toward the fatal total checked by the caller
    Error,
    /// Error that the caller should surface prominently
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Severe => write!(f, "severe"),
        }
    }
}

/// Kind of diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Invalid character, malformed number or string
    Lexical,
    /// Input is empty
    EmptyInput,
    /// Object type keyword not in schema
    UnknownObjectType,
    /// Field or key not in schema
    UnknownField,
    /// More values than positional and group fields can hold
    ExtraFields,
    /// Two instances of one type share a name
    DuplicateName,
    /// Input ended before the object's `;`
    UnterminatedObject,
    /// Value not in the enum set
    Enum,
    /// Numeric bound violated
    Range,
    /// Declared type disagrees with the value
    TypeMismatch,
    /// Required instance field missing
    RequiredField,
    /// Required group field missing
    RequiredExtensibleField,
    /// Required object type missing from the input
    RequiredObject,
    /// minProperties / maxProperties violated
    PropertyCount,
    /// Object type that must be expanded by a preprocessor
    Preprocessor,
    /// Object never fetched by any consumer
    UnusedObject,
    /// Blank or duplicate name passed to a name check
    InvalidName,
    /// Configured decode limit reached
    LimitExceeded,
}

/// A single diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    kind: DiagnosticKind,
    message: String,
    object_type: Option<String>,
    field: Option<String>,
    pos: Option<SourcePos>,
}

impl Diagnostic {
    fn new(severity: Severity, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            object_type: None,
            field: None,
            pos: None,
        }
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, message)
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, message)
    }

    pub fn severe(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Severe, kind, message)
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach a position; unknown positions are ignored.
    pub fn with_pos(mut self, pos: SourcePos) -> Self {
        if pos.is_known() {
            self.pos = Some(pos);
        }
        self
    }

    // Public getters
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn pos(&self) -> Option<SourcePos> {
        self.pos
    }

    pub fn line(&self) -> Option<usize> {
        self.pos.map(|p| p.line())
    }

    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(pos) = self.pos {
            write!(f, "line {}: ", pos.line())?;
        }
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Ordered warning and error lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a diagnostic to the warning or error list by severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors.push(diagnostic);
        } else {
            self.warnings.push(diagnostic);
        }
    }

    /// Append another set, preserving order within each list.
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    /// Warnings first, then errors.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.warnings.iter().chain(self.errors.iter())
    }

    pub fn clear(&mut self) {
        self.warnings.clear();
        self.errors.clear();
    }
}
