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

//! Error types for IDF processing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdfErrorKind {
    /// Lexical or structural violation in legacy text.
    Syntax,
    /// Schema document is malformed or does not describe a requested type.
    Schema,
    /// Error during format conversion (epJSON).
    Conversion,
}

impl fmt::Display for IdfErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Schema => write!(f, "SchemaError"),
            Self::Conversion => write!(f, "ConversionError"),
        }
    }
}

/// An error raised while processing IDF input.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct IdfError {
    /// The kind of error.
    pub kind: IdfErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when unknown).
    pub line: usize,
    /// Column number (1-based, optional).
    pub column: Option<usize>,
    /// Additional context (e.g., "in object Zone ending at line 12").
    pub context: Option<String>,
}

impl IdfError {
    /// Create a new error.
    pub fn new(kind: IdfErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column: None,
            context: None,
        }
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(IdfErrorKind::Syntax, message, line)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(IdfErrorKind::Schema, message, 0)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(IdfErrorKind::Conversion, message, 0)
    }
}

/// Result type for IDF operations.
pub type IdfResult<T> = Result<T, IdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== IdfErrorKind tests ====================

    #[test]
    fn test_kind_display() {
        assert_eq!(IdfErrorKind::Syntax.to_string(), "SyntaxError");
        assert_eq!(IdfErrorKind::Schema.to_string(), "SchemaError");
        assert_eq!(IdfErrorKind::Conversion.to_string(), "ConversionError");
    }

    // ==================== IdfError tests ====================

    #[test]
    fn test_error_display() {
        let err = IdfError::syntax("unexpected character", 7);
        assert_eq!(err.to_string(), "SyntaxError at line 7: unexpected character");
    }

    #[test]
    fn test_builders() {
        let err = IdfError::schema("missing legacy_idd")
            .with_column(3)
            .with_context("in object type Zone");
        assert_eq!(err.kind, IdfErrorKind::Schema);
        assert_eq!(err.column, Some(3));
        assert_eq!(err.context.as_deref(), Some("in object type Zone"));
    }
}
