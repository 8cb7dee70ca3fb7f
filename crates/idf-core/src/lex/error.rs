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

//! Lexical errors raised by the tokenizer.

use thiserror::Error;

pub use crate::lex::span::SourcePos;

/// Error produced while scanning legacy IDF text.
///
/// These errors never escape decoding: the decoder turns them into
/// diagnostics and resynchronizes at the next statement boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    /// A character that can start neither a string nor a number.
    #[error("line {}, column {}: invalid character '{}'", .pos.line(), .pos.column(), .found)]
    InvalidCharacter { found: char, pos: SourcePos },

    /// A numeric token that violates sign, decimal point or exponent rules,
    /// or is not directly followed by a field delimiter.
    #[error("line {}, column {}: malformed number '{}'", .pos.line(), .pos.column(), .text)]
    MalformedNumber { text: String, pos: SourcePos },

    /// A string containing a forbidden escape (`\n`, `\r`) or a dangling backslash.
    #[error("line {}, column {}: incomplete string '{}'", .pos.line(), .pos.column(), .text)]
    IncompleteString { text: String, pos: SourcePos },

    /// Input ended where a field value was expected.
    #[error("line {}, column {}: unexpected end of input", .pos.line(), .pos.column())]
    UnexpectedEnd { pos: SourcePos },
}

impl LexError {
    /// Position at which the error was detected.
    pub fn pos(&self) -> SourcePos {
        match self {
            Self::InvalidCharacter { pos, .. }
            | Self::MalformedNumber { pos, .. }
            | Self::IncompleteString { pos, .. }
            | Self::UnexpectedEnd { pos } => *pos,
        }
    }
}
