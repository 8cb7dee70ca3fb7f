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

//! Tokenizer for legacy positional IDF text.
//!
//! The tokenizer classifies the next lexical unit and scans string and
//! number values on demand. It never allocates tokens up front: the decoder
//! drives it with [`Tokenizer::look_ahead`] and consumes values with
//! [`Tokenizer::parse_string`] / [`Tokenizer::parse_number`].
//!
//! # Examples
//!
//! ```
//! use idf_core::lex::{Number, Token, Tokenizer};
//!
//! let mut tok = Tokenizer::new("Timestep, 4;");
//! assert_eq!(tok.look_ahead(), Token::String);
//! assert_eq!(tok.parse_string().unwrap(), "Timestep");
//! assert_eq!(tok.next_token(), Token::Comma);
//! assert_eq!(tok.parse_number().unwrap(), Number::Integer(4));
//! assert_eq!(tok.next_token(), Token::Semicolon);
//! assert_eq!(tok.next_token(), Token::End);
//! ```

use super::{LexError, SourcePos};

/// Punctuation accepted as the first character of a string token.
const STRING_PUNCTUATION: &[u8] = b"-:.#/\\[]{}_@$%^&*()|+=<>?'\"~";

/// Characters that start a number token.
const NUMBER_START: &[u8] = b".-+0123456789";

/// Classification of the next lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Invalid character; the enclosing parse must fail.
    None,
    /// End of input.
    End,
    /// `!` comment start.
    Exclamation,
    /// `,` field delimiter.
    Comma,
    /// `;` statement terminator.
    Semicolon,
    /// Start of a string value.
    String,
    /// Start of a numeric value.
    Number,
}

/// A scanned numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

/// Classify a byte as the first character of a token.
pub fn classify(byte: u8) -> Token {
    match byte {
        b'!' => Token::Exclamation,
        b',' => Token::Comma,
        b';' => Token::Semicolon,
        b if NUMBER_START.contains(&b) => Token::Number,
        b if b.is_ascii_alphanumeric() || STRING_PUNCTUATION.contains(&b) => Token::String,
        _ => Token::None,
    }
}

/// Cursor over legacy IDF text with line/column tracking.
///
/// Cloning a tokenizer is cheap (a slice and three counters), which is how
/// [`look_ahead`](Self::look_ahead) peeks without disturbing the position.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    index: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            index: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Current position (1-based line and column).
    pub fn position(&self) -> SourcePos {
        SourcePos::new(self.line, self.index - self.line_start + 1)
    }

    /// Byte offset into the input.
    pub fn offset(&self) -> usize {
        self.index
    }

    /// Text of the line the cursor is on, without the trailing newline.
    pub fn current_line(&self) -> &'a str {
        let rest = &self.text[self.line_start..];
        match rest.find('\n') {
            Some(end) => rest[..end].trim_end_matches('\r'),
            None => rest,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.index).copied()
    }

    /// Advance one byte, keeping the line counters in sync.
    #[inline]
    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.index += 1;
        if byte == b'\n' {
            self.line += 1;
            self.line_start = self.index;
        }
        Some(byte)
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    pub fn eat_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.bump();
        }
    }

    /// Consume everything up to and including the end of the current line.
    pub fn eat_comment(&mut self) {
        while let Some(byte) = self.bump() {
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Classify and consume the next token.
    ///
    /// Delimiters and the comment marker are consumed along with their one
    /// character; string and number starts are consumed too, so callers that
    /// want the value must scan it before calling `next_token`. An invalid
    /// character is left in place.
    pub fn next_token(&mut self) -> Token {
        self.eat_whitespace();
        let Some(byte) = self.peek() else {
            return Token::End;
        };
        let token = classify(byte);
        if token != Token::None {
            self.bump();
        }
        token
    }

    /// Peek at the next token without moving the cursor or line counters.
    pub fn look_ahead(&self) -> Token {
        self.clone().next_token()
    }

    /// Build the error for an invalid character at the cursor.
    pub fn invalid_character(&self) -> LexError {
        let mut probe = self.clone();
        probe.eat_whitespace();
        match probe.text[probe.index..].chars().next() {
            Some(found) => LexError::InvalidCharacter {
                found,
                pos: probe.position(),
            },
            None => LexError::UnexpectedEnd {
                pos: probe.position(),
            },
        }
    }

    /// Skip to just past the next `;`, or to the end of input.
    ///
    /// Comments are honoured, so a `;` inside a comment does not end the
    /// statement.
    pub fn skip_statement(&mut self) {
        loop {
            match self.next_token() {
                Token::Semicolon | Token::End => break,
                Token::Exclamation => self.eat_comment(),
                Token::None => {
                    let width = self.text[self.index..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    self.index += width;
                }
                _ => {}
            }
        }
    }

    /// Scan a string value up to the next `,`, `;` or `!`.
    ///
    /// Leading whitespace is skipped and trailing whitespace trimmed. The
    /// escapes `\"`, `\\`, `\/`, `\b` and `\t` are decoded; `\n` and `\r`
    /// are rejected; any other escape is kept verbatim.
    pub fn parse_string(&mut self) -> Result<String, LexError> {
        self.eat_whitespace();
        let pos = self.position();
        let mut buf: Vec<u8> = Vec::new();

        while let Some(byte) = self.peek() {
            match byte {
                b',' | b';' | b'!' => break,
                b'\\' => {
                    self.bump();
                    let Some(next) = self.bump() else {
                        return Err(LexError::IncompleteString {
                            text: String::from_utf8_lossy(&buf).into_owned(),
                            pos,
                        });
                    };
                    match next {
                        b'"' => buf.push(b'"'),
                        b'\\' => buf.push(b'\\'),
                        b'/' => buf.push(b'/'),
                        b'b' => buf.push(0x08),
                        b't' => buf.push(b'\t'),
                        b'n' | b'r' => {
                            return Err(LexError::IncompleteString {
                                text: String::from_utf8_lossy(&buf).into_owned(),
                                pos,
                            });
                        }
                        other => {
                            buf.push(b'\\');
                            buf.push(other);
                        }
                    }
                }
                _ => {
                    buf.push(byte);
                    self.bump();
                }
            }
        }

        Ok(String::from_utf8_lossy(&buf).trim_end().to_string())
    }

    /// Scan a numeric value.
    ///
    /// Accepts one leading sign, at most one decimal point and at most one
    /// exponent marker with its own optional sign. The number must be
    /// followed (after whitespace) by `,` or `;`. On failure the cursor is
    /// left untouched so the caller can re-scan the field as a string.
    pub fn parse_number(&mut self) -> Result<Number, LexError> {
        let source: &'a str = self.text;
        let mut probe = self.clone();
        probe.eat_whitespace();
        let pos = probe.position();
        let start = probe.index;

        let mut seen_dot = false;
        let mut seen_exp = false;
        let mut prev: Option<u8> = None;
        let mut valid = true;

        while let Some(byte) = probe.peek() {
            match byte {
                b'0'..=b'9' => {}
                b'.' => {
                    if seen_dot || seen_exp {
                        valid = false;
                    }
                    seen_dot = true;
                }
                b'-' | b'+' => {
                    if probe.index != start && !matches!(prev, Some(b'e' | b'E')) {
                        valid = false;
                    }
                }
                b'e' | b'E' => {
                    if seen_exp || probe.index == start {
                        valid = false;
                    }
                    seen_exp = true;
                }
                _ => break,
            }
            prev = Some(byte);
            probe.bump();
        }

        let text = &source[start..probe.index];
        let malformed = || LexError::MalformedNumber {
            text: text.to_string(),
            pos,
        };

        if !valid || matches!(prev, None | Some(b'e' | b'E' | b'+' | b'-')) {
            return Err(malformed());
        }
        if !matches!(probe.look_ahead(), Token::Comma | Token::Semicolon) {
            return Err(malformed());
        }

        // Overflow to infinity has no legacy or JSON spelling.
        let real = || match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Real(value)),
            _ => Err(malformed()),
        };
        let number = if seen_dot || seen_exp {
            real()?
        } else {
            match text.parse::<i64>() {
                Ok(value) => Number::Integer(value),
                Err(_) => real()?,
            }
        };

        *self = probe;
        Ok(number)
    }
}
