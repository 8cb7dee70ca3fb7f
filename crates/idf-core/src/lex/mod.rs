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

//! Lexical analysis for legacy IDF text.
//!
//! - [`Tokenizer`]: cursor that classifies tokens and scans values
//! - [`SourcePos`]: 1-based line/column positions for diagnostics
//! - [`LexError`]: scanning failures

mod error;
mod span;
mod tokenizer;

pub use error::LexError;
pub use span::SourcePos;
pub use tokenizer::{classify, Number, Token, Tokenizer};
