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

//! IDF CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Decode an input and check it against an epJSON schema
//! - **inspect**: Print the decoded object structure
//! - **item**: Print objects as positional alpha/numeric fields
//! - **convert**: Convert between legacy IDF text and epJSON
//!
//! Every command takes the epJSON schema with `--schema`. The input format
//! is chosen by extension: `.idf`/`.imf` for legacy text, `.epjson`/`.json`
//! for structured JSON.
//!
//! # Examples
//!
//! ```no_run
//! use idf_cli::commands::{convert, validate};
//!
//! # fn main() -> Result<(), String> {
//! validate("in.idf", "Energy+.schema.epJSON", "text", None)?;
//! convert("in.idf", "Energy+.schema.epJSON", Some("in.epJSON"), None, false, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than `IDF_MAX_FILE_SIZE` bytes (default 1 GB) are
//! rejected before reading.
//!
//! # Logging
//!
//! The binary logs to stderr through `tracing`. `RUST_LOG` overrides the
//! default `idf=info` filter and `--verbose` raises it to `debug`.

pub mod cli;
pub mod commands;
pub mod error;
