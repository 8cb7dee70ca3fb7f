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

//! CLI command implementations

mod convert;
mod inspect;
mod item;
mod validate;

pub use convert::convert;
pub use inspect::inspect;
pub use item::{item, ItemQuery};
pub use validate::validate;

use crate::error::CliError;
use colored::Colorize;
use idf_core::{Diagnostic, Schema, Severity};
use idf_input::{InputProcessor, ProcessorConfig};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via IDF_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("IDF_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than `IDF_MAX_FILE_SIZE` bytes (default 1 GB) are rejected
/// before reading.
///
/// # Examples
///
/// ```no_run
/// use idf_cli::commands::read_file;
///
/// # fn main() -> Result<(), idf_cli::error::CliError> {
/// let content = read_file("in.idf")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    debug!(path, bytes = metadata.len(), "reading file");
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Input file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Legacy positional text (`.idf`, `.imf`)
    Idf,
    /// Structured JSON (`.epjson`, `.json`)
    EpJson,
}

impl InputFormat {
    /// Detect the format from a file extension, case-insensitively.
    ///
    /// ```
    /// use idf_cli::commands::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_path("in.IDF").unwrap(), InputFormat::Idf);
    /// assert_eq!(InputFormat::from_path("in.epJSON").unwrap(), InputFormat::EpJson);
    /// assert!(InputFormat::from_path("in.csv").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, CliError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("idf") | Some("imf") => Ok(Self::Idf),
            Some("epjson") | Some("json") => Ok(Self::EpJson),
            _ => Err(CliError::UnsupportedFormat(path.into())),
        }
    }

    /// Parse a `--to` argument.
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        match name.to_ascii_lowercase().as_str() {
            "idf" => Ok(Self::Idf),
            "epjson" | "json" => Ok(Self::EpJson),
            _ => Err(CliError::invalid_input(format!(
                "unknown format '{}' (expected idf or epjson)",
                name
            ))),
        }
    }
}

/// Load an epJSON schema file.
pub fn load_schema(path: &str) -> Result<Schema, CliError> {
    let text = read_file(path)?;
    let schema = idf_json::load_schema(&text).map_err(|e| CliError::Schema(e.to_string()))?;
    debug!(path, object_types = schema.len(), "schema loaded");
    Ok(schema)
}

/// Run the input pipeline on `file`, picking the reader by extension.
pub(crate) fn process_file(
    file: &str,
    schema: Schema,
    config: ProcessorConfig,
) -> Result<InputProcessor, CliError> {
    let format = InputFormat::from_path(file)?;
    let content = read_file(file)?;
    let mut processor = InputProcessor::with_config(schema, config);
    match format {
        InputFormat::Idf => {
            processor.process_idf(&content);
        }
        InputFormat::EpJson => {
            processor.process_epjson(&content)?;
        }
    }
    Ok(processor)
}

/// Print one diagnostic with a colored severity.
pub(crate) fn print_diagnostic(file: &str, diag: &Diagnostic) {
    let severity = match diag.severity() {
        Severity::Warning => "warning".yellow(),
        Severity::Error => "error".red(),
        Severity::Severe => "severe".red().bold(),
    };
    match diag.line() {
        Some(line) => println!("  {}:{}: {}: {}", file, line, severity, diag.message()),
        None => println!("  {}: {}: {}", file, severity, diag.message()),
    }
}
