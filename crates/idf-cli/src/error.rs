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

//! Structured error types for the IDF CLI.
//!
//! Command helpers return `Result<T, CliError>`; the command functions
//! themselves return `Result<(), String>` and convert at the boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for IDF CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use idf_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB).\n\
         To process larger files, set IDF_MAX_FILE_SIZE environment variable (in bytes)."
    )]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The file extension does not name a known input format.
    #[error("Unsupported file format for '{0}' (expected .idf, .epjson or .json)")]
    UnsupportedFormat(PathBuf),

    /// The schema file could not be loaded.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Legacy text could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// epJSON conversion error, in either direction.
    #[error("epJSON conversion error: {0}")]
    JsonConversion(String),

    /// JSON serialization of a report failed.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// An object query failed.
    #[error("Object error: {0}")]
    Access(String),

    /// Validation reported errors.
    #[error("{0} validation error(s) found")]
    ValidationFailed(usize),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

impl From<idf_json::JsonConversionError> for CliError {
    fn from(source: idf_json::JsonConversionError) -> Self {
        Self::JsonConversion(source.to_string())
    }
}

impl From<idf_core::IdfError> for CliError {
    fn from(source: idf_core::IdfError) -> Self {
        Self::Decode(source.to_string())
    }
}

impl From<idf_input::AccessError> for CliError {
    fn from(source: idf_input::AccessError) -> Self {
        Self::Access(source.to_string())
    }
}

impl From<CliError> for String {
    fn from(err: CliError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "missing.idf",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'missing.idf': not found");
    }

    #[test]
    fn test_file_too_large_reports_megabytes() {
        let err = CliError::file_too_large("big.idf", 3 * 1024 * 1024, 2 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("(3145728 bytes)"));
        assert!(msg.contains("(2 MB)"));
        assert!(msg.contains("IDF_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_validation_failed_display() {
        assert_eq!(
            CliError::ValidationFailed(2).to_string(),
            "2 validation error(s) found"
        );
    }

    #[test]
    fn test_from_access_error() {
        let err: CliError = idf_input::AccessError::UnknownObjectType("Bogus".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Object error: Object type \"Bogus\" not found in input"
        );
    }

    #[test]
    fn test_into_string() {
        let msg: String = CliError::invalid_input("occurrence must be at least 1").into();
        assert_eq!(msg, "Invalid input: occurrence must be at least 1");
    }
}
