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

//! Validate command - decode an input and check it against the schema

use super::{load_schema, print_diagnostic, process_file};
use crate::error::CliError;
use colored::Colorize;
use idf_core::{Diagnostic, Diagnostics};
use idf_input::ProcessorConfig;
use serde::Serialize;

#[derive(Serialize)]
struct ValidationReport<'a> {
    file: &'a str,
    valid: bool,
    objects: usize,
    warnings: Vec<DiagnosticRecord<'a>>,
    errors: Vec<DiagnosticRecord<'a>>,
}

#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    severity: String,
    kind: String,
    message: &'a str,
    line: Option<usize>,
    object_type: Option<&'a str>,
    field: Option<&'a str>,
}

impl<'a> From<&'a Diagnostic> for DiagnosticRecord<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        Self {
            severity: diag.severity().to_string(),
            kind: format!("{:?}", diag.kind()),
            message: diag.message(),
            line: diag.line(),
            object_type: diag.object_type(),
            field: diag.field(),
        }
    }
}

/// Validate an IDF or epJSON file against an epJSON schema.
///
/// Decodes the input (format chosen by extension), validates it and prints
/// every warning and error.
///
/// # Arguments
///
/// * `file` - Input file (`.idf`, `.epjson`, `.json`)
/// * `schema` - epJSON schema file
/// * `format` - Output format: "text" (default, colored) or "json"
/// * `max_objects` - Optional cap on decoded instances
///
/// # Errors
///
/// Returns `Err` if the files cannot be read, the epJSON input is malformed,
/// or validation reports any error.
///
/// # Examples
///
/// ```no_run
/// use idf_cli::commands::validate;
///
/// # fn main() -> Result<(), String> {
/// validate("in.idf", "Energy+.schema.epJSON", "text", None)?;
/// # Ok(())
/// # }
/// ```
pub fn validate(
    file: &str,
    schema: &str,
    format: &str,
    max_objects: Option<usize>,
) -> Result<(), String> {
    let schema = load_schema(schema)?;
    let mut config = ProcessorConfig::default();
    config.decode.max_objects = max_objects;
    let processor = process_file(file, schema, config)?;
    let diagnostics = processor.diagnostics();
    let objects = processor.document().total_instances();

    match format {
        "json" => print_json(file, objects, diagnostics)?,
        _ => print_text(file, objects, diagnostics),
    }

    if diagnostics.has_errors() {
        Err(CliError::ValidationFailed(diagnostics.error_count()).into())
    } else {
        Ok(())
    }
}

fn print_json(file: &str, objects: usize, diagnostics: &Diagnostics) -> Result<(), CliError> {
    let report = ValidationReport {
        file,
        valid: !diagnostics.has_errors(),
        objects,
        warnings: diagnostics.warnings().iter().map(Into::into).collect(),
        errors: diagnostics.errors().iter().map(Into::into).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_text(file: &str, objects: usize, diagnostics: &Diagnostics) {
    if diagnostics.has_errors() {
        println!("{} {}", "✗".red().bold(), file);
    } else {
        println!("{} {}", "✓".green().bold(), file);
    }
    println!("  Objects: {}", objects);
    println!("  Warnings: {}", diagnostics.warning_count());
    println!("  Errors: {}", diagnostics.error_count());
    for diag in diagnostics.iter() {
        print_diagnostic(file, diag);
    }
}
