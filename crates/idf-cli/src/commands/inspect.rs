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

//! Inspect command - IDF document structure visualization

use super::{load_schema, process_file};
use colored::Colorize;
use idf_core::{FieldMap, InstanceMap, Scalar};
use idf_input::ProcessorConfig;

/// Print the decoded structure of an IDF or epJSON file.
///
/// Lists each object type with its instance count and instance names. In
/// `fields` mode every field and repeating group entry is shown as well.
///
/// # Errors
///
/// Returns `Err` if the files cannot be read or the epJSON input is
/// malformed. Decode and validation problems are summarized, not fatal.
///
/// # Examples
///
/// ```no_run
/// use idf_cli::commands::inspect;
///
/// # fn main() -> Result<(), String> {
/// inspect("in.idf", "Energy+.schema.epJSON", true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, schema: &str, fields: bool) -> Result<(), String> {
    let schema = load_schema(schema)?;
    let processor = process_file(file, schema, ProcessorConfig::default())?;
    let document = processor.document();
    let diagnostics = processor.diagnostics();

    println!("{}", "IDF Document".bold().underline());
    println!();
    println!("{}  {}", "Objects:".cyan(), document.total_instances());
    println!(
        "{}  {} warning(s), {} error(s)",
        "Diagnostics:".cyan(),
        diagnostics.warning_count(),
        diagnostics.error_count()
    );

    println!();
    println!("{}", "Object types:".cyan());
    for (object_type, instances) in document.object_types() {
        println!("  {} ({})", object_type.green(), instances.len());
        print_instances(instances, fields);
    }

    Ok(())
}

fn print_instances(instances: &InstanceMap, fields: bool) {
    for (name, instance) in instances {
        println!("    {}", name.yellow());
        if !fields {
            continue;
        }
        print_fields(&instance.fields, "      ");
        for (index, entry) in instance.extensions.iter().enumerate() {
            println!("      [{}]", index);
            print_fields(entry, "        ");
        }
    }
}

fn print_fields(fields: &FieldMap, prefix: &str) {
    for (field, value) in fields {
        println!("{}{}: {}", prefix, field, format_value(value));
    }
}

fn format_value(value: &Scalar) -> String {
    match value {
        Scalar::String(s) if s.is_empty() => "(blank)".dimmed().to_string(),
        Scalar::String(s) => format!("\"{}\"", s),
        number => number.to_string().cyan().to_string(),
    }
}
