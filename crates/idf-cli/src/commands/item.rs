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

//! Item command - positional view of objects, as model components read them

use super::{load_schema, print_diagnostic, process_file};
use crate::error::CliError;
use colored::Colorize;
use idf_input::{ItemField, ObjectItem, ProcessorConfig};

/// Which objects the item command prints.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Object type, any case
    pub object_type: String,
    /// 1-based occurrence (default 1)
    pub occurrence: Option<usize>,
    /// Select by instance name instead of occurrence
    pub name: Option<String>,
    /// Print every occurrence
    pub all: bool,
    /// Print the orphan report afterwards
    pub orphans: bool,
    /// List every unused object in the orphan report
    pub all_warnings: bool,
}

/// Print objects as positional alpha and numeric fields.
///
/// Blank fields are marked; defaults and the autosize sentinel appear as
/// model components would see them.
///
/// # Errors
///
/// Returns `Err` if the files cannot be read, the epJSON input is malformed,
/// or the object type, name or occurrence does not exist.
///
/// # Examples
///
/// ```no_run
/// use idf_cli::commands::{item, ItemQuery};
///
/// # fn main() -> Result<(), String> {
/// let query = ItemQuery {
///     object_type: "Zone".to_string(),
///     all: true,
///     ..ItemQuery::default()
/// };
/// item("in.idf", "Energy+.schema.epJSON", &query)?;
/// # Ok(())
/// # }
/// ```
pub fn item(file: &str, schema: &str, query: &ItemQuery) -> Result<(), String> {
    let schema = load_schema(schema)?;
    let config = ProcessorConfig::builder()
        .display_unused_objects(query.orphans)
        .display_all_warnings(query.all_warnings)
        .build();
    let mut processor = process_file(file, schema, config)?;

    let occurrences: Vec<usize> = if let Some(name) = &query.name {
        let found = processor
            .get_object_item_num(&query.object_type, name)
            .ok_or_else(|| {
                CliError::Access(format!(
                    "No \"{}\" object named \"{}\"",
                    query.object_type, name
                ))
            })?;
        vec![found]
    } else if query.all {
        (1..=processor.get_num_objects_found(&query.object_type)).collect()
    } else {
        vec![query.occurrence.unwrap_or(1)]
    };

    for occurrence in occurrences {
        let item = processor
            .get_object_item(&query.object_type, occurrence)
            .map_err(CliError::from)?;
        print_item(&item, occurrence);
    }

    if query.orphans {
        println!();
        println!("{}", "Unused objects:".cyan());
        for diag in processor.report_orphan_objects().iter() {
            print_diagnostic(file, diag);
        }
    }

    Ok(())
}

fn print_item(item: &ObjectItem, occurrence: usize) {
    println!(
        "{} #{} {}",
        item.object_type.green().bold(),
        occurrence,
        item.name.yellow()
    );
    println!(
        "  {} ({} given)",
        "Alphas:".cyan(),
        item.num_alphas
    );
    for (index, field) in item.alphas.iter().enumerate() {
        print_field("A", index, field, &field.value);
    }
    println!(
        "  {} ({} given)",
        "Numerics:".cyan(),
        item.num_numerics
    );
    for (index, field) in item.numerics.iter().enumerate() {
        print_field("N", index, field, &field.value.to_string());
    }
}

fn print_field<T>(prefix: &str, index: usize, field: &ItemField<T>, value: &str) {
    let marker = if field.blank {
        format!("  {}", "(blank)".dimmed())
    } else {
        String::new()
    };
    println!(
        "    {}{:<4} {:<40} {}{}",
        prefix,
        index + 1,
        field.name,
        value,
        marker
    );
}
