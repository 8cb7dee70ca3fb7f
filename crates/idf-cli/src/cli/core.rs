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

//! Core IDF commands for validation, inspection and object queries.

use crate::commands::{self, ItemQuery};
use clap::Subcommand;

/// Core IDF commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate an IDF or epJSON file
    ///
    /// Decodes the input and checks it against the schema: enums, numeric
    /// ranges, required fields and object counts. Exits with failure if any
    /// error is found.
    Validate {
        /// Input file path (.idf, .epjson, .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// epJSON schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Stop decoding after this many objects
        #[arg(long, value_name = "N")]
        max_objects: Option<usize>,
    },

    /// Print decoded structure
    ///
    /// Lists each object type with its instances; --fields shows every field
    /// and repeating group entry.
    Inspect {
        /// Input file path (.idf, .epjson, .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// epJSON schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: String,

        /// Show field values
        #[arg(short, long)]
        fields: bool,
    },

    /// Print objects as positional alpha and numeric fields
    ///
    /// Shows an object the way simulation components read it: defaults
    /// substituted, blanks flagged, autosize as -99999.
    Item {
        /// Input file path (.idf, .epjson, .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// epJSON schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: String,

        /// Object type (any case)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        object_type: String,

        /// 1-based occurrence
        #[arg(short = 'n', long, value_name = "N", conflicts_with_all = ["name", "all"])]
        occurrence: Option<usize>,

        /// Select the object by name
        #[arg(long, value_name = "NAME", conflicts_with = "all")]
        name: Option<String>,

        /// Print every occurrence
        #[arg(short, long)]
        all: bool,

        /// Report objects left unused afterwards
        #[arg(long)]
        orphans: bool,

        /// List every unused object, not just the first per type
        #[arg(long, requires = "orphans")]
        all_warnings: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            CoreCommands::Validate {
                file,
                schema,
                format,
                max_objects,
            } => commands::validate(&file, &schema, &format, max_objects),
            CoreCommands::Inspect {
                file,
                schema,
                fields,
            } => commands::inspect(&file, &schema, fields),
            CoreCommands::Item {
                file,
                schema,
                object_type,
                occurrence,
                name,
                all,
                orphans,
                all_warnings,
            } => {
                let query = ItemQuery {
                    object_type,
                    occurrence,
                    name,
                    all,
                    orphans,
                    all_warnings,
                };
                commands::item(&file, &schema, &query)
            }
        }
    }
}
