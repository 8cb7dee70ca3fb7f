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

//! Format conversion commands.

use crate::commands;
use clap::Subcommand;

/// Conversion between legacy IDF text and epJSON.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert between IDF and epJSON
    ///
    /// The output format follows --to, else the output file extension, else
    /// the opposite of the input format.
    Convert {
        /// Input file path (.idf, .epjson, .json)
        #[arg(value_name = "FILE")]
        file: String,

        /// epJSON schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (idf, epjson)
        #[arg(long, value_name = "FORMAT")]
        to: Option<String>,

        /// Single-line epJSON output
        #[arg(long)]
        compact: bool,

        /// Omit idf_order from epJSON output
        #[arg(long)]
        no_order: bool,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the conversion fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            ConversionCommands::Convert {
                file,
                schema,
                output,
                to,
                compact,
                no_order,
            } => commands::convert(
                &file,
                &schema,
                output.as_deref(),
                to.as_deref(),
                compact,
                no_order,
            ),
        }
    }
}
