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

//! IDF Command Line Interface

use clap::Parser;
use idf_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// IDF - Input Data File toolkit
///
/// Validates, inspects and converts building simulation input files.
///
/// # Examples
///
/// ```bash
/// # Validate an input file
/// idf validate in.idf --schema Energy+.schema.epJSON
///
/// # Convert legacy text to epJSON
/// idf convert in.idf --schema Energy+.schema.epJSON -o in.epJSON
///
/// # Show every zone as simulation components read it
/// idf item in.idf --schema Energy+.schema.epJSON --type Zone --all
/// ```
#[derive(Parser)]
#[command(name = "idf")]
#[command(author, version, about = "IDF - Input Data File toolkit", long_about = None)]
struct Cli {
    /// Log pipeline phases at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "idf=debug" } else { "idf=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
