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

//! Convert command - legacy IDF text <-> epJSON

use super::{load_schema, read_file, write_output, InputFormat};
use crate::error::CliError;
use idf_core::{decode, encode, Document, Schema};
use idf_json::{from_json, to_json, ToJsonConfig};
use tracing::debug;

/// Convert between legacy IDF text and epJSON.
///
/// The input format comes from the input extension. The output format is
/// `to` when given, otherwise the output file's extension, otherwise the
/// other format.
///
/// # Arguments
///
/// * `input` - Input file (`.idf`, `.epjson`, `.json`)
/// * `schema` - epJSON schema file
/// * `output` - Output file path (defaults to stdout)
/// * `to` - Explicit output format (`idf` or `epjson`)
/// * `compact` - Write single-line epJSON
/// * `no_order` - Omit `idf_order` from epJSON output
///
/// # Errors
///
/// Returns `Err` if a file cannot be read or written, the input fails to
/// decode, or an object type is missing from the schema.
///
/// # Examples
///
/// ```no_run
/// use idf_cli::commands::convert;
///
/// # fn main() -> Result<(), String> {
/// // IDF -> epJSON on stdout
/// convert("in.idf", "Energy+.schema.epJSON", None, None, false, false)?;
///
/// // epJSON -> IDF file
/// convert("in.epJSON", "Energy+.schema.epJSON", Some("out.idf"), None, false, false)?;
/// # Ok(())
/// # }
/// ```
pub fn convert(
    input: &str,
    schema: &str,
    output: Option<&str>,
    to: Option<&str>,
    compact: bool,
    no_order: bool,
) -> Result<(), String> {
    let source = InputFormat::from_path(input)?;
    let target = match (to, output) {
        (Some(name), _) => InputFormat::from_name(name)?,
        (None, Some(path)) => InputFormat::from_path(path)?,
        (None, None) => match source {
            InputFormat::Idf => InputFormat::EpJson,
            InputFormat::EpJson => InputFormat::Idf,
        },
    };
    debug!(?source, ?target, "converting");

    let schema = load_schema(schema)?;
    let content = read_file(input)?;
    let document = read_document(&content, source, &schema)?;

    let text = match target {
        InputFormat::Idf => encode(&document, &schema).map_err(CliError::from)?,
        InputFormat::EpJson => {
            let config = ToJsonConfig {
                include_idf_order: !no_order,
                pretty: !compact,
            };
            let mut json = to_json(&document, &schema, &config).map_err(CliError::from)?;
            json.push('\n');
            json
        }
    };

    write_output(&text, output)?;
    Ok(())
}

fn read_document(content: &str, format: InputFormat, schema: &Schema) -> Result<Document, CliError> {
    match format {
        InputFormat::Idf => Ok(decode(content, schema).into_result()?),
        InputFormat::EpJson => Ok(from_json(content, schema)?),
    }
}
