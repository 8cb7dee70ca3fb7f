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

//! IDF Input Processing
//!
//! Runs the input pipeline for one simulation: decode the input (legacy
//! text or epJSON), validate it against the schema, then answer on-demand
//! queries from model components that read objects as positional alpha and
//! numeric arrays. Every fetched object is struck from the unused-object
//! registry; whatever remains at the end of the run is reported as orphaned.
//!
//! ## Quick Start
//!
//! ```rust
//! use idf_input::{InputProcessor, ProcessorConfig};
//! use idf_test::fixtures::{standard_schema, OFFICE_IDF};
//!
//! let config = ProcessorConfig::builder().display_unused_objects(true).build();
//! let mut processor = InputProcessor::with_config(standard_schema(), config);
//!
//! let diagnostics = processor.process_idf(OFFICE_IDF);
//! if diagnostics.has_errors() {
//!     for diag in diagnostics.errors() {
//!         eprintln!("{}", diag);
//!     }
//! }
//!
//! for occurrence in 1..=processor.get_num_objects_found("Zone") {
//!     let zone = processor.get_object_item("Zone", occurrence).unwrap();
//!     println!("{} x_origin={}", zone.alphas[0].value, zone.numerics[0].value);
//! }
//!
//! for diag in processor.report_orphan_objects().iter() {
//!     println!("{}", diag);
//! }
//! ```
//!
//! ## Blank Fields and Autosize
//!
//! A blank or omitted field takes its schema default and reports
//! `blank = true`. A numeric field holding a keyword such as `Autosize`, or
//! blank with a keyword default, reads as [`AUTOSIZE_SENTINEL`].

mod config;
mod error;
mod item;
mod orphans;
mod processor;
mod utils;

pub use config::{ProcessorConfig, ProcessorConfigBuilder};
pub use error::AccessError;
pub use item::{ItemField, MaxArgs, ObjectItem, AUTOSIZE_SENTINEL};
pub use orphans::{report_orphan_objects, ORPHAN_SEVERE_PREFIX};
pub use processor::InputProcessor;
pub use utils::{find_item, find_item_in_list, process_number, verify_name};
