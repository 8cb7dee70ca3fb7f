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

//! Input processor configuration.

use idf_core::DecodeOptions;

/// Configuration for the input processor
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// List every unused object in the orphan report instead of the first
    /// of each object type
    pub display_all_warnings: bool,
    /// List unused objects by name; when off only a count is reported
    pub display_unused_objects: bool,
    /// Options passed to the decoder
    pub decode: DecodeOptions,
}

impl ProcessorConfig {
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }
}

/// Builder for [`ProcessorConfig`].
///
/// ```
/// use idf_input::ProcessorConfig;
///
/// let config = ProcessorConfig::builder()
///     .display_unused_objects(true)
///     .max_objects(10_000)
///     .build();
/// assert!(config.display_unused_objects);
/// assert!(!config.display_all_warnings);
/// assert_eq!(config.decode.max_objects, Some(10_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    pub fn display_all_warnings(mut self, enabled: bool) -> Self {
        self.config.display_all_warnings = enabled;
        self
    }

    pub fn display_unused_objects(mut self, enabled: bool) -> Self {
        self.config.display_unused_objects = enabled;
        self
    }

    /// Replace the decoder options.
    pub fn decode_options(mut self, options: DecodeOptions) -> Self {
        self.config.decode = options;
        self
    }

    /// Cap the number of instances the decoder stores.
    pub fn max_objects(mut self, limit: usize) -> Self {
        self.config.decode.max_objects = Some(limit);
        self
    }

    pub fn build(self) -> ProcessorConfig {
        self.config
    }
}
