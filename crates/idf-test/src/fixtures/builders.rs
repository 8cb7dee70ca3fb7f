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

//! Builder pattern for creating customizable document fixtures.

use idf_core::{Document, Instance, Scalar};

/// Builder for [`Document`] fixtures.
///
/// # Examples
///
/// ```
/// use idf_test::fixtures::builders::{DocumentBuilder, InstanceBuilder};
///
/// let doc = DocumentBuilder::new()
///     .object(
///         "Zone",
///         "Core",
///         InstanceBuilder::new().real("x_origin", 0.0).int("multiplier", 1),
///     )
///     .build();
///
/// assert_eq!(doc.count("Zone"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named instance.
    pub fn object(
        mut self,
        object_type: impl Into<String>,
        name: impl Into<String>,
        instance: InstanceBuilder,
    ) -> Self {
        self.document
            .insert(object_type.into(), name.into(), instance.build());
        self
    }

    /// Registers an object type with no instances.
    pub fn empty_type(mut self, object_type: impl Into<String>) -> Self {
        self.document.ensure_type(object_type);
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}

/// Builder for [`Instance`] fixtures.
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    instance: Instance,
}

impl InstanceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(self, field: &str, value: &str) -> Self {
        self.value(field, Scalar::from(value))
    }

    pub fn int(self, field: &str, value: i64) -> Self {
        self.value(field, Scalar::Integer(value))
    }

    pub fn real(self, field: &str, value: f64) -> Self {
        self.value(field, Scalar::Real(value))
    }

    /// A blank field, as decoded from consecutive delimiters.
    pub fn blank(self, field: &str) -> Self {
        self.value(field, Scalar::String(String::new()))
    }

    pub fn value(mut self, field: &str, value: Scalar) -> Self {
        self.instance.fields.insert(field.to_string(), value);
        self
    }

    /// Appends one repeating group entry.
    pub fn group<I>(mut self, entry: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Scalar)>,
    {
        self.instance = self.instance.with_extension(entry);
        self
    }

    pub fn build(self) -> Instance {
        self.instance
    }
}
