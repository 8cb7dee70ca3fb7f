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

//! Structured document produced by decoding.
//!
//! A [`Document`] maps object type -> instance name -> [`Instance`]. Each
//! instance holds its scalar fields by name and, for object types with a
//! repeating group, the ordered list of group entries.

use crate::lex::{Number, SourcePos};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Real(f64),
}

impl Scalar {
    /// Returns the string value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Real(r) => Some(*r),
            Self::String(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, Self::String(_))
    }

    /// `true` for an empty string, the representation of a blank field.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }
}

/// Format a real so that it re-scans as a real.
///
/// Uses the shortest representation that round-trips and always keeps a
/// decimal point or exponent (`1.0`, `0.25`, `1e-7`).
pub fn format_real(value: f64) -> String {
    format!("{:?}", value)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Real(r) => f.write_str(&format_real(*r)),
        }
    }
}

impl From<Number> for Scalar {
    fn from(number: Number) -> Self {
        match number {
            Number::Integer(i) => Self::Integer(i),
            Number::Real(r) => Self::Real(r),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Scalar {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}

/// Field name -> value.
pub type FieldMap = BTreeMap<String, Scalar>;

/// One object instance.
///
/// Equality compares content only; the source position is bookkeeping for
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Instance {
    /// Scalar fields keyed by schema field name.
    pub fields: FieldMap,
    /// Repeating group entries in input order.
    pub extensions: Vec<FieldMap>,
    /// Position of the terminating `;` (unknown for epJSON input).
    pub pos: SourcePos,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builder-style extension entry.
    pub fn with_extension<I, K, V>(mut self, entry: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        self.extensions
            .push(entry.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    pub fn with_pos(mut self, pos: SourcePos) -> Self {
        self.pos = pos;
        self
    }

    pub fn get(&self, field: &str) -> Option<&Scalar> {
        self.fields.get(field)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields && self.extensions == other.extensions
    }
}

/// Instances of one object type, keyed by instance name in input order.
pub type InstanceMap = IndexMap<String, Instance>;

/// The decoded input: object type -> instance name -> instance.
///
/// Object types and instances keep input order; equality ignores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    objects: IndexMap<String, InstanceMap>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an instance, returning the one it replaced.
    ///
    /// A replaced instance keeps its original position in the order.
    pub fn insert(
        &mut self,
        object_type: impl Into<String>,
        name: impl Into<String>,
        instance: Instance,
    ) -> Option<Instance> {
        self.objects
            .entry(object_type.into())
            .or_default()
            .insert(name.into(), instance)
    }

    /// Register an object type with no instances yet.
    pub fn ensure_type(&mut self, object_type: impl Into<String>) -> &mut InstanceMap {
        self.objects.entry(object_type.into()).or_default()
    }

    pub fn instances(&self, object_type: &str) -> Option<&InstanceMap> {
        self.objects.get(object_type)
    }

    pub fn get(&self, object_type: &str, name: &str) -> Option<&Instance> {
        self.objects.get(object_type)?.get(name)
    }

    pub fn contains(&self, object_type: &str, name: &str) -> bool {
        self.get(object_type, name).is_some()
    }

    /// Number of instances of `object_type` (exact spelling).
    pub fn count(&self, object_type: &str) -> usize {
        self.objects.get(object_type).map_or(0, IndexMap::len)
    }

    /// Iterate object types in input order.
    pub fn object_types(&self) -> impl Iterator<Item = (&String, &InstanceMap)> {
        self.objects.iter()
    }

    /// Total number of instances across all types.
    pub fn total_instances(&self) -> usize {
        self.objects.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
