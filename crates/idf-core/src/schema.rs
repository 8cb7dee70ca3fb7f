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

//! Typed schema model.
//!
//! The schema describes every object type: its legacy positional field
//! order, the repeating (extensible) group, and per-field constraints. It
//! is built once (see `idf-json` for loading from an epJSON schema
//! document, or [`ObjectTypeSchema::builder`] for code) and read-only
//! afterwards.
//!
//! Field schemas are a closed set of variants:
//!
//! - [`FieldSchema::Scalar`]: string/number/integer with optional bounds,
//!   default and `anyOf` union branches
//! - [`FieldSchema::Enum`]: a closed value set
//! - [`FieldSchema::Extensible`]: the array holding repeating group entries

use crate::document::Scalar;
use crate::error::{IdfError, IdfResult};
use crate::resolve::ObjectTypeResolver;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the synthetic field that carries the instance name.
pub const NAME_FIELD: &str = "name";

/// Declared JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Integer,
    Array,
    Object,
}

impl FieldType {
    /// Parse a JSON schema `type` keyword.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One numeric bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub value: f64,
    pub exclusive: bool,
}

/// Optional minimum and maximum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericBounds {
    pub minimum: Option<Bound>,
    pub maximum: Option<Bound>,
}

impl NumericBounds {
    pub fn is_empty(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }
}

/// A member of an enum value set.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    Str(String),
    Int(i64),
}

impl EnumValue {
    /// Case-insensitive match against a string value.
    pub fn matches_str(&self, text: &str) -> bool {
        matches!(self, Self::Str(s) if s.eq_ignore_ascii_case(text))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

/// Find the canonical spelling of `text` in an enum value set.
fn canonical_in<'a>(values: &'a [EnumValue], text: &str) -> Option<&'a str> {
    values
        .iter()
        .find(|v| v.matches_str(text))
        .and_then(EnumValue::as_str)
}

/// One branch of an `anyOf` union.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnionBranch {
    pub field_type: Option<FieldType>,
    pub bounds: NumericBounds,
    pub values: Vec<EnumValue>,
}

/// A string, number or integer field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalarField {
    pub field_type: Option<FieldType>,
    pub bounds: NumericBounds,
    /// `anyOf` union; the first branch carries the numeric constraints.
    pub any_of: Vec<UnionBranch>,
    pub default: Option<Scalar>,
    pub retaincase: bool,
}

/// A field restricted to a closed value set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumField {
    pub field_type: Option<FieldType>,
    pub values: Vec<EnumValue>,
    pub default: Option<Scalar>,
    pub retaincase: bool,
}

/// Item schema of the repeating group array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtensibleGroup {
    pub fields: BTreeMap<String, FieldSchema>,
    pub required: Vec<String>,
}

/// Schema of one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSchema {
    Scalar(ScalarField),
    Enum(EnumField),
    Extensible(ExtensibleGroup),
}

impl FieldSchema {
    /// A plain string field.
    pub fn string() -> Self {
        Self::Scalar(ScalarField {
            field_type: Some(FieldType::String),
            ..ScalarField::default()
        })
    }

    /// A real-valued field.
    pub fn number() -> Self {
        Self::Scalar(ScalarField {
            field_type: Some(FieldType::Number),
            ..ScalarField::default()
        })
    }

    pub fn integer() -> Self {
        Self::Scalar(ScalarField {
            field_type: Some(FieldType::Integer),
            ..ScalarField::default()
        })
    }

    /// A numeric field that also accepts the given keywords (e.g.
    /// `Autosize`), expressed as a number/string union with no top-level
    /// type.
    pub fn number_or<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scalar(ScalarField {
            any_of: vec![
                UnionBranch {
                    field_type: Some(FieldType::Number),
                    ..UnionBranch::default()
                },
                UnionBranch {
                    field_type: Some(FieldType::String),
                    values: keywords
                        .into_iter()
                        .map(|k| EnumValue::Str(k.into()))
                        .collect(),
                    ..UnionBranch::default()
                },
            ],
            ..ScalarField::default()
        })
    }

    /// A string enum.
    pub fn choice<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(EnumField {
            field_type: Some(FieldType::String),
            values: values.into_iter().map(|v| EnumValue::Str(v.into())).collect(),
            ..EnumField::default()
        })
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<Scalar>) -> Self {
        match &mut self {
            Self::Scalar(f) => f.default = Some(value.into()),
            Self::Enum(f) => f.default = Some(value.into()),
            Self::Extensible(_) => {}
        }
        self
    }

    /// Set the minimum; applied to the first union branch when present.
    pub fn with_minimum(mut self, value: f64, exclusive: bool) -> Self {
        if let Some(bounds) = self.numeric_bounds_mut() {
            bounds.minimum = Some(Bound { value, exclusive });
        }
        self
    }

    /// Set the maximum; applied to the first union branch when present.
    pub fn with_maximum(mut self, value: f64, exclusive: bool) -> Self {
        if let Some(bounds) = self.numeric_bounds_mut() {
            bounds.maximum = Some(Bound { value, exclusive });
        }
        self
    }

    pub fn retaining_case(mut self) -> Self {
        match &mut self {
            Self::Scalar(f) => f.retaincase = true,
            Self::Enum(f) => f.retaincase = true,
            Self::Extensible(_) => {}
        }
        self
    }

    fn numeric_bounds_mut(&mut self) -> Option<&mut NumericBounds> {
        match self {
            Self::Scalar(f) => match f.any_of.first_mut() {
                Some(branch) => Some(&mut branch.bounds),
                None => Some(&mut f.bounds),
            },
            _ => None,
        }
    }

    /// The top-level declared type.
    pub fn declared_type(&self) -> Option<FieldType> {
        match self {
            Self::Scalar(f) => f.field_type,
            Self::Enum(f) => f.field_type,
            Self::Extensible(_) => Some(FieldType::Array),
        }
    }

    pub fn default_value(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(f) => f.default.as_ref(),
            Self::Enum(f) => f.default.as_ref(),
            Self::Extensible(_) => None,
        }
    }

    pub fn retaincase(&self) -> bool {
        match self {
            Self::Scalar(f) => f.retaincase,
            Self::Enum(f) => f.retaincase,
            Self::Extensible(_) => false,
        }
    }

    /// `true` if values are numeric, either by declared type or through a
    /// numeric union branch.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Scalar(f) => {
                f.field_type.map_or(false, |t| t.is_numeric())
                    || f
                        .any_of
                        .iter()
                        .any(|b| b.field_type.map_or(false, |t| t.is_numeric()))
            }
            Self::Enum(f) => f.field_type.map_or(false, |t| t.is_numeric()),
            Self::Extensible(_) => false,
        }
    }

    /// Canonical spelling of a keyword value.
    ///
    /// Enum fields match their value set; union fields match the keyword
    /// list of their string branch (`Autosize`, `Autocalculate`). Matching is
    /// case-insensitive.
    pub fn canonical_spelling(&self, text: &str) -> Option<&str> {
        match self {
            Self::Enum(f) => canonical_in(&f.values, text),
            Self::Scalar(f) => f
                .any_of
                .iter()
                .filter(|b| b.field_type == Some(FieldType::String))
                .find_map(|b| canonical_in(&b.values, text)),
            Self::Extensible(_) => None,
        }
    }
}

/// Fields split into alpha (string) and numeric positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldPartition {
    pub fields: Vec<String>,
    pub extensions: Vec<String>,
}

/// Legacy positional layout of an object type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyLayout {
    /// Positional fields in input order, `name` included.
    pub fields: Vec<String>,
    /// Repeating group fields in input order.
    pub extensibles: Vec<String>,
    /// Instance key holding the repeating group array.
    pub extension: Option<String>,
    pub alphas: FieldPartition,
    pub numerics: FieldPartition,
}

/// Schema for one object type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectTypeSchema {
    /// Canonical object type name.
    pub name: String,
    pub legacy: LegacyLayout,
    /// Instance properties, including the repeating group array.
    pub fields: BTreeMap<String, FieldSchema>,
    /// Properties every instance must carry.
    pub required: Vec<String>,
    /// `Some` when instances are named; the flag is `retaincase`.
    pub name_retaincase: Option<bool>,
    /// Number of leading positional fields padded with blanks.
    pub min_fields: usize,
    pub min_properties: Option<usize>,
    pub max_properties: Option<usize>,
}

impl ObjectTypeSchema {
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectTypeBuilder::new(name)
    }

    /// Schema of an instance property.
    pub fn field(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.get(key)
    }

    pub fn has_name_field(&self) -> bool {
        self.name_retaincase.is_some() || self.legacy.fields.iter().any(|f| f == NAME_FIELD)
    }

    pub fn extension_key(&self) -> Option<&str> {
        self.legacy.extension.as_deref()
    }

    /// Item schema of the repeating group.
    pub fn extensible_group(&self) -> Option<&ExtensibleGroup> {
        match self.fields.get(self.extension_key()?) {
            Some(FieldSchema::Extensible(group)) => Some(group),
            _ => None,
        }
    }

    /// Schema of a field inside the repeating group.
    pub fn extensible_field(&self, key: &str) -> Option<&FieldSchema> {
        self.extensible_group()?.fields.get(key)
    }

    /// Schema for a field named in either the positional or group layout.
    pub fn any_field(&self, key: &str) -> Option<&FieldSchema> {
        self.field(key).or_else(|| self.extensible_field(key))
    }
}

/// Split `fields` into alpha and numeric positions by declared type.
///
/// `name` is always an alpha; a field with no schema is an alpha.
pub fn partition_fields(
    fields: &[String],
    lookup: impl Fn(&str) -> Option<bool>,
) -> (Vec<String>, Vec<String>) {
    let mut alphas = Vec::new();
    let mut numerics = Vec::new();
    for field in fields {
        if field != NAME_FIELD && lookup(field).unwrap_or(false) {
            numerics.push(field.clone());
        } else {
            alphas.push(field.clone());
        }
    }
    (alphas, numerics)
}

/// Fluent construction of an [`ObjectTypeSchema`].
///
/// # Examples
///
/// ```
/// use idf_core::{FieldSchema, ObjectTypeSchema};
///
/// let foo = ObjectTypeSchema::builder("Foo")
///     .name_field(false)
///     .field("a", FieldSchema::number())
///     .field("b", FieldSchema::number())
///     .extensible("extensions", [("x", FieldSchema::number()), ("y", FieldSchema::number())])
///     .build()
///     .unwrap();
///
/// assert_eq!(foo.legacy.fields, ["name", "a", "b"]);
/// assert_eq!(foo.legacy.extensibles, ["x", "y"]);
/// assert_eq!(foo.legacy.numerics.fields, ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct ObjectTypeBuilder {
    schema: ObjectTypeSchema,
    group: Option<ExtensibleGroup>,
}

impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: ObjectTypeSchema {
                name: name.into(),
                ..ObjectTypeSchema::default()
            },
            group: None,
        }
    }

    /// Make instances named; the name is the first positional field.
    pub fn name_field(mut self, retaincase: bool) -> Self {
        self.schema.name_retaincase = Some(retaincase);
        self.schema.legacy.fields.insert(0, NAME_FIELD.to_string());
        self
    }

    /// Append a positional field.
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        let name = name.into();
        self.schema.legacy.fields.push(name.clone());
        self.schema.fields.insert(name, schema);
        self
    }

    /// Declare the repeating group stored under `key`.
    pub fn extensible<I, S>(mut self, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldSchema)>,
        S: Into<String>,
    {
        let mut group = ExtensibleGroup::default();
        for (name, schema) in fields {
            let name = name.into();
            self.schema.legacy.extensibles.push(name.clone());
            group.fields.insert(name, schema);
        }
        self.schema.legacy.extension = Some(key.into());
        self.group = Some(group);
        self
    }

    /// Fields each repeating group entry must carry.
    pub fn extensible_required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(group) = self.group.as_mut() {
            group.required = fields.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema.required = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_fields(mut self, count: usize) -> Self {
        self.schema.min_fields = count;
        self
    }

    pub fn min_properties(mut self, count: usize) -> Self {
        self.schema.min_properties = Some(count);
        self
    }

    pub fn max_properties(mut self, count: usize) -> Self {
        self.schema.max_properties = Some(count);
        self
    }

    /// Finish the schema, deriving the alpha/numeric partition.
    ///
    /// # Errors
    ///
    /// Returns a schema error if a field is declared twice or the repeating
    /// group key collides with a positional field.
    pub fn build(self) -> IdfResult<ObjectTypeSchema> {
        let mut schema = self.schema;

        let mut seen = std::collections::HashSet::new();
        for field in &schema.legacy.fields {
            if !seen.insert(field.as_str()) {
                return Err(IdfError::schema(format!(
                    "field \"{}\" declared twice in object type \"{}\"",
                    field, schema.name
                )));
            }
        }

        if let (Some(key), Some(group)) = (schema.legacy.extension.clone(), self.group) {
            if schema.fields.contains_key(&key) {
                return Err(IdfError::schema(format!(
                    "extension key \"{}\" collides with a field of \"{}\"",
                    key, schema.name
                )));
            }
            schema.fields.insert(key, FieldSchema::Extensible(group));
        }

        let (alphas, numerics) = partition_fields(&schema.legacy.fields, |f| {
            schema.field(f).map(FieldSchema::is_numeric)
        });
        let (ext_alphas, ext_numerics) = partition_fields(&schema.legacy.extensibles, |f| {
            schema.extensible_field(f).map(FieldSchema::is_numeric)
        });
        schema.legacy.alphas = FieldPartition {
            fields: alphas,
            extensions: ext_alphas,
        };
        schema.legacy.numerics = FieldPartition {
            fields: numerics,
            extensions: ext_numerics,
        };
        Ok(schema)
    }
}

/// The complete schema: every object type plus root-level requirements.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    object_types: BTreeMap<String, ObjectTypeSchema>,
    required: Vec<String>,
    resolver: ObjectTypeResolver,
}

impl Schema {
    /// Build a schema from object types and the object types every input
    /// must contain.
    pub fn new<I>(object_types: I, required: Vec<String>) -> Self
    where
        I: IntoIterator<Item = ObjectTypeSchema>,
    {
        let object_types: BTreeMap<String, ObjectTypeSchema> = object_types
            .into_iter()
            .map(|ot| (ot.name.clone(), ot))
            .collect();
        let resolver = ObjectTypeResolver::new(object_types.keys().cloned());
        Self {
            object_types,
            required,
            resolver,
        }
    }

    /// Exact-spelling lookup.
    pub fn object_type(&self, name: &str) -> Option<&ObjectTypeSchema> {
        self.object_types.get(name)
    }

    /// Canonical spelling of an object type, in any case.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some((canonical, _)) = self.object_types.get_key_value(name) {
            return Some(canonical);
        }
        self.resolver.resolve(name)
    }

    /// Case-insensitive lookup.
    pub fn resolve_object_type(&self, name: &str) -> Option<&ObjectTypeSchema> {
        self.resolve(name).and_then(|canonical| self.object_type(canonical))
    }

    pub fn object_types(&self) -> impl Iterator<Item = &ObjectTypeSchema> {
        self.object_types.values()
    }

    /// Object types every input must contain.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn len(&self) -> usize {
        self.object_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.object_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> ObjectTypeSchema {
        ObjectTypeSchema::builder("Foo")
            .name_field(false)
            .field("a", FieldSchema::number())
            .field("kind", FieldSchema::choice(["Heating", "Cooling"]))
            .field("size", FieldSchema::number_or(["", "Autosize"]).with_default("Autosize"))
            .extensible(
                "extensions",
                [("x", FieldSchema::number()), ("label", FieldSchema::string())],
            )
            .build()
            .unwrap()
    }

    // ==================== FieldSchema tests ====================

    #[test]
    fn test_field_type_parse_round_trip() {
        for t in [FieldType::String, FieldType::Number, FieldType::Integer, FieldType::Array] {
            assert_eq!(FieldType::parse(t.as_str()), Some(t));
        }
        assert_eq!(FieldType::parse("boolean"), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(FieldSchema::number().is_numeric());
        assert!(FieldSchema::integer().is_numeric());
        assert!(FieldSchema::number_or(["Autosize"]).is_numeric());
        assert!(!FieldSchema::string().is_numeric());
        assert!(!FieldSchema::choice(["A"]).is_numeric());
    }

    #[test]
    fn test_canonical_spelling_enum() {
        let field = FieldSchema::choice(["Heating", "Cooling"]);
        assert_eq!(field.canonical_spelling("COOLING"), Some("Cooling"));
        assert_eq!(field.canonical_spelling("cool"), None);
    }

    #[test]
    fn test_canonical_spelling_union() {
        let field = FieldSchema::number_or(["", "Autocalculate"]);
        assert_eq!(field.canonical_spelling("autocalculate"), Some("Autocalculate"));
        assert_eq!(field.canonical_spelling(""), Some(""));
        assert_eq!(field.canonical_spelling("Autosize"), None);
    }

    #[test]
    fn test_bounds_go_to_first_union_branch() {
        let field = FieldSchema::number_or(["Autosize"]).with_minimum(0.0, true);
        match field {
            FieldSchema::Scalar(f) => {
                assert!(f.bounds.is_empty());
                assert_eq!(
                    f.any_of[0].bounds.minimum,
                    Some(Bound {
                        value: 0.0,
                        exclusive: true
                    })
                );
            }
            _ => panic!("expected scalar"),
        }
    }

    // ==================== ObjectTypeSchema tests ====================

    #[test]
    fn test_builder_layout() {
        let foo = foo();
        assert_eq!(foo.legacy.fields, ["name", "a", "kind", "size"]);
        assert_eq!(foo.extension_key(), Some("extensions"));
        assert!(foo.extensible_group().is_some());
        assert!(foo.has_name_field());
    }

    #[test]
    fn test_builder_partition() {
        let foo = foo();
        assert_eq!(foo.legacy.alphas.fields, ["name", "kind"]);
        assert_eq!(foo.legacy.numerics.fields, ["a", "size"]);
        assert_eq!(foo.legacy.alphas.extensions, ["label"]);
        assert_eq!(foo.legacy.numerics.extensions, ["x"]);
    }

    #[test]
    fn test_builder_rejects_duplicate_field() {
        let result = ObjectTypeSchema::builder("Dup")
            .field("a", FieldSchema::number())
            .field("a", FieldSchema::string())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_any_field() {
        let foo = foo();
        assert!(foo.any_field("a").is_some());
        assert!(foo.any_field("x").is_some());
        assert!(foo.any_field("zzz").is_none());
    }

    // ==================== Schema tests ====================

    #[test]
    fn test_schema_resolution() {
        let schema = Schema::new([foo()], vec!["Foo".to_string()]);
        assert_eq!(schema.resolve("FOO"), Some("Foo"));
        assert_eq!(schema.resolve("Foo"), Some("Foo"));
        assert!(schema.resolve_object_type("foo").is_some());
        assert!(schema.object_type("foo").is_none());
        assert_eq!(schema.required(), ["Foo"]);
    }
}
