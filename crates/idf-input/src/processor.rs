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

//! The input processing pipeline context.

use crate::config::ProcessorConfig;
use crate::error::AccessError;
use crate::item::{project, MaxArgs, ObjectItem};
use crate::orphans;
use idf_core::{
    decode_with_options, make_upper_case, validate, Diagnostics, Document, ObjectTypeSchema,
    Schema, NAME_FIELD,
};
use idf_json::JsonConversionError;
use indexmap::IndexMap;
use tracing::{debug, info};

/// Decodes and validates one input, then serves positional object queries.
///
/// All run state (document, diagnostics, occurrence cache and unused-object
/// registry) lives here; [`InputProcessor::reset`] clears it, and each
/// `process_*` call starts from a reset.
///
/// # Examples
///
/// ```
/// use idf_input::{InputProcessor, AUTOSIZE_SENTINEL};
/// use idf_test::fixtures::{standard_schema, OFFICE_IDF};
///
/// let mut processor = InputProcessor::new(standard_schema());
/// assert!(!processor.process_idf(OFFICE_IDF).has_errors());
///
/// assert_eq!(processor.get_num_objects_found("ZONE"), 2);
/// let coil = processor.get_object_item("Coil:Cooling:Water", 1).unwrap();
/// assert_eq!(coil.numerics[0].value, AUTOSIZE_SENTINEL);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    schema: Schema,
    config: ProcessorConfig,
    document: Document,
    diagnostics: Diagnostics,
    /// Object type -> instance names in occurrence order
    occurrences: IndexMap<String, Vec<String>>,
    /// Every `(object type, name)` pair in input order; `true` once fetched
    registry: IndexMap<(String, String), bool>,
    /// Number of registry entries not yet fetched
    unused: usize,
}

impl InputProcessor {
    /// Create a processor with the default configuration.
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, ProcessorConfig::default())
    }

    pub fn with_config(schema: Schema, config: ProcessorConfig) -> Self {
        Self {
            schema,
            config,
            document: Document::new(),
            diagnostics: Diagnostics::new(),
            occurrences: IndexMap::new(),
            registry: IndexMap::new(),
            unused: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Decode and validation diagnostics of the current run.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Clear all run state.
    pub fn reset(&mut self) {
        debug!("resetting input processor");
        self.document.clear();
        self.diagnostics.clear();
        self.occurrences.clear();
        self.registry.clear();
        self.unused = 0;
    }

    /// Run the pipeline on legacy text.
    ///
    /// Decoding and validation diagnostics accumulate in
    /// [`diagnostics`](Self::diagnostics); the caller decides whether errors
    /// end the run.
    pub fn process_idf(&mut self, text: &str) -> &Diagnostics {
        self.reset();
        debug!(bytes = text.len(), "decoding IDF input");
        let decoded = decode_with_options(text, &self.schema, &self.config.decode);
        self.diagnostics.extend(decoded.diagnostics);
        self.finish(decoded.document)
    }

    /// Run the pipeline on an epJSON document.
    ///
    /// Fails only when the text is not a usable epJSON document; schema
    /// violations are reported as diagnostics.
    pub fn process_epjson(&mut self, text: &str) -> Result<&Diagnostics, JsonConversionError> {
        self.reset();
        debug!(bytes = text.len(), "loading epJSON input");
        let document = idf_json::from_json(text, &self.schema)?;
        Ok(self.finish(document))
    }

    /// Run the pipeline on an already decoded document.
    pub fn process_document(&mut self, document: Document) -> &Diagnostics {
        self.reset();
        self.finish(document)
    }

    fn finish(&mut self, document: Document) -> &Diagnostics {
        self.document = document;
        let found = self.validate();
        self.diagnostics.extend(found);
        self.initialize_maps();
        info!(
            objects = self.document.total_instances(),
            warnings = self.diagnostics.warning_count(),
            errors = self.diagnostics.error_count(),
            "input processed"
        );
        &self.diagnostics
    }

    /// Validate the current document without touching run state.
    pub fn validate(&self) -> Diagnostics {
        debug!("validating input");
        validate(&self.document, &self.schema)
    }

    /// Rebuild the occurrence cache and seed the unused-object registry
    /// with every instance of the current document.
    pub fn initialize_maps(&mut self) {
        self.occurrences.clear();
        self.registry.clear();
        for (object_type, instances) in self.document.object_types() {
            self.occurrences
                .insert(object_type.clone(), instances.keys().cloned().collect());
            self.registry.extend(
                instances
                    .keys()
                    .map(|name| ((object_type.clone(), name.clone()), false)),
            );
        }
        self.unused = self.registry.len();
        debug!(
            object_types = self.occurrences.len(),
            instances = self.unused,
            "occurrence cache built"
        );
    }

    /// Cached object type entry: exact spelling first, then the canonical
    /// spelling of any casing.
    fn cached(&self, object_type: &str) -> Option<(&String, &Vec<String>)> {
        self.occurrences.get_key_value(object_type).or_else(|| {
            self.schema
                .resolve(object_type)
                .and_then(|canonical| self.occurrences.get_key_value(canonical))
        })
    }

    /// Number of instances of `object_type` in the input, 0 if it has none
    /// or is unknown.
    pub fn get_num_objects_found(&self, object_type: &str) -> usize {
        self.cached(object_type).map_or(0, |(_, names)| names.len())
    }

    /// Fetch the `occurrence`-th (1-based) instance of `object_type` as
    /// positional alpha and numeric fields, and mark it used.
    pub fn get_object_item(
        &mut self,
        object_type: &str,
        occurrence: usize,
    ) -> Result<ObjectItem, AccessError> {
        let (canonical, names) = self
            .cached(object_type)
            .ok_or_else(|| AccessError::UnknownObjectType(object_type.to_string()))?;
        let out_of_range = || AccessError::OccurrenceOutOfRange {
            object_type: canonical.clone(),
            occurrence,
            available: names.len(),
        };
        let name = occurrence
            .checked_sub(1)
            .and_then(|index| names.get(index))
            .ok_or_else(out_of_range)?;
        let schema = self
            .schema
            .object_type(canonical)
            .ok_or_else(|| AccessError::UnknownObjectType(object_type.to_string()))?;
        let instance = self
            .document
            .get(canonical, name)
            .ok_or_else(out_of_range)?;

        let item = project(schema, name, instance);
        let key = (canonical.clone(), name.clone());
        match self.registry.get_mut(&key) {
            Some(fetched) if !*fetched => {
                *fetched = true;
                self.unused -= 1;
                debug!(object_type = %key.0, name = %key.1, "object fetched");
            }
            _ => {}
        }
        Ok(item)
    }

    /// 1-based occurrence of the instance named `name`, compared
    /// case-insensitively.
    pub fn get_object_item_num(&self, object_type: &str, name: &str) -> Option<usize> {
        let (_, names) = self.cached(object_type)?;
        let upper = make_upper_case(name);
        names
            .iter()
            .position(|candidate| make_upper_case(candidate) == upper)
            .map(|index| index + 1)
    }

    /// 1-based occurrence of the first instance whose string field `field`
    /// equals `value`, compared case-insensitively. `name` matches the
    /// instance name.
    pub fn get_object_item_num_by_field(
        &self,
        object_type: &str,
        field: &str,
        value: &str,
    ) -> Option<usize> {
        if field == NAME_FIELD {
            return self.get_object_item_num(object_type, value);
        }
        let (canonical, names) = self.cached(object_type)?;
        let upper = make_upper_case(value);
        names
            .iter()
            .position(|name| {
                self.document
                    .get(canonical, name)
                    .and_then(|instance| instance.get(field))
                    .and_then(|scalar| scalar.as_str())
                    .map_or(false, |text| make_upper_case(text) == upper)
            })
            .map(|index| index + 1)
    }

    /// Largest alpha and numeric counts an instance of `object_type` can
    /// project to, given the longest repeating group in the input.
    pub fn get_object_def_max_args(&self, object_type: &str) -> Result<MaxArgs, AccessError> {
        let schema = self
            .schema
            .resolve_object_type(object_type)
            .ok_or_else(|| AccessError::UnknownObjectType(object_type.to_string()))?;
        Ok(self.max_args(schema))
    }

    /// Largest alpha and numeric counts over every object type in the input.
    pub fn get_max_schema_args(&self) -> MaxArgs {
        let (alphas, numerics) = self
            .occurrences
            .keys()
            .filter_map(|object_type| self.schema.object_type(object_type))
            .map(|schema| self.max_args(schema))
            .fold((0, 0), |(alphas, numerics), args| {
                (alphas.max(args.alphas), numerics.max(args.numerics))
            });
        MaxArgs::new(alphas, numerics)
    }

    fn max_args(&self, schema: &ObjectTypeSchema) -> MaxArgs {
        let groups = self
            .document
            .instances(&schema.name)
            .and_then(|instances| instances.values().map(|i| i.extensions.len()).max())
            .unwrap_or(0);
        let layout = &schema.legacy;
        MaxArgs::new(
            layout.alphas.fields.len() + layout.alphas.extensions.len() * groups,
            layout.numerics.fields.len() + layout.numerics.extensions.len() * groups,
        )
    }

    /// `(object type, name)` pairs not fetched so far, in input order.
    pub fn unused_objects(&self) -> impl Iterator<Item = (&str, &str)> {
        self.registry
            .iter()
            .filter(|(_, fetched)| !**fetched)
            .map(|((object_type, name), _)| (object_type.as_str(), name.as_str()))
    }

    pub fn unused_count(&self) -> usize {
        self.unused
    }

    /// Report the objects no consumer fetched.
    pub fn report_orphan_objects(&self) -> Diagnostics {
        let report = orphans::report_orphan_objects(self.unused_objects(), &self.config);
        if self.unused > 0 {
            info!(unused = self.unused, "orphan objects reported");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idf_core::DiagnosticKind;
    use idf_test::fixtures::{self, standard_schema};

    fn processed(text: &str) -> InputProcessor {
        let mut processor = InputProcessor::new(standard_schema());
        processor.process_idf(text);
        processor
    }

    // ==================== Pipeline tests ====================

    #[test]
    fn test_office_processes_cleanly() {
        let processor = processed(fixtures::OFFICE_IDF);
        assert!(processor.diagnostics().is_empty());
        assert_eq!(processor.document().total_instances(), 9);
        assert_eq!(processor.unused_count(), 9);
    }

    #[test]
    fn test_decode_and_validation_diagnostics_accumulate() {
        let processor = processed("Building, HQ, 0, Swamp;\nBogus, X;\n");
        let kinds: Vec<DiagnosticKind> = processor
            .diagnostics()
            .errors()
            .iter()
            .map(|d| d.kind())
            .collect();
        assert!(kinds.contains(&DiagnosticKind::UnknownObjectType));
        assert!(kinds.contains(&DiagnosticKind::Enum));
    }

    #[test]
    fn test_validate_is_repeatable() {
        let processor = processed("Building, HQ;\nZone, Z, 0, 0;\n");
        assert_eq!(processor.validate(), processor.validate());
        assert_eq!(processor.validate().error_count(), 1);
    }

    #[test]
    fn test_process_epjson() {
        let mut processor = InputProcessor::new(standard_schema());
        let text = r#"{"Building": {"HQ": {"terrain": "City"}}, "Zone": {"Z1": {}}}"#;
        let found = processor.process_epjson(text).unwrap();
        assert!(!found.has_errors());
        assert_eq!(processor.get_num_objects_found("Zone"), 1);
    }

    #[test]
    fn test_process_epjson_rejects_malformed_json() {
        let mut processor = InputProcessor::new(standard_schema());
        assert!(processor.process_epjson("{not json").is_err());
        assert_eq!(processor.get_num_objects_found("Zone"), 0);
    }

    #[test]
    fn test_process_document() {
        let mut processor = InputProcessor::new(standard_schema());
        processor.process_document(fixtures::office_document());
        assert_eq!(processor.get_num_objects_found("Zone"), 2);
    }

    // ==================== Accessor tests ====================

    #[test]
    fn test_num_objects_found_any_case() {
        let processor = processed(fixtures::OFFICE_IDF);
        assert_eq!(processor.get_num_objects_found("Zone"), 2);
        assert_eq!(processor.get_num_objects_found("zone"), 2);
        assert_eq!(processor.get_num_objects_found("NONEXISTENT"), 0);
        assert_eq!(processor.get_num_objects_found("Building"), 1);
    }

    #[test]
    fn test_num_objects_found_for_known_type_absent_from_input() {
        let processor = processed("Building, HQ;\n");
        assert_eq!(processor.get_num_objects_found("RunPeriod"), 0);
    }

    #[test]
    fn test_num_objects_found_does_not_mark_used() {
        let processor = processed(fixtures::OFFICE_IDF);
        processor.get_num_objects_found("Zone");
        assert_eq!(processor.unused_count(), 9);
    }

    #[test]
    fn test_get_object_item_by_occurrence() {
        let mut processor = processed(fixtures::OFFICE_IDF);
        let second = processor.get_object_item("ZONE", 2).unwrap();
        assert_eq!(second.object_type, "Zone");
        assert_eq!(second.name, "Perimeter Zone");
        assert_eq!(second.alphas[0].value, "PERIMETER ZONE");
        assert_eq!(second.numeric_values(), vec![10.0, 2.0, 250.5]);
    }

    #[test]
    fn test_get_object_item_unknown_type() {
        let mut processor = processed(fixtures::OFFICE_IDF);
        assert_eq!(
            processor.get_object_item("NONEXISTENT", 1),
            Err(AccessError::UnknownObjectType("NONEXISTENT".to_string()))
        );
    }

    #[test]
    fn test_get_object_item_occurrence_out_of_range() {
        let mut processor = processed(fixtures::OFFICE_IDF);
        for occurrence in [0, 3] {
            assert_eq!(
                processor.get_object_item("Zone", occurrence),
                Err(AccessError::OccurrenceOutOfRange {
                    object_type: "Zone".to_string(),
                    occurrence,
                    available: 2,
                })
            );
        }
        assert_eq!(processor.unused_count(), 9);
    }

    #[test]
    fn test_get_object_item_marks_used_once() {
        let mut processor = processed(fixtures::OFFICE_IDF);
        processor.get_object_item("Zone", 1).unwrap();
        processor.get_object_item("Zone", 1).unwrap();
        assert_eq!(processor.unused_count(), 8);
        assert!(!processor
            .unused_objects()
            .any(|(object_type, name)| object_type == "Zone" && name == "Core Zone"));
    }

    #[test]
    fn test_get_object_item_num() {
        let processor = processed(fixtures::OFFICE_IDF);
        assert_eq!(processor.get_object_item_num("Zone", "perimeter zone"), Some(2));
        assert_eq!(processor.get_object_item_num("zone", "Core Zone"), Some(1));
        assert_eq!(processor.get_object_item_num("Zone", "Attic"), None);
        assert_eq!(processor.get_object_item_num("NONEXISTENT", "Core Zone"), None);
    }

    #[test]
    fn test_get_object_item_num_by_field() {
        let processor = processed(fixtures::OFFICE_IDF);
        assert_eq!(
            processor.get_object_item_num_by_field(
                "ZoneHVAC:IdealLoadsAirSystem",
                "zone_supply_air_node_name",
                "CORE SUPPLY INLET"
            ),
            Some(1)
        );
        assert_eq!(
            processor.get_object_item_num_by_field("Zone", "name", "perimeter zone"),
            Some(2)
        );
        assert_eq!(
            processor.get_object_item_num_by_field("Zone", "zone_inside_convection_algorithm", "Simple"),
            None
        );
    }

    #[test]
    fn test_get_object_def_max_args() {
        let processor = processed(fixtures::OFFICE_IDF);
        let foo = processor.get_object_def_max_args("foo").unwrap();
        // name | a, b plus two [x, y] groups
        assert_eq!(foo, MaxArgs::new(1, 6));
        let zone = processor.get_object_def_max_args("Zone").unwrap();
        assert_eq!(zone, MaxArgs::new(2, 3));
        assert!(processor.get_object_def_max_args("NONEXISTENT").is_err());
    }

    #[test]
    fn test_get_max_schema_args() {
        let processor = processed(fixtures::OFFICE_IDF);
        let args = processor.get_max_schema_args();
        // Schedule:Compact: name, limits and four group values
        assert_eq!(args.alphas, 6);
        assert_eq!(args.numerics, 6);
        assert_eq!(args.args, 12);
    }

    // ==================== Orphan tests ====================

    #[test]
    fn test_fetched_object_omitted_from_orphan_report() {
        let config = ProcessorConfig::builder()
            .display_unused_objects(true)
            .display_all_warnings(true)
            .build();
        let mut processor = InputProcessor::with_config(standard_schema(), config);
        processor.process_idf(fixtures::UNUSED_IDF);
        processor.get_object_item("Zone", 1).unwrap();

        let report = processor.report_orphan_objects();
        let lines: Vec<&str> = report
            .warnings()
            .iter()
            .map(|d| d.message())
            .filter(|m| m.starts_with("Object="))
            .collect();
        assert!(!lines.contains(&"Object=Zone=Z1"));
        assert!(lines.contains(&"Object=Zone=Z2"));
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_unused_objects_keep_input_order() {
        let mut processor = processed(fixtures::UNUSED_IDF);
        processor.get_object_item("Zone", 2).unwrap();
        processor.get_object_item("ZoneHVAC:IdealLoadsAirSystem", 1).unwrap();
        processor.get_object_item("Zone", 2).unwrap();

        assert_eq!(processor.unused_count(), 3);
        let unused: Vec<(&str, &str)> = processor.unused_objects().collect();
        assert_eq!(
            unused,
            vec![
                ("Building", "HQ"),
                ("Zone", "Z1"),
                ("ZoneHVAC:IdealLoadsAirSystem", "Loads Two"),
            ]
        );
    }

    #[test]
    fn test_fetching_every_object_of_large_model() {
        let text: String = (0..5000).map(|i| format!("Zone, Z{};\n", i)).collect();
        let mut processor = processed(&text);
        assert_eq!(processor.unused_count(), 5000);
        for occurrence in (1..=5000).rev() {
            processor.get_object_item("Zone", occurrence).unwrap();
        }
        assert_eq!(processor.unused_count(), 0);
        assert_eq!(processor.unused_objects().count(), 0);
    }

    // ==================== Reset tests ====================

    #[test]
    fn test_reset_clears_run_state() {
        let mut processor = processed("Bogus, X;\nZone, Z1;\n");
        assert!(processor.diagnostics().has_errors());
        processor.reset();
        assert!(processor.diagnostics().is_empty());
        assert!(processor.document().is_empty());
        assert_eq!(processor.get_num_objects_found("Zone"), 0);
        assert_eq!(processor.unused_count(), 0);
        assert!(processor.report_orphan_objects().is_empty());
    }

    #[test]
    fn test_second_run_does_not_inherit_state() {
        let mut processor = processed(fixtures::UNUSED_IDF);
        processor.process_idf("Building, HQ;\n");
        assert!(processor.diagnostics().is_empty());
        assert_eq!(processor.get_num_objects_found("Zone"), 0);
        assert_eq!(processor.unused_count(), 1);
    }
}
