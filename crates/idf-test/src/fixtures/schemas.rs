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

//! Schema fixtures.
//!
//! [`standard_schema`] builds, in code, the same schema that
//! [`STANDARD_SCHEMA_JSON`] describes as an epJSON schema document, so tests
//! can use either form and compare the two.

use idf_core::{FieldSchema, ObjectTypeSchema, Schema};

/// The standard fixture schema as an epJSON schema document.
pub const STANDARD_SCHEMA_JSON: &str = include_str!("../../data/standard.schema.epJSON");

/// Object types in [`standard_schema`], in canonical spelling.
pub const STANDARD_OBJECT_TYPES: &[&str] = &[
    "Building",
    "Coil:Cooling:Water",
    "Foo",
    "RunPeriod",
    "Schedule:Compact",
    "Version",
    "Zone",
    "ZoneHVAC:IdealLoadsAirSystem",
];

/// The standard fixture schema.
///
/// `Building` is required at the root and limited to one instance.
pub fn standard_schema() -> Schema {
    let object_types = vec![
        version(),
        building(),
        zone(),
        foo(),
        coil_cooling_water(),
        ideal_loads(),
        run_period(),
        schedule_compact(),
    ];
    Schema::new(object_types, vec!["Building".to_string()])
}

/// Schema holding only the `Foo` object type: fields `[name, a, b]` and a
/// repeating `[x, y]` group.
pub fn foo_schema() -> Schema {
    Schema::new([foo()], Vec::new())
}

fn build(builder: idf_core::ObjectTypeBuilder) -> ObjectTypeSchema {
    match builder.build() {
        Ok(object_type) => object_type,
        Err(err) => panic!("fixture schema is invalid: {}", err),
    }
}

pub fn version() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("Version")
            .field(
                "version_identifier",
                FieldSchema::string().with_default("9.6"),
            )
            .max_properties(1),
    )
}

pub fn building() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("Building")
            .name_field(true)
            .field("north_axis", FieldSchema::number().with_default(0.0))
            .field(
                "terrain",
                FieldSchema::choice(["", "City", "Country", "Ocean", "Suburbs", "Urban"])
                    .with_default("Suburbs"),
            )
            .field(
                "loads_convergence_tolerance_value",
                FieldSchema::number()
                    .with_minimum(0.0, true)
                    .with_maximum(0.5, false)
                    .with_default(0.04),
            )
            .min_properties(1)
            .max_properties(1),
    )
}

pub fn zone() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("Zone")
            .name_field(false)
            .field("x_origin", FieldSchema::number().with_default(0.0))
            .field(
                "multiplier",
                FieldSchema::integer().with_minimum(1.0, false).with_default(1),
            )
            .field(
                "volume",
                FieldSchema::number_or(["", "Autocalculate"]).with_default("Autocalculate"),
            )
            .field(
                "zone_inside_convection_algorithm",
                FieldSchema::choice([
                    "",
                    "AdaptiveConvectionAlgorithm",
                    "CeilingDiffuser",
                    "Simple",
                    "TARP",
                    "TrombeWall",
                ]),
            ),
    )
}

pub fn foo() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("Foo")
            .name_field(false)
            .field("a", FieldSchema::number().with_minimum(0.0, true))
            .field("b", FieldSchema::number())
            .extensible(
                "extensions",
                [("x", FieldSchema::number()), ("y", FieldSchema::number())],
            )
            .extensible_required(["x"]),
    )
}

pub fn coil_cooling_water() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("Coil:Cooling:Water")
            .name_field(false)
            .field("availability_schedule_name", FieldSchema::string())
            .field(
                "design_water_flow_rate",
                FieldSchema::number_or(["Autosize"])
                    .with_minimum(0.0, true)
                    .with_default("Autosize"),
            )
            .field(
                "design_inlet_water_temperature",
                FieldSchema::number().with_default(7.0),
            )
            .field(
                "type_of_analysis",
                FieldSchema::choice(["", "DetailedAnalysis", "SimpleAnalysis"])
                    .with_default("SimpleAnalysis"),
            )
            .required(["design_water_flow_rate"])
            .min_fields(3),
    )
}

pub fn ideal_loads() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("ZoneHVAC:IdealLoadsAirSystem")
            .name_field(false)
            .field("zone_supply_air_node_name", FieldSchema::string())
            .field(
                "maximum_heating_supply_air_temperature",
                FieldSchema::number()
                    .with_maximum(100.0, true)
                    .with_default(50.0),
            )
            .required(["zone_supply_air_node_name"]),
    )
}

pub fn run_period() -> ObjectTypeSchema {
    let month = || {
        FieldSchema::integer()
            .with_minimum(1.0, false)
            .with_maximum(12.0, false)
    };
    let day = || {
        FieldSchema::integer()
            .with_minimum(1.0, false)
            .with_maximum(31.0, false)
    };
    build(
        ObjectTypeSchema::builder("RunPeriod")
            .name_field(false)
            .field("begin_month", month())
            .field("begin_day_of_month", day())
            .field("end_month", month())
            .field("end_day_of_month", day())
            .required([
                "begin_month",
                "begin_day_of_month",
                "end_month",
                "end_day_of_month",
            ]),
    )
}

pub fn schedule_compact() -> ObjectTypeSchema {
    build(
        ObjectTypeSchema::builder("Schedule:Compact")
            .name_field(false)
            .field("schedule_type_limits_name", FieldSchema::string())
            .extensible("data", [("field", FieldSchema::string())]),
    )
}
