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

//! Document fixtures matching the decoded form of the text fixtures.

use super::builders::{DocumentBuilder, InstanceBuilder};
use idf_core::{Document, Scalar};

/// Decoded form of [`FOO_IDF`](super::FOO_IDF).
pub fn foo_document() -> Document {
    DocumentBuilder::new()
        .object(
            "Foo",
            "Inst1",
            InstanceBuilder::new()
                .int("a", 1)
                .int("b", 2)
                .group([("x", Scalar::Integer(10)), ("y", Scalar::Integer(20))])
                .group([("x", Scalar::Integer(30)), ("y", Scalar::Integer(40))]),
        )
        .build()
}

/// Decoded form of [`OFFICE_IDF`](super::OFFICE_IDF).
pub fn office_document() -> Document {
    DocumentBuilder::new()
        .object(
            "Version",
            "Version 1",
            InstanceBuilder::new().string("version_identifier", "9.6"),
        )
        .object(
            "Building",
            "Small Office",
            InstanceBuilder::new()
                .int("north_axis", 30)
                .string("terrain", "City")
                .real("loads_convergence_tolerance_value", 0.04),
        )
        .object(
            "Zone",
            "Core Zone",
            InstanceBuilder::new()
                .int("x_origin", 0)
                .int("multiplier", 1)
                .string("volume", "Autocalculate")
                .string("zone_inside_convection_algorithm", "TARP"),
        )
        .object(
            "Zone",
            "Perimeter Zone",
            InstanceBuilder::new()
                .int("x_origin", 10)
                .int("multiplier", 2)
                .real("volume", 250.5),
        )
        .object(
            "Foo",
            "Inst1",
            InstanceBuilder::new()
                .int("a", 1)
                .int("b", 2)
                .group([("x", Scalar::Integer(10)), ("y", Scalar::Integer(20))])
                .group([("x", Scalar::Integer(30)), ("y", Scalar::Integer(40))]),
        )
        .object(
            "Coil:Cooling:Water",
            "Main Coil",
            InstanceBuilder::new()
                .string("availability_schedule_name", "Always On")
                .string("design_water_flow_rate", "Autosize"),
        )
        .object(
            "ZoneHVAC:IdealLoadsAirSystem",
            "Core Ideal Loads",
            InstanceBuilder::new().string("zone_supply_air_node_name", "Core Supply Inlet"),
        )
        .object(
            "RunPeriod",
            "Annual",
            InstanceBuilder::new()
                .int("begin_month", 1)
                .int("begin_day_of_month", 1)
                .int("end_month", 12)
                .int("end_day_of_month", 31),
        )
        .object(
            "Schedule:Compact",
            "Always On",
            InstanceBuilder::new()
                .string("schedule_type_limits_name", "Fraction")
                .group([("field", Scalar::from("Through: 12/31"))])
                .group([("field", Scalar::from("For: AllDays"))])
                .group([("field", Scalar::from("Until: 24:00"))])
                .group([("field", Scalar::from("1"))]),
        )
        .build()
}

/// Document with no object types.
pub fn empty() -> Document {
    Document::new()
}
