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

//! Legacy text fixtures for the standard schema.

/// A small office model using every object type in the standard schema.
///
/// Decodes without diagnostics and validates cleanly.
pub const OFFICE_IDF: &str = include_str!("../../data/office.idf");

/// The `Foo` scenario: two positional values and two full repeating groups.
pub const FOO_IDF: &str = "Foo, Inst1, 1, 2, 10, 20, 30, 40;\n";

/// Keywords and enum values in mixed case.
pub const MIXED_CASE_IDF: &str = "\
BUILDING, HQ, 15, suburbs, 0.04;
zone, West Zone, 0, 1, AUTOCALCULATE, tarp;
COIL:COOLING:WATER, Coil One, , autosize;
";

/// Blank fields, including a blank numeric with a keyword default.
pub const BLANKS_IDF: &str = "\
Building, HQ, , , ;
Zone, Blank Zone, , , ;
";

/// Objects nothing in a typical run would fetch.
pub const UNUSED_IDF: &str = "\
Building, HQ;
Zone, Z1;
Zone, Z2;
ZoneHVAC:IdealLoadsAirSystem, Loads One, Node One;
ZoneHVAC:IdealLoadsAirSystem, Loads Two, Node Two;
";
