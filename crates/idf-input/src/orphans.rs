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

//! Report of objects no consumer fetched.

use crate::config::ProcessorConfig;
use idf_core::{Diagnostic, DiagnosticKind, Diagnostics};
use std::collections::HashSet;

/// Object types whose unused instances are always reported as severe.
pub const ORPHAN_SEVERE_PREFIX: &str = "ZoneHVAC:";

/// Build the orphan report for the unused `(object type, name)` pairs.
///
/// With `display_unused_objects` the report opens with explanatory warnings
/// and lists the unused objects, only the first of each type unless
/// `display_all_warnings` is set. Without it only a count is reported.
/// Unused `ZoneHVAC:` equipment is reported as severe either way.
pub fn report_orphan_objects<'a, I>(unused: I, config: &ProcessorConfig) -> Diagnostics
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let unused: Vec<(&str, &str)> = unused.into_iter().collect();
    let mut report = Diagnostics::new();
    if unused.is_empty() {
        return report;
    }

    if config.display_unused_objects {
        report.push(unused_warning(
            "The following lines are \"Unused Objects\".  These objects are in the input",
        ));
        report.push(unused_warning(
            " file but are never obtained by the simulation and therefore are NOT used.",
        ));
        report.push(unused_warning(if config.display_all_warnings {
            " Each unused object is shown."
        } else {
            " Only the first unused named object of an object class is shown.  \
             Use Output:Diagnostics,DisplayAllWarnings; to see all."
        }));
        report.push(unused_warning(" See InputOutputReference document for more details."));
    }

    let mut shown_types = HashSet::new();
    for &(object_type, name) in &unused {
        if object_type.starts_with(ORPHAN_SEVERE_PREFIX) {
            report.push(
                Diagnostic::severe(
                    DiagnosticKind::UnusedObject,
                    format!(
                        "Orphaned ZoneHVAC object found.  This object was never referenced \
                         in the input, and was not used. Object type: {}, object name: {}",
                        object_type, name
                    ),
                )
                .with_object_type(object_type),
            );
        }

        if !config.display_unused_objects {
            continue;
        }
        if !config.display_all_warnings && !shown_types.insert(object_type) {
            continue;
        }
        let line = if name.is_empty() {
            format!("Object={}", object_type)
        } else {
            format!("Object={}={}", object_type, name)
        };
        report.push(unused_warning(line).with_object_type(object_type));
    }

    if !config.display_unused_objects {
        report.push(unused_warning(format!(
            "There are {} unused objects in input.",
            unused.len()
        )));
        report.push(unused_warning(
            "Use Output:Diagnostics,DisplayUnusedObjects; to see them.",
        ));
    }

    report
}

fn unused_warning(message: impl Into<String>) -> Diagnostic {
    Diagnostic::warning(DiagnosticKind::UnusedObject, message)
}
