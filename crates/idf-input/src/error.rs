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

//! Accessor errors.

/// Errors returned by the positional accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The object type is not in the schema, or the input has no instances of it
    #[error("Object type \"{0}\" not found in input")]
    UnknownObjectType(String),

    /// The 1-based occurrence is zero or past the last instance
    #[error("Occurrence {occurrence} of \"{object_type}\" requested but only {available} found")]
    OccurrenceOutOfRange {
        object_type: String,
        occurrence: usize,
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_object_type_display() {
        let err = AccessError::UnknownObjectType("NONEXISTENT".to_string());
        assert_eq!(err.to_string(), "Object type \"NONEXISTENT\" not found in input");
    }

    #[test]
    fn test_occurrence_out_of_range_display() {
        let err = AccessError::OccurrenceOutOfRange {
            object_type: "Zone".to_string(),
            occurrence: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "Occurrence 3 of \"Zone\" requested but only 2 found"
        );
    }
}
