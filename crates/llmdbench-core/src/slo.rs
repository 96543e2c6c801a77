// Dweve LLMDBench - LLM serving benchmark explorer
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

//! Service-level objectives.

use crate::column::Preference;
use crate::error::{ExplorerError, ExplorerResult};
use crate::registry::ColumnRegistry;
use crate::table::RunTable;
use crate::value::Value;
use std::fmt;

/// A threshold on a directional metric.
///
/// The comparison direction comes from the column's preference: LOW columns
/// keep values at or below the threshold, HIGH columns keep values at or above.
#[derive(Debug, Clone, PartialEq)]
pub struct Slo {
    column: String,
    value: f64,
    preference: Preference,
}

impl Slo {
    /// Create an objective on a registered column.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::UnknownColumn`](crate::ExplorerError::UnknownColumn) if the name is not registered
    /// - [`ExplorerError::NonNumericColumn`](crate::ExplorerError::NonNumericColumn) if the column is not numeric
    /// - [`ExplorerError::NonDirectionalColumn`](crate::ExplorerError::NonDirectionalColumn) if the column is NEUTRAL
    /// - [`ExplorerError::InvalidThreshold`](crate::ExplorerError::InvalidThreshold) if `value` is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// use llmdbench_core::{ColumnRegistry, Slo};
    ///
    /// let registry = ColumnRegistry::standard();
    /// let slo = Slo::new(registry, "Mean_TTFT_ms", 100.0).unwrap();
    /// assert!(slo.is_met(90.0));
    /// assert!(!slo.is_met(150.0));
    /// assert!(Slo::new(registry, "TP", 2.0).is_err());
    /// ```
    pub fn new(registry: &ColumnRegistry, column: &str, value: f64) -> ExplorerResult<Self> {
        let (_, descriptor) = registry.objective(column)?;
        if !value.is_finite() {
            return Err(ExplorerError::InvalidThreshold {
                column: descriptor.name.clone(),
                value,
            });
        }
        Ok(Self {
            column: descriptor.name.clone(),
            value,
            preference: descriptor.preference,
        })
    }

    /// Constrained column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Threshold value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Direction inherited from the column.
    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// Returns true if a metric value satisfies this objective.
    pub fn is_met(&self, actual: f64) -> bool {
        self.preference.satisfies(actual, self.value)
    }

    fn is_met_by(&self, actual: &Value) -> bool {
        actual.as_float().is_some_and(|v| self.is_met(v))
    }
}

impl fmt::Display for Slo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.preference.operator(), self.value)
    }
}

/// Rows satisfying every objective.
///
/// Objectives form a conjunction, so their order does not matter. An empty
/// list returns the table unchanged. Null values fail every objective.
///
/// # Errors
///
/// Returns an error if an objective does not resolve against the table's
/// registry, which can only happen when it was built for another registry.
pub fn meets_all<'r>(table: &RunTable<'r>, slos: &[Slo]) -> ExplorerResult<RunTable<'r>> {
    let registry = table.registry();
    let positions = slos
        .iter()
        .map(|slo| registry.objective(&slo.column).map(|(pos, _)| pos))
        .collect::<ExplorerResult<Vec<_>>>()?;

    let rows = table
        .rows()
        .iter()
        .filter(|row| {
            slos.iter()
                .zip(&positions)
                .all(|(slo, &pos)| slo.is_met_by(&row.values[pos]))
        })
        .cloned()
        .collect();

    tracing::debug!(objectives = slos.len(), "applied service-level objectives");
    Ok(table.derive(rows))
}
