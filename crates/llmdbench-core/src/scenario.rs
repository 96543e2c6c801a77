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

//! Scenario discovery and selection.
//!
//! A scenario fixes the values of a few dimension columns (model, accelerator,
//! sequence lengths, ...) so that the remaining rows are comparable.

use crate::error::ExplorerResult;
use crate::row::RowRef;
use crate::table::RunTable;
use crate::value::Value;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A mapping from column names to literal values, used as a row filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    entries: Vec<(String, Value)>,
}

impl Scenario {
    /// Create an empty scenario (matches every row).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a fixed column value.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Add or replace a fixed column value in place.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Fixed value of a column, if any.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Fixed columns in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// `(column, value)` pairs in insertion order.
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Number of fixed columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no column is fixed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the row agrees with every fixed value.
    ///
    /// A key naming no registered column never matches.
    pub fn matches(&self, row: &RowRef<'_>) -> bool {
        self.entries.iter().all(|(column, expected)| {
            row.get(column)
                .map(|actual| actual.matches(expected))
                .unwrap_or(false)
        })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (column, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", column, value)?;
        }
        Ok(())
    }
}

/// Tuple of values ordered with [`Value::total_cmp`].
struct ScenarioKey(Vec<Value>);

impl PartialEq for ScenarioKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScenarioKey {}

impl PartialOrd for ScenarioKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScenarioKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or_else(|| self.0.len().cmp(&other.0.len()))
    }
}

/// Find the distinct value combinations of `columns` present in a table.
///
/// Scenarios are returned in the order their first row appears. Rows with a
/// null in any of the columns cannot form a key and are skipped. With no
/// columns, a non-empty table yields one empty scenario.
///
/// # Errors
///
/// Returns [`ExplorerError::UnknownColumn`](crate::ExplorerError::UnknownColumn)
/// if any column is not registered.
///
/// # Examples
///
/// ```
/// use llmdbench_core::{columns, list_scenarios, select, ColumnRegistry, RunTable};
///
/// let mut table = RunTable::new(ColumnRegistry::standard());
/// for (model, gpu) in [("a", "H100"), ("a", "H100"), ("b", "A100")] {
///     let mut row = table.row_builder();
///     row.set(columns::MODEL, model).unwrap();
///     row.set(columns::GPU, gpu).unwrap();
///     table.append(row.build()).unwrap();
/// }
///
/// let scenarios = list_scenarios(&table, &[columns::MODEL, columns::GPU]).unwrap();
/// assert_eq!(scenarios.len(), 2);
/// assert_eq!(select(&table, &scenarios[0]).len(), 2);
/// ```
pub fn list_scenarios<S: AsRef<str>>(table: &RunTable<'_>, columns: &[S]) -> ExplorerResult<Vec<Scenario>> {
    let registry = table.registry();
    let positions = columns
        .iter()
        .map(|c| registry.index_of(c.as_ref()))
        .collect::<ExplorerResult<Vec<_>>>()?;

    let mut seen = BTreeSet::new();
    let mut scenarios = Vec::new();

    for row in table.rows() {
        let key: Vec<Value> = positions.iter().map(|&p| row.values[p].clone()).collect();
        if key.iter().any(Value::is_null) {
            continue;
        }
        if seen.insert(ScenarioKey(key.clone())) {
            let entries = columns
                .iter()
                .map(|c| c.as_ref().to_string())
                .zip(key)
                .collect();
            scenarios.push(Scenario { entries });
        }
    }

    Ok(scenarios)
}

/// Rows agreeing with every fixed value of `scenario`.
///
/// An empty scenario returns the whole table. Keys that match nothing,
/// including keys naming unregistered columns, yield an empty table.
pub fn select<'r>(table: &RunTable<'r>, scenario: &Scenario) -> RunTable<'r> {
    let rows = table
        .iter()
        .filter(|row| scenario.matches(row))
        .map(|row| row.row().clone())
        .collect();
    table.derive(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns;
    use crate::error::ExplorerErrorKind;
    use crate::registry::ColumnRegistry;

    fn table_of(rows: &[(&str, Option<f64>)]) -> RunTable<'static> {
        let mut table = RunTable::new(ColumnRegistry::standard());
        for (model, isl) in rows {
            let mut b = table.row_builder();
            b.set(columns::MODEL, *model).unwrap();
            b.set(columns::ISL, *isl).unwrap();
            table.append(b.build()).unwrap();
        }
        table
    }

    // ==================== list_scenarios tests ====================

    #[test]
    fn test_list_scenarios_distinct_in_first_seen_order() {
        let table = table_of(&[
            ("b", Some(100.0)),
            ("a", Some(100.0)),
            ("b", Some(100.0)),
            ("a", Some(200.0)),
        ]);
        let scenarios = list_scenarios(&table, &[columns::MODEL, columns::ISL]).unwrap();
        let rendered: Vec<_> = scenarios.iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, vec!["Model=b, ISL=100", "Model=a, ISL=100", "Model=a, ISL=200"]);
    }

    #[test]
    fn test_list_scenarios_skips_nulls() {
        let table = table_of(&[("a", None), ("b", Some(1.0))]);
        let scenarios = list_scenarios(&table, &[columns::MODEL, columns::ISL]).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].get(columns::MODEL), Some(&Value::from("b")));
    }

    #[test]
    fn test_list_scenarios_unknown_column() {
        let table = table_of(&[("a", Some(1.0))]);
        let err = list_scenarios(&table, &["Model", "Nope"]).unwrap_err();
        assert_eq!(err.kind(), ExplorerErrorKind::UnknownColumn);
    }

    #[test]
    fn test_list_scenarios_no_columns() {
        let table = table_of(&[("a", Some(1.0)), ("b", Some(2.0))]);
        let none: [&str; 0] = [];
        let scenarios = list_scenarios(&table, &none).unwrap();
        assert_eq!(scenarios, vec![Scenario::new()]);

        let empty = table_of(&[]);
        assert!(list_scenarios(&empty, &none).unwrap().is_empty());
    }

    #[test]
    fn test_list_scenarios_nan_key_is_not_listed() {
        let table = table_of(&[("a", Some(f64::NAN)), ("a", Some(100.0))]);
        let scenarios = list_scenarios(&table, &[columns::MODEL, columns::ISL]).unwrap();
        assert_eq!(scenarios.len(), 1);
        for scenario in &scenarios {
            assert!(!select(&table, scenario).is_empty(), "{}", scenario);
        }
    }

    #[test]
    fn test_list_scenarios_signed_zeros_share_a_scenario() {
        let table = table_of(&[("a", Some(-0.0)), ("a", Some(0.0))]);
        let scenarios = list_scenarios(&table, &[columns::MODEL, columns::ISL]).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(select(&table, &scenarios[0]).ids(), vec![0, 1]);
    }

    // ==================== select tests ====================

    #[test]
    fn test_select_empty_scenario_returns_all() {
        let table = table_of(&[("a", Some(1.0)), ("b", None)]);
        assert_eq!(select(&table, &Scenario::new()).len(), 2);
    }

    #[test]
    fn test_select_preserves_ids() {
        let table = table_of(&[("a", Some(1.0)), ("b", Some(1.0)), ("a", Some(2.0))]);
        let picked = select(&table, &Scenario::new().with(columns::MODEL, "a"));
        assert_eq!(picked.ids(), vec![0, 2]);
    }

    #[test]
    fn test_select_numeric_across_int_and_float() {
        let table = table_of(&[("a", Some(1000.0))]);
        let picked = select(&table, &Scenario::new().with(columns::ISL, 1000_i64));
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_select_unmatched_key_is_empty_not_error() {
        let table = table_of(&[("a", Some(1.0))]);
        assert!(select(&table, &Scenario::new().with(columns::MODEL, "zzz")).is_empty());
        assert!(select(&table, &Scenario::new().with("Ghost", 1_i64)).is_empty());
    }

    // ==================== Scenario tests ====================

    #[test]
    fn test_insert_replaces() {
        let mut s = Scenario::new().with("A", 1_i64);
        s.insert("A", 2_i64);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("A"), Some(&Value::Int(2)));
    }
}
