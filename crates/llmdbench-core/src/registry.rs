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

//! Immutable column registry.

use crate::column::{ColumnDescriptor, ColumnKind};
use crate::columns::standard_columns;
use crate::error::{ExplorerError, ExplorerResult};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Static table of known columns, in table order.
///
/// A registry has no mutation API. Build one with [`ColumnRegistry::new`] or
/// use the process-wide [`ColumnRegistry::standard`] instance, and pass it by
/// reference to the components that need it.
///
/// # Examples
///
/// ```
/// use llmdbench_core::{ColumnRegistry, Preference};
///
/// let registry = ColumnRegistry::standard();
/// let ttft = registry.describe("Mean_TTFT_ms").unwrap();
/// assert_eq!(ttft.preference, Preference::Low);
/// assert!(registry.describe("Bogus").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDescriptor>,
    index: BTreeMap<String, usize>,
}

impl ColumnRegistry {
    /// Create a registry from descriptors, rejecting duplicate names.
    pub fn new(columns: Vec<ColumnDescriptor>) -> ExplorerResult<Self> {
        let mut index = BTreeMap::new();
        for (pos, col) in columns.iter().enumerate() {
            if index.insert(col.name.clone(), pos).is_some() {
                return Err(ExplorerError::DuplicateColumn {
                    name: col.name.clone(),
                });
            }
        }
        Ok(Self { columns, index })
    }

    /// The standard benchmark registry, built once per process.
    pub fn standard() -> &'static ColumnRegistry {
        static STANDARD: OnceLock<ColumnRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let columns = standard_columns();
            let index = columns
                .iter()
                .enumerate()
                .map(|(pos, col)| (col.name.clone(), pos))
                .collect();
            ColumnRegistry { columns, index }
        })
    }

    /// Look up a column descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UnknownColumn`] if the name is not registered.
    pub fn describe(&self, name: &str) -> ExplorerResult<&ColumnDescriptor> {
        self.get(name)
            .ok_or_else(|| ExplorerError::unknown_column(name))
    }

    /// Look up a column descriptor, returning `None` if absent.
    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.index.get(name).map(|&pos| &self.columns[pos])
    }

    /// Position of a column in table order.
    pub fn index_of(&self, name: &str) -> ExplorerResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ExplorerError::unknown_column(name))
    }

    /// Returns true iff the column is registered with a non-NEUTRAL preference.
    ///
    /// Unknown names have no preference and return false.
    pub fn is_directional(&self, name: &str) -> bool {
        self.get(name).is_some_and(ColumnDescriptor::is_directional)
    }

    /// Resolve a column usable as an optimization objective.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::UnknownColumn`] if the name is not registered
    /// - [`ExplorerError::NonNumericColumn`] if the column is not integer or float
    /// - [`ExplorerError::NonDirectionalColumn`] if the preference is NEUTRAL
    pub fn objective(&self, name: &str) -> ExplorerResult<(usize, &ColumnDescriptor)> {
        let pos = self.index_of(name)?;
        let col = &self.columns[pos];
        if !col.kind.is_numeric() {
            return Err(ExplorerError::NonNumericColumn {
                name: name.to_string(),
                kind: col.kind,
            });
        }
        if !col.is_directional() {
            return Err(ExplorerError::non_directional(name));
        }
        Ok((pos, col))
    }

    /// All descriptors in table order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Column names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Descriptors of a given kind.
    pub fn of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(move |c| c.kind == kind)
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
