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

//! Append-only run tables.

use crate::error::{ExplorerError, ExplorerResult};
use crate::registry::ColumnRegistry;
use crate::row::{RowRef, RunRow, RunRowBuilder};
use crate::value::Value;

/// A dataset of run rows sharing one column registry.
///
/// The only mutation is [`RunTable::append`]. Queries such as
/// [`select`](crate::select), [`meets_all`](crate::meets_all) and
/// [`pareto_front`](crate::pareto_front) take a shared reference and return a
/// new table whose rows keep their source ids.
///
/// Appending is not synchronized. Callers ingesting from several threads must
/// serialize their calls to `append`.
#[derive(Debug, Clone)]
pub struct RunTable<'r> {
    registry: &'r ColumnRegistry,
    rows: Vec<RunRow>,
}

impl<'r> RunTable<'r> {
    /// Create an empty table.
    pub fn new(registry: &'r ColumnRegistry) -> Self {
        Self {
            registry,
            rows: Vec::new(),
        }
    }

    /// A builder for a row of this table.
    pub fn row_builder(&self) -> RunRowBuilder<'r> {
        RunRowBuilder::new(self.registry)
    }

    /// Append one row, assigning its id. Returns the id.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::SchemaMismatch`] if the row was built for a
    /// registry with a different column count. The table is unchanged on error.
    pub fn append(&mut self, mut row: RunRow) -> ExplorerResult<usize> {
        if row.values.len() != self.registry.len() {
            return Err(ExplorerError::SchemaMismatch {
                expected: self.registry.len(),
                actual: row.values.len(),
            });
        }
        let id = self.rows.len();
        row.id = id;
        self.rows.push(row);
        Ok(id)
    }

    /// The registry describing this table's columns.
    pub fn registry(&self) -> &'r ColumnRegistry {
        self.registry
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw rows in table order.
    pub fn rows(&self) -> &[RunRow] {
        &self.rows
    }

    /// Row at a position in this table.
    pub fn row(&self, pos: usize) -> Option<RowRef<'_>> {
        self.rows.get(pos).map(|row| RowRef {
            registry: self.registry,
            row,
        })
    }

    /// Row with a given source id.
    pub fn find(&self, id: usize) -> Option<RowRef<'_>> {
        self.iter().find(|r| r.id() == id)
    }

    /// Iterate rows bound to the registry.
    pub fn iter(&self) -> impl Iterator<Item = RowRef<'_>> {
        let registry: &ColumnRegistry = self.registry;
        self.rows.iter().map(move |row| RowRef { registry, row })
    }

    /// Values of one column in table order.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UnknownColumn`] if the name is not registered.
    pub fn column(&self, name: &str) -> ExplorerResult<impl Iterator<Item = &Value>> {
        let pos = self.registry.index_of(name)?;
        Ok(self.rows.iter().map(move |row| &row.values[pos]))
    }

    /// Source ids of all rows, in table order.
    pub fn ids(&self) -> Vec<usize> {
        self.rows.iter().map(RunRow::id).collect()
    }

    /// A new table over the same registry holding the given rows.
    pub(crate) fn derive(&self, rows: Vec<RunRow>) -> RunTable<'r> {
        RunTable {
            registry: self.registry,
            rows,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RunTable<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        struct RowMap<'a>(RowRef<'a>);

        impl serde::Serialize for RowMap<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_map(self.0.fields())
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for row in self.iter() {
            seq.serialize_element(&RowMap(row))?;
        }
        seq.end()
    }
}
