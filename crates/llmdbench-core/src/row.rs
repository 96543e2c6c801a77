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

//! Run rows and their builder.

use crate::column::ColumnKind;
use crate::error::{ExplorerError, ExplorerResult};
use crate::registry::ColumnRegistry;
use crate::value::Value;

/// One benchmark execution, with values aligned to a registry's column order.
///
/// Rows are immutable. They are produced by [`RunRowBuilder`] and receive
/// their identity when appended to a [`RunTable`](crate::RunTable); query
/// results carry the identity of the source row.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRow {
    pub(crate) id: usize,
    pub(crate) values: Vec<Value>,
}

impl RunRow {
    /// Position of this row in the dataset it was appended to.
    pub fn id(&self) -> usize {
        self.id
    }

    /// All values in registry order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a column position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// A row bound to the registry that describes it.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    pub(crate) registry: &'a ColumnRegistry,
    pub(crate) row: &'a RunRow,
}

impl<'a> RowRef<'a> {
    /// Position of the row in its source dataset.
    pub fn id(&self) -> usize {
        self.row.id
    }

    /// Value of a named column.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UnknownColumn`] if the name is not registered.
    pub fn get(&self, name: &str) -> ExplorerResult<&'a Value> {
        let pos = self.registry.index_of(name)?;
        Ok(&self.row.values[pos])
    }

    /// Numeric value of a named column, `None` when null or non-numeric.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).ok().and_then(Value::as_float)
    }

    /// The underlying row.
    pub fn row(&self) -> &'a RunRow {
        self.row
    }

    /// `(column name, value)` pairs in registry order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.registry.names().zip(self.row.values.iter())
    }
}

/// Assembles a [`RunRow`] column by column with kind checking.
///
/// Columns never set stay null.
///
/// # Examples
///
/// ```
/// use llmdbench_core::{columns, ColumnRegistry, RunRowBuilder, RunTable, Value};
///
/// let registry = ColumnRegistry::standard();
/// let mut builder = RunRowBuilder::new(registry);
/// builder.set(columns::MODEL, "meta-llama/Llama-3.1-8B").unwrap();
/// builder.set(columns::NUM_GPUS, 4_i64).unwrap();
/// let row = builder.build();
///
/// let mut table = RunTable::new(registry);
/// table.append(row).unwrap();
/// assert_eq!(table.row(0).unwrap().get(columns::NUM_GPUS).unwrap(), &Value::Int(4));
/// ```
#[derive(Debug, Clone)]
pub struct RunRowBuilder<'r> {
    registry: &'r ColumnRegistry,
    values: Vec<Value>,
}

impl<'r> RunRowBuilder<'r> {
    /// Start a row with every column null.
    pub fn new(registry: &'r ColumnRegistry) -> Self {
        Self {
            registry,
            values: vec![Value::Null; registry.len()],
        }
    }

    /// Assign a column value.
    ///
    /// Integers are widened into float columns; null is accepted everywhere.
    /// Floats are canonicalized with [`Value::float`], so NaN is stored as
    /// null and `-0.0` as `0.0`.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::UnknownColumn`] if the name is not registered
    /// - [`ExplorerError::TypeMismatch`] if the value kind does not fit the column
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> ExplorerResult<&mut Self> {
        let pos = self.registry.index_of(name)?;
        let kind = self.registry.columns()[pos].kind;
        self.values[pos] = coerce(name, kind, value.into())?;
        Ok(self)
    }

    /// Current value of a column, null if unset.
    pub fn get(&self, name: &str) -> ExplorerResult<&Value> {
        let pos = self.registry.index_of(name)?;
        Ok(&self.values[pos])
    }

    /// Finish the row.
    pub fn build(self) -> RunRow {
        RunRow {
            id: 0,
            values: self.values,
        }
    }
}

fn coerce(name: &str, kind: ColumnKind, value: Value) -> ExplorerResult<Value> {
    match (kind, value) {
        (_, Value::Null) => Ok(Value::Null),
        (ColumnKind::Float, Value::Int(n)) => Ok(Value::Float(n as f64)),
        (ColumnKind::Float, Value::Float(n)) => Ok(Value::float(n)),
        (kind, value) if value.kind() == Some(kind) => Ok(value),
        (kind, value) => Err(ExplorerError::TypeMismatch {
            column: name.to_string(),
            expected: kind,
            found: value.type_name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns;
    use crate::error::ExplorerErrorKind;

    // ==================== Builder tests ====================

    #[test]
    fn test_unset_columns_are_null() {
        let registry = ColumnRegistry::standard();
        let row = RunRowBuilder::new(registry).build();
        assert_eq!(row.values().len(), registry.len());
        assert!(row.values().iter().all(Value::is_null));
    }

    #[test]
    fn test_set_widens_int_into_float() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        builder.set(columns::THPT_PER_GPU, 250_i64).unwrap();
        assert_eq!(builder.get(columns::THPT_PER_GPU).unwrap(), &Value::Float(250.0));
    }

    #[test]
    fn test_set_rejects_float_into_int() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        let err = builder.set(columns::TP, 2.5).unwrap_err();
        assert_eq!(err.kind(), ExplorerErrorKind::TypeMismatch);
    }

    #[test]
    fn test_set_rejects_unknown_column() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        let err = builder.set("Not_A_Column", 1_i64).unwrap_err();
        assert_eq!(err.kind(), ExplorerErrorKind::UnknownColumn);
    }

    #[test]
    fn test_set_accepts_null_anywhere() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        builder.set(columns::IS_PD, Value::Null).unwrap();
        builder.set(columns::THPT_PER_USER, None::<f64>).unwrap();
        assert!(builder.get(columns::THPT_PER_USER).unwrap().is_null());
    }

    #[test]
    fn test_set_stores_nan_as_null() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        builder.set(columns::ISL, f64::NAN).unwrap();
        assert!(builder.get(columns::ISL).unwrap().is_null());
    }

    #[test]
    fn test_set_folds_negative_zero() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        builder.set(columns::ISL, -0.0).unwrap();
        match builder.get(columns::ISL).unwrap() {
            Value::Float(v) => assert!(v.is_sign_positive()),
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn test_set_chains() {
        let registry = ColumnRegistry::standard();
        let mut builder = RunRowBuilder::new(registry);
        builder
            .set(columns::MODEL, "m")
            .unwrap()
            .set(columns::GPU, "H100")
            .unwrap();
        assert_eq!(builder.get(columns::GPU).unwrap(), &Value::from("H100"));
    }
}
