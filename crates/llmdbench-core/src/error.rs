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

//! Error types for column and table operations.

use crate::column::ColumnKind;
use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerErrorKind {
    /// Referenced column is not registered.
    UnknownColumn,
    /// Objective requested on a NEUTRAL column.
    NonDirectionalColumn,
    /// Numeric comparison requested on a non-numeric column.
    NonNumericColumn,
    /// Value kind does not match the column kind.
    TypeMismatch,
    /// Column registered twice.
    DuplicateColumn,
    /// Row width does not match the table registry.
    SchemaMismatch,
    /// Objective threshold is NaN or infinite.
    InvalidThreshold,
}

impl fmt::Display for ExplorerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn => write!(f, "UnknownColumnError"),
            Self::NonDirectionalColumn => write!(f, "NonDirectionalColumnError"),
            Self::NonNumericColumn => write!(f, "NonNumericColumnError"),
            Self::TypeMismatch => write!(f, "TypeMismatchError"),
            Self::DuplicateColumn => write!(f, "DuplicateColumnError"),
            Self::SchemaMismatch => write!(f, "SchemaMismatchError"),
            Self::InvalidThreshold => write!(f, "InvalidThresholdError"),
        }
    }
}

/// An error raised by registry lookups and table queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    /// The column name is not in the registry.
    #[error("Unknown column: {name}")]
    UnknownColumn {
        /// The requested column name.
        name: String,
    },

    /// The column has NEUTRAL preference.
    #[error("Column '{name}' has no preference direction and cannot be used as an objective")]
    NonDirectionalColumn {
        /// The requested column name.
        name: String,
    },

    /// The column does not hold numbers.
    #[error("Column '{name}' holds {kind} values and cannot be compared numerically")]
    NonNumericColumn {
        /// The requested column name.
        name: String,
        /// The column's registered kind.
        kind: ColumnKind,
    },

    /// A value of the wrong kind was assigned to a column.
    #[error("Type mismatch in column '{column}': expected {expected}, got {found}")]
    TypeMismatch {
        /// Column being assigned.
        column: String,
        /// Registered kind.
        expected: ColumnKind,
        /// Type name of the offending value.
        found: String,
    },

    /// A registry was built with a repeated column name.
    #[error("Duplicate column: {name}")]
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },

    /// A row built for one registry was appended to a table using another.
    #[error("Row has {actual} values but the table defines {expected} columns")]
    SchemaMismatch {
        /// Column count of the table registry.
        expected: usize,
        /// Value count of the row.
        actual: usize,
    },

    /// An objective threshold that no value can be compared against.
    #[error("Threshold for column '{column}' must be a finite number, got {value}")]
    InvalidThreshold {
        /// Constrained column.
        column: String,
        /// The rejected threshold.
        value: f64,
    },
}

impl ExplorerError {
    /// Create an [`ExplorerError::UnknownColumn`].
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }

    /// Create an [`ExplorerError::NonDirectionalColumn`].
    pub fn non_directional(name: impl Into<String>) -> Self {
        Self::NonDirectionalColumn { name: name.into() }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ExplorerErrorKind {
        match self {
            Self::UnknownColumn { .. } => ExplorerErrorKind::UnknownColumn,
            Self::NonDirectionalColumn { .. } => ExplorerErrorKind::NonDirectionalColumn,
            Self::NonNumericColumn { .. } => ExplorerErrorKind::NonNumericColumn,
            Self::TypeMismatch { .. } => ExplorerErrorKind::TypeMismatch,
            Self::DuplicateColumn { .. } => ExplorerErrorKind::DuplicateColumn,
            Self::SchemaMismatch { .. } => ExplorerErrorKind::SchemaMismatch,
            Self::InvalidThreshold { .. } => ExplorerErrorKind::InvalidThreshold,
        }
    }
}

/// Result type for explorer operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;
