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

//! Error types for CSV conversion.

use llmdbench_core::{ColumnKind, ExplorerError};
use thiserror::Error;

/// Errors raised while writing or reading run tables as CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Malformed CSV record.
    ///
    /// # Examples
    ///
    /// ```
    /// use llmdbench_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 3,
    ///     message: "unterminated quote".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "CSV parse error at line 3: unterminated quote");
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number, 1-based, counting the header.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A cell does not parse as its column's kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use llmdbench_core::ColumnKind;
    /// use llmdbench_csv::CsvError;
    ///
    /// let err = CsvError::TypeMismatch {
    ///     column: "TP".to_string(),
    ///     expected: ColumnKind::Integer,
    ///     value: "two".to_string(),
    ///     line: 2,
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Type mismatch in column 'TP' at line 2: expected integer, got 'two'"
    /// );
    /// ```
    #[error("Type mismatch in column '{column}' at line {line}: expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Kind registered for the column.
        expected: ColumnKind,
        /// Offending cell text.
        value: String,
        /// Line number, 1-based, counting the header.
        line: usize,
    },

    /// A header names no registered column.
    #[error("Unknown column '{0}' in CSV header")]
    UnknownColumn(String),

    /// The header is unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use llmdbench_csv::CsvError;
    ///
    /// let err = CsvError::InvalidHeader {
    ///     position: 4,
    ///     reason: "duplicate column 'GPU'".to_string(),
    /// };
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    #[error("Invalid header at position {position}: {reason}")]
    InvalidHeader {
        /// Zero-based header position.
        position: usize,
        /// Why the header was rejected.
        reason: String,
    },

    /// A record has a different number of cells than the header.
    #[error("Line {line} has {actual} fields, header has {expected}")]
    WidthMismatch {
        /// Header width.
        expected: usize,
        /// Record width.
        actual: usize,
        /// Line number, 1-based, counting the header.
        line: usize,
    },

    /// Input exceeds a configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use llmdbench_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit { limit: 10, actual: 11 };
    /// assert_eq!(err.to_string(), "Row limit exceeded: more than 10 rows (read 11)");
    /// ```
    #[error("Row limit exceeded: more than {limit} rows (read {actual})")]
    SecurityLimit {
        /// Configured maximum.
        limit: usize,
        /// Rows read when the limit tripped.
        actual: usize,
    },

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the `csv` crate.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Error from a registry lookup or table append.
    #[error(transparent)]
    Core(#[from] ExplorerError),

    /// Output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the bytes came from.
        context: String,
    },

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Result alias for CSV conversion.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Append context to the message.
    ///
    /// Variants without a free-form message are folded into [`CsvError::Other`].
    pub fn with_context(self, context: &str) -> Self {
        match self {
            CsvError::ParseError { line, message } => CsvError::ParseError {
                line,
                message: format!("{} ({})", message, context),
            },
            CsvError::Other(msg) => CsvError::Other(format!("{} ({})", msg, context)),
            other => CsvError::Other(format!("{} ({})", other, context)),
        }
    }
}
