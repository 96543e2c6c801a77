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

//! Structured error types for the LLMDBench CLI.

use llmdbench_core::ExplorerError;
use llmdbench_csv::CsvError;
use llmdbench_report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use llmdbench_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// File read, write or metadata access failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path involved
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB).\n\
         To process larger files, set LLMDBENCH_MAX_FILE_SIZE (in bytes)."
    )]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Its size in bytes
        actual: u64,
        /// The limit in bytes
        max: u64,
        /// The limit in MB, for display
        max_mb: u64,
    },

    /// Report loading or ingestion failed.
    #[error("{0}")]
    Report(#[from] ReportError),

    /// CSV conversion failed.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// A table query was rejected.
    #[error("{0}")]
    Explorer(#[from] ExplorerError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line value could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The given paths held no benchmark reports.
    #[error("No benchmark reports found in {0}")]
    NoReports(String),
}

impl CliError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// An invalid command-line value.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_mentions_env_var() {
        let err = CliError::FileTooLarge {
            path: PathBuf::from("runs.csv"),
            actual: 2048,
            max: 1024,
            max_mb: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("runs.csv"));
        assert!(msg.contains("LLMDBENCH_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_wrapped_errors_keep_message() {
        let err: CliError = ExplorerError::unknown_column("Ghost").into();
        assert_eq!(err.to_string(), "Unknown column: Ghost");

        let err: CliError = ReportError::malformed("no hosts").into();
        assert_eq!(err.to_string(), "Malformed report: no hosts");
    }

    #[test]
    fn test_io_error_constructor() {
        let err = CliError::io_error(
            "missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error for 'missing.yaml': gone");
    }
}
