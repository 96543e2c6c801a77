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

//! Error types for report loading and ingestion.

use llmdbench_core::ExplorerError;
use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while loading or ingesting benchmark reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// Text is not valid YAML/JSON
    #[error("Report parse error: {0}")]
    Parse(String),

    /// Required fields absent, of the wrong type, or structurally inconsistent
    #[error("Malformed report: {message}")]
    Malformed { message: String },

    /// File could not be read
    #[error("I/O error reading '{path}': {message}")]
    Io { path: String, message: String },

    /// File exceeds the configured size limit
    #[error("File '{path}' is too large: {size} bytes (max: {max_size} bytes)")]
    FileTooLarge {
        path: String,
        size: u64,
        max_size: u64,
    },

    /// Extension is not one of the configured report formats
    #[error("Unsupported report format for '{path}'")]
    UnsupportedFormat { path: String },

    /// The converted row was rejected by the table
    #[error(transparent)]
    Core(#[from] ExplorerError),
}

impl ReportError {
    /// Creates a malformed-report error.
    pub fn malformed(message: impl Into<String>) -> Self {
        ReportError::Malformed {
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        ReportError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ReportError::malformed(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => ReportError::Parse(err.to_string()),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = ReportError::malformed("host.accelerator is empty");
        assert_eq!(err.to_string(), "Malformed report: host.accelerator is empty");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = ReportError::FileTooLarge {
            path: "big.yaml".to_string(),
            size: 200,
            max_size: 100,
        };
        assert_eq!(
            err.to_string(),
            "File 'big.yaml' is too large: 200 bytes (max: 100 bytes)"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: ReportError = ExplorerError::unknown_column("X").into();
        assert_eq!(err.to_string(), ExplorerError::unknown_column("X").to_string());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ReportError = json_err.into();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn test_from_json_shape_error_is_malformed() {
        let json_err = serde_json::from_str::<u32>("\"four\"").unwrap_err();
        let err: ReportError = json_err.into();
        assert!(matches!(err, ReportError::Malformed { .. }));
    }
}
