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

//! CLI command implementations

mod columns;
mod completion;
mod ingest;
mod input;
mod query;
mod render;

pub use columns::columns;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use ingest::ingest;
pub use input::{load_dataset, load_reports, parse_assignments};
pub use query::{pareto, scenarios, select, QueryOptions};
pub use render::{render, OutputFormat};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input file size (100 MB).
/// Can be overridden via the LLMDBENCH_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "LLMDBENCH_MAX_FILE_SIZE";

/// Maximum file size from the environment, or the default.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file after checking its size against [`max_file_size`].
///
/// # Errors
///
/// [`CliError::FileTooLarge`] over the limit, [`CliError::Io`] otherwise.
///
/// # Examples
///
/// ```no_run
/// use llmdbench_cli::commands::read_file;
///
/// let content = read_file("runs.csv")?;
/// assert!(!content.is_empty());
/// # Ok::<(), llmdbench_cli::error::CliError>(())
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::FileTooLarge {
            path: Path::new(path).to_path_buf(),
            actual: metadata.len(),
            max,
            max_mb: max / (1024 * 1024),
        });
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
