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

//! Ingest command - reports to CSV dataset

use super::input::load_reports;
use super::write_output;
use crate::error::CliError;
use llmdbench_core::{ColumnRegistry, RunTable};
use llmdbench_report::Ingestor;

/// Load reports from files or directories and write the dataset as CSV.
///
/// # Examples
///
/// ```no_run
/// use llmdbench_cli::commands::ingest;
///
/// // Every benchmark_report*.yaml under results/, on four threads
/// ingest(&["results".to_string()], Some("runs.csv"), Some(4))?;
/// # Ok::<(), llmdbench_cli::error::CliError>(())
/// ```
pub fn ingest(paths: &[String], output: Option<&str>, threads: Option<usize>) -> Result<(), CliError> {
    let reports = load_reports(paths, threads)?;

    let mut table = RunTable::new(ColumnRegistry::standard());
    Ingestor::new(&mut table).ingest_all(&reports)?;
    tracing::info!(reports = reports.len(), rows = table.len(), "ingested reports");

    let csv = llmdbench_csv::to_csv(&table)?;
    write_output(&csv, output)
}
