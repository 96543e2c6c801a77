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

//! Dataset loading shared by the query commands.

use super::{max_file_size, read_file};
use crate::error::CliError;
use llmdbench_core::{ColumnRegistry, RunTable, Value};
use llmdbench_report::{find_report_files, Ingestor, LoadConfig, LoadedReport, ReportError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn is_csv(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Build a dataset from the command-line inputs.
///
/// A single `.csv` path is read as a previously exported dataset. Anything
/// else is treated as report files or directories and ingested with
/// [`load_reports`].
pub fn load_dataset(inputs: &[String], threads: Option<usize>) -> Result<RunTable<'static>, CliError> {
    let registry = ColumnRegistry::standard();

    if inputs.iter().any(|p| is_csv(p)) {
        let [path] = inputs else {
            return Err(CliError::invalid_input(
                "a CSV dataset cannot be combined with other inputs",
            ));
        };
        let content = read_file(path)?;
        let table = llmdbench_csv::from_csv(&content, registry)
            .map_err(|e| e.with_context(path))?;
        tracing::info!(path = %path, rows = table.len(), "loaded dataset");
        return Ok(table);
    }

    let reports = load_reports(inputs, threads)?;
    let mut table = RunTable::new(registry);
    Ingestor::new(&mut table).ingest_all(&reports)?;
    tracing::info!(reports = reports.len(), rows = table.len(), "ingested reports");
    Ok(table)
}

/// Load every report named by or found under `paths`.
///
/// Files are parsed in parallel, on at most `threads` workers when given,
/// and returned in discovery order. A file named on the command line must
/// load; a file found while scanning a directory is skipped with a warning
/// when it does not.
///
/// # Errors
///
/// - [`ReportError::UnsupportedFormat`] for a named file with an unknown extension
/// - [`CliError::NoReports`] when nothing loads
pub fn load_reports(paths: &[String], threads: Option<usize>) -> Result<Vec<LoadedReport>, CliError> {
    let config = LoadConfig {
        max_file_size: max_file_size(),
        ..Default::default()
    };

    let mut jobs: Vec<(PathBuf, bool)> = Vec::new();
    for path in paths {
        let root = Path::new(path);
        let explicit = root.is_file();
        let found = find_report_files(root, &config)?;
        if explicit && found.is_empty() {
            return Err(ReportError::UnsupportedFormat { path: path.clone() }.into());
        }
        jobs.extend(found.into_iter().map(|f| (f, explicit)));
    }

    let parse = || -> Vec<Result<LoadedReport, ReportError>> {
        jobs.par_iter()
            .map(|(path, _)| LoadedReport::load(path, &config))
            .collect()
    };
    let results = match threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(|e| CliError::invalid_input(format!("cannot start {} threads: {}", n, e)))?
            .install(parse),
        None => parse(),
    };

    let mut reports = Vec::with_capacity(results.len());
    for ((path, explicit), result) in jobs.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(err) if *explicit => return Err(err.into()),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "skipping report"),
        }
    }

    if reports.is_empty() {
        return Err(CliError::NoReports(paths.join(", ")));
    }
    Ok(reports)
}

/// Parse `COLUMN=VALUE` arguments, typing each value by its column's kind.
///
/// # Errors
///
/// - [`CliError::InvalidInput`] for a missing `=` or a value that does not parse
/// - [`CliError::Explorer`] for an unregistered column
pub fn parse_assignments(
    registry: &ColumnRegistry,
    args: &[String],
) -> Result<Vec<(String, Value)>, CliError> {
    args.iter()
        .map(|arg| -> Result<(String, Value), CliError> {
            let (name, text) = arg
                .split_once('=')
                .ok_or_else(|| CliError::invalid_input(format!("expected COLUMN=VALUE, got '{}'", arg)))?;
            let name = name.trim();
            let descriptor = registry.describe(name)?;
            let value = Value::parse_as(text, descriptor.kind).ok_or_else(|| {
                CliError::invalid_input(format!("'{}': expected {} value", arg, descriptor.kind))
            })?;
            Ok((descriptor.name.clone(), value))
        })
        .collect()
}
