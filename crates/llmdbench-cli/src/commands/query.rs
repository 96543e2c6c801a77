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

//! Scenario, SLO and Pareto queries over a dataset.

use super::input::{load_dataset, parse_assignments};
use super::render::{render, OutputFormat};
use super::write_output;
use crate::error::CliError;
use colored::Colorize;
use llmdbench_core::{list_scenarios, meets_all, pareto_front, ColumnRegistry, RunTable, Scenario, Slo};

/// Options shared by `select` and `pareto`.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Dataset CSV, report files or report directories
    pub inputs: Vec<String>,
    /// `COLUMN=VALUE` scenario constraints
    pub scenario: Vec<String>,
    /// `COLUMN=THRESHOLD` service-level objectives
    pub slo: Vec<String>,
    /// Output format
    pub format: OutputFormat,
    /// Output columns
    pub columns: Option<Vec<String>>,
    /// Output file, stdout when absent
    pub output: Option<String>,
    /// Report parsing threads
    pub threads: Option<usize>,
}

fn parse_slos(registry: &ColumnRegistry, args: &[String]) -> Result<Vec<Slo>, CliError> {
    args.iter()
        .map(|arg| -> Result<Slo, CliError> {
            let (name, text) = arg.split_once('=').ok_or_else(|| {
                CliError::invalid_input(format!("expected COLUMN=THRESHOLD, got '{}'", arg))
            })?;
            let value = text.trim().parse::<f64>().map_err(|_| {
                CliError::invalid_input(format!("'{}': threshold must be a number", arg))
            })?;
            Ok(Slo::new(registry, name.trim(), value)?)
        })
        .collect()
}

/// Apply the scenario and SLO options to a table.
fn narrow<'r>(table: &RunTable<'r>, options: &QueryOptions) -> Result<(RunTable<'r>, Vec<Slo>), CliError> {
    let registry = table.registry();
    let scenario = parse_assignments(registry, &options.scenario)?
        .into_iter()
        .fold(Scenario::new(), |s, (column, value)| s.with(column, value));
    let slos = parse_slos(registry, &options.slo)?;

    let picked = llmdbench_core::select(table, &scenario);
    let kept = meets_all(&picked, &slos)?;
    tracing::info!(
        rows = table.len(),
        scenario = picked.len(),
        meeting_slos = kept.len(),
        "narrowed dataset"
    );
    Ok((kept, slos))
}

/// List the distinct scenarios of a dataset with their row counts.
pub fn scenarios(inputs: &[String], columns: &[String], threads: Option<usize>) -> Result<(), CliError> {
    let table = load_dataset(inputs, threads)?;
    let found = list_scenarios(&table, columns)?;

    let mut out = String::new();
    for scenario in &found {
        let runs = llmdbench_core::select(&table, scenario).len();
        out.push_str(&format!("{:>6}  {}\n", runs, scenario));
    }
    out.push_str(&format!("{} scenario(s)\n", found.len()).dimmed().to_string());
    write_output(&out, None)
}

/// Print the rows matching a scenario and meeting every SLO.
pub fn select(options: &QueryOptions) -> Result<(), CliError> {
    let table = load_dataset(&options.inputs, options.threads)?;
    let (kept, slos) = narrow(&table, options)?;

    let extra: Vec<&str> = slos.iter().map(Slo::column).collect();
    let out = render(&kept, options.format, options.columns.as_deref(), &extra)?;
    write_output(&out, options.output.as_deref())
}

/// Print the Pareto front of the narrowed rows on `x` and `y`.
pub fn pareto(options: &QueryOptions, x: &str, y: &str, sort: bool) -> Result<(), CliError> {
    let table = load_dataset(&options.inputs, options.threads)?;
    let (kept, slos) = narrow(&table, options)?;
    let front = pareto_front(&kept, x, y, sort)?;
    tracing::info!(candidates = kept.len(), front = front.len(), "computed Pareto front");

    let mut extra: Vec<&str> = vec![x, y];
    extra.extend(slos.iter().map(Slo::column));
    let out = render(&front, options.format, options.columns.as_deref(), &extra)?;
    write_output(&out, options.output.as_deref())
}
