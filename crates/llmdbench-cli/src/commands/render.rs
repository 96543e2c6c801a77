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

//! Output rendering for query results.

use crate::error::CliError;
use clap::ValueEnum;
use colored::Colorize;
use llmdbench_core::{columns, RunTable, Value};
use llmdbench_csv::{to_csv_with_config, ToCsvConfig, ROW_ID_HEADER};

/// Columns shown by the table format when none are requested.
pub const DEFAULT_TABLE_COLUMNS: [&str; 10] = [
    columns::MODEL,
    columns::GPU,
    columns::NUM_GPUS,
    columns::MAX_CONCURRENCY,
    columns::ISL,
    columns::OSL,
    columns::THPT_PER_GPU,
    columns::THPT_PER_USER,
    "Mean_TTFT_ms",
    "Mean_TPOT_ms",
];

/// Result output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// CSV with a leading Row_Id column
    Csv,
    /// JSON array of objects
    Json,
}

/// Render a table in the requested format.
///
/// `columns` selects and orders the output columns. Without it, the table
/// format shows [`DEFAULT_TABLE_COLUMNS`] followed by `extra` columns not
/// already listed, while CSV and JSON include every registered column.
///
/// # Errors
///
/// [`CliError::Explorer`] or [`CliError::Csv`] for an unregistered column.
pub fn render(
    table: &RunTable<'_>,
    format: OutputFormat,
    columns: Option<&[String]>,
    extra: &[&str],
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => {
            let names: Vec<String> = match columns {
                Some(cols) => cols.to_vec(),
                None => {
                    let mut names: Vec<String> =
                        DEFAULT_TABLE_COLUMNS.iter().map(|c| c.to_string()).collect();
                    for c in extra {
                        if !names.iter().any(|n| n == c) {
                            names.push(c.to_string());
                        }
                    }
                    names
                }
            };
            render_text(table, &names)
        }
        OutputFormat::Csv => {
            let config = ToCsvConfig {
                columns: columns.map(<[String]>::to_vec),
                include_row_id: true,
                ..Default::default()
            };
            Ok(to_csv_with_config(table, &config)?)
        }
        OutputFormat::Json => {
            let mut out = match columns {
                None => serde_json::to_string_pretty(table)?,
                Some(cols) => {
                    let registry = table.registry();
                    let positions = cols
                        .iter()
                        .map(|c| registry.index_of(c))
                        .collect::<Result<Vec<_>, _>>()?;
                    let mut rows = Vec::with_capacity(table.len());
                    for row in table.rows() {
                        let mut object = serde_json::Map::new();
                        for (name, &pos) in cols.iter().zip(&positions) {
                            object.insert(name.clone(), serde_json::to_value(&row.values()[pos])?);
                        }
                        rows.push(serde_json::Value::Object(object));
                    }
                    serde_json::to_string_pretty(&rows)?
                }
            };
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(table: &RunTable<'_>, names: &[String]) -> Result<String, CliError> {
    let registry = table.registry();
    let positions = names
        .iter()
        .map(|c| registry.index_of(c))
        .collect::<Result<Vec<_>, _>>()?;

    let mut header: Vec<String> = vec![ROW_ID_HEADER.to_string()];
    header.extend(names.iter().cloned());

    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut cells = vec![row.id().to_string()];
            cells.extend(positions.iter().map(|&p| cell(&row.values()[p])));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for cells in &body {
        for (w, c) in widths.iter_mut().zip(cells) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = String::new();
    let line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<w$}", h, w = w).bold().to_string())
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
    for cells in &body {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:<w$}", c, w = w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out.push_str(&format!("{} row(s)\n", table.len()).dimmed().to_string());
    Ok(out)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Float(v) if v.fract() != 0.0 => format!("{:.2}", v),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmdbench_core::ColumnRegistry;

    fn table() -> RunTable<'static> {
        let mut table = RunTable::new(ColumnRegistry::standard());
        for (model, thpt) in [("alpha", Some(123.456)), ("b", None)] {
            let mut b = table.row_builder();
            b.set(columns::MODEL, model).unwrap();
            b.set(columns::THPT_PER_GPU, thpt).unwrap();
            table.append(b.build()).unwrap();
        }
        table
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // ==================== Text tests ====================

    #[test]
    fn test_text_cells() {
        colored::control::set_override(false);
        let out = render(&table(), OutputFormat::Table, Some(&cols(&["Model", "Thpt_per_GPU"])), &[])
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Row_Id  Model  Thpt_per_GPU");
        assert_eq!(lines[1], "0       alpha  123.46");
        assert_eq!(lines[2], "1       b      -");
        assert_eq!(lines[3], "2 row(s)");
    }

    #[test]
    fn test_text_default_columns_with_extra() {
        colored::control::set_override(false);
        let out = render(&table(), OutputFormat::Table, None, &["Mean_TTFT_ms", "Failures"]).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("Row_Id  Model  GPU"));
        assert!(header.ends_with("Failures"));
        assert_eq!(header.matches("Mean_TTFT_ms").count(), 1);
    }

    #[test]
    fn test_text_unknown_column() {
        let err = render(&table(), OutputFormat::Table, Some(&cols(&["Ghost"])), &[]).unwrap_err();
        assert!(matches!(err, CliError::Explorer(_)));
    }

    // ==================== CSV and JSON tests ====================

    #[test]
    fn test_csv_has_row_id() {
        let out = render(&table(), OutputFormat::Csv, Some(&cols(&["Model"])), &[]).unwrap();
        assert_eq!(out, "Row_Id,Model\n0,alpha\n1,b\n");
    }

    #[test]
    fn test_json_projection() {
        let out = render(&table(), OutputFormat::Json, Some(&cols(&["Model", "Thpt_per_GPU"])), &[])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["Model"], "alpha");
        assert_eq!(parsed[1]["Thpt_per_GPU"], serde_json::Value::Null);
    }

    #[test]
    fn test_json_full_rows() {
        let out = render(&table(), OutputFormat::Json, None, &[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let first = parsed[0].as_object().unwrap();
        assert_eq!(first.len(), ColumnRegistry::standard().len());
        assert_eq!(first["Thpt_per_GPU"], 123.456);
    }
}
