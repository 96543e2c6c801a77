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

//! Write run tables as CSV.

use crate::error::{CsvError, Result};
use llmdbench_core::{RunTable, Value};
use std::io::Write;

/// Header used for the row id column.
pub const ROW_ID_HEADER: &str = "Row_Id";

/// Configuration for CSV output.
///
/// # Examples
///
/// ```
/// use llmdbench_csv::ToCsvConfig;
///
/// let config = ToCsvConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.include_headers);
/// assert!(config.columns.is_none());
///
/// let tsv = ToCsvConfig {
///     delimiter: b'\t',
///     columns: Some(vec!["Model".to_string(), "Thpt_per_GPU".to_string()]),
///     ..Default::default()
/// };
/// assert_eq!(tsv.delimiter, b'\t');
/// ```
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default `,`).
    pub delimiter: u8,
    /// Write a header record (default `true`).
    pub include_headers: bool,
    /// Quoting policy (default [`csv::QuoteStyle::Necessary`]).
    pub quote_style: csv::QuoteStyle,
    /// Columns to write, in this order. `None` writes every registered column.
    pub columns: Option<Vec<String>>,
    /// Prepend each row's id as a [`ROW_ID_HEADER`] column (default `false`).
    pub include_row_id: bool,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            columns: None,
            include_row_id: false,
        }
    }
}

/// Serialize a table to a CSV string with every registered column.
///
/// Nulls are written as empty cells.
///
/// # Examples
///
/// ```
/// use llmdbench_core::{columns, ColumnRegistry, RunTable};
/// use llmdbench_csv::{to_csv_with_config, ToCsvConfig};
///
/// let mut table = RunTable::new(ColumnRegistry::standard());
/// let mut row = table.row_builder();
/// row.set(columns::MODEL, "llama").unwrap();
/// row.set(columns::NUM_GPUS, 4_i64).unwrap();
/// table.append(row.build()).unwrap();
///
/// let config = ToCsvConfig {
///     columns: Some(vec!["Model".into(), "Num_GPUs".into(), "Mean_TTFT_ms".into()]),
///     ..Default::default()
/// };
/// let csv = to_csv_with_config(&table, &config).unwrap();
/// assert_eq!(csv, "Model,Num_GPUs,Mean_TTFT_ms\nllama,4,\n");
/// ```
pub fn to_csv(table: &RunTable<'_>) -> Result<String> {
    to_csv_with_config(table, &ToCsvConfig::default())
}

/// Serialize a table to a CSV string.
pub fn to_csv_with_config(table: &RunTable<'_>, config: &ToCsvConfig) -> Result<String> {
    let width = config
        .columns
        .as_ref()
        .map_or(table.registry().len(), Vec::len);
    let mut buffer = Vec::with_capacity(table.len().saturating_add(1) * width * 8);

    to_csv_writer_with_config(table, &mut buffer, config)?;

    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Serialize a table to any writer.
pub fn to_csv_writer<W: Write>(table: &RunTable<'_>, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, &ToCsvConfig::default())
}

/// Serialize a table to any writer.
///
/// # Errors
///
/// [`CsvError::Core`] when a projected column is not registered; nothing is
/// written in that case.
pub fn to_csv_writer_with_config<W: Write>(
    table: &RunTable<'_>,
    writer: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let registry = table.registry();
    let (names, positions): (Vec<&str>, Vec<usize>) = match &config.columns {
        Some(columns) => {
            let mut names = Vec::with_capacity(columns.len());
            let mut positions = Vec::with_capacity(columns.len());
            for column in columns {
                positions.push(registry.index_of(column)?);
                names.push(column.as_str());
            }
            (names, positions)
        }
        None => registry.names().zip(0..).unzip(),
    };

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        let mut header: Vec<&str> = Vec::with_capacity(names.len() + 1);
        if config.include_row_id {
            header.push(ROW_ID_HEADER);
        }
        header.extend(&names);
        wtr.write_record(&header)
            .map_err(|e| CsvError::Other(format!("Failed to write CSV header: {}", e)))?;
    }

    let mut record: Vec<String> = Vec::with_capacity(positions.len() + 1);
    for row in table.rows() {
        record.clear();
        if config.include_row_id {
            record.push(row.id().to_string());
        }
        record.extend(positions.iter().map(|&p| cell(&row.values()[p])));
        wtr.write_record(&record)
            .map_err(|e| CsvError::Other(format!("Failed to write row {}: {}", row.id(), e)))?;
    }

    wtr.flush()?;
    tracing::debug!(rows = table.len(), columns = positions.len(), "wrote CSV");
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
