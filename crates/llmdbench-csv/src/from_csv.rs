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

//! Read run tables from CSV.

use crate::error::{CsvError, Result};
use crate::to_csv::ROW_ID_HEADER;
use llmdbench_core::{ColumnRegistry, RunTable, Value};
use std::io::Read;

/// Default maximum number of data rows.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV input.
///
/// # Examples
///
/// ```
/// use llmdbench_csv::FromCsvConfig;
///
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter (default `,`).
    pub delimiter: u8,
    /// Trim whitespace around cells and headers (default `true`).
    pub trim: bool,
    /// Maximum number of data rows accepted (default [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse CSV text into a table over `registry`.
///
/// The first record is the header. Every header must be a registered column
/// name, except an optional [`ROW_ID_HEADER`] column which is ignored. Columns
/// may appear in any order and unlisted columns stay null. Empty cells are
/// null in every column kind. Rows receive fresh ids in file order.
///
/// # Examples
///
/// ```
/// use llmdbench_core::{columns, ColumnRegistry, Value};
/// use llmdbench_csv::from_csv;
///
/// let text = "Model,TP,Mean_TTFT_ms\nllama,2,41.5\nllama,4,\n";
/// let table = from_csv(text, ColumnRegistry::standard()).unwrap();
/// assert_eq!(table.len(), 2);
///
/// let row = table.row(1).unwrap();
/// assert_eq!(row.get(columns::TP).unwrap(), &Value::Int(4));
/// assert!(row.get("Mean_TTFT_ms").unwrap().is_null());
/// ```
pub fn from_csv<'r>(text: &str, registry: &'r ColumnRegistry) -> Result<RunTable<'r>> {
    from_csv_with_config(text, registry, &FromCsvConfig::default())
}

/// Parse CSV text with a custom configuration.
pub fn from_csv_with_config<'r>(
    text: &str,
    registry: &'r ColumnRegistry,
    config: &FromCsvConfig,
) -> Result<RunTable<'r>> {
    from_csv_reader(text.as_bytes(), registry, config)
}

/// Parse CSV from any reader.
///
/// # Errors
///
/// - [`CsvError::UnknownColumn`] for an unregistered header
/// - [`CsvError::InvalidHeader`] for a column listed twice
/// - [`CsvError::WidthMismatch`] for a record of the wrong width
/// - [`CsvError::TypeMismatch`] for a cell that does not parse as its column's kind
/// - [`CsvError::SecurityLimit`] when more than `max_rows` data rows are present
/// - [`CsvError::ParseError`] for malformed CSV
pub fn from_csv_reader<'r, R: Read>(
    reader: R,
    registry: &'r ColumnRegistry,
    config: &FromCsvConfig,
) -> Result<RunTable<'r>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = rdr.headers().map_err(parse_error)?.clone();
    let layout = resolve_headers(&headers, registry)?;

    let mut table = RunTable::new(registry);
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(parse_error)?;
        let line = record
            .position()
            .map_or(i + 2, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));

        if i >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: i + 1,
            });
        }
        if record.len() != layout.len() {
            return Err(CsvError::WidthMismatch {
                expected: layout.len(),
                actual: record.len(),
                line,
            });
        }

        let mut builder = table.row_builder();
        for (text, slot) in record.iter().zip(&layout) {
            let Some(pos) = *slot else { continue };
            let descriptor = &registry.columns()[pos];
            let value = if text.is_empty() {
                Value::Null
            } else {
                Value::parse_as(text, descriptor.kind).ok_or_else(|| CsvError::TypeMismatch {
                    column: descriptor.name.clone(),
                    expected: descriptor.kind,
                    value: text.to_string(),
                    line,
                })?
            };
            builder.set(&descriptor.name, value)?;
        }
        table.append(builder.build())?;
    }

    tracing::debug!(rows = table.len(), columns = layout.len(), "read CSV");
    Ok(table)
}

/// Registry position for each header, `None` for the row id column.
fn resolve_headers(headers: &csv::StringRecord, registry: &ColumnRegistry) -> Result<Vec<Option<usize>>> {
    let mut layout: Vec<Option<usize>> = Vec::with_capacity(headers.len());
    for (position, name) in headers.iter().enumerate() {
        if name == ROW_ID_HEADER {
            if layout.iter().any(Option::is_none) {
                return Err(CsvError::InvalidHeader {
                    position,
                    reason: format!("duplicate column '{}'", name),
                });
            }
            layout.push(None);
            continue;
        }
        let pos = registry
            .index_of(name)
            .map_err(|_| CsvError::UnknownColumn(name.to_string()))?;
        if layout.contains(&Some(pos)) {
            return Err(CsvError::InvalidHeader {
                position,
                reason: format!("duplicate column '{}'", name),
            });
        }
        layout.push(Some(pos));
    }
    Ok(layout)
}

fn parse_error(err: csv::Error) -> CsvError {
    let line = err
        .position()
        .and_then(|p| usize::try_from(p.line()).ok())
        .unwrap_or(0);
    CsvError::ParseError {
        line,
        message: err.to_string(),
    }
}
