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

//! CSV export and import of benchmark run tables.
//!
//! A run table flattens to one CSV record per row, with registered column
//! names as headers. Reading goes the other way: headers are resolved against
//! a [`ColumnRegistry`](llmdbench_core::ColumnRegistry) and each cell is parsed
//! as its column's kind.
//!
//! # Examples
//!
//! ```
//! use llmdbench_core::{columns, ColumnRegistry, RunTable};
//! use llmdbench_csv::{from_csv, to_csv};
//!
//! let registry = ColumnRegistry::standard();
//! let mut table = RunTable::new(registry);
//! let mut row = table.row_builder();
//! row.set(columns::MODEL, "meta-llama/Llama-3.1-8B").unwrap();
//! row.set(columns::THPT_PER_GPU, 812.5).unwrap();
//! table.append(row.build()).unwrap();
//!
//! let text = to_csv(&table).unwrap();
//! let back = from_csv(&text, registry).unwrap();
//! assert_eq!(back.rows()[0].values(), table.rows()[0].values());
//! ```
//!
//! Nulls are written as empty cells and empty cells read back as nulls, so a
//! string column cannot hold the empty string through a CSV round trip.

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    from_csv, from_csv_reader, from_csv_with_config, FromCsvConfig, DEFAULT_MAX_ROWS,
};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig,
    ROW_ID_HEADER,
};
