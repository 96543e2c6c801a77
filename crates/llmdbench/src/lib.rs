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

//! # LLMDBench
//!
//! Explore LLM inference-serving benchmark results: pick the runs of one
//! scenario, keep those meeting service-level objectives, and find the
//! configurations on the Pareto front of two competing metrics.
//!
//! ## Quick Start
//!
//! ```rust
//! use llmdbench::{columns, front_under_slos, ColumnRegistry, RunTable, Scenario, Slo};
//!
//! let registry = ColumnRegistry::standard();
//! let mut table = RunTable::new(registry);
//! for (tp, thpt, ttft) in [(1_i64, 900.0, 120.0), (2, 700.0, 60.0), (4, 500.0, 70.0)] {
//!     let mut row = table.row_builder();
//!     row.set(columns::MODEL, "llama").unwrap();
//!     row.set(columns::TP, tp).unwrap();
//!     row.set(columns::THPT_PER_GPU, thpt).unwrap();
//!     row.set("Mean_TTFT_ms", ttft).unwrap();
//!     table.append(row.build()).unwrap();
//! }
//!
//! let scenario = Scenario::new().with(columns::MODEL, "llama");
//! let slos = [Slo::new(registry, "Mean_TTFT_ms", 100.0).unwrap()];
//! let front = front_under_slos(&table, &scenario, &slos, columns::THPT_PER_GPU, "Mean_TTFT_ms", true)
//!     .unwrap();
//! assert_eq!(front.ids(), vec![1]);
//! ```
//!
//! ## Modules
//!
//! - [`columns`]: standard column names and latency column helpers
//! - `report`: benchmark report loading and ingestion (feature = "report")
//! - `csv`: dataset CSV export and import (feature = "csv")
//!
//! The `serde` feature makes tables, values and column descriptors serializable.

pub use llmdbench_core::{
    columns,
    // Queries
    list_scenarios,
    meets_all,
    pareto_front,
    select,
    // Data model
    ColumnDescriptor,
    ColumnKind,
    ColumnRegistry,
    // Errors
    ExplorerError,
    ExplorerErrorKind,
    ExplorerResult,
    Preference,
    RowRef,
    RunRow,
    RunRowBuilder,
    RunTable,
    Scenario,
    Slo,
    Value,
};

/// Benchmark report loading and ingestion (requires `report` feature).
#[cfg(feature = "report")]
pub mod report {
    pub use llmdbench_report::{
        find_report_files, from_json_str, from_yaml_str, ingest, load_report_file, to_row,
        to_row_with_origin, BenchmarkReport, Ingestor, LoadConfig, LoadedReport, ReportError,
        Result as ReportResult,
    };
}

/// Dataset CSV conversion (requires `csv` feature).
#[cfg(feature = "csv")]
pub mod csv {
    pub use llmdbench_csv::{
        from_csv, from_csv_reader, from_csv_with_config, to_csv, to_csv_with_config,
        to_csv_writer, to_csv_writer_with_config, CsvError, FromCsvConfig, Result as CsvResult,
        ToCsvConfig,
    };
}

/// Pareto front of the rows in `scenario` that meet every objective.
///
/// Runs [`select`], [`meets_all`] and [`pareto_front`] in that order. Row ids
/// in the result refer to `table`.
///
/// # Errors
///
/// Any error from [`meets_all`] or [`pareto_front`].
pub fn front_under_slos<'r>(
    table: &RunTable<'r>,
    scenario: &Scenario,
    slos: &[Slo],
    col_x: &str,
    col_y: &str,
    sort: bool,
) -> ExplorerResult<RunTable<'r>> {
    let picked = select(table, scenario);
    let kept = meets_all(&picked, slos)?;
    let front = pareto_front(&kept, col_x, col_y, sort)?;
    tracing::debug!(
        scenario = %scenario,
        selected = picked.len(),
        kept = kept.len(),
        front = front.len(),
        "explored scenario"
    );
    Ok(front)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
