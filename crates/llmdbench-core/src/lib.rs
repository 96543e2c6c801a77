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

//! Data model and query engine for LLM serving benchmark runs.
//!
//! Every benchmark execution becomes one [`RunRow`] in an append-only
//! [`RunTable`]. Columns are described once in a [`ColumnRegistry`], which
//! records each column's kind and whether smaller or larger values are better.
//!
//! # Queries
//!
//! - [`list_scenarios`] and [`select`] narrow a table to comparable runs
//! - [`meets_all`] keeps runs satisfying every [`Slo`]
//! - [`pareto_front`] keeps runs not dominated on two objectives
//!
//! Queries never mutate their input and the rows they return keep the ids
//! assigned on append.
//!
//! # Example
//!
//! ```
//! use llmdbench_core::{columns, meets_all, pareto_front, ColumnRegistry, RunTable, Slo};
//!
//! let registry = ColumnRegistry::standard();
//! let mut table = RunTable::new(registry);
//! for (thpt, ttft) in [(120.0, 80.0), (300.0, 140.0), (90.0, 95.0)] {
//!     let mut row = table.row_builder();
//!     row.set(columns::THPT_PER_GPU, thpt).unwrap();
//!     row.set("Mean_TTFT_ms", ttft).unwrap();
//!     table.append(row.build()).unwrap();
//! }
//!
//! let slo = Slo::new(registry, "Mean_TTFT_ms", 100.0).unwrap();
//! let ok = meets_all(&table, &[slo]).unwrap();
//! let front = pareto_front(&ok, columns::THPT_PER_GPU, "Mean_TTFT_ms", true).unwrap();
//! assert_eq!(front.ids(), vec![0]);
//! ```

mod column;
pub mod columns;
mod error;
mod pareto;
mod registry;
mod row;
mod scenario;
mod slo;
mod table;
mod value;

pub use column::{ColumnDescriptor, ColumnKind, Preference};
pub use error::{ExplorerError, ExplorerErrorKind, ExplorerResult};
pub use pareto::pareto_front;
pub use registry::ColumnRegistry;
pub use row::{RowRef, RunRow, RunRowBuilder};
pub use scenario::{list_scenarios, select, Scenario};
pub use slo::{meets_all, Slo};
pub use table::RunTable;
pub use value::Value;
