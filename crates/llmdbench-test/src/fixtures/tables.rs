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

//! Prebuilt run tables.

use crate::fixtures::reports::{concurrency_sweep, mixed_reports};
use llmdbench_core::{ColumnRegistry, RunTable};
use llmdbench_report::{BenchmarkReport, Ingestor, LoadedReport};

/// Table of the [`mixed_reports`] fixtures, ids 0 to 3.
pub fn mixed_table() -> RunTable<'static> {
    table_of(mixed_reports())
}

/// Table of the [`concurrency_sweep`] fixtures, ids 0 to 3.
pub fn sweep_table() -> RunTable<'static> {
    table_of(concurrency_sweep())
}

/// Ingest reports into a table over the standard registry.
///
/// # Panics
///
/// Panics if any report fails to ingest; fixtures are expected to be valid.
pub fn table_of(reports: Vec<BenchmarkReport>) -> RunTable<'static> {
    let loaded: Vec<LoadedReport> = reports.into_iter().map(LoadedReport::from).collect();
    let mut table = RunTable::new(ColumnRegistry::standard());
    Ingestor::new(&mut table)
        .ingest_all(&loaded)
        .unwrap_or_else(|e| panic!("fixture report failed to ingest: {}", e));
    table
}
