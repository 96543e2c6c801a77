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

//! LLMDBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **columns**: list the column registry, optionally only objective columns
//! - **ingest**: load benchmark reports and write the dataset as CSV
//! - **scenarios**: list distinct value combinations of chosen columns
//! - **select**: rows matching a scenario and meeting every SLO
//! - **pareto**: the Pareto front of two objectives after scenario/SLO narrowing
//! - **completion**: shell completion scripts
//!
//! Query commands accept either a previously exported `.csv` dataset or
//! report files and directories, which are ingested on the fly.
//!
//! # Examples
//!
//! ```no_run
//! use llmdbench_cli::commands::{pareto, OutputFormat, QueryOptions};
//!
//! let options = QueryOptions {
//!     inputs: vec!["runs.csv".to_string()],
//!     slo: vec!["Mean_TTFT_ms=200".to_string()],
//!     format: OutputFormat::Json,
//!     ..Default::default()
//! };
//! pareto(&options, "Thpt_per_GPU", "Mean_TTFT_ms", true)?;
//! # Ok::<(), llmdbench_cli::error::CliError>(())
//! ```
//!
//! # Environment
//!
//! - `LLMDBENCH_MAX_FILE_SIZE`: maximum input file size in bytes (default 100 MB)
//! - `RUST_LOG`: log filter, logs go to stderr

pub mod cli;
pub mod commands;
pub mod error;
