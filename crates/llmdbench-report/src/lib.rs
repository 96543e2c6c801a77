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

//! Benchmark report ingestion.
//!
//! Loads benchmark reports from YAML or JSON, checks their structure and
//! converts each one into a row of a [`RunTable`](llmdbench_core::RunTable).
//!
//! # Normalization
//!
//! - Latency statistics are converted to milliseconds from the units of
//!   their family (`s` and `s/token` are scaled by 1000).
//! - The accelerator count is `tp * dp * pp * replicas` for replica layouts
//!   and the sum of both sides for prefill/decode layouts.
//! - `Thpt_per_GPU` and `Thpt_per_User` divide output token throughput by
//!   the accelerator count and the driven concurrency. Either is null when
//!   its divisor is unknown.
//! - Scorer weights are 0 for absent scheduler plugins, 1 for plugins
//!   without an explicit weight.
//!
//! # Examples
//!
//! ```rust
//! use llmdbench_core::{columns, ColumnRegistry, RunTable};
//! use llmdbench_report::{from_yaml_str, ingest};
//!
//! let yaml = r#"
//! scenario:
//!   model: { name: meta-llama/Llama-3.1-8B-Instruct }
//!   host:
//!     type: [replica, replica]
//!     accelerator:
//!       - { model: H100, count: 2, parallelism: { tp: 2 } }
//!   load:
//!     name: vllm-benchmark
//!     args: { max_concurrency: 8, request_rate: inf }
//! metrics:
//!   requests: { total: 100, failures: 0 }
//!   throughput:
//!     requests_per_sec: 4.0
//!     output_tokens_per_sec: 1000.0
//!     total_tokens_per_sec: 1500.0
//!   latency:
//!     time_to_first_token: { units: s, mean: 0.5 }
//! "#;
//!
//! let report = from_yaml_str(yaml).unwrap();
//! let mut table = RunTable::new(ColumnRegistry::standard());
//! ingest(&mut table, &report).unwrap();
//!
//! let row = table.row(0).unwrap();
//! assert_eq!(row.get_f64(columns::NUM_GPUS), Some(4.0));
//! assert_eq!(row.get_f64(columns::THPT_PER_GPU), Some(250.0));
//! assert_eq!(row.get_f64("Mean_TTFT_ms"), Some(500.0));
//! ```

mod error;
mod ingest;
mod loader;
mod report;

pub use error::{ReportError, Result};
pub use ingest::{ingest, max_concurrency, max_qps, to_row, to_row_with_origin, Ingestor};
pub use loader::{
    find_report_files, from_json_str, from_yaml_str, load_report_file, LoadConfig,
    LoadConfigBuilder, LoadedReport, DEFAULT_FILE_PREFIX, DEFAULT_MAX_FILE_SIZE,
};
pub use report::{
    Accelerator, BenchmarkReport, Engine, Host, HostRole, InferenceScheduler, Latency,
    LatencyStats, LatencyUnits, LengthSummary, Load, LoadGenerator, Metrics, ModelInfo,
    Parallelism, Platform, PlatformMetadata, PluginRef, ReportScenario, Requests,
    SchedulerPlugin, SchedulingProfile, Throughput, TimeRange,
};
