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

//! LLMDBench Command Line Interface
//!
//! ```bash
//! # Build a dataset from a directory of reports
//! llmdbench ingest results/ -o runs.csv
//!
//! # Which configurations were benchmarked?
//! llmdbench scenarios runs.csv --columns Model,GPU,ISL,OSL
//!
//! # Best throughput/latency trade-offs under a TTFT objective
//! llmdbench pareto runs.csv --x Thpt_per_GPU --y Mean_TTFT_ms \
//!     --scenario Model=meta-llama/Llama-3.1-8B --slo Mean_TTFT_ms=200 --sort
//! ```

use clap::Parser;
use llmdbench_cli::cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let directive = if verbose { "llmdbench=debug" } else { "llmdbench=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
