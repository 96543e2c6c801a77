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

//! CLI command definitions and argument parsing.
//!
//! - [`data`]: dataset construction and the column registry (`columns`, `ingest`)
//! - [`query`]: scenario, SLO and Pareto queries (`scenarios`, `select`, `pareto`)
//! - [`utility`]: shell completion (`completion`)

mod data;
mod query;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use data::DataCommands;
pub use query::{QueryArgs, QueryCommands};
pub use utility::UtilityCommands;

/// LLMDBench - LLM serving benchmark explorer
#[derive(Parser)]
#[command(name = "llmdbench")]
#[command(author, version, about = "LLMDBench - LLM serving benchmark explorer", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands, flattened from each category.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Query(QueryCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Run the selected command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Data(cmd) => cmd.execute(),
            Commands::Query(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
