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

//! Dataset construction commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Commands that describe or build datasets.
#[derive(Subcommand)]
pub enum DataCommands {
    /// List the registered columns
    ///
    /// Prints each column's name, kind, preference direction and label.
    Columns {
        /// Only columns usable as objectives (LOW or HIGH)
        #[arg(short, long)]
        directional: bool,

        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a CSV dataset from benchmark reports
    ///
    /// Each PATH is a report file or a directory scanned recursively for
    /// benchmark_report*.{yaml,yml,json}.
    Ingest {
        /// Report files or directories
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Maximum report parsing threads
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },
}

impl DataCommands {
    /// Execute the data command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            DataCommands::Columns { directional, json } => commands::columns(directional, json),
            DataCommands::Ingest {
                paths,
                output,
                threads,
            } => commands::ingest(&paths, output.as_deref(), threads),
        }
    }
}
