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

//! Query commands over a dataset.

use crate::commands::{self, OutputFormat, QueryOptions};
use crate::error::CliError;
use clap::{Args, Subcommand};

/// Input, filter and output arguments shared by `select` and `pareto`.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Dataset CSV, or report files and directories
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Fix a column value, e.g. --scenario Model=meta-llama/Llama-3.1-8B (repeatable)
    #[arg(long, value_name = "COLUMN=VALUE")]
    pub scenario: Vec<String>,

    /// Require a metric threshold, e.g. --slo Mean_TTFT_ms=200 (repeatable)
    #[arg(long, value_name = "COLUMN=THRESHOLD")]
    pub slo: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Output columns, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Maximum report parsing threads
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<QueryArgs> for QueryOptions {
    fn from(args: QueryArgs) -> Self {
        QueryOptions {
            inputs: args.inputs,
            scenario: args.scenario,
            slo: args.slo,
            format: args.format,
            columns: args.columns,
            output: args.output,
            threads: args.threads,
        }
    }
}

/// Scenario, SLO and Pareto queries.
#[derive(Subcommand)]
pub enum QueryCommands {
    /// List distinct scenarios and their run counts
    Scenarios {
        /// Dataset CSV, or report files and directories
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<String>,

        /// Columns defining a scenario, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Maximum report parsing threads
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },

    /// Print runs matching a scenario and meeting every SLO
    Select {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Print the Pareto front of two objectives
    ///
    /// A run stays on the front unless another run is strictly better on both
    /// columns, each judged by its own preference direction.
    Pareto {
        #[command(flatten)]
        args: QueryArgs,

        /// First objective column
        #[arg(long)]
        x: String,

        /// Second objective column
        #[arg(long)]
        y: String,

        /// Order the front by the first objective, ascending
        #[arg(long)]
        sort: bool,
    },
}

impl QueryCommands {
    /// Execute the query command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            QueryCommands::Scenarios {
                inputs,
                columns,
                threads,
            } => commands::scenarios(&inputs, &columns, threads),
            QueryCommands::Select { args } => commands::select(&args.into()),
            QueryCommands::Pareto { args, x, y, sort } => {
                commands::pareto(&args.into(), &x, &y, sort)
            }
        }
    }
}
