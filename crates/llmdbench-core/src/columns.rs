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

//! Names and definitions of the standard benchmark columns.
//!
//! The constants here are the keys presentation layers use to read a
//! [`RunTable`](crate::RunTable). Latency statistics are not listed one by
//! one; build their names with [`latency_column`].

use crate::column::{ColumnDescriptor, ColumnKind, Preference};

// Run identity
pub const RUN_DIRECTORY: &str = "Run_Directory";
pub const START: &str = "Start";
pub const STOP: &str = "Stop";
pub const DURATION: &str = "Duration";
pub const PLATFORM: &str = "Platform";
pub const PLATFORM_VERSION: &str = "Platform_Version";

// Model identity
pub const MODEL: &str = "Model";
pub const GPU: &str = "GPU";

// Accelerator / parallelism configuration
pub const IS_PD: &str = "Is_PD";
pub const TP: &str = "TP";
pub const DP: &str = "DP";
pub const PP: &str = "PP";
pub const EP: &str = "EP";
pub const REPLICAS: &str = "Replicas";
pub const P_TP: &str = "P_TP";
pub const P_DP: &str = "P_DP";
pub const P_PP: &str = "P_PP";
pub const P_EP: &str = "P_EP";
pub const P_REPLICAS: &str = "P_Replicas";
pub const D_TP: &str = "D_TP";
pub const D_DP: &str = "D_DP";
pub const D_PP: &str = "D_PP";
pub const D_EP: &str = "D_EP";
pub const D_REPLICAS: &str = "D_Replicas";
pub const NUM_GPUS: &str = "Num_GPUs";

// Inference scheduler
pub const KV_CACHE_SCORER_WEIGHT: &str = "KV_Cache_Scorer_Weight";
pub const QUEUE_SCORER_WEIGHT: &str = "Queue_Scorer_Weight";
pub const PREFIX_CACHE_SCORER_WEIGHT: &str = "Prefix_Cache_Scorer_Weight";
pub const PREFIX_CACHE_SCORER_BLOCK_SIZE: &str = "Prefix_Cache_Scorer_Block_Size";
pub const PREFIX_CACHE_SCORER_LRU_CAPACITY: &str = "Prefix_Cache_Scorer_LRU_Capacity_Per_Server";
pub const PREFIX_CACHE_SCORER_MAX_BLOCKS: &str = "Prefix_Cache_Scorer_Max_Blocks_To_Match";

// Workload
pub const HARNESS: &str = "Harness";
pub const MAX_CONCURRENCY: &str = "Max_Concurrency";
pub const MAX_QPS: &str = "Max_QPS";
pub const ISL: &str = "ISL";
pub const OSL: &str = "OSL";

// Request outcomes
pub const TOTAL_REQUESTS: &str = "Total_Requests";
pub const FAILURES: &str = "Failures";

// Throughput
pub const REQUEST_THROUGHPUT: &str = "Request_Throughput";
pub const OUTPUT_TOKEN_THROUGHPUT: &str = "Output_Token_Throughput";
pub const TOTAL_TOKEN_THROUGHPUT: &str = "Total_Token_Throughput";
pub const THPT_PER_GPU: &str = "Thpt_per_GPU";
pub const THPT_PER_USER: &str = "Thpt_per_User";

/// A latency family reported by load generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyFamily {
    /// Time to first token.
    Ttft,
    /// Time per output token.
    Tpot,
    /// Inter-token latency.
    Itl,
    /// End-to-end request latency.
    E2el,
}

impl LatencyFamily {
    /// All families in column order.
    pub const ALL: [LatencyFamily; 4] = [Self::Ttft, Self::Tpot, Self::Itl, Self::E2el];

    /// Abbreviation used in column names.
    pub fn abbr(self) -> &'static str {
        match self {
            Self::Ttft => "TTFT",
            Self::Tpot => "TPOT",
            Self::Itl => "ITL",
            Self::E2el => "E2EL",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ttft => "Time to First Token",
            Self::Tpot => "Time per Output Token",
            Self::Itl => "Inter-Token Latency",
            Self::E2el => "End-to-End Latency",
        }
    }
}

/// A summary statistic of a latency distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyStat {
    Mean,
    StdDev,
    Min,
    P0_1,
    P1,
    P5,
    P10,
    P25,
    P50,
    P75,
    P90,
    P95,
    P99,
    P99_9,
    Max,
}

impl LatencyStat {
    /// All statistics in column order.
    pub const ALL: [LatencyStat; 15] = [
        Self::Mean,
        Self::StdDev,
        Self::Min,
        Self::P0_1,
        Self::P1,
        Self::P5,
        Self::P10,
        Self::P25,
        Self::P50,
        Self::P75,
        Self::P90,
        Self::P95,
        Self::P99,
        Self::P99_9,
        Self::Max,
    ];

    /// Abbreviation used in column names.
    pub fn abbr(self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::StdDev => "StdDev",
            Self::Min => "Min",
            Self::P0_1 => "P0.1",
            Self::P1 => "P1",
            Self::P5 => "P5",
            Self::P10 => "P10",
            Self::P25 => "P25",
            Self::P50 => "P50",
            Self::P75 => "P75",
            Self::P90 => "P90",
            Self::P95 => "P95",
            Self::P99 => "P99",
            Self::P99_9 => "P99.9",
            Self::Max => "Max",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::StdDev => "Std. Dev.",
            other => other.abbr(),
        }
    }
}

/// Column name for a latency statistic, e.g. `Mean_TTFT_ms`.
pub fn latency_column(stat: LatencyStat, family: LatencyFamily) -> String {
    format!("{}_{}_ms", stat.abbr(), family.abbr())
}

/// The full list of standard benchmark columns, in table order.
pub fn standard_columns() -> Vec<ColumnDescriptor> {
    use ColumnKind::{Boolean, Float, Integer, String as Text};
    use Preference::{High, Low, Neutral};

    let mut cols = vec![
        ColumnDescriptor::new(RUN_DIRECTORY, Text, "Run Directory", Neutral),
        ColumnDescriptor::new(START, Float, "Start Time", Neutral).with_units("s"),
        ColumnDescriptor::new(STOP, Float, "Stop Time", Neutral).with_units("s"),
        ColumnDescriptor::new(DURATION, Float, "Duration", Neutral).with_units("s"),
        ColumnDescriptor::new(PLATFORM, Text, "Platform", Neutral),
        ColumnDescriptor::new(PLATFORM_VERSION, Text, "Platform Version", Neutral),
        ColumnDescriptor::new(MODEL, Text, "Model", Neutral),
        ColumnDescriptor::new(GPU, Text, "Accelerator", Neutral),
        ColumnDescriptor::new(IS_PD, Boolean, "P/D Disaggregated", Neutral),
    ];

    for (prefix, side) in [("", ""), ("P_", "Prefill "), ("D_", "Decode ")] {
        for (name, label) in [
            ("TP", "TP"),
            ("DP", "DP"),
            ("PP", "PP"),
            ("EP", "EP"),
            ("Replicas", "Replicas"),
        ] {
            cols.push(ColumnDescriptor::new(
                format!("{}{}", prefix, name),
                Integer,
                format!("{}{}", side, label),
                Neutral,
            ));
        }
    }

    cols.extend([
        ColumnDescriptor::new(NUM_GPUS, Integer, "Number of GPUs", Low),
        ColumnDescriptor::new(KV_CACHE_SCORER_WEIGHT, Float, "KV Cache Scorer Weight", Neutral),
        ColumnDescriptor::new(QUEUE_SCORER_WEIGHT, Float, "Queue Scorer Weight", Neutral),
        ColumnDescriptor::new(
            PREFIX_CACHE_SCORER_WEIGHT,
            Float,
            "Prefix Cache Scorer Weight",
            Neutral,
        ),
        ColumnDescriptor::new(
            PREFIX_CACHE_SCORER_BLOCK_SIZE,
            Integer,
            "Prefix Cache Scorer Block Size",
            Neutral,
        ),
        ColumnDescriptor::new(
            PREFIX_CACHE_SCORER_LRU_CAPACITY,
            Integer,
            "Prefix Cache Scorer LRU Capacity per Server",
            Neutral,
        ),
        ColumnDescriptor::new(
            PREFIX_CACHE_SCORER_MAX_BLOCKS,
            Integer,
            "Prefix Cache Scorer Max Blocks to Match",
            Neutral,
        ),
        ColumnDescriptor::new(HARNESS, Text, "Harness", Neutral),
        ColumnDescriptor::new(MAX_CONCURRENCY, Integer, "Max Concurrency", Neutral),
        ColumnDescriptor::new(MAX_QPS, Float, "Max QPS", Neutral).with_units("queries/s"),
        ColumnDescriptor::new(ISL, Float, "Input Sequence Length", Neutral).with_units("tokens"),
        ColumnDescriptor::new(OSL, Float, "Output Sequence Length", Neutral).with_units("tokens"),
        ColumnDescriptor::new(TOTAL_REQUESTS, Integer, "Total Requests", Neutral),
        ColumnDescriptor::new(FAILURES, Integer, "Failures", Low),
        ColumnDescriptor::new(REQUEST_THROUGHPUT, Float, "Request Throughput", High)
            .with_units("queries/s"),
        ColumnDescriptor::new(OUTPUT_TOKEN_THROUGHPUT, Float, "Output Token Throughput", High)
            .with_units("tok/s"),
        ColumnDescriptor::new(TOTAL_TOKEN_THROUGHPUT, Float, "Total Token Throughput", High)
            .with_units("tok/s"),
        ColumnDescriptor::new(THPT_PER_GPU, Float, "Throughput per GPU", High)
            .with_units("tok/s/GPU"),
        ColumnDescriptor::new(THPT_PER_USER, Float, "Throughput per User", High)
            .with_units("tok/s/user"),
    ]);

    for family in LatencyFamily::ALL {
        for stat in LatencyStat::ALL {
            cols.push(
                ColumnDescriptor::new(
                    latency_column(stat, family),
                    Float,
                    format!("{} {}", stat.label(), family.abbr()),
                    Low,
                )
                .with_units("ms"),
            );
        }
    }

    cols
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_latency_column_names() {
        assert_eq!(latency_column(LatencyStat::Mean, LatencyFamily::Ttft), "Mean_TTFT_ms");
        assert_eq!(latency_column(LatencyStat::P99_9, LatencyFamily::E2el), "P99.9_E2EL_ms");
        assert_eq!(latency_column(LatencyStat::P0_1, LatencyFamily::Itl), "P0.1_ITL_ms");
    }

    #[test]
    fn test_standard_columns_unique() {
        let cols = standard_columns();
        let names: BTreeSet<_> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), cols.len());
    }

    #[test]
    fn test_standard_columns_count() {
        // 9 identity + 15 parallelism + 1 GPU count + 6 scheduler
        // + 5 workload + 2 outcomes + 5 throughput + 60 latency
        assert_eq!(standard_columns().len(), 103);
    }

    #[test]
    fn test_latency_columns_are_low_and_float() {
        for col in standard_columns().iter().filter(|c| c.name.ends_with("_ms")) {
            assert_eq!(col.preference, Preference::Low, "{}", col.name);
            assert_eq!(col.kind, ColumnKind::Float, "{}", col.name);
        }
    }

    #[test]
    fn test_throughput_columns_are_high() {
        let cols = standard_columns();
        for name in [
            REQUEST_THROUGHPUT,
            OUTPUT_TOKEN_THROUGHPUT,
            TOTAL_TOKEN_THROUGHPUT,
            THPT_PER_GPU,
            THPT_PER_USER,
        ] {
            let col = cols.iter().find(|c| c.name == name).unwrap();
            assert_eq!(col.preference, Preference::High);
        }
    }
}
