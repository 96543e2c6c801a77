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

//! Integration tests for report conversion.

use llmdbench_core::columns::{self, latency_column, LatencyFamily, LatencyStat};
use llmdbench_core::{ColumnRegistry, RunTable, Value};
use llmdbench_report::{
    from_json_str, from_yaml_str, ingest, to_row, Accelerator, HostRole, Ingestor, LatencyUnits,
    LoadGenerator, LoadedReport, Parallelism, ReportError,
};
use llmdbench_test::fixtures::builders::{accelerator, ReportBuilder};
use llmdbench_test::fixtures::{self, AGGREGATE_YAML, DISAGGREGATED_YAML, INFERENCE_PERF_JSON};
use serde_json::json;

fn single(report: &llmdbench_report::BenchmarkReport) -> RunTable<'static> {
    let mut table = RunTable::new(ColumnRegistry::standard());
    ingest(&mut table, report).unwrap();
    table
}

fn value(table: &RunTable<'_>, column: &str) -> Value {
    table.row(0).unwrap().get(column).unwrap().clone()
}

// ==================== Accelerator counting ====================

#[test]
fn test_aggregate_counts_replicas() {
    let report = ReportBuilder::new()
        .replicas(2, 2)
        .output_tokens_per_sec(1000.0)
        .build();
    let table = single(&report);

    assert_eq!(value(&table, columns::IS_PD), Value::Bool(false));
    assert_eq!(value(&table, columns::TP), Value::Int(2));
    assert_eq!(value(&table, columns::REPLICAS), Value::Int(2));
    assert_eq!(value(&table, columns::NUM_GPUS), Value::Int(4));
    assert_eq!(value(&table, columns::THPT_PER_GPU), Value::Float(250.0));
    assert!(value(&table, columns::P_TP).is_null());
}

#[test]
fn test_aggregate_multiplies_dp_and_pp() {
    let report = ReportBuilder::new().replicas(3, 2).dp_pp(2, 2).build();
    let table = single(&report);
    assert_eq!(value(&table, columns::NUM_GPUS), Value::Int(24));
}

#[test]
fn test_disaggregated_sums_both_sides() {
    let report = from_yaml_str(DISAGGREGATED_YAML).unwrap();
    let table = single(&report);

    assert_eq!(value(&table, columns::IS_PD), Value::Bool(true));
    assert_eq!(value(&table, columns::P_TP), Value::Int(1));
    assert_eq!(value(&table, columns::P_REPLICAS), Value::Int(1));
    assert_eq!(value(&table, columns::D_TP), Value::Int(2));
    assert_eq!(value(&table, columns::D_REPLICAS), Value::Int(2));
    assert_eq!(value(&table, columns::NUM_GPUS), Value::Int(5));
    assert_eq!(value(&table, columns::THPT_PER_GPU), Value::Float(400.0));
    assert_eq!(value(&table, columns::GPU), Value::from("H200"));
    assert!(value(&table, columns::TP).is_null());
    assert!(value(&table, columns::REPLICAS).is_null());
}

#[test]
fn test_disaggregated_with_one_entry_per_side() {
    let report = ReportBuilder::new()
        .host(
            vec![HostRole::Prefill, HostRole::Decode, HostRole::Decode],
            vec![accelerator("H100", 1, 1), accelerator("H100", 2, 2)],
        )
        .build();
    let table = single(&report);
    assert_eq!(value(&table, columns::NUM_GPUS), Value::Int(5));
}

#[test]
fn test_decode_only_counts_missing_prefill_as_zero() {
    let report = ReportBuilder::new().disaggregated((0, 1), (2, 4)).build();
    let table = single(&report);
    assert_eq!(value(&table, columns::NUM_GPUS), Value::Int(8));
    assert!(value(&table, columns::P_TP).is_null());
    assert_eq!(value(&table, columns::D_REPLICAS), Value::Int(2));
}

// ==================== Unit normalization ====================

#[test]
fn test_seconds_are_scaled_to_milliseconds() {
    let report = from_yaml_str(AGGREGATE_YAML).unwrap();
    let table = single(&report);
    let row = table.row(0).unwrap();

    let ttft = |stat| row.get_f64(&latency_column(stat, LatencyFamily::Ttft));
    assert_eq!(ttft(LatencyStat::Mean), Some(500.0));
    assert_eq!(ttft(LatencyStat::P99), Some(1200.0));
    assert_eq!(ttft(LatencyStat::P99_9), Some(1500.0));
    assert_eq!(ttft(LatencyStat::Max), Some(2000.0));
    assert_eq!(ttft(LatencyStat::P90), None);

    assert_eq!(row.get_f64("Mean_TPOT_ms"), Some(25.0));
    assert_eq!(row.get_f64("Mean_E2EL_ms"), Some(6750.0));
    assert_eq!(row.get_f64("Mean_ITL_ms"), None);
}

#[test]
fn test_seconds_per_token_are_scaled() {
    let report = from_yaml_str(DISAGGREGATED_YAML).unwrap();
    let table = single(&report);
    let row = table.row(0).unwrap();
    assert_eq!(row.get_f64("Mean_ITL_ms"), Some(20.0));
    assert_eq!(row.get_f64("P99_ITL_ms"), Some(50.0));
    assert_eq!(row.get_f64("Mean_TTFT_ms"), Some(350.0));
}

#[test]
fn test_builder_seconds_ttft() {
    let report = ReportBuilder::new()
        .ttft(LatencyUnits::Seconds, 0.5, 1.0)
        .build();
    let table = single(&report);
    assert_eq!(value(&table, "Mean_TTFT_ms"), Value::Float(500.0));
}

// ==================== Workload extraction ====================

#[test]
fn test_vllm_concurrency_and_infinite_rate() {
    let table = single(&from_yaml_str(AGGREGATE_YAML).unwrap());
    assert_eq!(value(&table, columns::HARNESS), Value::from("vllm-benchmark"));
    assert_eq!(value(&table, columns::MAX_CONCURRENCY), Value::Int(32));
    assert!(value(&table, columns::MAX_QPS).is_null());
    assert_eq!(value(&table, columns::THPT_PER_USER), Value::Float(1000.0 / 32.0));
}

#[test]
fn test_guidellm_first_measurement() {
    let table = single(&from_yaml_str(DISAGGREGATED_YAML).unwrap());
    assert_eq!(value(&table, columns::MAX_CONCURRENCY), Value::Int(10));
    assert_eq!(value(&table, columns::MAX_QPS), Value::Float(2.5));
    assert_eq!(value(&table, columns::THPT_PER_USER), Value::Float(200.0));
}

#[test]
fn test_inference_perf_from_json() {
    let table = single(&from_json_str(INFERENCE_PERF_JSON).unwrap());
    assert_eq!(value(&table, columns::MAX_QPS), Value::Float(8.0));
    assert!(value(&table, columns::MAX_CONCURRENCY).is_null());
    assert!(value(&table, columns::THPT_PER_USER).is_null());
    assert!(value(&table, columns::ISL).is_null());
}

#[test]
fn test_unknown_concurrency_leaves_per_user_null() {
    let report = ReportBuilder::new()
        .load(LoadGenerator::VllmBenchmark, json!({"request_rate": 4}))
        .build();
    let table = single(&report);
    assert!(value(&table, columns::THPT_PER_USER).is_null());
    assert_eq!(value(&table, columns::MAX_QPS), Value::Float(4.0));
}

// ==================== Identity and scheduler ====================

#[test]
fn test_identity_columns() {
    let table = single(&from_yaml_str(AGGREGATE_YAML).unwrap());
    assert_eq!(
        value(&table, columns::MODEL),
        Value::from("meta-llama/Llama-3.1-70B-Instruct")
    );
    assert_eq!(value(&table, columns::GPU), Value::from("H100"));
    assert_eq!(value(&table, columns::PLATFORM), Value::from("vllm"));
    assert_eq!(value(&table, columns::PLATFORM_VERSION), Value::from("0.9.1"));
    assert_eq!(value(&table, columns::DURATION), Value::Float(600.0));
    assert_eq!(value(&table, columns::ISL), Value::Float(1000.0));
    assert_eq!(value(&table, columns::TOTAL_REQUESTS), Value::Int(1000));
    assert_eq!(value(&table, columns::FAILURES), Value::Int(2));
    assert!(value(&table, columns::RUN_DIRECTORY).is_null());
}

#[test]
fn test_scorer_weights_and_prefix_parameters() {
    let table = single(&from_yaml_str(AGGREGATE_YAML).unwrap());
    assert_eq!(value(&table, columns::PREFIX_CACHE_SCORER_WEIGHT), Value::Float(3.0));
    assert_eq!(value(&table, columns::QUEUE_SCORER_WEIGHT), Value::Float(1.0));
    assert_eq!(value(&table, columns::KV_CACHE_SCORER_WEIGHT), Value::Float(0.0));
    assert_eq!(value(&table, columns::PREFIX_CACHE_SCORER_BLOCK_SIZE), Value::Int(64));
    assert_eq!(value(&table, columns::PREFIX_CACHE_SCORER_LRU_CAPACITY), Value::Int(31250));
    assert_eq!(value(&table, columns::PREFIX_CACHE_SCORER_MAX_BLOCKS), Value::Int(256));
}

#[test]
fn test_no_scheduler_means_zero_weights() {
    let table = single(&ReportBuilder::new().build());
    assert_eq!(value(&table, columns::PREFIX_CACHE_SCORER_WEIGHT), Value::Float(0.0));
    assert!(value(&table, columns::PREFIX_CACHE_SCORER_BLOCK_SIZE).is_null());
}

// ==================== Failure handling ====================

#[test]
fn test_invalid_report_leaves_table_unchanged() {
    let mut table = RunTable::new(ColumnRegistry::standard());
    ingest(&mut table, &ReportBuilder::new().build()).unwrap();

    let mixed = ReportBuilder::new()
        .host(
            vec![HostRole::Replica, HostRole::Prefill],
            vec![Accelerator {
                model: "H100".to_string(),
                count: 1,
                parallelism: Parallelism { tp: 1, dp: 1, pp: 1, ep: 1 },
            }],
        )
        .build();
    let err = ingest(&mut table, &mixed).unwrap_err();
    assert!(matches!(err, ReportError::Malformed { .. }));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_ingest_all_is_all_or_nothing() {
    let good = LoadedReport::from(ReportBuilder::new().build());
    let bad = LoadedReport::from(ReportBuilder::new().host(vec![], vec![]).build());

    let mut table = RunTable::new(ColumnRegistry::standard());
    let mut ingestor = Ingestor::new(&mut table);
    assert!(ingestor.ingest_all([&good, &bad, &good]).is_err());
    assert!(ingestor.table().is_empty());

    let ids = ingestor.ingest_all([&good, &good]).unwrap();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_to_row_does_not_touch_a_table() {
    let registry = ColumnRegistry::standard();
    let row = to_row(registry, &ReportBuilder::new().build()).unwrap();
    assert_eq!(row.values().len(), registry.len());
}

#[test]
fn test_fixture_tables_ingest() {
    let table = fixtures::mixed_table();
    let pd: Vec<_> = table.column(columns::IS_PD).unwrap().cloned().collect();
    assert_eq!(pd.last(), Some(&Value::Bool(true)));
}
