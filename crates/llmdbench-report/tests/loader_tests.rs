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

//! Integration tests for report discovery and loading.

use llmdbench_core::{columns, ColumnRegistry, RunTable, Value};
use llmdbench_report::{
    find_report_files, load_report_file, Ingestor, LoadConfig, LoadedReport, ReportError,
};
use llmdbench_test::fixtures::{AGGREGATE_YAML, DISAGGREGATED_YAML, INFERENCE_PERF_JSON};
use llmdbench_test::write_fixture;
use tempfile::TempDir;

fn report_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "run-a/benchmark_report.yaml", AGGREGATE_YAML).unwrap();
    write_fixture(dir.path(), "run-b/benchmark_report_1.yml", DISAGGREGATED_YAML).unwrap();
    write_fixture(dir.path(), "run-c/nested/benchmark_report.json", INFERENCE_PERF_JSON).unwrap();
    write_fixture(dir.path(), "run-a/notes.yaml", "not: a report\n").unwrap();
    write_fixture(dir.path(), "run-a/benchmark_report.txt", "ignored").unwrap();
    dir
}

// ==================== Discovery ====================

#[test]
fn test_find_report_files_recursive_and_sorted() {
    let dir = report_tree();
    let files = find_report_files(dir.path(), &LoadConfig::default()).unwrap();
    let relative: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        relative,
        vec![
            "run-a/benchmark_report.yaml",
            "run-b/benchmark_report_1.yml",
            "run-c/nested/benchmark_report.json",
        ]
    );
}

#[test]
fn test_find_report_files_non_recursive() {
    let dir = report_tree();
    write_fixture(dir.path(), "benchmark_report_top.yaml", AGGREGATE_YAML).unwrap();
    let config = LoadConfig::builder().recursive(false).build();
    let files = find_report_files(dir.path(), &config).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_find_report_files_single_file_ignores_prefix() {
    let dir = report_tree();
    let path = write_fixture(dir.path(), "custom.yaml", AGGREGATE_YAML).unwrap();
    let files = find_report_files(&path, &LoadConfig::default()).unwrap();
    assert_eq!(files, vec![path]);
}

// ==================== Loading ====================

#[test]
fn test_load_yaml_and_json_by_extension() {
    let dir = report_tree();
    let config = LoadConfig::default();
    let yaml = load_report_file(&dir.path().join("run-a/benchmark_report.yaml"), &config).unwrap();
    let json =
        load_report_file(&dir.path().join("run-c/nested/benchmark_report.json"), &config).unwrap();
    assert_eq!(yaml.scenario.host.roles.len(), 2);
    assert_eq!(json.metrics.requests.total, 960);
}

#[test]
fn test_load_rejects_large_files() {
    let dir = report_tree();
    let config = LoadConfig::builder().max_file_size(16).build();
    let err = load_report_file(&dir.path().join("run-a/benchmark_report.yaml"), &config)
        .unwrap_err();
    assert!(matches!(err, ReportError::FileTooLarge { max_size: 16, .. }));
}

#[test]
fn test_load_missing_file() {
    let err = load_report_file(
        std::path::Path::new("/no/such/benchmark_report.yaml"),
        &LoadConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}

#[test]
fn test_load_not_a_report() {
    let dir = report_tree();
    let err = load_report_file(&dir.path().join("run-a/notes.yaml"), &LoadConfig::default())
        .unwrap_err();
    assert!(matches!(err, ReportError::Malformed { .. }));
}

// ==================== Run directory ====================

#[test]
fn test_loaded_reports_record_run_directory() {
    let dir = report_tree();
    let config = LoadConfig::default();
    let loaded: Vec<LoadedReport> = find_report_files(dir.path(), &config)
        .unwrap()
        .iter()
        .map(|path| LoadedReport::load(path, &config).unwrap())
        .collect();

    let mut table = RunTable::new(ColumnRegistry::standard());
    Ingestor::new(&mut table).ingest_all(&loaded).unwrap();

    let expected = dir.path().join("run-a").display().to_string();
    assert_eq!(
        table.row(0).unwrap().get(columns::RUN_DIRECTORY).unwrap(),
        &Value::String(expected)
    );
    assert_eq!(table.len(), 3);
}
