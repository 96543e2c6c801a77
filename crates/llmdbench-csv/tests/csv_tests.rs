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

//! CSV conversion of ingested benchmark tables.

use llmdbench_core::{columns, ColumnRegistry, Value};
use llmdbench_csv::{from_csv, from_csv_with_config, to_csv, to_csv_with_config, CsvError, FromCsvConfig, ToCsvConfig};
use llmdbench_test::fixtures::{mixed_table, sweep_table};

// ==================== Round trip ====================

#[test]
fn test_ingested_table_survives_csv() {
    let table = mixed_table();
    let text = to_csv(&table).unwrap();
    let back = from_csv(&text, ColumnRegistry::standard()).unwrap();

    assert_eq!(back.len(), table.len());
    for (a, b) in table.rows().iter().zip(back.rows()) {
        assert_eq!(a.values(), b.values(), "row {}", a.id());
    }
}

#[test]
fn test_projection_reads_back_with_other_columns_null() {
    let table = sweep_table();
    let config = ToCsvConfig {
        columns: Some(vec![
            columns::MAX_CONCURRENCY.to_string(),
            columns::THPT_PER_GPU.to_string(),
        ]),
        include_row_id: true,
        ..Default::default()
    };
    let text = to_csv_with_config(&table, &config).unwrap();
    assert!(text.starts_with("Row_Id,Max_Concurrency,Thpt_per_GPU\n"));

    let back = from_csv(&text, ColumnRegistry::standard()).unwrap();
    let row = back.row(0).unwrap();
    assert!(row.get(columns::MODEL).unwrap().is_null());
    assert_eq!(
        row.get(columns::MAX_CONCURRENCY).unwrap(),
        table.row(0).unwrap().get(columns::MAX_CONCURRENCY).unwrap()
    );
}

#[test]
fn test_semicolon_delimiter_both_ways() {
    let table = mixed_table();
    let out = ToCsvConfig {
        delimiter: b';',
        ..Default::default()
    };
    let input = FromCsvConfig {
        delimiter: b';',
        ..Default::default()
    };
    let text = to_csv_with_config(&table, &out).unwrap();
    let back = from_csv_with_config(&text, ColumnRegistry::standard(), &input).unwrap();
    assert_eq!(back.len(), table.len());
}

// ==================== Hand-written input ====================

#[test]
fn test_spreadsheet_export_is_queryable() {
    let text = "\
Model,GPU,Num_GPUs,Thpt_per_GPU,Mean_TTFT_ms
llama,H100,2,400,35.5
llama,H100,4,390,20
llama,A100,2,,50
";
    let table = from_csv(text, ColumnRegistry::standard()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.row(1).unwrap().get(columns::THPT_PER_GPU).unwrap(),
        &Value::Float(390.0)
    );
    assert!(table.row(2).unwrap().get(columns::THPT_PER_GPU).unwrap().is_null());

    let front = llmdbench_core::pareto_front(&table, columns::THPT_PER_GPU, "Mean_TTFT_ms", true)
        .unwrap();
    assert_eq!(front.ids(), vec![1, 0]);
}

#[test]
fn test_nan_cells_import_as_null() {
    let text = "Thpt_per_GPU,Mean_TTFT_ms\nNaN,NaN\n100,10\n50,20\n";
    let table = from_csv(text, ColumnRegistry::standard()).unwrap();
    assert!(table.row(0).unwrap().get(columns::THPT_PER_GPU).unwrap().is_null());

    let front = llmdbench_core::pareto_front(&table, columns::THPT_PER_GPU, "Mean_TTFT_ms", false)
        .unwrap();
    assert_eq!(front.ids(), vec![1]);
}

#[test]
fn test_imported_scenarios_each_select_rows() {
    for text in ["Model,ISL\na,NaN\na,100\n", "Model,ISL\na,-0.0\na,0.0\n"] {
        let table = from_csv(text, ColumnRegistry::standard()).unwrap();
        let scenarios = llmdbench_core::list_scenarios(&table, &[columns::MODEL, columns::ISL]).unwrap();
        assert_eq!(scenarios.len(), 1, "{}", text);
        let total: usize = scenarios
            .iter()
            .map(|s| llmdbench_core::select(&table, s).len())
            .sum();
        assert!(total > 0 && total <= table.len(), "{}", text);
    }
}

#[test]
fn test_quoted_model_name_with_delimiter() {
    let text = "Model,TP\n\"org/model, v2\",1\n";
    let table = from_csv(text, ColumnRegistry::standard()).unwrap();
    assert_eq!(
        table.row(0).unwrap().get(columns::MODEL).unwrap(),
        &Value::from("org/model, v2")
    );
}

#[test]
fn test_error_mentions_column() {
    let err = from_csv("Model,Num_GPUs\nm,4.5\n", ColumnRegistry::standard()).unwrap_err();
    assert!(matches!(err, CsvError::TypeMismatch { .. }));
    assert!(err.to_string().contains("Num_GPUs"));
}
