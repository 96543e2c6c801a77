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

//! Query benchmarks.
//!
//! Measures the quadratic Pareto front and the linear SLO filter over
//! synthetic tables of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use llmdbench_core::{columns, meets_all, pareto_front, ColumnRegistry, RunTable, Slo};

const SIZES: [usize; 3] = [100, 1_000, 5_000];
const TTFT: &str = "Mean_TTFT_ms";

fn synthetic_table(n: usize) -> RunTable<'static> {
    let mut table = RunTable::new(ColumnRegistry::standard());
    for i in 0..n {
        // Deterministic spread that leaves a front of moderate size.
        let thpt = ((i * 7919) % 1000) as f64;
        let ttft = ((i * 104_729) % 997) as f64 + thpt / 10.0;
        let mut row = table.row_builder();
        if row.set(columns::THPT_PER_GPU, thpt).is_err() || row.set(TTFT, ttft).is_err() {
            continue;
        }
        if table.append(row.build()).is_err() {
            break;
        }
    }
    table
}

fn bench_pareto(c: &mut Criterion) {
    let mut group = c.benchmark_group("pareto_front");
    for &size in &SIZES {
        let table = synthetic_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| pareto_front(black_box(table), columns::THPT_PER_GPU, TTFT, true))
        });
    }
    group.finish();
}

fn bench_slo(c: &mut Criterion) {
    let mut group = c.benchmark_group("meets_all");
    let registry = ColumnRegistry::standard();
    let slos = match (
        Slo::new(registry, TTFT, 500.0),
        Slo::new(registry, columns::THPT_PER_GPU, 250.0),
    ) {
        (Ok(a), Ok(b)) => vec![a, b],
        _ => return,
    };
    for &size in &SIZES {
        let table = synthetic_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| meets_all(black_box(table), &slos))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pareto, bench_slo);
criterion_main!(benches);
