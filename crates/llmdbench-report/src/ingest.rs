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

//! Conversion of benchmark reports into run rows.

use crate::error::{ReportError, Result};
use crate::loader::LoadedReport;
use crate::report::{Accelerator, BenchmarkReport, HostRole, LoadGenerator};
use llmdbench_core::columns::{self, latency_column, LatencyFamily, LatencyStat};
use llmdbench_core::{ColumnRegistry, RunRow, RunRowBuilder, RunTable};
use serde_json::Value as JsonValue;
use std::path::Path;

const PREFIX_CACHE_SCORER: &str = "prefix-cache-scorer";
const KV_CACHE_SCORER: &str = "kv-cache-scorer";
const QUEUE_SCORER: &str = "queue-scorer";

/// Convert one report into a row for `registry`.
///
/// The report is validated first. Derived metrics that cannot be computed
/// (throughput per user without a known concurrency, for instance) are null.
///
/// # Errors
///
/// - [`ReportError::Malformed`] if the report fails validation
/// - [`ReportError::Core`] if `registry` lacks a standard column
pub fn to_row(registry: &ColumnRegistry, report: &BenchmarkReport) -> Result<RunRow> {
    to_row_with_origin(registry, report, None)
}

/// Like [`to_row`], recording the report's location in `Run_Directory`.
///
/// `origin` is the report file; its parent directory becomes the run
/// directory.
pub fn to_row_with_origin(
    registry: &ColumnRegistry,
    report: &BenchmarkReport,
    origin: Option<&Path>,
) -> Result<RunRow> {
    report.validate()?;

    let mut row = RunRowBuilder::new(registry);
    let scenario = &report.scenario;
    let metrics = &report.metrics;

    // Run identity
    let run_directory = origin
        .and_then(Path::parent)
        .map(|dir| dir.display().to_string());
    row.set(columns::RUN_DIRECTORY, run_directory)?;
    if let Some(time) = &metrics.time {
        row.set(columns::START, time.start)?;
        row.set(columns::STOP, time.stop)?;
        row.set(columns::DURATION, time.duration)?;
    }
    if let Some(engine) = scenario.platform.engine.first() {
        row.set(columns::PLATFORM, engine.name.as_str())?;
        row.set(columns::PLATFORM_VERSION, engine.version.clone())?;
    }
    row.set(columns::MODEL, scenario.model.name.as_str())?;

    let num_gpus = set_configuration(&mut row, report)?;

    // Inference scheduler
    let scheduler = scenario
        .platform
        .metadata
        .inference_scheduler
        .clone()
        .unwrap_or_default();
    row.set(columns::KV_CACHE_SCORER_WEIGHT, scheduler.scorer_weight(KV_CACHE_SCORER))?;
    row.set(columns::QUEUE_SCORER_WEIGHT, scheduler.scorer_weight(QUEUE_SCORER))?;
    row.set(
        columns::PREFIX_CACHE_SCORER_WEIGHT,
        scheduler.scorer_weight(PREFIX_CACHE_SCORER),
    )?;
    if let Some(plugin) = scheduler.plugin(PREFIX_CACHE_SCORER) {
        row.set(columns::PREFIX_CACHE_SCORER_BLOCK_SIZE, plugin.int_parameter("blockSize"))?;
        row.set(
            columns::PREFIX_CACHE_SCORER_LRU_CAPACITY,
            plugin.int_parameter("lruCapacityPerServer"),
        )?;
        row.set(
            columns::PREFIX_CACHE_SCORER_MAX_BLOCKS,
            plugin.int_parameter("maxPrefixBlocksToMatch"),
        )?;
    }

    // Workload
    let load = &scenario.load;
    let concurrency = max_concurrency(load.name, &load.args);
    row.set(columns::HARNESS, load.name.as_str())?;
    row.set(columns::MAX_CONCURRENCY, concurrency)?;
    row.set(columns::MAX_QPS, max_qps(load.name, &load.args))?;
    row.set(columns::ISL, metrics.requests.input_length.as_ref().map(|l| l.mean))?;
    row.set(columns::OSL, metrics.requests.output_length.as_ref().map(|l| l.mean))?;

    // Outcomes and throughput
    let output_tps = metrics.throughput.output_tokens_per_sec;
    row.set(columns::TOTAL_REQUESTS, metrics.requests.total)?;
    row.set(columns::FAILURES, metrics.requests.failures)?;
    row.set(columns::REQUEST_THROUGHPUT, metrics.throughput.requests_per_sec)?;
    row.set(columns::OUTPUT_TOKEN_THROUGHPUT, output_tps)?;
    row.set(columns::TOTAL_TOKEN_THROUGHPUT, metrics.throughput.total_tokens_per_sec)?;
    row.set(columns::THPT_PER_GPU, per_unit(output_tps, num_gpus as f64))?;
    row.set(
        columns::THPT_PER_USER,
        concurrency.and_then(|c| per_unit(output_tps, c as f64)),
    )?;

    // Latency, normalized to milliseconds
    for family in LatencyFamily::ALL {
        let Some(stats) = metrics.latency.family(family) else {
            continue;
        };
        for stat in LatencyStat::ALL {
            row.set(&latency_column(stat, family), stats.stat_millis(stat))?;
        }
    }

    tracing::debug!(
        model = %scenario.model.name,
        harness = %load.name,
        num_gpus,
        "converted benchmark report"
    );

    Ok(row.build())
}

/// Fill the parallelism columns and return the total accelerator count.
fn set_configuration(row: &mut RunRowBuilder<'_>, report: &BenchmarkReport) -> Result<u64> {
    let host = &report.scenario.host;
    let disaggregated = host.is_disaggregated();
    row.set(columns::IS_PD, disaggregated)?;

    if !disaggregated {
        let replicas = host.count(HostRole::Replica) as u64;
        let acc = accelerator(host.accelerator_for(HostRole::Replica), HostRole::Replica)?;
        let p = acc.parallelism;
        row.set(columns::GPU, acc.model.as_str())?;
        row.set(columns::TP, i64::from(p.tp))?;
        row.set(columns::DP, i64::from(p.dp))?;
        row.set(columns::PP, i64::from(p.pp))?;
        row.set(columns::EP, i64::from(p.ep))?;
        row.set(columns::REPLICAS, replicas)?;
        let total = p.accelerators_per_replica() * replicas;
        row.set(columns::NUM_GPUS, total)?;
        return Ok(total);
    }

    let sides = [
        (
            HostRole::Prefill,
            [columns::P_TP, columns::P_DP, columns::P_PP, columns::P_EP, columns::P_REPLICAS],
        ),
        (
            HostRole::Decode,
            [columns::D_TP, columns::D_DP, columns::D_PP, columns::D_EP, columns::D_REPLICAS],
        ),
    ];

    let mut total = 0;
    let mut gpu: Option<&str> = None;
    for (role, [tp, dp, pp, ep, reps]) in sides {
        let replicas = host.count(role) as u64;
        if replicas == 0 {
            continue;
        }
        let acc = accelerator(host.accelerator_for(role), role)?;
        let p = acc.parallelism;
        row.set(tp, i64::from(p.tp))?;
        row.set(dp, i64::from(p.dp))?;
        row.set(pp, i64::from(p.pp))?;
        row.set(ep, i64::from(p.ep))?;
        row.set(reps, replicas)?;
        total += p.accelerators_per_replica() * replicas;
        gpu.get_or_insert(acc.model.as_str());
    }
    row.set(columns::GPU, gpu)?;
    row.set(columns::NUM_GPUS, total)?;
    Ok(total)
}

fn accelerator(acc: Option<&Accelerator>, role: HostRole) -> Result<&Accelerator> {
    acc.ok_or_else(|| ReportError::malformed(format!("no accelerator entry for {} hosts", role)))
}

/// `numerator / denominator`, or `None` when the denominator is not positive.
fn per_unit(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

/// Concurrency the generator drove the server at.
pub fn max_concurrency(generator: LoadGenerator, args: &JsonValue) -> Option<i64> {
    let value = match generator {
        LoadGenerator::VllmBenchmark => args.get("max_concurrency"),
        LoadGenerator::GuideLlm => args.pointer("/profile/measured_concurrencies/0"),
        LoadGenerator::InferencePerf | LoadGenerator::Fmperf => None,
    }?;
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        JsonValue::Null => None,
        other => {
            tracing::warn!(%generator, value = %other, "ignoring non-numeric concurrency");
            None
        }
    }
}

/// Request rate the generator targeted, `None` for unbounded rates.
pub fn max_qps(generator: LoadGenerator, args: &JsonValue) -> Option<f64> {
    let value = match generator {
        LoadGenerator::VllmBenchmark => args.get("request_rate"),
        LoadGenerator::GuideLlm => args.pointer("/profile/measured_rates/0"),
        LoadGenerator::InferencePerf => args.pointer("/load/stages/0/rate"),
        LoadGenerator::Fmperf => None,
    }?;
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) if s.eq_ignore_ascii_case("inf") => None,
        JsonValue::String(s) => match s.parse::<f64>() {
            Ok(rate) if rate.is_finite() => Some(rate),
            _ => {
                tracing::warn!(%generator, value = %s, "ignoring unparsable request rate");
                None
            }
        },
        _ => None,
    }
}

/// Appends converted reports to a table.
///
/// Each report goes through [`to_row_with_origin`]; a report that fails to
/// convert never leaves a partial row behind.
#[derive(Debug)]
pub struct Ingestor<'t, 'r> {
    table: &'t mut RunTable<'r>,
}

impl<'t, 'r> Ingestor<'t, 'r> {
    /// Create an ingestor appending to `table`.
    pub fn new(table: &'t mut RunTable<'r>) -> Self {
        Self { table }
    }

    /// Convert and append one report. Returns the new row id.
    pub fn ingest(&mut self, report: &BenchmarkReport) -> Result<usize> {
        self.ingest_from(report, None)
    }

    /// Convert and append one report loaded from `origin`.
    pub fn ingest_from(&mut self, report: &BenchmarkReport, origin: Option<&Path>) -> Result<usize> {
        let row = to_row_with_origin(self.table.registry(), report, origin)?;
        Ok(self.table.append(row)?)
    }

    /// Convert every report, then append them in order.
    ///
    /// Conversion happens before any append, so on error the table is
    /// unchanged. Returns the new row ids.
    pub fn ingest_all<'a, I>(&mut self, reports: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = &'a LoadedReport>,
    {
        let registry = self.table.registry();
        let rows = reports
            .into_iter()
            .map(|loaded| to_row_with_origin(registry, &loaded.report, loaded.path.as_deref()))
            .collect::<Result<Vec<_>>>()?;

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(self.table.append(row)?);
        }
        tracing::debug!(rows = ids.len(), "ingested benchmark reports");
        Ok(ids)
    }

    /// The destination table.
    pub fn table(&self) -> &RunTable<'r> {
        &*self.table
    }
}

/// Convert and append one report to `table`. Returns the new row id.
pub fn ingest(table: &mut RunTable<'_>, report: &BenchmarkReport) -> Result<usize> {
    Ingestor::new(table).ingest(report)
}
