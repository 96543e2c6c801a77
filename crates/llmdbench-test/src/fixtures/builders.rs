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

//! Builder pattern for creating customizable benchmark reports.

use llmdbench_report::{
    Accelerator, BenchmarkReport, Engine, Host, HostRole, InferenceScheduler, Latency,
    LatencyStats, LatencyUnits, LengthSummary, Load, LoadGenerator, Metrics, ModelInfo,
    Parallelism, Platform, PlatformMetadata, ReportScenario, Requests, Throughput, TimeRange,
};
use serde_json::{json, Value as JsonValue};

/// Builder for [`BenchmarkReport`] fixtures.
///
/// Starts from a valid single-replica vLLM benchmark run on one H100.
///
/// # Examples
///
/// ```
/// use llmdbench_test::fixtures::builders::ReportBuilder;
///
/// let report = ReportBuilder::new()
///     .model("Qwen/Qwen3-32B")
///     .replicas(2, 4)
///     .output_tokens_per_sec(800.0)
///     .build();
///
/// assert_eq!(report.scenario.host.roles.len(), 2);
/// assert!(report.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    model: String,
    gpu: String,
    roles: Vec<HostRole>,
    accelerators: Vec<Accelerator>,
    engine: Option<Engine>,
    scheduler: Option<InferenceScheduler>,
    generator: LoadGenerator,
    args: JsonValue,
    time: Option<TimeRange>,
    total_requests: u64,
    failures: u64,
    isl: Option<f64>,
    osl: Option<f64>,
    throughput: Throughput,
    latency: Latency,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// Creates a builder for a one-replica, tp=1 run.
    pub fn new() -> Self {
        Self {
            model: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
            gpu: "H100".to_string(),
            roles: vec![HostRole::Replica],
            accelerators: vec![accelerator("H100", 1, 1)],
            engine: None,
            scheduler: None,
            generator: LoadGenerator::VllmBenchmark,
            args: json!({}),
            time: None,
            total_requests: 100,
            failures: 0,
            isl: Some(1000.0),
            osl: Some(100.0),
            throughput: Throughput {
                requests_per_sec: 1.0,
                output_tokens_per_sec: 100.0,
                total_tokens_per_sec: 1100.0,
            },
            latency: Latency::default(),
        }
    }

    /// Sets the model name.
    pub fn model(mut self, name: impl Into<String>) -> Self {
        self.model = name.into();
        self
    }

    /// Sets the accelerator model used by subsequent layout calls.
    pub fn gpu(mut self, model: impl Into<String>) -> Self {
        self.gpu = model.into();
        for acc in &mut self.accelerators {
            acc.model = self.gpu.clone();
        }
        self
    }

    /// Uses `count` replica hosts sharing one accelerator entry with tensor
    /// parallelism `tp`.
    pub fn replicas(mut self, count: usize, tp: u32) -> Self {
        self.roles = vec![HostRole::Replica; count];
        self.accelerators = vec![accelerator(&self.gpu, count as u32, tp)];
        self
    }

    /// Sets data and pipeline parallelism on every accelerator entry.
    pub fn dp_pp(mut self, dp: u32, pp: u32) -> Self {
        for acc in &mut self.accelerators {
            acc.parallelism.dp = dp;
            acc.parallelism.pp = pp;
        }
        self
    }

    /// Uses a prefill/decode layout with one accelerator entry per host.
    ///
    /// Either side may have zero hosts.
    pub fn disaggregated(mut self, prefill: (usize, u32), decode: (usize, u32)) -> Self {
        let (p_count, p_tp) = prefill;
        let (d_count, d_tp) = decode;
        self.roles = std::iter::repeat(HostRole::Prefill)
            .take(p_count)
            .chain(std::iter::repeat(HostRole::Decode).take(d_count))
            .collect();
        self.accelerators = std::iter::repeat(accelerator(&self.gpu, p_count as u32, p_tp))
            .take(p_count)
            .chain(std::iter::repeat(accelerator(&self.gpu, d_count as u32, d_tp)).take(d_count))
            .collect();
        self
    }

    /// Replaces the host layout verbatim.
    pub fn host(mut self, roles: Vec<HostRole>, accelerators: Vec<Accelerator>) -> Self {
        self.roles = roles;
        self.accelerators = accelerators;
        self
    }

    /// Sets the serving engine.
    pub fn engine(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.engine = Some(Engine {
            name: name.into(),
            version: Some(version.into()),
        });
        self
    }

    /// Sets the inference scheduler configuration from its JSON form.
    pub fn scheduler(mut self, config: JsonValue) -> Self {
        self.scheduler = serde_json::from_value(config).ok();
        self
    }

    /// Sets the workload generator and its arguments.
    pub fn load(mut self, generator: LoadGenerator, args: JsonValue) -> Self {
        self.generator = generator;
        self.args = args;
        self
    }

    /// Shorthand for a vLLM benchmark run at a fixed concurrency.
    pub fn concurrency(self, max_concurrency: i64) -> Self {
        self.load(
            LoadGenerator::VllmBenchmark,
            json!({ "max_concurrency": max_concurrency, "request_rate": "inf" }),
        )
    }

    /// Sets the run's wall-clock bounds.
    pub fn time(mut self, start: f64, stop: f64) -> Self {
        self.time = Some(TimeRange {
            start: Some(start),
            stop: Some(stop),
            duration: Some(stop - start),
        });
        self
    }

    /// Sets request counts.
    pub fn requests(mut self, total: u64, failures: u64) -> Self {
        self.total_requests = total;
        self.failures = failures;
        self
    }

    /// Sets mean input and output lengths.
    pub fn lengths(mut self, isl: f64, osl: f64) -> Self {
        self.isl = Some(isl);
        self.osl = Some(osl);
        self
    }

    /// Sets output token throughput.
    pub fn output_tokens_per_sec(mut self, tps: f64) -> Self {
        self.throughput.output_tokens_per_sec = tps;
        self
    }

    /// Sets all three throughput figures.
    pub fn throughput(mut self, requests: f64, output_tokens: f64, total_tokens: f64) -> Self {
        self.throughput = Throughput {
            requests_per_sec: requests,
            output_tokens_per_sec: output_tokens,
            total_tokens_per_sec: total_tokens,
        };
        self
    }

    /// Sets time to first token with a mean and p99.
    pub fn ttft(mut self, units: LatencyUnits, mean: f64, p99: f64) -> Self {
        self.latency.time_to_first_token = Some(stats(units, mean, p99));
        self
    }

    /// Sets time per output token with a mean and p99.
    pub fn tpot(mut self, units: LatencyUnits, mean: f64, p99: f64) -> Self {
        self.latency.time_per_output_token = Some(stats(units, mean, p99));
        self
    }

    /// Sets end-to-end request latency with a mean and p99.
    pub fn e2el(mut self, units: LatencyUnits, mean: f64, p99: f64) -> Self {
        self.latency.request_latency = Some(stats(units, mean, p99));
        self
    }

    /// Builds the report.
    pub fn build(self) -> BenchmarkReport {
        BenchmarkReport {
            version: Some("0.1".to_string()),
            scenario: ReportScenario {
                model: ModelInfo { name: self.model },
                host: Host {
                    roles: self.roles,
                    accelerator: self.accelerators,
                },
                platform: Platform {
                    engine: self.engine.into_iter().collect(),
                    metadata: PlatformMetadata {
                        inference_scheduler: self.scheduler,
                    },
                },
                load: Load {
                    name: self.generator,
                    args: self.args,
                },
            },
            metrics: Metrics {
                time: self.time,
                requests: Requests {
                    total: self.total_requests,
                    failures: self.failures,
                    input_length: self.isl.map(|mean| LengthSummary { mean }),
                    output_length: self.osl.map(|mean| LengthSummary { mean }),
                },
                throughput: self.throughput,
                latency: self.latency,
            },
        }
    }
}

/// Accelerator entry with `dp = pp = ep = 1`.
pub fn accelerator(model: &str, count: u32, tp: u32) -> Accelerator {
    Accelerator {
        model: model.to_string(),
        count,
        parallelism: Parallelism {
            tp,
            dp: 1,
            pp: 1,
            ep: 1,
        },
    }
}

/// Latency distribution with only a mean and p99 set.
pub fn stats(units: LatencyUnits, mean: f64, p99: f64) -> LatencyStats {
    LatencyStats {
        units,
        mean,
        stddev: None,
        min: None,
        p0_1: None,
        p1: None,
        p5: None,
        p10: None,
        p25: None,
        p50: None,
        p75: None,
        p90: None,
        p95: None,
        p99: Some(p99),
        p99_9: None,
        max: None,
    }
}
