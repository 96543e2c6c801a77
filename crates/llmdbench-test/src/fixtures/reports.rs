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

//! Canonical benchmark report documents.

use crate::fixtures::builders::ReportBuilder;
use llmdbench_report::{BenchmarkReport, LatencyUnits, LoadGenerator};
use serde_json::json;

/// Two replicas at tp=2, 1000 output tokens/s, TTFT reported in seconds.
pub const AGGREGATE_YAML: &str = r#"version: "0.1"
scenario:
  model:
    name: meta-llama/Llama-3.1-70B-Instruct
  host:
    type: [replica, replica]
    accelerator:
      - model: H100
        count: 2
        parallelism: { tp: 2, dp: 1, pp: 1, ep: 1 }
  platform:
    engine:
      - name: vllm
        version: 0.9.1
    metadata:
      inferenceScheduler:
        plugins:
          - type: prefix-cache-scorer
            parameters:
              blockSize: 64
              lruCapacityPerServer: 31250
              maxPrefixBlocksToMatch: 256
          - type: queue-scorer
        schedulingProfiles:
          - name: default
            plugins:
              - pluginRef: prefix-cache-scorer
                weight: 3
              - pluginRef: queue-scorer
  load:
    name: vllm-benchmark
    args:
      max_concurrency: 32
      request_rate: inf
metrics:
  time:
    start: 1700000000.0
    stop: 1700000600.0
    duration: 600.0
  requests:
    total: 1000
    failures: 2
    input_length: { mean: 1000 }
    output_length: { mean: 250 }
  throughput:
    requests_per_sec: 4.0
    output_tokens_per_sec: 1000.0
    total_tokens_per_sec: 5000.0
  latency:
    time_to_first_token:
      units: s
      mean: 0.5
      stddev: 0.1
      min: 0.2
      p50: 0.45
      p99: 1.2
      p99.9: 1.5
      max: 2.0
    time_per_output_token:
      units: ms/token
      mean: 25.0
      p99: 40.0
    request_latency:
      units: s
      mean: 6.75
"#;

/// One prefill host at tp=1 and two decode hosts at tp=2 driven by GuideLLM.
pub const DISAGGREGATED_YAML: &str = r#"scenario:
  model:
    name: Qwen/Qwen3-32B
  host:
    type: [prefill, decode, decode]
    accelerator:
      - model: H200
        count: 1
        parallelism: { tp: 1, dp: 1, pp: 1 }
      - model: H200
        count: 2
        parallelism: { tp: 2, dp: 1, pp: 1 }
      - model: H200
        count: 2
        parallelism: { tp: 2, dp: 1, pp: 1 }
  load:
    name: guidellm
    args:
      profile:
        measured_concurrencies: [10, 20, 40]
        measured_rates: [2.5, 5.0, 10.0]
metrics:
  requests:
    total: 500
    input_length: { mean: 8000 }
    output_length: { mean: 1000 }
  throughput:
    requests_per_sec: 2.0
    output_tokens_per_sec: 2000.0
    total_tokens_per_sec: 18000.0
  latency:
    time_to_first_token: { units: ms, mean: 350.0, p99: 900.0 }
    inter_token_latency: { units: s/token, mean: 0.02, p99: 0.05 }
"#;

/// inference-perf run in JSON with a fixed-rate stage.
pub const INFERENCE_PERF_JSON: &str = r#"{
  "scenario": {
    "model": {"name": "mistralai/Mistral-7B-Instruct-v0.3"},
    "host": {
      "type": ["replica"],
      "accelerator": [{"model": "A100", "count": 1, "parallelism": {"tp": 1}}]
    },
    "load": {
      "name": "inference-perf",
      "args": {"load": {"type": "constant", "stages": [{"rate": 8, "duration": 120}]}}
    }
  },
  "metrics": {
    "requests": {"total": 960, "failures": 0},
    "throughput": {
      "requests_per_sec": 8.0,
      "output_tokens_per_sec": 1600.0,
      "total_tokens_per_sec": 9600.0
    },
    "latency": {
      "time_to_first_token": {"units": "ms", "mean": 42.0, "p99": 80.0}
    }
  }
}
"#;

/// A sweep over concurrency for one model and accelerator.
///
/// Throughput rises and latency worsens with concurrency, so every report
/// lies on the throughput/TTFT Pareto front.
pub fn concurrency_sweep() -> Vec<BenchmarkReport> {
    [(1, 120.0, 40.0), (8, 700.0, 90.0), (32, 1800.0, 210.0), (64, 2100.0, 480.0)]
        .into_iter()
        .map(|(concurrency, tps, ttft)| {
            ReportBuilder::new()
                .replicas(1, 2)
                .concurrency(concurrency)
                .output_tokens_per_sec(tps)
                .ttft(LatencyUnits::Milliseconds, ttft, ttft * 2.0)
                .build()
        })
        .collect()
}

/// Reports spanning two models, two accelerators and three generators.
pub fn mixed_reports() -> Vec<BenchmarkReport> {
    vec![
        ReportBuilder::new()
            .model("model-a")
            .gpu("H100")
            .replicas(1, 1)
            .concurrency(16)
            .output_tokens_per_sec(500.0)
            .ttft(LatencyUnits::Milliseconds, 80.0, 150.0)
            .build(),
        ReportBuilder::new()
            .model("model-a")
            .gpu("H100")
            .replicas(2, 1)
            .concurrency(16)
            .output_tokens_per_sec(900.0)
            .ttft(LatencyUnits::Milliseconds, 60.0, 110.0)
            .build(),
        ReportBuilder::new()
            .model("model-a")
            .gpu("A100")
            .replicas(1, 2)
            .load(
                LoadGenerator::GuideLlm,
                json!({"profile": {"measured_concurrencies": [16], "measured_rates": [4.0]}}),
            )
            .output_tokens_per_sec(400.0)
            .ttft(LatencyUnits::Seconds, 0.12, 0.3)
            .build(),
        ReportBuilder::new()
            .model("model-b")
            .gpu("H100")
            .disaggregated((1, 2), (1, 4))
            .load(LoadGenerator::Fmperf, json!({}))
            .output_tokens_per_sec(1200.0)
            .ttft(LatencyUnits::Milliseconds, 200.0, 400.0)
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmdbench_report::{from_json_str, from_yaml_str};

    #[test]
    fn test_documents_parse() {
        assert!(from_yaml_str(AGGREGATE_YAML).is_ok());
        assert!(from_yaml_str(DISAGGREGATED_YAML).is_ok());
        assert!(from_json_str(INFERENCE_PERF_JSON).is_ok());
    }

    #[test]
    fn test_builders_are_valid() {
        for report in concurrency_sweep().iter().chain(mixed_reports().iter()) {
            assert!(report.validate().is_ok());
        }
    }
}
