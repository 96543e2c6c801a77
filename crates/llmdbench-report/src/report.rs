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

//! Benchmark report schema.
//!
//! These types mirror the benchmark report document produced by the
//! harness converters. Unknown fields are ignored so newer report versions
//! still load. Structural rules that serde cannot express are checked by
//! [`BenchmarkReport::validate`].

use crate::error::{ReportError, Result};
use llmdbench_core::columns::{LatencyFamily, LatencyStat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One benchmark execution as reported by a harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Report schema version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub scenario: ReportScenario,
    pub metrics: Metrics,
}

impl BenchmarkReport {
    /// Check the structural rules of a report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Malformed`] when:
    /// - the model name is empty
    /// - the host role or accelerator list is empty
    /// - replica roles are mixed with prefill/decode roles
    /// - the accelerator list cannot be matched to the host roles
    /// - a parallelism degree is zero
    pub fn validate(&self) -> Result<()> {
        let scenario = &self.scenario;
        if scenario.model.name.trim().is_empty() {
            return Err(ReportError::malformed("scenario.model.name is empty"));
        }

        let host = &scenario.host;
        if host.roles.is_empty() {
            return Err(ReportError::malformed("scenario.host.type is empty"));
        }
        if host.accelerator.is_empty() {
            return Err(ReportError::malformed("scenario.host.accelerator is empty"));
        }

        let replicas = host.count(HostRole::Replica);
        if replicas > 0 && replicas != host.roles.len() {
            return Err(ReportError::malformed(
                "scenario.host.type mixes replica with prefill/decode roles",
            ));
        }

        let groups = host.distinct_roles().len();
        let n = host.accelerator.len();
        if n != 1 && n != groups && n != host.roles.len() {
            return Err(ReportError::malformed(format!(
                "scenario.host.accelerator has {} entries for {} host roles",
                n,
                host.roles.len()
            )));
        }

        for (i, acc) in host.accelerator.iter().enumerate() {
            let p = &acc.parallelism;
            if p.tp == 0 || p.dp == 0 || p.pp == 0 || p.ep == 0 {
                return Err(ReportError::malformed(format!(
                    "scenario.host.accelerator[{}].parallelism has a zero degree",
                    i
                )));
            }
        }

        Ok(())
    }
}

/// Everything that describes how the run was set up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportScenario {
    pub model: ModelInfo,
    pub host: Host,
    #[serde(default)]
    pub platform: Platform,
    pub load: Load,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
}

/// Serving role of one host entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostRole {
    Replica,
    Prefill,
    Decode,
}

impl fmt::Display for HostRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostRole::Replica => write!(f, "replica"),
            HostRole::Prefill => write!(f, "prefill"),
            HostRole::Decode => write!(f, "decode"),
        }
    }
}

/// Host layout: one role per serving pod and the accelerators behind them.
///
/// The accelerator list is either a single shared entry, one entry per
/// distinct role (in order of first appearance), or one entry per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    #[serde(rename = "type")]
    pub roles: Vec<HostRole>,
    pub accelerator: Vec<Accelerator>,
}

impl Host {
    /// Number of host entries with the given role.
    pub fn count(&self, role: HostRole) -> usize {
        self.roles.iter().filter(|r| **r == role).count()
    }

    /// Returns true for prefill/decode disaggregated layouts.
    pub fn is_disaggregated(&self) -> bool {
        self.roles
            .iter()
            .any(|r| matches!(r, HostRole::Prefill | HostRole::Decode))
    }

    /// Accelerator serving the first host entry with `role`.
    pub fn accelerator_for(&self, role: HostRole) -> Option<&Accelerator> {
        if self.accelerator.len() == 1 {
            return self.accelerator.first();
        }
        if self.accelerator.len() == self.roles.len() {
            let pos = self.roles.iter().position(|r| *r == role)?;
            return self.accelerator.get(pos);
        }
        let group = self.distinct_roles().iter().position(|r| *r == role)?;
        self.accelerator.get(group)
    }

    fn distinct_roles(&self) -> Vec<HostRole> {
        let mut seen = Vec::new();
        for role in &self.roles {
            if !seen.contains(role) {
                seen.push(*role);
            }
        }
        seen
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accelerator {
    /// Accelerator model, e.g. `H100`.
    pub model: String,
    #[serde(default = "one")]
    pub count: u32,
    pub parallelism: Parallelism,
}

/// Parallelism degrees. Only tensor parallelism is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallelism {
    pub tp: u32,
    #[serde(default = "one")]
    pub dp: u32,
    #[serde(default = "one")]
    pub pp: u32,
    #[serde(default = "one")]
    pub ep: u32,
}

impl Parallelism {
    /// Accelerators used by one replica (`tp * dp * pp`).
    pub fn accelerators_per_replica(&self) -> u64 {
        u64::from(self.tp) * u64::from(self.dp) * u64::from(self.pp)
    }
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub engine: Vec<Engine>,
    #[serde(default)]
    pub metadata: PlatformMetadata,
}

/// Serving engine image, e.g. vLLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetadata {
    #[serde(
        default,
        rename = "inferenceScheduler",
        skip_serializing_if = "Option::is_none"
    )]
    pub inference_scheduler: Option<InferenceScheduler>,
}

/// Endpoint-picker configuration: plugin instances and the profiles using them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceScheduler {
    #[serde(default)]
    pub plugins: Vec<SchedulerPlugin>,
    #[serde(default)]
    pub scheduling_profiles: Vec<SchedulingProfile>,
}

impl InferenceScheduler {
    /// First plugin instance of a given type.
    pub fn plugin(&self, kind: &str) -> Option<&SchedulerPlugin> {
        self.plugins.iter().find(|p| p.kind == kind)
    }

    /// Weight of a scorer plugin type.
    ///
    /// Absent plugins weigh 0. A present plugin takes the first explicit
    /// weight found in a scheduling profile referencing it, else 1.
    pub fn scorer_weight(&self, kind: &str) -> f64 {
        let Some(plugin) = self.plugin(kind) else {
            return 0.0;
        };
        let reference = plugin.reference();
        self.scheduling_profiles
            .iter()
            .flat_map(|profile| profile.plugins.iter())
            .filter(|r| r.plugin_ref == reference)
            .find_map(|r| r.weight)
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerPlugin {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub parameters: serde_json::Value,
}

impl SchedulerPlugin {
    /// Name profiles use to reference this instance; defaults to the type.
    pub fn reference(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.kind)
    }

    /// Integer parameter, if present.
    pub fn int_parameter(&self, key: &str) -> Option<i64> {
        self.parameters.get(key).and_then(serde_json::Value::as_i64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRef {
    pub plugin_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Workload generator and its raw arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    pub name: LoadGenerator,
    /// Generator-specific arguments, kept untyped.
    #[serde(default)]
    pub args: serde_json::Value,
}

/// Supported workload generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadGenerator {
    #[serde(rename = "vllm-benchmark")]
    VllmBenchmark,
    #[serde(rename = "guidellm")]
    GuideLlm,
    #[serde(rename = "inference-perf")]
    InferencePerf,
    #[serde(rename = "fmperf")]
    Fmperf,
}

impl LoadGenerator {
    /// Tag used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadGenerator::VllmBenchmark => "vllm-benchmark",
            LoadGenerator::GuideLlm => "guidellm",
            LoadGenerator::InferencePerf => "inference-perf",
            LoadGenerator::Fmperf => "fmperf",
        }
    }
}

impl fmt::Display for LoadGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeRange>,
    pub requests: Requests,
    pub throughput: Throughput,
    #[serde(default)]
    pub latency: Latency,
}

/// Wall-clock bounds of the run, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub stop: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requests {
    pub total: u64,
    #[serde(default)]
    pub failures: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_length: Option<LengthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_length: Option<LengthSummary>,
}

/// Token length distribution; only the mean is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthSummary {
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    pub requests_per_sec: f64,
    pub output_tokens_per_sec: f64,
    pub total_tokens_per_sec: f64,
}

/// Latency distributions by family. Every family is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Latency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_first_token: Option<LatencyStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_output_token: Option<LatencyStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_token_latency: Option<LatencyStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_latency: Option<LatencyStats>,
}

impl Latency {
    /// Distribution for a latency family, if reported.
    pub fn family(&self, family: LatencyFamily) -> Option<&LatencyStats> {
        match family {
            LatencyFamily::Ttft => self.time_to_first_token.as_ref(),
            LatencyFamily::Tpot => self.time_per_output_token.as_ref(),
            LatencyFamily::Itl => self.inter_token_latency.as_ref(),
            LatencyFamily::E2el => self.request_latency.as_ref(),
        }
    }
}

/// Units a latency family is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatencyUnits {
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms/token")]
    MillisecondsPerToken,
    #[serde(rename = "s/token")]
    SecondsPerToken,
}

impl LatencyUnits {
    /// Factor converting a value in these units to milliseconds.
    pub fn to_millis(self) -> f64 {
        match self {
            LatencyUnits::Milliseconds | LatencyUnits::MillisecondsPerToken => 1.0,
            LatencyUnits::Seconds | LatencyUnits::SecondsPerToken => 1000.0,
        }
    }
}

/// Summary statistics of one latency family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub units: LatencyUnits,
    pub mean: f64,
    #[serde(default)]
    pub stddev: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default, rename = "p0.1")]
    pub p0_1: Option<f64>,
    #[serde(default)]
    pub p1: Option<f64>,
    #[serde(default)]
    pub p5: Option<f64>,
    #[serde(default)]
    pub p10: Option<f64>,
    #[serde(default)]
    pub p25: Option<f64>,
    #[serde(default)]
    pub p50: Option<f64>,
    #[serde(default)]
    pub p75: Option<f64>,
    #[serde(default)]
    pub p90: Option<f64>,
    #[serde(default)]
    pub p95: Option<f64>,
    #[serde(default)]
    pub p99: Option<f64>,
    #[serde(default, rename = "p99.9")]
    pub p99_9: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl LatencyStats {
    /// Raw value of a statistic in the reported units.
    pub fn stat(&self, stat: LatencyStat) -> Option<f64> {
        match stat {
            LatencyStat::Mean => Some(self.mean),
            LatencyStat::StdDev => self.stddev,
            LatencyStat::Min => self.min,
            LatencyStat::P0_1 => self.p0_1,
            LatencyStat::P1 => self.p1,
            LatencyStat::P5 => self.p5,
            LatencyStat::P10 => self.p10,
            LatencyStat::P25 => self.p25,
            LatencyStat::P50 => self.p50,
            LatencyStat::P75 => self.p75,
            LatencyStat::P90 => self.p90,
            LatencyStat::P95 => self.p95,
            LatencyStat::P99 => self.p99,
            LatencyStat::P99_9 => self.p99_9,
            LatencyStat::Max => self.max,
        }
    }

    /// Value of a statistic converted to milliseconds.
    pub fn stat_millis(&self, stat: LatencyStat) -> Option<f64> {
        self.stat(stat).map(|v| v * self.units.to_millis())
    }
}
