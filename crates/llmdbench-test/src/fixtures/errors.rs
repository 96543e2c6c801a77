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

//! Invalid report documents for error handling tests.

/// Well-formed documents that are not valid reports, as (name, yaml) pairs.
///
/// Covers missing required fields, unknown enum tags and structural rules
/// checked after deserialization.
pub fn malformed_report_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("not_a_mapping", "- just\n- a list\n"),
        ("missing_throughput", MISSING_THROUGHPUT_YAML),
        ("unknown_generator", UNKNOWN_GENERATOR_YAML),
        ("unknown_units", UNKNOWN_UNITS_YAML),
        ("unknown_role", UNKNOWN_ROLE_YAML),
        ("mixed_roles", MIXED_ROLES_YAML),
        ("empty_accelerators", EMPTY_ACCELERATORS_YAML),
        ("empty_model", EMPTY_MODEL_YAML),
        ("zero_parallelism", ZERO_TP_YAML),
    ]
}

/// Text that is not valid YAML, as (name, text) pairs.
pub fn unparsable_report_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("unclosed_flow_sequence", "scenario: [\n"),
        ("nested_mapping_on_one_line", "scenario: model: m\n"),
        ("unterminated_quote", "scenario:\n  model: { name: \"m }\n"),
    ]
}

/// Appends a minimal valid metrics block to a scenario block.
macro_rules! report {
    ($scenario:literal) => {
        concat!($scenario, "metrics:\n  requests: { total: 1 }\n  throughput: { requests_per_sec: 1, output_tokens_per_sec: 1, total_tokens_per_sec: 1 }\n")
    };
}

const MIXED_ROLES_YAML: &str = report!(
    r#"scenario:
  model: { name: m }
  host:
    type: [replica, decode]
    accelerator: [{ model: H100, parallelism: { tp: 1 } }]
  load: { name: fmperf }
"#
);

const EMPTY_ACCELERATORS_YAML: &str = report!(
    r#"scenario:
  model: { name: m }
  host: { type: [replica], accelerator: [] }
  load: { name: fmperf }
"#
);

const EMPTY_MODEL_YAML: &str = report!(
    r#"scenario:
  model: { name: "" }
  host:
    type: [replica]
    accelerator: [{ model: H100, parallelism: { tp: 1 } }]
  load: { name: fmperf }
"#
);

const ZERO_TP_YAML: &str = report!(
    r#"scenario:
  model: { name: m }
  host:
    type: [replica]
    accelerator: [{ model: H100, parallelism: { tp: 0 } }]
  load: { name: fmperf }
"#
);

const MISSING_THROUGHPUT_YAML: &str = r#"scenario:
  model: { name: m }
  host:
    type: [replica]
    accelerator: [{ model: H100, parallelism: { tp: 1 } }]
  load: { name: fmperf }
metrics:
  requests: { total: 1 }
"#;

const UNKNOWN_GENERATOR_YAML: &str = report!(
    r#"scenario:
  model: { name: m }
  host:
    type: [replica]
    accelerator: [{ model: H100, parallelism: { tp: 1 } }]
  load: { name: locust }
"#
);

const UNKNOWN_ROLE_YAML: &str = report!(
    r#"scenario:
  model: { name: m }
  host:
    type: [router]
    accelerator: [{ model: H100, parallelism: { tp: 1 } }]
  load: { name: fmperf }
"#
);

const UNKNOWN_UNITS_YAML: &str = r#"scenario:
  model: { name: m }
  host:
    type: [replica]
    accelerator: [{ model: H100, parallelism: { tp: 1 } }]
  load: { name: fmperf }
metrics:
  requests: { total: 1 }
  throughput: { requests_per_sec: 1, output_tokens_per_sec: 1, total_tokens_per_sec: 1 }
  latency:
    time_to_first_token: { units: us, mean: 1 }
"#;
