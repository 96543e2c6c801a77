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

//! Shared test fixtures for the LLMDBench crates.
//!
//! # Quick Start
//!
//! ```rust
//! use llmdbench_test::fixtures;
//! use llmdbench_test::fixtures::builders::ReportBuilder;
//!
//! // Canonical documents
//! let yaml = fixtures::AGGREGATE_YAML;
//!
//! // Prebuilt tables
//! let table = fixtures::mixed_table();
//! assert_eq!(table.len(), 4);
//!
//! // Custom reports
//! let report = ReportBuilder::new().replicas(4, 2).concurrency(64).build();
//! assert!(report.validate().is_ok());
//!
//! // Error handling
//! for (name, yaml) in fixtures::errors::malformed_report_samples() {
//!     assert!(llmdbench_report::from_yaml_str(yaml).is_err(), "{}", name);
//! }
//! # let _ = yaml;
//! ```

/// Canonical test fixtures.
pub mod fixtures;

pub use fixtures::*;

use std::path::{Path, PathBuf};

/// Write `content` to `dir/relative`, creating parent directories.
pub fn write_fixture(dir: &Path, relative: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;
    Ok(path)
}
