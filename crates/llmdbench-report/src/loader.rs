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

//! Report discovery and loading.

use crate::error::{ReportError, Result};
use crate::report::BenchmarkReport;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default maximum report file size: 100 MB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Default file name prefix of benchmark reports
pub const DEFAULT_FILE_PREFIX: &str = "benchmark_report";

/// Configuration for finding and loading report files.
///
/// # Examples
///
/// ```rust
/// use llmdbench_report::LoadConfig;
///
/// let config = LoadConfig::builder()
///     .max_file_size(10 * 1024 * 1024)
///     .recursive(false)
///     .build();
/// assert_eq!(config.file_prefix, "benchmark_report");
///
/// let config = LoadConfig {
///     file_prefix: String::new(),
///     ..Default::default()
/// };
/// assert!(config.recursive);
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Maximum allowed file size in bytes (default: 100 MB)
    pub max_file_size: u64,
    /// File names must start with this prefix when scanning directories
    pub file_prefix: String,
    /// Accepted extensions, without the dot
    pub extensions: Vec<String>,
    /// Descend into subdirectories when scanning
    pub recursive: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            extensions: vec!["yaml".to_string(), "yml".to_string(), "json".to_string()],
            recursive: true,
        }
    }
}

impl LoadConfig {
    /// Creates a new builder for `LoadConfig`.
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::new()
    }

    fn accepts(&self, path: &Path) -> bool {
        let name_ok = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(&self.file_prefix));
        name_ok && self.has_extension(path)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }
}

/// Builder for [`LoadConfig`].
#[derive(Debug, Clone)]
pub struct LoadConfigBuilder {
    config: LoadConfig,
}

impl LoadConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: LoadConfig::default(),
        }
    }

    /// Sets the maximum file size in bytes.
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }

    /// Sets the required file name prefix.
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.file_prefix = prefix.into();
        self
    }

    /// Replaces the accepted extensions.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether directory scans recurse.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> LoadConfig {
        self.config
    }
}

impl Default for LoadConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed report together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReport {
    pub path: Option<PathBuf>,
    pub report: BenchmarkReport,
}

impl LoadedReport {
    /// Load and validate a report file.
    pub fn load(path: &Path, config: &LoadConfig) -> Result<Self> {
        Ok(Self {
            path: Some(path.to_path_buf()),
            report: load_report_file(path, config)?,
        })
    }
}

impl From<BenchmarkReport> for LoadedReport {
    fn from(report: BenchmarkReport) -> Self {
        Self { path: None, report }
    }
}

/// Collect report files under `root`, sorted by path.
///
/// A file given directly is returned as-is when its extension is accepted;
/// the name prefix only applies to directory scans. Unreadable directory
/// entries are skipped.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if `root` does not exist.
pub fn find_report_files(root: &Path, config: &LoadConfig) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(if config.has_extension(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }
    if !root.is_dir() {
        return Err(ReportError::Io {
            path: root.display().to_string(),
            message: "no such file or directory".to_string(),
        });
    }

    let walker = if config.recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && config.accepts(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    tracing::debug!(root = %root.display(), files = files.len(), "found report files");
    Ok(files)
}

/// Read, parse and validate one report file.
///
/// `.json` files are parsed as JSON, everything else as YAML.
///
/// # Errors
///
/// - [`ReportError::FileTooLarge`] if the file exceeds `config.max_file_size`
/// - [`ReportError::Io`] if the file cannot be read
/// - [`ReportError::Parse`] or [`ReportError::Malformed`] for invalid content
pub fn load_report_file(path: &Path, config: &LoadConfig) -> Result<BenchmarkReport> {
    let display = path.display().to_string();
    let io_err = |e: std::io::Error| ReportError::Io {
        path: display.clone(),
        message: e.to_string(),
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > config.max_file_size {
        return Err(ReportError::FileTooLarge {
            path: display.clone(),
            size,
            max_size: config.max_file_size,
        });
    }

    let content = fs::read_to_string(path).map_err(io_err)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        from_json_str(&content)
    } else {
        from_yaml_str(&content)
    }
}

/// Parse and validate a YAML report.
///
/// Invalid YAML is a [`ReportError::Parse`]. A well-formed document with
/// missing or mistyped fields is a [`ReportError::Malformed`].
pub fn from_yaml_str(content: &str) -> Result<BenchmarkReport> {
    let document: serde_yaml::Value = serde_yaml::from_str(content)?;
    let report: BenchmarkReport = serde_yaml::from_value(document)
        .map_err(|e| ReportError::malformed(e.to_string()))?;
    report.validate()?;
    Ok(report)
}

/// Parse and validate a JSON report.
///
/// Errors are classified as in [`from_yaml_str`].
pub fn from_json_str(content: &str) -> Result<BenchmarkReport> {
    let report: BenchmarkReport = serde_json::from_str(content)?;
    report.validate()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Config tests ====================

    #[test]
    fn test_default_config() {
        let config = LoadConfig::default();
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.extensions, vec!["yaml", "yml", "json"]);
        assert!(config.recursive);
    }

    #[test]
    fn test_builder() {
        let config = LoadConfig::builder()
            .file_prefix("report")
            .extensions(["yaml"])
            .recursive(false)
            .build();
        assert_eq!(config.file_prefix, "report");
        assert_eq!(config.extensions, vec!["yaml"]);
        assert!(!config.recursive);
    }

    #[test]
    fn test_accepts() {
        let config = LoadConfig::default();
        assert!(config.accepts(Path::new("run/benchmark_report_0.yaml")));
        assert!(config.accepts(Path::new("benchmark_report.JSON")));
        assert!(!config.accepts(Path::new("run/other.yaml")));
        assert!(!config.accepts(Path::new("benchmark_report.txt")));
    }

    // ==================== Parse tests ====================

    #[test]
    fn test_from_yaml_str_rejects_garbage() {
        let err = from_yaml_str("scenario: [").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn test_from_json_str_missing_metrics() {
        let err = from_json_str(r#"{"scenario": {}}"#).unwrap_err();
        assert!(matches!(err, ReportError::Malformed { .. }));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = from_json_str(r#"{"scenario": "#).unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_str_missing_field_is_malformed() {
        let err = from_yaml_str("scenario:\n  model: { name: m }\n").unwrap_err();
        match err {
            ReportError::Malformed { message } => assert!(message.contains("missing field")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_find_missing_root() {
        let err = find_report_files(Path::new("/definitely/not/here"), &LoadConfig::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
