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

//! Columns command - registry listing

use super::write_output;
use crate::error::CliError;
use colored::Colorize;
use llmdbench_core::{ColumnDescriptor, ColumnRegistry, Preference};

/// Print the standard column registry.
///
/// With `directional`, only columns usable as objectives (LOW or HIGH) are
/// listed. With `json`, descriptors are printed as a JSON array.
pub fn columns(directional: bool, json: bool) -> Result<(), CliError> {
    let listed: Vec<&ColumnDescriptor> = ColumnRegistry::standard()
        .columns()
        .iter()
        .filter(|c| !directional || c.is_directional())
        .collect();

    if json {
        let mut out = serde_json::to_string_pretty(&listed)?;
        out.push('\n');
        return write_output(&out, None);
    }

    let width = listed.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for c in &listed {
        let preference = match c.preference {
            Preference::Low => c.preference.to_string().green(),
            Preference::High => c.preference.to_string().cyan(),
            Preference::Neutral => c.preference.to_string().dimmed(),
        };
        out.push_str(&format!(
            "{:<width$}  {:<7}  {:<7}  {}\n",
            c.name,
            c.kind.to_string(),
            preference,
            c.display_label(),
            width = width
        ));
    }
    write_output(&out, None)
}
