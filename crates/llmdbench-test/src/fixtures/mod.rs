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

//! Canonical test fixtures for benchmark reports and run tables.
//!
//! - **builders**: [`ReportBuilder`](builders::ReportBuilder) for custom reports
//! - **reports**: YAML/JSON documents and report collections
//! - **tables**: run tables ingested from the report collections
//! - **errors**: malformed and unparsable documents

pub mod builders;
pub mod errors;
mod reports;
mod tables;

pub use reports::*;
pub use tables::*;
