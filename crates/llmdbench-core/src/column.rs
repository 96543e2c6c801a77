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

//! Column descriptors: semantic type, label, units and preference direction.

use std::fmt;

/// The semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum ColumnKind {
    /// Free-form text.
    String,
    /// Whole numbers (counts, parallelism degrees).
    Integer,
    /// Real numbers (rates, latencies).
    Float,
    /// True/false flags.
    Boolean,
}

impl ColumnKind {
    /// Returns true for kinds that support ordered numeric comparison.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// Which direction of a metric is preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "UPPERCASE"))]
pub enum Preference {
    /// Smaller values are better (latency, GPU count).
    Low,
    /// Larger values are better (throughput).
    High,
    /// No preference; the column cannot be an optimization objective.
    Neutral,
}

impl Preference {
    /// Returns true unless the preference is [`Preference::Neutral`].
    pub fn is_directional(self) -> bool {
        !matches!(self, Self::Neutral)
    }

    /// Returns true if `a` is strictly better than `b` in this direction.
    ///
    /// Always false for [`Preference::Neutral`] and for NaN operands.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Self::Low => a < b,
            Self::High => a > b,
            Self::Neutral => false,
        }
    }

    /// Returns true if `value` satisfies `threshold` in this direction.
    ///
    /// LOW keeps `value <= threshold`, HIGH keeps `value >= threshold`.
    pub fn satisfies(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Low => value <= threshold,
            Self::High => value >= threshold,
            Self::Neutral => false,
        }
    }

    /// The comparison operator an objective in this direction uses.
    pub fn operator(self) -> &'static str {
        match self {
            Self::Low => "<=",
            Self::High => ">=",
            Self::Neutral => "?",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::High => write!(f, "HIGH"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Description of one named metric or dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnDescriptor {
    /// Unique column key.
    pub name: String,
    /// Semantic type of the values.
    pub kind: ColumnKind,
    /// Display name.
    pub label: String,
    /// Preference direction, fixed at registration.
    pub preference: Preference,
    /// Optional display units.
    pub units: Option<String>,
}

impl ColumnDescriptor {
    /// Create a new descriptor without units.
    pub fn new(
        name: impl Into<String>,
        kind: ColumnKind,
        label: impl Into<String>,
        preference: Preference,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            preference,
            units: None,
        }
    }

    /// Add display units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Returns true if the column can be used as an optimization objective.
    pub fn is_directional(&self) -> bool {
        self.preference.is_directional()
    }

    /// Label with units appended, e.g. `Mean TTFT (ms)`.
    pub fn display_label(&self) -> String {
        match &self.units {
            Some(units) => format!("{} ({})", self.label, units),
            None => self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Preference tests ====================

    #[test]
    fn test_is_better_low() {
        assert!(Preference::Low.is_better(1.0, 2.0));
        assert!(!Preference::Low.is_better(2.0, 2.0));
        assert!(!Preference::Low.is_better(3.0, 2.0));
    }

    #[test]
    fn test_is_better_high() {
        assert!(Preference::High.is_better(3.0, 2.0));
        assert!(!Preference::High.is_better(2.0, 2.0));
    }

    #[test]
    fn test_is_better_neutral_and_nan() {
        assert!(!Preference::Neutral.is_better(1.0, 2.0));
        assert!(!Preference::Low.is_better(f64::NAN, 2.0));
        assert!(!Preference::High.is_better(2.0, f64::NAN));
    }

    #[test]
    fn test_satisfies_is_inclusive() {
        assert!(Preference::Low.satisfies(100.0, 100.0));
        assert!(Preference::Low.satisfies(90.0, 100.0));
        assert!(!Preference::Low.satisfies(150.0, 100.0));
        assert!(Preference::High.satisfies(100.0, 100.0));
        assert!(!Preference::High.satisfies(99.0, 100.0));
    }

    #[test]
    fn test_preference_display() {
        assert_eq!(Preference::Low.to_string(), "LOW");
        assert_eq!(Preference::High.to_string(), "HIGH");
        assert_eq!(Preference::Neutral.to_string(), "NEUTRAL");
    }

    // ==================== Descriptor tests ====================

    #[test]
    fn test_descriptor_display_label() {
        let col = ColumnDescriptor::new("Mean_TTFT_ms", ColumnKind::Float, "Mean TTFT", Preference::Low)
            .with_units("ms");
        assert_eq!(col.display_label(), "Mean TTFT (ms)");
        assert!(col.is_directional());

        let col = ColumnDescriptor::new("Model", ColumnKind::String, "Model", Preference::Neutral);
        assert_eq!(col.display_label(), "Model");
        assert!(!col.is_directional());
    }

    #[test]
    fn test_kind_is_numeric() {
        assert!(ColumnKind::Integer.is_numeric());
        assert!(ColumnKind::Float.is_numeric());
        assert!(!ColumnKind::String.is_numeric());
        assert!(!ColumnKind::Boolean.is_numeric());
    }
}
