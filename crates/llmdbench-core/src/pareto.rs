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

//! Two-objective Pareto front.

use crate::column::Preference;
use crate::error::ExplorerResult;
use crate::table::RunTable;

/// A row's position on the two objective axes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

/// Returns true if `a` is strictly better than `b` on both axes.
fn dominates(a: Point, b: Point, px: Preference, py: Preference) -> bool {
    px.is_better(a.x, b.x) && py.is_better(a.y, b.y)
}

/// Rows not dominated by any other row on `col_x` and `col_y`.
///
/// A row is dominated when another row is strictly better on both columns,
/// each judged by its own preference. Ties on either axis never eliminate a
/// row. Every row is checked against the whole input, so the result does not
/// depend on row order. Rows with a null or NaN in either column are left out.
///
/// With `sort` the front is ordered by `col_x` ascending (ties keep input
/// order); otherwise input order is kept. Row ids are preserved.
///
/// # Errors
///
/// Either column failing [`ColumnRegistry::objective`](crate::ColumnRegistry::objective):
/// unknown, non-numeric or NEUTRAL.
///
/// # Examples
///
/// ```
/// use llmdbench_core::{columns, pareto_front, ColumnRegistry, RunTable};
///
/// let mut table = RunTable::new(ColumnRegistry::standard());
/// for (thpt, ttft) in [(100.0, 50.0), (200.0, 40.0), (150.0, 30.0)] {
///     let mut row = table.row_builder();
///     row.set(columns::THPT_PER_GPU, thpt).unwrap();
///     row.set("Mean_TTFT_ms", ttft).unwrap();
///     table.append(row.build()).unwrap();
/// }
///
/// let front = pareto_front(&table, columns::THPT_PER_GPU, "Mean_TTFT_ms", false).unwrap();
/// assert_eq!(front.ids(), vec![1, 2]);
/// ```
pub fn pareto_front<'r>(
    table: &RunTable<'r>,
    col_x: &str,
    col_y: &str,
    sort: bool,
) -> ExplorerResult<RunTable<'r>> {
    let registry = table.registry();
    let (pos_x, desc_x) = registry.objective(col_x)?;
    let (pos_y, desc_y) = registry.objective(col_y)?;
    let (px, py) = (desc_x.preference, desc_y.preference);

    let points: Vec<Option<Point>> = table
        .rows()
        .iter()
        .map(|row| {
            let x = row.values[pos_x].as_float().filter(|v| !v.is_nan())?;
            let y = row.values[pos_y].as_float().filter(|v| !v.is_nan())?;
            Some(Point { x, y })
        })
        .collect();

    let candidates: Vec<(usize, Point)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.map(|p| (i, p)))
        .collect();

    // Pass one judges every candidate against all others; pass two keeps survivors.
    let mut survivors: Vec<(usize, Point)> = candidates
        .iter()
        .copied()
        .filter(|&(i, p)| {
            !candidates
                .iter()
                .any(|&(j, q)| j != i && dominates(q, p, px, py))
        })
        .collect();

    if sort {
        survivors.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));
    }

    tracing::trace!(
        input = table.len(),
        ranked = candidates.len(),
        front = survivors.len(),
        "computed pareto front"
    );

    let rows = survivors
        .into_iter()
        .map(|(i, _)| table.rows()[i].clone())
        .collect();
    Ok(table.derive(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns;
    use crate::error::ExplorerErrorKind;
    use crate::registry::ColumnRegistry;

    const TTFT: &str = "Mean_TTFT_ms";

    fn table_of(points: &[(Option<f64>, Option<f64>)]) -> RunTable<'static> {
        let mut table = RunTable::new(ColumnRegistry::standard());
        for (thpt, ttft) in points {
            let mut b = table.row_builder();
            b.set(columns::THPT_PER_GPU, *thpt).unwrap();
            b.set(TTFT, *ttft).unwrap();
            table.append(b.build()).unwrap();
        }
        table
    }

    fn front(table: &RunTable<'_>, sort: bool) -> Vec<usize> {
        pareto_front(table, columns::THPT_PER_GPU, TTFT, sort)
            .unwrap()
            .ids()
    }

    // ==================== Dominance tests ====================

    #[test]
    fn test_dominates_is_strict() {
        let a = Point { x: 2.0, y: 1.0 };
        let b = Point { x: 1.0, y: 2.0 };
        assert!(dominates(a, b, Preference::High, Preference::Low));
        assert!(!dominates(b, a, Preference::High, Preference::Low));
        assert!(!dominates(a, a, Preference::High, Preference::Low));
        let tie = Point { x: 2.0, y: 5.0 };
        assert!(!dominates(a, tie, Preference::High, Preference::Low));
    }

    // ==================== Front tests ====================

    #[test]
    fn test_mixed_directions() {
        // Thpt HIGH, TTFT LOW: row 2 beats row 0 on both; row 1 has best throughput.
        let table = table_of(&[
            (Some(100.0), Some(50.0)),
            (Some(200.0), Some(40.0)),
            (Some(150.0), Some(30.0)),
        ]);
        assert_eq!(front(&table, false), vec![1, 2]);
    }

    #[test]
    fn test_chain_removes_all_dominated() {
        let table = table_of(&[
            (Some(1.0), Some(30.0)),
            (Some(2.0), Some(20.0)),
            (Some(3.0), Some(10.0)),
        ]);
        assert_eq!(front(&table, false), vec![2]);
    }

    #[test]
    fn test_ties_on_one_axis_survive() {
        let table = table_of(&[(Some(5.0), Some(10.0)), (Some(5.0), Some(5.0))]);
        assert_eq!(front(&table, false), vec![0, 1]);
    }

    #[test]
    fn test_duplicates_survive_together() {
        let table = table_of(&[(Some(5.0), Some(5.0)), (Some(5.0), Some(5.0))]);
        assert_eq!(front(&table, false), vec![0, 1]);
    }

    #[test]
    fn test_nulls_excluded() {
        let table = table_of(&[(None, Some(1.0)), (Some(1.0), None), (Some(1.0), Some(9.0))]);
        assert_eq!(front(&table, false), vec![2]);
    }

    #[test]
    fn test_nan_row_is_not_on_front() {
        let table = table_of(&[
            (Some(f64::NAN), Some(f64::NAN)),
            (Some(100.0), Some(10.0)),
            (Some(50.0), Some(20.0)),
        ]);
        assert_eq!(front(&table, false), vec![1]);
    }

    #[test]
    fn test_sort_by_x_ascending() {
        let table = table_of(&[
            (Some(300.0), Some(30.0)),
            (Some(100.0), Some(10.0)),
            (Some(200.0), Some(20.0)),
        ]);
        assert_eq!(front(&table, false), vec![0, 1, 2]);
        assert_eq!(front(&table, true), vec![1, 2, 0]);
    }

    #[test]
    fn test_idempotent() {
        let table = table_of(&[
            (Some(1.0), Some(1.0)),
            (Some(3.0), Some(2.0)),
            (Some(2.0), Some(3.0)),
            (Some(4.0), Some(4.0)),
        ]);
        let once = pareto_front(&table, columns::THPT_PER_GPU, TTFT, false).unwrap();
        let twice = pareto_front(&once, columns::THPT_PER_GPU, TTFT, false).unwrap();
        assert_eq!(once.ids(), twice.ids());
    }

    #[test]
    fn test_empty_table() {
        let table = table_of(&[]);
        assert!(front(&table, true).is_empty());
    }

    // ==================== Error tests ====================

    #[test]
    fn test_rejects_neutral_column() {
        let table = table_of(&[(Some(1.0), Some(1.0))]);
        let err = pareto_front(&table, columns::TP, TTFT, false).unwrap_err();
        assert_eq!(err.kind(), ExplorerErrorKind::NonDirectionalColumn);
    }

    #[test]
    fn test_rejects_unknown_column() {
        let table = table_of(&[]);
        let err = pareto_front(&table, columns::THPT_PER_GPU, "Ghost", false).unwrap_err();
        assert_eq!(err.kind(), ExplorerErrorKind::UnknownColumn);
    }
}
