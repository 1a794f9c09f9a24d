// Dweve benchcmp - Benchmark Result Comparison
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

//! Turning comparisons into a printable table.

use crate::compare::{compare, Comparison, ComparisonReport};
use crate::config::CompareConfig;
use crate::result::ResultSet;
use crate::table::Table;

/// Format a percentage change with explicit sign and two decimals.
///
/// Non-finite values keep Rust's spelling (`inf`, `NaN`).
///
/// ```
/// use benchcmp_core::report::format_percent;
///
/// assert_eq!(format_percent(50.0), "+50.00%");
/// assert_eq!(format_percent(-25.0), "-25.00%");
/// assert_eq!(format_percent(0.0), "+0.00%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Format a CPU load ratio with one decimal.
pub fn format_load(value: f64) -> String {
    format!("{:.1}", value)
}

/// Header cells for the columns enabled in `config`.
pub fn header(config: &CompareConfig) -> Vec<&'static str> {
    let mut cells = vec!["Benchmark", "Time(ns): old", "new", "diff"];
    if config.show_cpu {
        cells.extend(["CPU(ns): old", "new", "diff"]);
    }
    if config.show_load {
        cells.extend(["Load(%): old", "new", "diff"]);
    }
    cells
}

/// Cells of one comparison for the columns enabled in `config`.
pub fn row_cells(row: &Comparison, config: &CompareConfig) -> Vec<String> {
    let mut cells = vec![
        row.name.clone(),
        row.old.time.to_string(),
        row.new.time.to_string(),
        format_percent(row.time_diff()),
    ];
    if config.show_cpu {
        cells.extend([
            row.old.cpu.to_string(),
            row.new.cpu.to_string(),
            format_percent(row.cpu_diff()),
        ]);
    }
    if config.show_load {
        cells.extend([
            format_load(row.old.load()),
            format_load(row.new.load()),
            format_percent(row.load_diff()),
        ]);
    }
    cells
}

/// Build the table for a set of comparisons.
pub fn build_table(rows: &[Comparison], config: &CompareConfig) -> Table {
    let mut table = Table::new(header(config));
    for row in rows {
        table.push_row(row_cells(row, config));
    }
    table
}

/// Compare two result sets and lay out the outcome.
pub fn compare_sets(
    old: &ResultSet,
    new: &ResultSet,
    config: &CompareConfig,
) -> (ComparisonReport, Table) {
    let report = compare(old, new, config.mode);
    let table = build_table(&report.rows, config);
    (report, table)
}
