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

//! Column-aligned plain-text tables.
//!
//! The first column is left-aligned, every other column is right-aligned and
//! preceded by a [`COLUMN_GAP`]-wide gap. A line of `=` the width of the
//! whole table separates the header from the rows.
//!
//! ```text
//! Benchmark  Time(ns): old  new     diff
//! ======================================
//! Encode               200  150  -25.00%
//! ```

use std::fmt;

/// Spaces inserted before every column except the first.
pub const COLUMN_GAP: usize = 2;

/// A header row plus data rows of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given header cells.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    ///
    /// Rows must have as many cells as the header; extra cells are not
    /// rendered and missing ones render as empty.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Header cells.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Widest cell of each column, header included, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        (0..self.column_count())
            .map(|col| {
                std::iter::once(&self.header)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Width of every rendered line: the column widths plus the gaps
    /// between columns.
    pub fn line_width(&self) -> usize {
        total_width(&self.column_widths())
    }

    /// Render the table, each line terminated by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_row(f: &mut fmt::Formatter<'_>, row: &[String], widths: &[usize]) -> fmt::Result {
        for (col, &width) in widths.iter().enumerate() {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            let pad = width - cell_width(cell);
            if col == 0 {
                write!(f, "{}{}", cell, " ".repeat(pad))?;
            } else {
                write!(f, "{}{}", " ".repeat(pad + COLUMN_GAP), cell)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        Self::write_row(f, &self.header, &widths)?;
        writeln!(f, "{}", "=".repeat(total_width(&widths)))?;
        for row in &self.rows {
            Self::write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn total_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + COLUMN_GAP * widths.len().saturating_sub(1)
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
