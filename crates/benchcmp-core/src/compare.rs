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

//! Joining two result sets and computing relative changes.

use crate::result::{ResultSet, Sample};
use crate::select::SelectMode;
use tracing::debug;

/// Relative change from `old` to `new` in percent: `new / old * 100 - 100`.
///
/// A zero `old` gives a non-finite result rather than an error.
///
/// # Examples
///
/// ```
/// use benchcmp_core::percent_diff;
///
/// assert_eq!(percent_diff(100.0, 150.0), 50.0);
/// assert_eq!(percent_diff(200.0, 100.0), -50.0);
/// assert!(percent_diff(0.0, 1.0).is_infinite());
/// ```
pub fn percent_diff(old: f64, new: f64) -> f64 {
    new / old * 100.0 - 100.0
}

/// One benchmark present in both logs, with the selected samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Benchmark name.
    pub name: String,
    /// Selected sample from the old log.
    pub old: Sample,
    /// Selected sample from the new log.
    pub new: Sample,
}

impl Comparison {
    /// Wall-clock time change in percent.
    pub fn time_diff(&self) -> f64 {
        percent_diff(self.old.time as f64, self.new.time as f64)
    }

    /// CPU time change in percent.
    pub fn cpu_diff(&self) -> f64 {
        percent_diff(self.old.cpu as f64, self.new.cpu as f64)
    }

    /// Change of the CPU load ratio in percent.
    pub fn load_diff(&self) -> f64 {
        percent_diff(self.old.load(), self.new.load())
    }
}

/// Outcome of joining an old and a new result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Mode used to pick samples.
    pub mode: SelectMode,
    /// Matched benchmarks in the old log's order.
    pub rows: Vec<Comparison>,
    /// Old benchmarks that have no counterpart in the new log.
    pub unmatched: Vec<String>,
}

/// Compare every benchmark of `old` with the same-named benchmark of `new`.
///
/// Rows follow the order of `old`. Benchmarks that exist only in `new` are
/// not reported at all; those that exist only in `old` are listed in
/// [`ComparisonReport::unmatched`].
pub fn compare(old: &ResultSet, new: &ResultSet, mode: SelectMode) -> ComparisonReport {
    let mut rows = Vec::with_capacity(old.len());
    let mut unmatched = Vec::new();

    for result in old {
        match new.get(result.name()) {
            Some(other) => rows.push(Comparison {
                name: result.name().to_string(),
                old: mode.select(result),
                new: mode.select(other),
            }),
            None => unmatched.push(result.name().to_string()),
        }
    }

    debug!(
        %mode,
        matched = rows.len(),
        unmatched = unmatched.len(),
        "compared result sets"
    );

    ComparisonReport {
        mode,
        rows,
        unmatched,
    }
}
