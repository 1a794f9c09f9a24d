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

//! Property-based tests for parsing, selection, comparison and layout.

use benchcmp_core::report::format_percent;
use benchcmp_core::{
    compare, compare_sets, parse_line, parse_reader, CompareConfig, LineOutcome, ResultSet,
    Sample, SelectMode,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Benchmark names as harnesses print them (no spaces).
fn bench_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_/:<>]{0,15}")
        .expect("Failed to create name regex")
}

/// Samples for one benchmark, at least one.
fn samples() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((any::<u64>(), any::<u64>()), 1..20)
}

/// A log body built from `(name, time, cpu)` entries.
fn log_text(entries: &[(String, u64, u64)]) -> String {
    entries
        .iter()
        .map(|(name, time, cpu)| format!("BM_{}  {}  {}  iterations\n", name, time, cpu))
        .collect()
}

fn parse_text(text: &str) -> ResultSet {
    parse_reader(text.as_bytes(), Path::new("prop.txt"))
        .expect("in-memory read cannot fail")
        .results
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: best mode returns the minimum time and the cpu of its first occurrence.
    #[test]
    fn prop_best_selects_first_minimum(values in samples()) {
        let mut set = ResultSet::new();
        for &(time, cpu) in &values {
            set.record("X", Sample::new(time, cpu));
        }
        let result = set.get("X").unwrap();

        let min_time = values.iter().map(|&(t, _)| t).min().unwrap();
        let first_cpu = values.iter().find(|&&(t, _)| t == min_time).unwrap().1;

        prop_assert_eq!(SelectMode::Best.select(result), Sample::new(min_time, first_cpu));
    }

    /// Property: last mode returns the final appended sample.
    #[test]
    fn prop_last_selects_final_sample(values in samples()) {
        let mut set = ResultSet::new();
        for &(time, cpu) in &values {
            set.record("X", Sample::new(time, cpu));
        }
        let (time, cpu) = *values.last().unwrap();
        prop_assert_eq!(SelectMode::Last.select(set.get("X").unwrap()), Sample::new(time, cpu));
    }

    /// Property: the width of the gaps between fields does not matter.
    #[test]
    fn prop_space_runs_collapse(
        name in bench_name(),
        time in any::<u64>(),
        cpu in any::<u64>(),
        gaps in prop::collection::vec(1_usize..8, 3),
    ) {
        let spaced = format!(
            "BM_{}{}{}{}{}{}extra",
            name, " ".repeat(gaps[0]), time, " ".repeat(gaps[1]), cpu, " ".repeat(gaps[2])
        );
        prop_assert_eq!(
            parse_line(&spaced),
            LineOutcome::Sample { name: name.as_str(), sample: Sample::new(time, cpu) }
        );
    }

    /// Property: samples survive parsing in order, grouped by name.
    #[test]
    fn prop_parse_preserves_samples(
        entries in prop::collection::vec(
            (prop::sample::select(vec!["A", "B", "C"]), any::<u64>(), any::<u64>()),
            0..30,
        ),
    ) {
        let entries: Vec<(String, u64, u64)> = entries
            .into_iter()
            .map(|(n, t, c)| (n.to_string(), t, c))
            .collect();
        let set = parse_text(&log_text(&entries));

        let mut seen = Vec::new();
        for (name, _, _) in &entries {
            if !seen.contains(name) {
                seen.push(name.clone());
            }
        }
        prop_assert_eq!(set.names().map(String::from).collect::<Vec<_>>(), seen);

        for name in set.names() {
            let expected: Vec<Sample> = entries
                .iter()
                .filter(|(n, _, _)| n == name)
                .map(|&(_, t, c)| Sample::new(t, c))
                .collect();
            prop_assert_eq!(set.get(name).unwrap().samples(), expected.as_slice());
        }
    }

    /// Property: every row names a benchmark present in both logs, and every
    /// such benchmark gets a row.
    #[test]
    fn prop_rows_are_matched_names(
        old_names in prop::collection::hash_set(bench_name(), 0..10),
        new_names in prop::collection::hash_set(bench_name(), 0..10),
    ) {
        let mut old = ResultSet::new();
        for name in &old_names {
            old.record(name, Sample::new(10, 10));
        }
        let mut new = ResultSet::new();
        for name in &new_names {
            new.record(name, Sample::new(20, 20));
        }

        let report = compare(&old, &new, SelectMode::Last);
        let rows: HashSet<String> = report.rows.iter().map(|r| r.name.clone()).collect();
        let both: HashSet<String> = old_names.intersection(&new_names).cloned().collect();
        prop_assert_eq!(rows, both);

        let unmatched: HashSet<String> = report.unmatched.into_iter().collect();
        let only_old: HashSet<String> = old_names.difference(&new_names).cloned().collect();
        prop_assert_eq!(unmatched, only_old);
    }

    /// Property: comparing a log with itself reports no change anywhere.
    #[test]
    fn prop_identical_logs_have_zero_diffs(
        entries in prop::collection::vec((bench_name(), 1_u64..1_000_000_000, 1_u64..1_000_000_000), 1..10),
        best in any::<bool>(),
    ) {
        let set = parse_text(&log_text(&entries));
        let mode = if best { SelectMode::Best } else { SelectMode::Last };
        let config = CompareConfig::default().with_mode(mode).with_load(true);
        let (report, table) = compare_sets(&set, &set, &config);

        prop_assert_eq!(report.rows.len(), set.len());
        for row in &report.rows {
            prop_assert_eq!(format_percent(row.time_diff()), "+0.00%");
            prop_assert_eq!(format_percent(row.cpu_diff()), "+0.00%");
            prop_assert_eq!(format_percent(row.load_diff()), "+0.00%");
        }
        for row in table.rows() {
            prop_assert_eq!(&row[3], "+0.00%");
            prop_assert_eq!(&row[6], "+0.00%");
            prop_assert_eq!(&row[9], "+0.00%");
        }
    }

    /// Property: every rendered line, separator included, is exactly as wide
    /// as the sum of column widths plus the gaps.
    #[test]
    fn prop_rendered_lines_share_width(
        entries in prop::collection::vec((bench_name(), any::<u64>(), any::<u64>()), 0..10),
        show_cpu in any::<bool>(),
        show_load in any::<bool>(),
    ) {
        let set = parse_text(&log_text(&entries));
        let config = CompareConfig::default().with_cpu(show_cpu).with_load(show_load);
        let (_, table) = compare_sets(&set, &set, &config);

        let widths = table.column_widths();
        let expected = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        prop_assert_eq!(table.line_width(), expected);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), table.rows().len() + 2);
        prop_assert_eq!(lines[1].to_string(), "=".repeat(expected));
        for line in &lines {
            prop_assert_eq!(line.chars().count(), expected);
        }
    }

    /// Property: the percentage formula is exactly `new / old * 100 - 100`.
    #[test]
    fn prop_percent_diff_formula(old in 1_u64..u64::MAX, new in any::<u64>()) {
        let row = benchcmp_core::Comparison {
            name: "P".to_string(),
            old: Sample::new(old, old),
            new: Sample::new(new, new),
        };
        let expected = (new as f64 / old as f64) * 100.0 - 100.0;
        prop_assert_eq!(row.time_diff(), expected);
        prop_assert_eq!(row.cpu_diff(), expected);
    }
}
