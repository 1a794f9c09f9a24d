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

//! Parsing, selection and comparison of benchmark result logs.
//!
//! This crate turns the text output of a benchmark harness into per-benchmark
//! sample lists, reduces each list to one representative sample, and compares
//! an old run against a new one.
//!
//! # Pipeline
//!
//! 1. [`parser`]: read `BM_<name> <time> <cpu> ...` lines, ignore the rest
//! 2. [`result`]: group samples by name in first-seen order
//! 3. [`select`]: pick the last or the fastest sample of each benchmark
//! 4. [`compare`]: join old and new by name, compute percentage changes
//! 5. [`table`] and [`report`]: lay the comparisons out as aligned text
//!
//! # Examples
//!
//! ```
//! use benchcmp_core::{parse_reader, compare_sets, CompareConfig, SelectMode};
//! use std::path::Path;
//!
//! # fn main() -> benchcmp_core::Result<()> {
//! let old = parse_reader("BM_A 100 10\nBM_A 200 20\n".as_bytes(), Path::new("old.txt"))?;
//! let new = parse_reader("BM_A 150 15\n".as_bytes(), Path::new("new.txt"))?;
//!
//! let config = CompareConfig::default().with_mode(SelectMode::Best);
//! let (report, table) = compare_sets(&old.results, &new.results, &config);
//!
//! assert_eq!(report.rows[0].time_diff(), 50.0);
//! assert!(table.render().contains("+50.00%"));
//! # Ok(())
//! # }
//! ```

pub mod compare;
mod config;
mod error;
pub mod parser;
pub mod report;
pub mod result;
pub mod select;
pub mod table;

pub use compare::{compare, percent_diff, Comparison, ComparisonReport};
pub use config::CompareConfig;
pub use error::{BenchError, Result};
pub use parser::{
    parse_bytes, parse_file, parse_line, parse_reader, LineOutcome, ParsedLog, SkipReason,
    SkippedLine,
};
pub use report::{build_table, compare_sets};
pub use result::{BenchResult, ResultSet, Sample};
pub use select::SelectMode;
pub use table::Table;
