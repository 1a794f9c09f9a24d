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

//! Line parser for benchmark result logs.
//!
//! Benchmark harnesses print one line per run, surrounded by arbitrary
//! context (headers, separators, build noise). Only lines starting with
//! [`BENCH_PREFIX`] are considered:
//!
//! ```text
//! BM_Encode/64        1520       1518     460820
//! ```
//!
//! Fields are separated by runs of spaces. Field 0 is the prefixed name,
//! field 1 the wall-clock time and field 2 the CPU time, both unsigned
//! integers. Anything after field 2 is ignored. Candidate lines that do not
//! fit this shape are skipped and recorded in [`ParsedLog::skipped`].
//!
//! Lines are classified on their raw bytes. A name that is not valid UTF-8
//! is skipped, so distinct byte sequences never share one result.

use crate::error::{BenchError, Result};
use crate::result::{ResultSet, Sample};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Prefix that marks a benchmark result line.
pub const BENCH_PREFIX: &str = "BM_";

/// Why a candidate line was not turned into a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than three space-separated fields.
    TooFewFields,
    /// Field 1 is not an unsigned integer.
    InvalidTime,
    /// Field 2 is not an unsigned integer.
    InvalidCpu,
    /// Field 0 is not valid UTF-8.
    InvalidName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields => write!(f, "too few fields"),
            Self::InvalidTime => write!(f, "invalid time value"),
            Self::InvalidCpu => write!(f, "invalid cpu value"),
            Self::InvalidName => write!(f, "benchmark name is not valid UTF-8"),
        }
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// Not a benchmark line.
    Ignored,
    /// A benchmark line that could not be parsed.
    Skipped(SkipReason),
    /// A benchmark sample.
    Sample {
        /// Benchmark name with the prefix removed
        name: &'a str,
        /// Parsed measurement
        sample: Sample,
    },
}

/// A candidate line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// Why it was skipped.
    pub reason: SkipReason,
    /// Line text without its line terminator, decoded lossily.
    pub text: String,
}

/// Everything extracted from one log.
#[derive(Debug, Clone)]
pub struct ParsedLog {
    /// Where the log was read from.
    pub source: PathBuf,
    /// Aggregated benchmarks.
    pub results: ResultSet,
    /// Candidate lines that did not yield a sample.
    pub skipped: Vec<SkippedLine>,
}

/// Classify one line (without its terminator).
///
/// # Examples
///
/// ```
/// use benchcmp_core::parser::{parse_line, LineOutcome};
/// use benchcmp_core::Sample;
///
/// assert_eq!(
///     parse_line("BM_Foo     100   50   extra"),
///     LineOutcome::Sample { name: "Foo", sample: Sample::new(100, 50) }
/// );
/// assert_eq!(parse_line("Benchmark  Time  CPU"), LineOutcome::Ignored);
/// ```
pub fn parse_line(line: &str) -> LineOutcome<'_> {
    parse_bytes(line.as_bytes())
}

/// Classify one raw line (without its terminator).
///
/// Same rules as [`parse_line`]; bytes after field 2 may be anything.
pub fn parse_bytes(line: &[u8]) -> LineOutcome<'_> {
    if !line.starts_with(BENCH_PREFIX.as_bytes()) {
        return LineOutcome::Ignored;
    }

    // Splitting on single spaces and dropping empty pieces is the same as
    // collapsing runs of spaces first.
    let mut fields = line.split(|&b| b == b' ').filter(|field| !field.is_empty());
    let (Some(label), Some(time), Some(cpu)) = (fields.next(), fields.next(), fields.next())
    else {
        return LineOutcome::Skipped(SkipReason::TooFewFields);
    };

    let Some(time) = parse_u64(time) else {
        return LineOutcome::Skipped(SkipReason::InvalidTime);
    };
    let Some(cpu) = parse_u64(cpu) else {
        return LineOutcome::Skipped(SkipReason::InvalidCpu);
    };
    let Ok(name) = std::str::from_utf8(&label[BENCH_PREFIX.len()..]) else {
        return LineOutcome::Skipped(SkipReason::InvalidName);
    };

    LineOutcome::Sample {
        name,
        sample: Sample::new(time, cpu),
    }
}

fn parse_u64(field: &[u8]) -> Option<u64> {
    std::str::from_utf8(field).ok()?.parse().ok()
}

/// Parse a log from any buffered reader.
///
/// `source` is only used for error messages and [`ParsedLog::source`].
///
/// # Errors
///
/// Returns [`BenchError::Read`] if the reader fails before end of input.
pub fn parse_reader<R: BufRead>(mut reader: R, source: &Path) -> Result<ParsedLog> {
    let mut results = ResultSet::new();
    let mut skipped = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| BenchError::read(source, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = strip_line_ending(&buf);
        match parse_bytes(line) {
            LineOutcome::Ignored => {}
            LineOutcome::Sample { name, sample } => results.record(name, sample),
            LineOutcome::Skipped(reason) => {
                trace!(line = line_no, %reason, "skipping benchmark line");
                skipped.push(SkippedLine {
                    line: line_no,
                    reason,
                    text: String::from_utf8_lossy(line).into_owned(),
                });
            }
        }
    }

    debug!(
        source = %source.display(),
        lines = line_no,
        benchmarks = results.len(),
        samples = results.sample_count(),
        skipped = skipped.len(),
        "parsed benchmark log"
    );

    Ok(ParsedLog {
        source: source.to_path_buf(),
        results,
        skipped,
    })
}

/// Open and parse a log file.
///
/// The file is closed before this returns, on success and on error.
///
/// # Errors
///
/// Returns [`BenchError::Open`] if the file cannot be opened and
/// [`BenchError::Read`] if reading fails part way.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedLog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BenchError::open(path, e))?;
    parse_reader(BufReader::new(file), path)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
