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

//! Aggregated benchmark measurements.
//!
//! A [`ResultSet`] groups the samples of one log file by benchmark name.
//! Benchmarks keep the order in which their names were first seen, and
//! samples keep the order of the lines that produced them.

use std::collections::HashMap;

/// One measurement: wall-clock and CPU time in nanoseconds from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sample {
    /// Wall-clock time in nanoseconds.
    pub time: u64,
    /// CPU time in nanoseconds.
    pub cpu: u64,
}

impl Sample {
    /// Create a sample from wall-clock and CPU time.
    pub fn new(time: u64, cpu: u64) -> Self {
        Self { time, cpu }
    }

    /// CPU time divided by wall-clock time.
    ///
    /// A zero wall-clock time yields a non-finite value.
    pub fn load(&self) -> f64 {
        self.cpu as f64 / self.time as f64
    }
}

/// All samples recorded for one benchmark name.
///
/// Always holds at least one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchResult {
    name: String,
    samples: Vec<Sample>,
}

impl BenchResult {
    /// Create a result holding its first sample.
    pub fn new(name: impl Into<String>, first: Sample) -> Self {
        Self {
            name: name.into(),
            samples: vec![first],
        }
    }

    /// Benchmark name without the `BM_` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples in the order they were read.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Wall-clock times, index-aligned with [`cpus`](Self::cpus).
    pub fn times(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    /// CPU times, index-aligned with [`times`](Self::times).
    pub fn cpus(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().map(|s| s.cpu)
    }

    /// Number of samples recorded.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample was recorded. Never true for a result built
    /// through [`new`](Self::new).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

/// Benchmarks of one log, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    results: Vec<BenchResult>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the benchmark `name`, creating it on first sight.
    pub fn record(&mut self, name: &str, sample: Sample) {
        match self.index.get(name) {
            Some(&pos) => self.results[pos].push(sample),
            None => {
                self.index.insert(name.to_string(), self.results.len());
                self.results.push(BenchResult::new(name, sample));
            }
        }
    }

    /// Look up a benchmark by exact name.
    pub fn get(&self, name: &str) -> Option<&BenchResult> {
        self.index.get(name).map(|&pos| &self.results[pos])
    }

    /// Whether a benchmark with this name was recorded.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over benchmarks in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchResult> {
        self.results.iter()
    }

    /// Benchmark names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(BenchResult::name)
    }

    /// Number of distinct benchmarks.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no benchmark was recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total number of samples across all benchmarks.
    pub fn sample_count(&self) -> usize {
        self.results.iter().map(BenchResult::len).sum()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a BenchResult;
    type IntoIter = std::slice::Iter<'a, BenchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
