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

//! Reduction of a benchmark's samples to one representative sample.

use crate::error::BenchError;
use crate::result::{BenchResult, Sample};
use std::fmt;
use std::str::FromStr;

/// Which sample represents a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// The most recently recorded sample.
    #[default]
    Last,
    /// The sample with the smallest wall-clock time.
    Best,
}

impl SelectMode {
    /// Flag spelling of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last => "last",
            Self::Best => "best",
        }
    }

    /// Pick the representative sample of `result`.
    ///
    /// With [`SelectMode::Best`], ties on the minimum time keep the earliest
    /// sample, so its CPU time is the one reported.
    pub fn select(&self, result: &BenchResult) -> Sample {
        let samples = result.samples();
        match self {
            Self::Last => samples[samples.len() - 1],
            Self::Best => samples[1..]
                .iter()
                .fold(samples[0], |best, s| if s.time < best.time { *s } else { best }),
        }
    }
}

impl FromStr for SelectMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(Self::Last),
            "best" => Ok(Self::Best),
            other => Err(BenchError::invalid_mode(other)),
        }
    }
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
