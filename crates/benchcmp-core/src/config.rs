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

//! Comparison settings.

use crate::select::SelectMode;

/// Settings for one comparison run, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    /// How each benchmark's representative sample is chosen.
    pub mode: SelectMode,
    /// Include the CPU time columns.
    pub show_cpu: bool,
    /// Include the CPU load columns.
    pub show_load: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            mode: SelectMode::Last,
            show_cpu: true,
            show_load: false,
        }
    }
}

impl CompareConfig {
    /// Set the selection mode.
    pub fn with_mode(mut self, mode: SelectMode) -> Self {
        self.mode = mode;
        self
    }

    /// Toggle the CPU time columns.
    pub fn with_cpu(mut self, show_cpu: bool) -> Self {
        self.show_cpu = show_cpu;
        self
    }

    /// Toggle the CPU load columns.
    pub fn with_load(mut self, show_load: bool) -> Self {
        self.show_load = show_load;
        self
    }
}
