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

//! Error types for benchmark log processing.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a comparison.
///
/// Malformed benchmark lines and benchmarks missing from the new log are
/// tolerated and never surface as a `BenchError`; only conditions that make
/// the whole run meaningless do.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input file could not be opened.
    #[error("failed to open input file '{}': {source}", path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the file.
    #[error("failed to read input file '{}': {source}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A selection mode string other than `last` or `best`.
    #[error("flag -mode has bad value: {0}, expect: last/best")]
    InvalidMode(String),
}

impl BenchError {
    /// Create an open error with file path context.
    pub fn open(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a read error with file path context.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid mode error.
    pub fn invalid_mode(value: impl Into<String>) -> Self {
        Self::InvalidMode(value.into())
    }

    /// Path of the file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => Some(path),
            Self::InvalidMode(_) => None,
        }
    }
}

/// Result type for benchmark log operations.
pub type Result<T> = std::result::Result<T, BenchError>;
