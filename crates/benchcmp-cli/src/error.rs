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

//! Structured error types for the benchcmp CLI.
//!
//! Every failure reaches `main` as a [`CliError`]; nothing below it exits the
//! process, so a failed run never leaves partial output behind.

use benchcmp_core::BenchError;
use std::io;
use thiserror::Error;

/// Exit status for every reported failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// The main error type for benchcmp CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or interpreting an input log failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// The command line could not be parsed.
    ///
    /// Holds the complete text to show the user: the parser's message, the
    /// usage line and the flag help.
    #[error("{0}")]
    Usage(String),

    /// Writing the table to stdout failed.
    #[error("failed to write output: {message}")]
    Output {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create a usage error from a command-line parse failure.
    pub fn usage(err: &clap::Error, help: impl std::fmt::Display) -> Self {
        Self::Usage(format!("{}\n{}", err.render(), help))
    }

    /// Create an output error.
    pub fn output(source: io::Error) -> Self {
        Self::Output {
            message: source.to_string(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Whether the message is already complete and should be printed as is.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_error_is_transparent() {
        let err: CliError = BenchError::open(
            "old.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        )
        .into();
        assert_eq!(
            err.to_string(),
            "failed to open input file 'old.txt': No such file or directory"
        );
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_output_error_display() {
        let err = CliError::output(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(err.to_string(), "failed to write output: broken pipe");
    }

    #[test]
    fn test_usage_error_keeps_text() {
        let err = CliError::Usage("usage: benchcmp".to_string());
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "usage: benchcmp");
        assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
    }
}
