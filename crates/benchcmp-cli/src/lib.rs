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

//! benchcmp CLI library for command-line parsing and execution.
//!
//! The `benchcmp` binary compares an old and a new benchmark log and prints
//! a column-aligned table of timing changes:
//!
//! ```text
//! $ benchcmp -mode best old.txt new.txt
//! Benchmark  Time(ns): old  new     diff  CPU(ns): old  new     diff
//! ==================================================================
//! A                    100  150  +50.00%            10   15  +50.00%
//! ```
//!
//! # Flags
//!
//! - `--mode last|best`: pick the last sample or the fastest one (default `last`)
//! - `--cpu[=BOOL]`: show CPU time columns (default `true`)
//! - `--load[=BOOL]`: show CPU load columns (default `false`)
//! - `--warn`: list skipped lines and benchmarks missing from the new log
//!
//! Each long flag may also be written with a single dash.
//!
//! # Exit Status
//!
//! `0` on success; `1` for usage errors and unreadable input files. Nothing
//! is printed to stdout unless both files were read completely.
//!
//! # Examples
//!
//! ```no_run
//! use benchcmp_cli::commands::compare_files;
//! use benchcmp_core::CompareConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchcmp_cli::error::CliError> {
//! let output = compare_files(
//!     Path::new("old.txt"),
//!     Path::new("new.txt"),
//!     &CompareConfig::default(),
//! )?;
//! print!("{}", output.table);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

use cli::{Cli, Invocation};
use error::CliError;
use std::ffi::OsString;

/// Log filter used when `RUST_LOG` is unset. The `benchcmp` target prefix
/// covers both `benchcmp_core` and `benchcmp_cli`.
pub const DEFAULT_LOG_FILTER: &str = "benchcmp=warn";

/// Parse `args` (program name first) and run the comparison.
///
/// Help and version requests print to stdout and succeed.
///
/// # Errors
///
/// Returns [`CliError`] for usage errors, unreadable input files and
/// failures to write the output.
pub fn run<I, T>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match Cli::parse_args(args)? {
        Invocation::Info(text) => commands::write_output(&text),
        Invocation::Run(cli) => commands::compare(&cli.old, &cli.new, &cli.config(), cli.warn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_default_log_filter_is_quiet_benchcmp_directive() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).expect("valid log directive");
        assert_eq!(filter.to_string(), "benchcmp=warn");
    }
}
