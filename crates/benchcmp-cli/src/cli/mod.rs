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

//! Command-line definition and parsing.
//!
//! ```text
//! benchcmp [--mode last|best] [--cpu[=BOOL]] [--load[=BOOL]] [--warn] <OLD> <NEW>
//! ```
//!
//! Single-dash spellings of the long flags are accepted as well, see
//! [`normalize_args`].

mod args;

use crate::error::CliError;
use benchcmp_core::{CompareConfig, SelectMode};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

pub use args::{normalize_args, LONG_FLAGS};

/// Compare two benchmark result logs
///
/// Reads the `BM_` lines of an old and a new benchmark log, picks one
/// sample per benchmark and prints the relative change of wall-clock time,
/// CPU time and CPU load for every benchmark present in both.
#[derive(Parser, Debug, Clone)]
#[command(name = "benchcmp")]
#[command(author, version, about = "Compare two benchmark result logs", long_about = None)]
#[command(override_usage = "benchcmp [-flags] <OLD> <NEW>")]
pub struct Cli {
    /// Select last/best results
    #[arg(long, value_name = "last|best", default_value = "last", value_parser = SelectMode::from_str)]
    pub mode: SelectMode,

    /// Show CPU time
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true"
    )]
    pub cpu: bool,

    /// Show CPU load
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub load: bool,

    /// Report skipped lines and benchmarks missing from the new log on stderr
    #[arg(long)]
    pub warn: bool,

    /// Old results file
    #[arg(value_name = "OLD")]
    pub old: PathBuf,

    /// New results file
    #[arg(value_name = "NEW")]
    pub new: PathBuf,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    /// Compare two logs.
    Run(Cli),
    /// Help or version text was requested; print it to stdout and succeed.
    Info(String),
}

impl Cli {
    /// Settings for the comparison.
    pub fn config(&self) -> CompareConfig {
        CompareConfig::default()
            .with_mode(self.mode)
            .with_cpu(self.cpu)
            .with_load(self.load)
    }

    /// Parse a full argument list, program name first.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Usage`] for unknown flags, bad flag values and a
    /// wrong number of positional arguments.
    pub fn parse_args<I, T>(args: I) -> Result<Invocation, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match Cli::try_parse_from(normalize_args(args)) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(err) if err.use_stderr() => {
                Err(CliError::usage(&err, Cli::command().render_help()))
            }
            Err(err) => Ok(Invocation::Info(err.render().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match Cli::parse_args(args.iter().copied()) {
            Ok(Invocation::Run(cli)) => cli,
            other => panic!("expected a run invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = run(&["benchcmp", "old.txt", "new.txt"]);
        assert_eq!(cli.mode, SelectMode::Last);
        assert!(cli.cpu);
        assert!(!cli.load);
        assert!(!cli.warn);
        assert_eq!(cli.old, PathBuf::from("old.txt"));
        assert_eq!(cli.new, PathBuf::from("new.txt"));
        assert_eq!(cli.config(), CompareConfig::default());
    }

    #[test]
    fn test_go_style_flags() {
        let cli = run(&["benchcmp", "-mode", "best", "-cpu=false", "-load", "a", "b"]);
        assert_eq!(cli.mode, SelectMode::Best);
        assert!(!cli.cpu);
        assert!(cli.load);
    }

    #[test]
    fn test_double_dash_flags() {
        let cli = run(&["benchcmp", "--mode=best", "--load=true", "--warn", "a", "b"]);
        assert_eq!(cli.mode, SelectMode::Best);
        assert!(cli.load);
        assert!(cli.warn);
    }

    #[test]
    fn test_bool_flag_does_not_take_separate_value() {
        let err = Cli::parse_args(["benchcmp", "--cpu", "false", "a", "b"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_bad_mode_is_usage_error() {
        let err = Cli::parse_args(["benchcmp", "-mode", "worst", "a", "b"]).unwrap_err();
        let text = err.to_string();
        assert!(err.is_usage());
        assert!(text.contains("flag -mode has bad value: worst, expect: last/best"));
        assert!(text.contains("Show CPU time"));
    }

    #[test]
    fn test_positional_count() {
        assert!(Cli::parse_args(["benchcmp"]).is_err());
        assert!(Cli::parse_args(["benchcmp", "only.txt"]).is_err());
        assert!(Cli::parse_args(["benchcmp", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_help_is_not_an_error() {
        match Cli::parse_args(["benchcmp", "-help"]) {
            Ok(Invocation::Info(text)) => assert!(text.contains("Select last/best results")),
            other => panic!("expected help text, got {:?}", other),
        }
    }

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
