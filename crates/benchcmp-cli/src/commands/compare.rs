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

//! Compare command - the old/new log comparison table.

use super::write_output;
use crate::error::CliError;
use benchcmp_core::{compare_sets, parse_file, CompareConfig, ParsedLog, Table};
use colored::Colorize;
use std::path::Path;
use tracing::debug;

/// Result of comparing two logs, ready to print.
#[derive(Debug, Clone)]
pub struct CompareOutput {
    /// The comparison table.
    pub table: Table,
    /// Tolerated problems: skipped lines and benchmarks missing from the new
    /// log, one message each.
    pub warnings: Vec<String>,
}

/// Parse both logs and build the comparison table.
///
/// Both files are fully read and closed before anything is compared, so an
/// unreadable second file means no table at all.
///
/// # Errors
///
/// Returns `Err` if either file cannot be opened or read.
pub fn compare_files(
    old: &Path,
    new: &Path,
    config: &CompareConfig,
) -> Result<CompareOutput, CliError> {
    let old_log = parse_file(old)?;
    let new_log = parse_file(new)?;

    let (report, table) = compare_sets(&old_log.results, &new_log.results, config);
    debug!(rows = table.rows().len(), mode = %config.mode, "built comparison table");

    let mut warnings: Vec<String> = skipped_line_warnings(&old_log).collect();
    warnings.extend(skipped_line_warnings(&new_log));
    warnings.extend(
        report
            .unmatched
            .iter()
            .map(|name| format!("{}: missing from '{}'", name, new.display())),
    );

    Ok(CompareOutput { table, warnings })
}

/// Run the comparison and print the table to stdout.
///
/// With `warn` set, tolerated problems are listed on stderr after the table.
///
/// # Errors
///
/// Returns `Err` if either file cannot be read or stdout cannot be written.
pub fn compare(old: &Path, new: &Path, config: &CompareConfig, warn: bool) -> Result<(), CliError> {
    let output = compare_files(old, new, config)?;
    write_output(&output.table.render())?;

    if warn {
        for message in &output.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }
    Ok(())
}

fn skipped_line_warnings(log: &ParsedLog) -> impl Iterator<Item = String> + '_ {
    log.skipped.iter().map(move |skip| {
        format!(
            "{}:{}: skipped benchmark line ({}): {}",
            log.source.display(),
            skip.line,
            skip.reason,
            skip.text
        )
    })
}
