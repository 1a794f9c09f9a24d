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

//! Single-dash long flag support.
//!
//! Benchmark scripts in the wild call the tool Go-style, with one dash in
//! front of long flags (`-mode best`, `-cpu=false`). Those are rewritten to
//! the double-dash form before clap sees them. Short flags, positionals and
//! everything after a bare `--` are left untouched.

use std::ffi::OsString;

/// Long flag names that may be written with a single dash.
pub const LONG_FLAGS: &[&str] = &["mode", "cpu", "load", "warn", "help", "version"];

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value` for the
/// flags in [`LONG_FLAGS`].
///
/// # Examples
///
/// ```
/// use benchcmp_cli::cli::normalize_args;
///
/// let args = normalize_args(["benchcmp", "-mode", "best", "-cpu=false", "a.txt", "b.txt"]);
/// assert_eq!(args, ["benchcmp", "--mode", "best", "--cpu=false", "a.txt", "b.txt"]);
/// ```
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(pos, arg)| {
            if pos == 0 || after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            match arg.to_str().and_then(single_dash_long) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

fn single_dash_long(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name).then(|| format!("-{}", arg))
}
