// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executable fallback resolution.
//!
//! Invoking claude is expressed as a data-driven priority list of
//! candidates rather than nested platform conditionals: each candidate
//! names an executable, the full argument vector, and a matcher that
//! recognizes "this executable is not on the system" in its output. The
//! engine walks the list in order and takes the first candidate that does
//! not classify as not-found.

use regex::Regex;

/// One fallback strategy for invoking the claude CLI.
///
/// Immutable once constructed. `not_found` distinguishes "the command
/// behind this candidate does not exist" (advance to the next candidate)
/// from a genuine application-level failure (terminal result). Shell
/// wrappers need it because the shell itself spawns fine and reports the
/// missing command as text on a non-zero exit.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Program to spawn.
    pub executable: String,
    /// Full argument vector, in order.
    pub args: Vec<String>,
    /// Matcher applied to combined stdout+stderr of a non-zero exit.
    pub not_found: Option<Regex>,
}

impl Candidate {
    fn new(executable: &str, args: Vec<String>, not_found_pattern: &str) -> Self {
        Self {
            executable: executable.to_string(),
            args,
            // The patterns are fixed literals; a compile failure would be a
            // bug caught by candidates_tests, so degrade to no matcher.
            not_found: Regex::new(not_found_pattern).ok(),
        }
    }
}

/// Resolve the ordered candidate chain for the current platform.
///
/// Windows resolves `claude` (an npm shim) only through `cmd.exe`, so both
/// candidates run via `cmd.exe /d /s /c`; elsewhere the executables are
/// spawned directly. The second candidate bootstraps the packaged CLI
/// through npx when no `claude` is installed.
pub fn resolve_candidates(cli_args: &[String], windows: bool) -> Vec<Candidate> {
    let npx_args = |args: &[String]| {
        let mut v = vec!["-y".to_string(), "@anthropic-ai/claude-code".to_string()];
        v.extend(args.iter().cloned());
        v
    };

    if windows {
        let shell = |command: &str, rest: Vec<String>| {
            let mut v = vec![
                "/d".to_string(),
                "/s".to_string(),
                "/c".to_string(),
                command.to_string(),
            ];
            v.extend(rest);
            v
        };
        vec![
            Candidate::new(
                "cmd.exe",
                shell("claude", cli_args.to_vec()),
                r"(?i)'claude' is not recognized|command not found",
            ),
            Candidate::new(
                "cmd.exe",
                shell("npx", npx_args(cli_args)),
                r"(?i)'npx' is not recognized|command not found",
            ),
        ]
    } else {
        vec![
            Candidate::new(
                "claude",
                cli_args.to_vec(),
                r"(?i)claude: (command )?not found",
            ),
            Candidate::new(
                "npx",
                npx_args(cli_args),
                r"(?i)npx: (command )?not found",
            ),
        ]
    }
}

#[cfg(test)]
#[path = "candidates_tests.rs"]
mod tests;
