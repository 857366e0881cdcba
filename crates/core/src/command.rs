// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction of the argument vector handed to the claude CLI.

use crate::args::CliOptions;

/// Build the exact argument vector for the claude CLI.
///
/// The order is part of the external contract: positional prompt behind
/// `-p`, the non-interactive permissions flag, then `--sandbox`, `--model`,
/// and `--output-format json` in that fixed order when requested.
pub fn build_claude_args(opts: &CliOptions) -> Vec<String> {
    let mut args = vec![
        "-p".to_string(),
        opts.prompt.clone(),
        "--dangerously-skip-permissions".to_string(),
    ];
    if opts.sandbox {
        args.push("--sandbox".to_string());
    }
    if let Some(model) = &opts.model {
        args.push("--model".to_string());
        args.push(model.clone());
    }
    if opts.output_json {
        args.push("--output-format".to_string());
        args.push("json".to_string());
    }
    args
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
