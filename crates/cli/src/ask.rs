// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single ask-claude flow: intake, execution, output contract.
//!
//! Diagnostics go to stderr, payload goes to stdout, never mixed. Exit
//! codes: 0 success, 124 deadline, otherwise the child's own code (or 1
//! for failures of our own).

use ask_core::{
    assert_non_empty_prompt, build_claude_args, extract_json_response, parse_cli_args,
    resolve_candidates, run_with_fallback,
};

use crate::exit_error::ExitError;
use crate::stdin;

pub const USAGE: &str = "\
Usage: ask-claude [options] [--] [prompt...]

Forward a prompt to the Claude CLI and print its reply. With no prompt
arguments, the prompt is read from stdin.

Options:
  -m, --model <name>       Model: opus, sonnet, haiku, or a claude-* id
      --json               Request a JSON envelope and print its .response field
      --sandbox            Forward --sandbox to the Claude CLI
      --timeout-ms <ms>    Kill the request after <ms> milliseconds (exit 124)
      --                   Treat every following token as prompt text
  -h, --help               Show this help

Environment:
  ASK_CLAUDE_MAX_STDIN_BYTES  Cap on bytes accepted from stdin (default 50 MiB)";

/// Exit code for a request cut off by the deadline.
const TIMEOUT_EXIT_CODE: i32 = 124;

/// Run one request end to end. Returns only when there is nothing left to
/// write; all failures come back as an `ExitError` for `main` to report.
pub async fn execute(tokens: Vec<String>) -> Result<(), ExitError> {
    let mut opts = parse_cli_args(&tokens)
        .map_err(|err| ExitError::new(1, format!("Error: {err}\n\n{USAGE}")))?;

    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    if opts.prompt.is_empty() {
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        let piped = stdin::read_prompt(reader, stdin::max_stdin_bytes())
            .await
            .map_err(|err| ExitError::new(1, format!("Error: {err}")))?;
        opts.prompt = piped.trim().to_string();
    }

    assert_non_empty_prompt(&opts.prompt)
        .map_err(|err| ExitError::new(1, format!("Error: {err}\n\n{USAGE}")))?;

    let claude_args = build_claude_args(&opts);
    let candidates = resolve_candidates(&claude_args, cfg!(windows));
    tracing::debug!(args = ?claude_args, timeout_ms = opts.timeout_ms, "executing claude");
    let result = run_with_fallback(&candidates, opts.timeout_ms).await;

    // Child stderr passes through on every outcome, success included.
    if !result.stderr.is_empty() {
        emit_stderr(&result.stderr);
    }

    if result.timed_out {
        return Err(ExitError::new(
            TIMEOUT_EXIT_CODE,
            format!("Error: claude request timed out after {}ms", opts.timeout_ms),
        ));
    }
    if result.exit_code != 0 {
        return Err(ExitError::code_only(result.exit_code));
    }

    if opts.output_json {
        match extract_json_response(&result.stdout) {
            Ok(text) => emit_stdout(&text),
            Err(err) => {
                // Keep the raw output recoverable on stdout; the warning
                // and the parse diagnostic stay on stderr.
                emit_stderr(&format!("Warning: {err}\n"));
                emit_stdout(&result.stdout);
                return Err(ExitError::code_only(1));
            }
        }
    } else {
        emit_stdout(&result.stdout);
    }

    Ok(())
}

/// Payload writes; errors (e.g. a closed pipe) are not recoverable and not
/// worth a diagnostic of their own.
fn emit_stdout(text: &str) {
    use std::io::Write;
    let mut out = std::io::stdout().lock();
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
}

fn emit_stderr(text: &str) {
    use std::io::Write;
    let mut err = std::io::stderr().lock();
    let _ = err.write_all(text.as_bytes());
    let _ = err.flush();
}

#[cfg(test)]
#[path = "ask_tests.rs"]
mod tests;
