// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt intake from standard input and the byte cap.

use crate::prelude::*;

#[test]
fn reads_prompt_from_stdin_when_no_arg_given() {
    let outcome = ask("echo").stdin("prompt from stdin").passes();
    assert_eq!(
        outcome.echoed_args(),
        ["-p", "prompt from stdin", "--dangerously-skip-permissions"]
    );
}

#[test]
fn positional_prompt_wins_over_stdin() {
    let outcome = ask("echo").args(&["from args"]).stdin("from stdin").passes();
    assert_eq!(
        outcome.echoed_args(),
        ["-p", "from args", "--dangerously-skip-permissions"]
    );
}

#[test]
fn empty_stdin_means_prompt_is_required() {
    ask("echo")
        .stdin("")
        .fails_with(1)
        .stderr_has("Prompt is required");
}

#[test]
fn oversized_stdin_is_rejected_before_the_stub_runs() {
    let outcome = ask("echo")
        .env("ASK_CLAUDE_MAX_STDIN_BYTES", "32")
        .stdin("x".repeat(128))
        .fails_with(1);
    outcome.stderr_has("exceeds");
    // Nothing was forwarded; the stub never produced its echo JSON.
    assert_eq!(outcome.stdout(), "");
}

#[test]
fn unparseable_cap_override_falls_back_to_the_default() {
    let outcome = ask("echo")
        .env("ASK_CLAUDE_MAX_STDIN_BYTES", "not-a-number")
        .stdin("x".repeat(128))
        .passes();
    assert_eq!(outcome.echoed_args()[1], "x".repeat(128));
}
