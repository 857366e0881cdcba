// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag forwarding and exit-code propagation through the stub claude.

use crate::prelude::*;

#[test]
fn forwards_prompt_and_required_flags() {
    let outcome = ask("echo").args(&["hello world"]).passes();
    assert_eq!(
        outcome.echoed_args(),
        ["-p", "hello world", "--dangerously-skip-permissions"]
    );
}

#[test]
fn joins_multiple_prompt_tokens() {
    let outcome = ask("echo").args(&["hello", "world"]).passes();
    assert_eq!(
        outcome.echoed_args(),
        ["-p", "hello world", "--dangerously-skip-permissions"]
    );
}

#[test]
fn verbatim_tokens_after_sentinel_become_prompt_text() {
    let outcome = ask("echo").args(&["--", "--not-a-flag", "value"]).passes();
    assert_eq!(
        outcome.echoed_args(),
        ["-p", "--not-a-flag value", "--dangerously-skip-permissions"]
    );
}

#[test]
fn sandbox_and_model_append_in_order() {
    let outcome = ask("echo")
        .args(&["--sandbox", "--model", "sonnet", "prompt text"])
        .passes();
    assert_eq!(
        outcome.echoed_args(),
        [
            "-p",
            "prompt text",
            "--dangerously-skip-permissions",
            "--sandbox",
            "--model",
            "sonnet",
        ]
    );
}

#[test]
fn json_flag_appends_output_format_last() {
    // The echo stub's reply has no .response field, so --json exits 1; the
    // raw stdout still proves the full, ordered argument vector.
    let outcome = ask("echo")
        .args(&["--sandbox", "--model", "sonnet", "--json", "prompt text"])
        .fails_with(1);
    assert_eq!(
        outcome.echoed_args(),
        [
            "-p",
            "prompt text",
            "--dangerously-skip-permissions",
            "--sandbox",
            "--model",
            "sonnet",
            "--output-format",
            "json",
        ]
    );
}

#[test]
fn propagates_child_exit_code_and_stderr() {
    let outcome = ask("error").args(&["prompt text"]).fails_with(2);
    outcome.stderr_has("stub failure");
    assert_eq!(outcome.stdout(), "");
}
