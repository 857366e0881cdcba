// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline behavior: exit 124 and prompt termination.

use std::time::Instant;

use crate::prelude::*;

#[test]
fn timed_out_request_exits_124_promptly() {
    let start = Instant::now();
    ask("sleep")
        .env("CLAUDE_STUB_SLEEP_MS", "2000")
        .args(&["--timeout-ms", "50", "prompt text"])
        .fails_with(124)
        .stderr_has("timed out");
    assert!(
        start.elapsed() < std::time::Duration::from_millis(1500),
        "termination took {:?}",
        start.elapsed()
    );
}

#[test]
fn without_a_deadline_the_request_completes() {
    ask("sleep")
        .env("CLAUDE_STUB_SLEEP_MS", "100")
        .args(&["prompt text"])
        .passes()
        .stdout_is("done");
}

#[test]
fn fast_child_beats_a_generous_deadline() {
    let outcome = ask("echo").args(&["--timeout-ms", "5000", "hi"]).passes();
    assert_eq!(
        outcome.echoed_args(),
        ["-p", "hi", "--dangerously-skip-permissions"]
    );
}
