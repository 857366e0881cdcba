// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution with linear fallback and a per-attempt deadline.
//!
//! Candidates are tried strictly in order. Per attempt the states are
//! `Spawning -> {NotFound, SpawnError, Running}` and
//! `Running -> {Exited, TimedOutThenExited, RuntimeError}`; only `NotFound`
//! advances the chain, every other terminal state ends the engine. The
//! deadline is scoped per spawned child: each candidate attempt re-arms a
//! full fresh deadline.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;

use crate::candidates::Candidate;

/// Tagged outcome of one invocation: exactly one terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Child exit code, defaulting to 1 when the child died without one.
    pub exit_code: i32,
    /// Everything the child wrote to stdout, decoded as UTF-8.
    pub stdout: String,
    /// Everything the child wrote to stderr, decoded as UTF-8.
    pub stderr: String,
    /// The deadline fired and the child was forcibly terminated. Partial
    /// output captured before the kill is kept.
    pub timed_out: bool,
}

/// Outcome of a single candidate attempt.
enum Attempt {
    /// The executable is not on this system; try the next candidate.
    NotFound,
    /// Terminal result; the fallback chain stops here.
    Terminal(ExecutionResult),
}

/// Run candidates in order until one yields a non-not-found result.
///
/// Never merges or retries across candidates: a single linear pass, first
/// usable result wins. Exhausting the chain yields the default not-found
/// result (exit 1).
pub async fn run_with_fallback(candidates: &[Candidate], timeout_ms: u64) -> ExecutionResult {
    for candidate in candidates {
        match run_candidate(candidate, timeout_ms).await {
            Attempt::NotFound => {
                tracing::debug!(executable = %candidate.executable, "executable not found, trying next candidate");
            }
            Attempt::Terminal(result) => return result,
        }
    }

    ExecutionResult {
        exit_code: 1,
        stdout: String::new(),
        stderr: "claude executable not found; install the Claude CLI or make npx available on PATH\n"
            .to_string(),
        timed_out: false,
    }
}

async fn run_candidate(candidate: &Candidate, timeout_ms: u64) -> Attempt {
    let start = Instant::now();
    let span = tracing::info_span!(
        "exec.attempt",
        executable = %candidate.executable,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
        timed_out = tracing::field::Empty,
    );

    let mut command = Command::new(&candidate.executable);
    command
        .args(&candidate.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    // Own process group so a deadline kill reaches descendants too.
    #[cfg(unix)]
    command.process_group(0);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Attempt::NotFound;
        }
        Err(source) => {
            return Attempt::Terminal(ExecutionResult {
                exit_code: 1,
                stdout: String::new(),
                stderr: format!("failed to start {}: {}\n", candidate.executable, source),
                timed_out: false,
            });
        }
    };

    // Drain both pipes concurrently with the wait so a chatty child can
    // never deadlock on a full pipe.
    let stdout_task = capture(child.stdout.take());
    let stderr_task = capture(child.stderr.take());

    let mut timed_out = false;
    let status = if timeout_ms > 0 {
        match tokio::time::timeout(Duration::from_millis(timeout_ms), child.wait()).await {
            Ok(status) => status,
            Err(_) => {
                timed_out = true;
                terminate_tree(&mut child).await;
                child.wait().await
            }
        }
    } else {
        child.wait().await
    };

    let stdout = collect(stdout_task).await;
    let stderr = collect(stderr_task).await;

    let result = match status {
        Ok(status) => {
            let exit_code = status.code().unwrap_or(1);
            span.record("exit_code", exit_code);
            span.record("duration_ms", start.elapsed().as_millis() as u64);
            span.record("timed_out", timed_out);

            if !timed_out && exit_code != 0 && matches_not_found(candidate, &stdout, &stderr) {
                return Attempt::NotFound;
            }
            ExecutionResult {
                exit_code,
                stdout,
                stderr,
                timed_out,
            }
        }
        // Post-spawn host failure: surface it, keeping partial output.
        Err(source) => {
            let mut stderr = stderr;
            if !stderr.is_empty() && !stderr.ends_with('\n') {
                stderr.push('\n');
            }
            stderr.push_str(&format!(
                "failed waiting on {}: {}\n",
                candidate.executable, source
            ));
            ExecutionResult {
                exit_code: 1,
                stdout,
                stderr,
                timed_out,
            }
        }
    };

    Attempt::Terminal(result)
}

fn matches_not_found(candidate: &Candidate, stdout: &str, stderr: &str) -> bool {
    let Some(matcher) = &candidate.not_found else {
        return false;
    };
    matcher.is_match(stdout) || matcher.is_match(stderr)
}

fn capture(
    stream: Option<impl tokio::io::AsyncRead + Unpin + Send + 'static>,
) -> JoinHandle<Vec<u8>> {
    tokio::spawn(async move {
        let mut buffer = Vec::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_end(&mut buffer).await;
        }
        buffer
    })
}

async fn collect(task: JoinHandle<Vec<u8>>) -> String {
    match task.await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

/// Forcibly terminate the child and all of its descendants.
///
/// Plain signal delivery only reaches the immediate child; the tree kill is
/// platform-specific: the child's process group on Unix, `taskkill /T` on
/// Windows.
async fn terminate_tree(child: &mut Child) {
    let Some(pid) = child.id() else {
        // Already reaped; nothing to kill.
        return;
    };

    #[cfg(unix)]
    {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;
        if killpg(Pid::from_raw(pid as i32), Signal::SIGKILL).is_err() {
            let _ = child.start_kill();
        }
    }

    #[cfg(windows)]
    {
        let status = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/T", "/F"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        if status.is_err() {
            let _ = child.start_kill();
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = pid;
        let _ = child.start_kill();
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
