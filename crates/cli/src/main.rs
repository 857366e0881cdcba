// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ask-claude: forward a prompt to the Claude CLI and report the outcome
//! through exit codes.

mod ask;
mod exit_error;
mod stdin;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Silent unless RUST_LOG opts in; tracing shares stderr with
    // diagnostics and must never touch the payload stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = ask::execute(tokens).await {
        if !err.message.is_empty() {
            eprintln!("{err}");
        }
        std::process::exit(err.code);
    }
}
