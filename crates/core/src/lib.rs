// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ask-core: Core library for the ask-claude CLI wrapper.
//!
//! Everything here is invocation-scoped: argument parsing, claude argument
//! vector construction, executable fallback resolution, subprocess execution
//! with a deadline, and JSON envelope extraction. The binary in `crates/cli`
//! wires these together and owns the exit-code contract.

pub mod args;
pub mod candidates;
pub mod command;
pub mod engine;
pub mod response;

pub use args::{assert_non_empty_prompt, parse_cli_args, CliOptions, ParseError};
pub use candidates::{resolve_candidates, Candidate};
pub use command::build_claude_args;
pub use engine::{run_with_fallback, ExecutionResult};
pub use response::{extract_json_response, ResponseError};
