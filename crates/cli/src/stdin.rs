// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded prompt intake from standard input.
//!
//! When no positional prompt is given the whole of stdin becomes the
//! prompt, read line by line up to a byte cap. The reader is wrapped in a
//! `take` of cap+1 bytes so an oversized stream is detected the moment the
//! cap is crossed without buffering anything further, and nothing is ever
//! partially forwarded.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Default cap on accumulated stdin bytes: 50 MiB.
pub const DEFAULT_MAX_STDIN_BYTES: usize = 50 * 1024 * 1024;

/// Environment variable overriding the cap; must parse as a strictly
/// positive integer to take effect.
pub const MAX_STDIN_BYTES_ENV: &str = "ASK_CLAUDE_MAX_STDIN_BYTES";

#[derive(Debug, Error)]
pub enum StdinError {
    /// Accumulated input crossed the cap; nothing was forwarded.
    #[error("stdin input exceeds maximum allowed size ({limit} bytes); set ASK_CLAUDE_MAX_STDIN_BYTES to raise the limit")]
    TooLarge {
        /// The cap in effect when the read aborted.
        limit: usize,
    },

    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the stdin byte cap from the environment.
pub fn max_stdin_bytes() -> usize {
    std::env::var(MAX_STDIN_BYTES_ENV)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_MAX_STDIN_BYTES)
}

/// Read all of `reader` as the prompt, aborting once `max_bytes` is
/// exceeded.
pub async fn read_prompt<R>(reader: R, max_bytes: usize) -> Result<String, StdinError>
where
    R: AsyncBufRead + Unpin,
{
    let mut bounded = reader.take(max_bytes as u64 + 1);
    let mut buffer = String::new();
    loop {
        let read = bounded.read_line(&mut buffer).await?;
        if read == 0 {
            break;
        }
        if buffer.len() > max_bytes {
            return Err(StdinError::TooLarge { limit: max_bytes });
        }
    }
    Ok(buffer)
}

#[cfg(test)]
#[path = "stdin_tests.rs"]
mod tests;
