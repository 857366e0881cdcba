// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON envelope extraction for `--json` mode.
//!
//! The claude CLI's structured output is an object carrying the reply under
//! a `response` key. The envelope is validated strictly: output that is not
//! JSON, or JSON without a `response` key, is an error rather than being
//! passed through as success. The caller decides how to recover (it prints
//! the raw output with a warning).

use serde_json::Value;
use thiserror::Error;

/// Errors produced while extracting the `response` field.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Output was not valid JSON; carries the parser diagnostic.
    #[error("Claude did not return valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but not an object with a `response` key.
    #[error("Claude returned JSON missing required .response field")]
    MissingField,
}

/// Extract the `response` field from raw stdout.
///
/// A `null` response coerces to the empty string, never the literal word
/// "null"; string values are returned unquoted; any other value is
/// serialized compactly.
pub fn extract_json_response(raw: &str) -> Result<String, ResponseError> {
    let value: Value = serde_json::from_str(raw)?;
    match value.get("response") {
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(ResponseError::MissingField),
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
