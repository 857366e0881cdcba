// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing for the ask-claude wrapper.
//!
//! The surface is small and fully fixed, so tokens are consumed left to
//! right by hand: flags are recognized until a `--` sentinel switches the
//! parser into verbatim mode, after which every token (flag-looking or not)
//! becomes prompt text. Parsing fails on the first offending token.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Model short names accepted by `--model`, in the order shown to users.
pub const MODEL_SHORT_NAMES: [&str; 3] = ["opus", "sonnet", "haiku"];

/// Validated options for a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Trimmed, space-joined prompt text from positional/verbatim tokens.
    /// Empty when the prompt is expected on stdin instead.
    pub prompt: String,
    /// Normalized (lower-cased) model name, if `--model`/`-m` was given.
    pub model: Option<String>,
    /// Request a JSON envelope and extract its `response` field.
    pub output_json: bool,
    /// Forward `--sandbox` to the claude CLI.
    pub sandbox: bool,
    /// Per-attempt deadline in milliseconds; 0 means no deadline.
    pub timeout_ms: u64,
    /// `--help`/`-h` was given; the caller prints usage and exits 0.
    pub help: bool,
}

/// Errors produced while parsing or validating the CLI surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A flag that takes a value was given none (or a `-`-prefixed token).
    #[error("Missing value for {flag}")]
    MissingValue {
        /// Canonical spelling of the flag.
        flag: &'static str,
    },

    /// `--model` value is neither a short name nor a qualified model id.
    #[error(
        "Invalid value for --model; expected one of: {}, or a claude-* model id (got '{value}')",
        MODEL_SHORT_NAMES.join(", ")
    )]
    InvalidModel {
        /// The rejected value, as given.
        value: String,
    },

    /// `--timeout-ms` value is not a strictly positive integer.
    #[error("Invalid value for --timeout-ms; expected a positive integer (got '{value}')")]
    InvalidTimeout {
        /// The rejected value, as given.
        value: String,
    },

    /// A `-`-prefixed token that is not part of the surface.
    #[error("Unknown option: {token}")]
    UnknownOption {
        /// The offending token.
        token: String,
    },

    /// The prompt was empty or all-whitespace at execution time.
    #[error("Prompt is required; pass it as an argument or pipe it on stdin")]
    EmptyPrompt,
}

/// Parse a flat token list (argv without the program name) into options.
///
/// `--help`/`-h` short-circuits: tokens after it are not validated, since
/// the caller prints usage and exits without running anything.
pub fn parse_cli_args(tokens: &[String]) -> Result<CliOptions, ParseError> {
    let mut opts = CliOptions::default();
    let mut parts: Vec<&str> = Vec::new();
    let mut verbatim = false;

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if verbatim {
            parts.push(token);
            continue;
        }
        match token.as_str() {
            "--" => {
                // The verbatim remainder IS the prompt; positional tokens
                // seen before the sentinel are discarded.
                parts.clear();
                verbatim = true;
            }
            "--help" | "-h" => {
                opts.help = true;
                return Ok(opts);
            }
            "--json" => opts.output_json = true,
            "--sandbox" => opts.sandbox = true,
            "--model" | "-m" => {
                let value = next_value(&mut iter, "--model")?;
                opts.model = Some(validate_model(value)?);
            }
            "--timeout-ms" => {
                let value = next_value(&mut iter, "--timeout-ms")?;
                opts.timeout_ms = value
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .ok_or_else(|| ParseError::InvalidTimeout {
                        value: value.to_string(),
                    })?;
            }
            flag if flag.starts_with('-') => {
                return Err(ParseError::UnknownOption {
                    token: token.clone(),
                });
            }
            _ => parts.push(token),
        }
    }

    opts.prompt = parts.join(" ").trim().to_string();
    Ok(opts)
}

/// Reject an empty or all-whitespace prompt.
///
/// Checked at execution time rather than parse time: an empty positional
/// prompt is legal as long as one arrives on stdin before anything runs.
pub fn assert_non_empty_prompt(prompt: &str) -> Result<(), ParseError> {
    if prompt.trim().is_empty() {
        Err(ParseError::EmptyPrompt)
    } else {
        Ok(())
    }
}

fn next_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &'static str,
) -> Result<&'a str, ParseError> {
    match iter.next() {
        Some(value) if !value.starts_with('-') => Ok(value),
        _ => Err(ParseError::MissingValue { flag }),
    }
}

fn validate_model(value: &str) -> Result<String, ParseError> {
    let normalized = value.to_ascii_lowercase();
    if MODEL_SHORT_NAMES.contains(&normalized.as_str())
        || qualified_model_re().is_some_and(|re| re.is_match(&normalized))
    {
        Ok(normalized)
    } else {
        Err(ParseError::InvalidModel {
            value: value.to_string(),
        })
    }
}

/// Qualified ids: a `claude-` prefix, a short name, then zero or more
/// dot/alphanumeric suffix segments separated by hyphens
/// (e.g. `claude-sonnet-4.5`, `claude-haiku-20241022`).
fn qualified_model_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^claude-(opus|sonnet|haiku)(-[a-z0-9.]+)*$").ok())
        .as_ref()
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
