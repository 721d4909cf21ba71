//! Sample reader
//!
//! Reads whitespace-separated numbers. Bad tokens are skipped and reported as
//! [`Diagnostic`]s next to the values that did parse; nothing here aborts on
//! malformed input.

use crate::config::ReaderConfig;
use sample_core::{Numeric, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// A recoverable problem met while reading a sample
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Token `index` (1-based) is not a number of the requested type
    #[error("token {index} ({token:?}) is not a valid number, skipped")]
    InvalidToken { index: usize, token: String },

    /// Token `index` (1-based) parsed to NaN or an infinity
    #[error("token {index} ({token:?}) is not finite, skipped")]
    NonFinite { index: usize, token: String },

    /// The file could not be read at all
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Values read from a source plus everything that was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutcome<T> {
    pub sample: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ReadOutcome<T> {
    /// Whether every token was accepted
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn unreadable(path: &Path, reason: String) -> Self {
        Self {
            sample: Vec::new(),
            diagnostics: vec![Diagnostic::Unreadable {
                path: path.display().to_string(),
                reason,
            }],
        }
    }
}

/// Parse whitespace-separated numbers from `text`
///
/// Tokens are numbered from 1 in reading order. Values keep their order.
pub fn parse_sample<T>(text: &str, config: &ReaderConfig) -> ReadOutcome<T>
where
    T: Numeric + FromStr,
{
    let mut sample = Vec::new();
    let mut diagnostics = Vec::new();

    for (i, token) in text.split_whitespace().enumerate() {
        let index = i + 1;
        let diagnostic = match token.parse::<T>() {
            Ok(value) if config.allow_non_finite || value.is_finite() => {
                sample.push(value);
                continue;
            }
            Ok(_) => Diagnostic::NonFinite {
                index,
                token: token.to_string(),
            },
            Err(_) => Diagnostic::InvalidToken {
                index,
                token: token.to_string(),
            },
        };
        warn!("{diagnostic}");
        diagnostics.push(diagnostic);
    }

    debug!(
        accepted = sample.len(),
        skipped = diagnostics.len(),
        "parsed sample"
    );
    ReadOutcome {
        sample,
        diagnostics,
    }
}

/// Read a sample from a file, propagating I/O failures
#[instrument(skip(path, config), fields(path = %path.display()))]
pub fn try_read_sample<T>(path: &Path, config: &ReaderConfig) -> Result<ReadOutcome<T>>
where
    T: Numeric + FromStr,
{
    let text = fs::read_to_string(path)?;
    Ok(parse_sample(&text, config))
}

/// Read a sample from a file
///
/// Never fails: an unreadable file yields an empty sample with a single
/// [`Diagnostic::Unreadable`].
pub fn read_sample<T>(path: &Path, config: &ReaderConfig) -> ReadOutcome<T>
where
    T: Numeric + FromStr,
{
    match try_read_sample(path, config) {
        Ok(outcome) => outcome,
        Err(err) => {
            let outcome = ReadOutcome::unreadable(path, err.to_string());
            for diagnostic in &outcome.diagnostics {
                warn!("{diagnostic}");
            }
            outcome
        }
    }
}
