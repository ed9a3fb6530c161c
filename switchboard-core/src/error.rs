//! Error types for switchboard.
//!
//! This module provides the diagnostics and errors a dispatch table deals in,
//! using `thiserror`:
//!
//! - [`DuplicateKeyWarning`] - Non-fatal; reported when a case is overwritten
//! - [`MissingCaseError`] - Raised by strict missing-case handlers
//! - [`SwitchError`] - Top-level error for strict tables

use std::borrow::Cow;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

const MISSING_CASE_MESSAGE: &str = "encountered a missing case that cannot be dealt with";

/// A dispatch key was not found and the table is in strict mode.
///
/// Tables never produce this on their own. It comes from a missing-case
/// handler such as `raise_on_missing` that the caller installed on purpose.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MissingCaseError {
    message: Cow<'static, str>,
}

impl MissingCaseError {
    /// Create an error with the stock message.
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(MISSING_CASE_MESSAGE),
        }
    }

    /// Create an error with a custom message.
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for MissingCaseError {
    fn default() -> Self {
        Self::new()
    }
}

/// A registration replaced the handler of an existing case.
///
/// This is a diagnostic, not a failure: the overwrite still happens. Tables
/// log it and hand it to their overwrite observer, if one is configured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{label}.update: {key} already exists and will be overridden.")]
pub struct DuplicateKeyWarning {
    /// The label of the table that reported the overwrite.
    pub label: &'static str,
    /// The `Debug` rendering of the overwritten key.
    pub key: String,
}

/// Top-level error type for strict tables.
///
/// Lets callers tell "no such case" apart from "the handler failed" when both
/// come back through the same `invoke` call.
#[derive(Error, Debug)]
pub enum SwitchError {
    /// No case matched and the missing-case handler is strict.
    #[error(transparent)]
    Missing(#[from] MissingCaseError),

    /// A registered handler failed.
    #[error("handler failed: {0}")]
    Handler(#[source] BoxError),
}

impl SwitchError {
    /// Wrap a handler failure.
    pub fn handler(err: impl Into<BoxError>) -> Self {
        SwitchError::Handler(err.into())
    }

    /// Returns true if this error reports a missing case.
    pub fn is_missing(&self) -> bool {
        matches!(self, SwitchError::Missing(_))
    }
}

impl From<BoxError> for SwitchError {
    fn from(err: BoxError) -> Self {
        SwitchError::Handler(err)
    }
}
