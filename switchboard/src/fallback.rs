//! Stock fallback handlers.
//!
//! These are free functions, usable wherever a handler is expected:
//!
//! - [`no_op`] - the permissive fallback; what tables use when no default or
//!   missing-case handler is supplied
//! - [`raise_on_missing`] - the strict fallback; install it as the
//!   missing-case handler to make unknown keys fail
//! - [`missing_with`] - strict, with a custom error message
//! - [`missing_case`] - strict, and reports the miss on the diagnostic channel

use crate::diagnostics::report_missing;
use std::borrow::Cow;
use switchboard_core::{Handler, MissingCaseError};

const MISSING_CASE_REPORT: &str = "encountered a missing case that cannot be dealt with!";

/// Accepts anything, does nothing, returns `R::default()`.
pub fn no_op<A, R: Default>(_args: A) -> R {
    R::default()
}

/// Always fails with a [`MissingCaseError`].
///
/// # Example
///
/// ```rust,ignore
/// let mut table: DispatchTable<&str, (), Result<u32, SwitchError>> =
///     DispatchTable::with_handlers(|_: ()| Ok(0), raise_on_missing);
/// assert!(table.invoke("nothing", ()).unwrap_err().is_missing());
/// ```
pub fn raise_on_missing<A, T, E>(_args: A) -> Result<T, E>
where
    E: From<MissingCaseError>,
{
    Err(MissingCaseError::new().into())
}

/// A strict missing-case handler with its own error message, optionally
/// reporting a separate message on the diagnostic channel before failing.
///
/// Built by [`missing_with`] or [`missing_case`].
#[derive(Debug, Clone)]
pub struct MissingWith {
    name: &'static str,
    report: Option<Cow<'static, str>>,
    error: MissingCaseError,
}

impl MissingWith {
    /// Report `message` on the diagnostic channel each time this handler
    /// runs. The returned error keeps its own message.
    pub fn reporting(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.report = Some(message.into());
        self
    }

    /// The message reported before failing, if any.
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// The error every call fails with.
    pub fn error(&self) -> &MissingCaseError {
        &self.error
    }
}

impl<A, T, E> Handler<A, Result<T, E>> for MissingWith
where
    A: 'static,
    T: 'static,
    E: From<MissingCaseError> + 'static,
{
    fn call(&self, _args: A) -> Result<T, E> {
        if let Some(message) = &self.report {
            report_missing(message);
        }
        Err(self.error.clone().into())
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }
}

/// Like [`raise_on_missing`], with a custom message.
///
/// ```rust,ignore
/// let strict = missing_with("unknown command").reporting("check the command table");
/// ```
pub fn missing_with(message: impl Into<Cow<'static, str>>) -> MissingWith {
    MissingWith {
        name: "missing_with",
        report: None,
        error: MissingCaseError::with_message(message),
    }
}

/// The stock reporting fallback: logs that a case is missing, then fails
/// with the stock [`MissingCaseError`].
pub fn missing_case() -> MissingWith {
    MissingWith {
        name: "missing_case",
        report: Some(Cow::Borrowed(MISSING_CASE_REPORT)),
        error: MissingCaseError::new(),
    }
}
