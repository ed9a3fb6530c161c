//! # switchboard-core
//!
//! Core traits for the switchboard dispatch table.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to name handlers, keys and errors without pulling in
//! the table implementation from `switchboard`.
//!
//! # Building Blocks
//!
//! ## Keys ([`CaseKey`])
//!
//! A case key names one branch. Every key type reserves one value, the
//! default case, under which a table stores its explicit default handler.
//! [`Case`] adds such a reserved value to any hashable type.
//!
//! ## Handlers ([`Handler`])
//!
//! A handler is anything callable with the table's argument bag. Closures and
//! plain functions implement it through a blanket impl; [`Named`] overrides the
//! name a handler is displayed with.
//!
//! ## Lookups ([`CaseTable`])
//!
//! A lookup never fails: it either matches a registered case or resolves to
//! the table's missing-case handler. [`Lookup`] keeps the two apart.
//!
//! # Error Types
//!
//! - [`MissingCaseError`] - A strict table was asked for an unknown case
//! - [`DuplicateKeyWarning`] - A registration replaced an existing case
//! - [`SwitchError`] - Missing case vs. failing handler

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod case;
mod error;
mod handler;
mod lookup;

// Re-exports
pub use case::{Case, CaseKey, DEFAULT_CASE};
pub use error::{BoxError, DuplicateKeyWarning, MissingCaseError, SwitchError};
pub use handler::{Handler, Named, SharedHandler, into_shared, named};
pub use lookup::{CaseTable, Lookup};
