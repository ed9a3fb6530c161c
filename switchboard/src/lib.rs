//! # switchboard - Constant-Time Dispatch Tables
//!
//! `switchboard` replaces long `if`/`else if` chains, and `match` statements
//! whose arms only call a function, with a [`DispatchTable`]: a map from case
//! keys to handlers with O(1) lookup.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchboard::prelude::*;
//!
//! let mut table: DispatchTable<String, (i32, i32), i32> = DispatchTable::new();
//! table.register("add".to_string(), |(a, b): (i32, i32)| a + b);
//! table.register("mul".to_string(), |(a, b): (i32, i32)| a * b);
//!
//! assert_eq!(table.invoke("mul", (6, 7)), 42);
//! assert_eq!(table.invoke("pow", (6, 7)), 0); // missing case, no_op
//! ```
//!
//! ## Default vs. Missing
//!
//! A table starts with one entry, the default case. An unknown key does not
//! reach it: unknown keys go to the separate missing-case handler, which is
//! [`no_op`] unless configured. Install [`raise_on_missing`] (or use
//! [`DispatchTable::strict`]) to make unknown keys fail instead.
//!
//! ## Features
//!
//! - `tracing` (default): report overwrites as `tracing` warnings instead of
//!   writing them to stderr
//! - `sync` (default): [`SharedDispatchTable`], a lock-guarded table for
//!   concurrent mutation

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Keys
pub use switchboard_core::{Case, CaseKey, DEFAULT_CASE};

// Handlers
pub use switchboard_core::{Handler, Named, SharedHandler, into_shared, named};

// Lookup
pub use switchboard_core::{CaseTable, Lookup};

// Error types
pub use switchboard_core::{BoxError, DuplicateKeyWarning, MissingCaseError, SwitchError};

pub mod builder;
mod diagnostics;
pub mod fallback;
#[cfg(feature = "sync")]
pub mod shared;
pub mod table;
pub mod testing;

pub use builder::{DispatchTableBuilder, TableConfig};
pub use diagnostics::OverwriteObserver;
pub use fallback::{MissingWith, missing_case, missing_with, no_op, raise_on_missing};
#[cfg(feature = "sync")]
pub use shared::SharedDispatchTable;
pub use table::DispatchTable;

/// Prelude module - common imports for switchboard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchboard::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sync")]
    pub use crate::SharedDispatchTable;
    pub use crate::{
        Case, CaseKey, DispatchTable, Handler, MissingCaseError, SwitchError, named, no_op,
        raise_on_missing,
    };
}
