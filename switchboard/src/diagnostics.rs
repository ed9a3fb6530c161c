//! Overwrite diagnostics.
//!
//! Registering a key that already exists is allowed but reported. The report
//! goes to the diagnostic channel: a `tracing` warning when the `tracing`
//! feature is enabled, stderr otherwise. A table may additionally hand every
//! warning to an observer callback.
//!
//! Strict missing-case handlers can report on the same channel before they
//! fail; see [`report_missing`].

use std::{fmt, sync::Arc};
use switchboard_core::DuplicateKeyWarning;

/// A callback receiving every overwrite a table reports.
pub type OverwriteObserver = Arc<dyn Fn(&DuplicateKeyWarning) + Send + Sync>;

/// Where a table sends its diagnostics.
#[derive(Clone)]
pub(crate) struct Diagnostics {
    label: &'static str,
    observer: Option<OverwriteObserver>,
}

impl Diagnostics {
    pub(crate) fn new(label: &'static str, observer: Option<OverwriteObserver>) -> Self {
        Self { label, observer }
    }

    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    /// Report that `key` is about to be overwritten.
    pub(crate) fn overwrite<K: fmt::Debug>(&self, key: &K) {
        let warning = DuplicateKeyWarning {
            label: self.label,
            key: format!("{key:?}"),
        };

        #[cfg(feature = "tracing")]
        {
            tracing::warn!(
                target: "switchboard::table",
                table = %self.label,
                key = %warning.key,
                "{warning}"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            eprintln!("{warning}");
        }

        if let Some(observer) = &self.observer {
            observer(&warning);
        }
    }
}

/// Report a missing case on the diagnostic channel.
pub(crate) fn report_missing(message: &str) {
    #[cfg(feature = "tracing")]
    {
        tracing::error!(target: "switchboard::fallback", "{message}");
    }

    #[cfg(not(feature = "tracing"))]
    {
        eprintln!("{message}");
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("label", &self.label)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
