//! Builder for configuring a [`DispatchTable`].

use crate::{
    diagnostics::{Diagnostics, OverwriteObserver},
    fallback::no_op,
    table::DispatchTable,
};
use std::{marker::PhantomData, sync::Arc};
use switchboard_core::{CaseKey, DuplicateKeyWarning, Handler, SharedHandler, into_shared};

/// Label tables report diagnostics under unless configured otherwise.
pub const DEFAULT_LABEL: &str = "DispatchTable";

/// Plain-data settings of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// The name diagnostics are reported under.
    pub label: &'static str,
    /// Number of cases to reserve room for, `default` included.
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL,
            capacity: 0,
        }
    }
}

/// Builder for constructing a [`DispatchTable`].
///
/// # Example
///
/// ```rust,ignore
/// let counter = OverwriteCounter::new();
/// let table: DispatchTable<&str, (), ()> = DispatchTable::builder()
///     .label("Switch")
///     .missing_handler(|_: ()| eprintln!("no such case"))
///     .on_overwrite(counter.observer())
///     .build();
/// ```
pub struct DispatchTableBuilder<K, A, R> {
    config: TableConfig,
    default: Option<SharedHandler<A, R>>,
    missing: Option<SharedHandler<A, R>>,
    observer: Option<OverwriteObserver>,
    _key: PhantomData<fn() -> K>,
}

impl<K, A, R> Default for DispatchTableBuilder<K, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A, R> DispatchTableBuilder<K, A, R> {
    /// Create a builder with the default [`TableConfig`].
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create a builder from existing settings.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            config,
            default: None,
            missing: None,
            observer: None,
            _key: PhantomData,
        }
    }

    /// Set the name diagnostics are reported under.
    pub fn label(mut self, label: &'static str) -> Self {
        self.config.label = label;
        self
    }

    /// Reserve room for `capacity` cases.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Call `observer` for every overwrite, after it has been logged.
    pub fn on_overwrite<F>(mut self, observer: F) -> Self
    where
        F: Fn(&DuplicateKeyWarning) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// The settings configured so far.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}

impl<K, A, R> DispatchTableBuilder<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    /// Set the handler stored under the default key.
    pub fn default_handler<H: Handler<A, R>>(mut self, handler: H) -> Self {
        self.default = Some(Arc::new(handler));
        self
    }

    /// Set the handler unknown keys resolve to.
    pub fn missing_handler<H: Handler<A, R>>(mut self, handler: H) -> Self {
        self.missing = Some(Arc::new(handler));
        self
    }

    /// Build the table. Handlers left unset become [`no_op`].
    pub fn build(mut self) -> DispatchTable<K, A, R>
    where
        R: Default,
    {
        let default = self.default.take().unwrap_or_else(|| into_shared(no_op::<A, R>));
        let missing = self.missing.take().unwrap_or_else(|| into_shared(no_op::<A, R>));
        self.finish(default, missing)
    }

    /// Build the table with the given handlers, replacing any set earlier.
    pub fn build_with<D, M>(self, default: D, missing: M) -> DispatchTable<K, A, R>
    where
        D: Handler<A, R>,
        M: Handler<A, R>,
    {
        self.finish(Arc::new(default), Arc::new(missing))
    }

    fn finish(
        self,
        default: SharedHandler<A, R>,
        missing: SharedHandler<A, R>,
    ) -> DispatchTable<K, A, R> {
        let diagnostics = Diagnostics::new(self.config.label, self.observer);
        DispatchTable::from_parts(default, missing, self.config.capacity, diagnostics)
    }
}
