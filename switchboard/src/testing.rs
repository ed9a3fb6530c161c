//! Testing utilities for switchboard.
//!
//! This module provides helpers for asserting how a table dispatched:
//!
//! - [`RecordingHandler`]: A handler that records every argument bag it receives
//! - [`OverwriteCounter`]: An overwrite observer that counts reported collisions

use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};
use switchboard_core::{DuplicateKeyWarning, Handler};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every call and returns a fixed value.
///
/// Clones share the same record.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<(i32, i32), i32>::new(0);
/// table.register("x", recorder.clone());
///
/// table.invoke("x", (1, 2));
///
/// assert_eq!(recorder.calls(), vec![(1, 2)]);
/// ```
pub struct RecordingHandler<A, R> {
    name: &'static str,
    calls: Arc<Mutex<Vec<A>>>,
    result: R,
}

impl<A, R> RecordingHandler<A, R> {
    /// Create a recording handler that returns `result`.
    pub fn new(result: R) -> Self {
        Self::named("recording", result)
    }

    /// Create a recording handler displayed as `name`.
    pub fn named(name: &'static str, result: R) -> Self {
        Self {
            name,
            calls: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get all recorded argument bags.
    pub fn calls(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns true if the handler was never called.
    pub fn never_called(&self) -> bool {
        self.call_count() == 0
    }
}

impl<A, R: Clone> Clone for RecordingHandler<A, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            calls: self.calls.clone(),
            result: self.result.clone(),
        }
    }
}

impl<A, R> Handler<A, R> for RecordingHandler<A, R>
where
    A: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    fn call(&self, args: A) -> R {
        self.calls.lock().unwrap().push(args);
        self.result.clone()
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }
}

// ============================================================================
// Overwrite Counter
// ============================================================================

/// Counts the overwrites a table reports.
///
/// # Example
///
/// ```rust,ignore
/// let counter = OverwriteCounter::new();
/// let mut table = DispatchTable::builder().on_overwrite(counter.observer()).build();
///
/// table.register("x", f);
/// table.register("x", g);
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct OverwriteCounter {
    warnings: Arc<Mutex<Vec<DuplicateKeyWarning>>>,
}

impl OverwriteCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer to pass to `DispatchTableBuilder::on_overwrite`.
    pub fn observer(&self) -> Box<dyn Fn(&DuplicateKeyWarning) + Send + Sync> {
        let warnings = self.warnings.clone();
        Box::new(move |warning: &DuplicateKeyWarning| {
            warnings.lock().unwrap().push(warning.clone())
        })
    }

    /// Number of overwrites reported so far.
    pub fn count(&self) -> usize {
        self.warnings.lock().unwrap().len()
    }

    /// The reported keys, in report order.
    pub fn keys(&self) -> Vec<String> {
        self.warnings
            .lock()
            .unwrap()
            .iter()
            .map(|w| w.key.clone())
            .collect()
    }

    /// All reported warnings.
    pub fn warnings(&self) -> Vec<DuplicateKeyWarning> {
        self.warnings.lock().unwrap().clone()
    }
}
