#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use switchboard::{DispatchTable, SwitchError, testing::OverwriteCounter};

// ============================================================================
// Test Argument Types
// ============================================================================

/// The argument bag most tests dispatch with.
pub type Args = (i32, String);

pub fn args(n: i32, s: &str) -> Args {
    (n, s.to_string())
}

// ============================================================================
// Test Handlers
// ============================================================================

pub fn h1((n, s): Args) -> String {
    format!("h1:{n}:{s}")
}

pub fn h2((n, s): Args) -> String {
    format!("h2:{n}:{s}")
}

/// A handler that counts its calls and returns the running count.
#[derive(Clone, Default)]
pub struct Tally {
    pub calls: Arc<AtomicUsize>,
}

impl Tally {
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn handler(&self) -> impl Fn(()) -> usize + Send + Sync + 'static + use<> {
        let calls = self.calls.clone();
        move |_: ()| calls.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// A fallible handler: fails on negative input.
pub fn checked_sqrt(n: f64) -> Result<f64, SwitchError> {
    if n < 0.0 {
        Err(SwitchError::handler(format!("negative input: {n}")))
    } else {
        Ok(n.sqrt())
    }
}

// ============================================================================
// Test Tables
// ============================================================================

/// A string-keyed table whose overwrites are counted.
pub fn counted_table() -> (DispatchTable<String, Args, String>, OverwriteCounter) {
    let counter = OverwriteCounter::new();
    let table = DispatchTable::builder()
        .label("Switch")
        .on_overwrite(counter.observer())
        .build();
    (table, counter)
}
