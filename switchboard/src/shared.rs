//! Thread-safe dispatch table.
//!
//! [`SharedDispatchTable`] guards a [`DispatchTable`] with a `parking_lot`
//! `RwLock`: registrations and deletions take the write lock, lookups and
//! invocations share the read lock. Clones share the same table. The lock does
//! not poison, so a panic on one thread leaves the table usable on others.
//!
//! Handlers are called after the lock is released, so a handler may register,
//! delete or invoke cases on the table that called it.

use crate::table::DispatchTable;
use parking_lot::RwLock;
use std::{borrow::Borrow, collections::HashMap, fmt, hash::Hash, sync::Arc};
use switchboard_core::{CaseKey, Handler, SharedHandler};

/// A dispatch table that can be shared and mutated across threads.
pub struct SharedDispatchTable<K, A, R> {
    inner: Arc<RwLock<DispatchTable<K, A, R>>>,
}

impl<K, A, R> Clone for SharedDispatchTable<K, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, A, R> SharedDispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    /// Create a shared table with [`no_op`](crate::no_op) default and
    /// missing-case handlers.
    pub fn new() -> Self
    where
        R: Default,
    {
        Self::from_table(DispatchTable::new())
    }

    /// Share an existing table.
    pub fn from_table(table: DispatchTable<K, A, R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Resolve a key to its handler, or to the missing-case handler.
    pub fn lookup<Q>(&self, key: &Q) -> SharedHandler<A, R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Arc::clone(self.inner.read().lookup(key))
    }

    /// Check if a key is registered.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(key)
    }

    /// Bind `handler` to `key`; see [`DispatchTable::register`].
    pub fn register<H>(&self, key: K, handler: H) -> Option<SharedHandler<A, R>>
    where
        H: Handler<A, R>,
    {
        self.inner.write().register(key, handler)
    }

    /// Same as [`register`](Self::register).
    pub fn update<H>(&self, key: K, handler: H) -> Option<SharedHandler<A, R>>
    where
        H: Handler<A, R>,
    {
        self.register(key, handler)
    }

    /// Bind an already shared handler to `key`.
    pub fn register_shared(
        &self,
        key: K,
        handler: SharedHandler<A, R>,
    ) -> Option<SharedHandler<A, R>> {
        self.inner.write().register_shared(key, handler)
    }

    /// Register every pair under one write lock. Returns a snapshot of the
    /// resulting cases.
    pub fn merge<I, H>(&self, cases: I) -> HashMap<K, SharedHandler<A, R>>
    where
        I: IntoIterator<Item = (K, H)>,
        H: Handler<A, R>,
    {
        self.inner.write().merge(cases).clone()
    }

    /// Remove a key. Removing an absent key does nothing.
    pub fn delete<Q>(&self, key: &Q) -> Option<SharedHandler<A, R>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().delete(key)
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true once every case has been deleted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// A snapshot of the registered cases.
    pub fn all_cases(&self) -> HashMap<K, SharedHandler<A, R>> {
        self.inner.read().all_cases().clone()
    }

    /// Look up `key` and call the handler outside the lock.
    pub fn invoke<Q>(&self, key: &Q, args: A) -> R
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handler = self.lookup(key);
        handler.call(args)
    }

    /// Replace the missing-case handler, returning the previous one.
    pub fn set_missing_handler<H>(&self, handler: H) -> SharedHandler<A, R>
    where
        H: Handler<A, R>,
    {
        self.inner.write().set_missing_handler(handler)
    }

    /// Run `f` against the table under the read lock.
    pub fn with_table<T>(&self, f: impl FnOnce(&DispatchTable<K, A, R>) -> T) -> T {
        f(&self.inner.read())
    }
}

impl<K, A, R> Default for SharedDispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: Default + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A, R> From<DispatchTable<K, A, R>> for SharedDispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    fn from(table: DispatchTable<K, A, R>) -> Self {
        Self::from_table(table)
    }
}

impl<K, A, R> fmt::Display for SharedDispatchTable<K, A, R>
where
    K: CaseKey + fmt::Display,
    A: 'static,
    R: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.read(), f)
    }
}

impl<K, A, R> fmt::Debug for SharedDispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedDispatchTable")
            .field(&*self.inner.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_cases() {
        let table: SharedDispatchTable<String, u32, u32> = SharedDispatchTable::new();
        let other = table.clone();

        other.register("inc".to_string(), |n: u32| n + 1);
        assert!(table.contains("inc"));
        assert_eq!(table.invoke("inc", 1), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let table: SharedDispatchTable<&str, (), ()> = SharedDispatchTable::default();
        let snapshot = table.all_cases();
        table.register("x", |_: ()| {});
        assert_eq!(snapshot.len(), 1);
        assert_eq!(table.all_cases().len(), 2);
    }

    #[test]
    fn test_with_table() {
        let table: SharedDispatchTable<&str, (), ()> =
            SharedDispatchTable::from_table(DispatchTable::new());
        let keys = table.with_table(|t| t.keys().len());
        assert_eq!(keys, 1);
    }
}
