//! # Dispatch Table
//!
//! A `DispatchTable` maps case keys to handlers and replaces an O(N) chain of
//! equality checks with a single O(1) `HashMap` lookup.
//!
//! # Three Outcomes
//!
//! - **Exact match**: the key is registered; its handler runs.
//! - **Default case**: an ordinary entry under [`CaseKey::default_case`],
//!   present from construction. It only runs when a caller dispatches on it.
//! - **Missing case**: the key is absent; the missing-case handler runs.
//!
//! The table never routes a miss to the default entry itself. Install the same
//! function as both handlers to get that behavior.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut table: DispatchTable<String, (i32, i32), i32> = DispatchTable::new();
//! table.register("add".to_string(), |(a, b): (i32, i32)| a + b);
//! assert_eq!(table.invoke("add", (1, 2)), 3);
//! assert_eq!(table.invoke("unknown", (1, 2)), 0); // no_op
//! ```

use crate::{builder::DispatchTableBuilder, diagnostics::Diagnostics, fallback::raise_on_missing};
use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    fmt,
    hash::Hash,
    sync::Arc,
};
use switchboard_core::{CaseKey, CaseTable, Handler, Lookup, MissingCaseError, SharedHandler};

/// A mapping from case keys to handlers with a separate missing-case fallback.
///
/// `K` is the key type, `A` the argument bag every handler takes and `R` what
/// every handler returns.
pub struct DispatchTable<K, A, R> {
    cases: HashMap<K, SharedHandler<A, R>>,
    missing: SharedHandler<A, R>,
    diagnostics: Diagnostics,
}

impl<K, A, R> DispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    /// Create a table whose default and missing-case handlers are both
    /// [`no_op`](crate::no_op).
    pub fn new() -> Self
    where
        R: Default,
    {
        Self::builder().build()
    }

    /// Create a table with explicit default and missing-case handlers.
    pub fn with_handlers<D, M>(default: D, missing: M) -> Self
    where
        D: Handler<A, R>,
        M: Handler<A, R>,
    {
        Self::builder().build_with(default, missing)
    }

    /// Start configuring a table.
    pub fn builder() -> DispatchTableBuilder<K, A, R> {
        DispatchTableBuilder::new()
    }

    pub(crate) fn from_parts(
        default: SharedHandler<A, R>,
        missing: SharedHandler<A, R>,
        capacity: usize,
        diagnostics: Diagnostics,
    ) -> Self {
        let mut cases = HashMap::with_capacity(capacity.max(1));
        cases.insert(K::default_case(), default);
        Self {
            cases,
            missing,
            diagnostics,
        }
    }

    /// Resolve a key to its handler, or to the missing-case handler.
    pub fn lookup<Q>(&self, key: &Q) -> &SharedHandler<A, R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.route(key).handler()
    }

    /// Resolve a key, reporting whether it matched.
    pub fn route<Q>(&self, key: &Q) -> Lookup<'_, SharedHandler<A, R>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.cases.get(key) {
            Some(handler) => Lookup::Matched(handler),
            None => Lookup::Missing(&self.missing),
        }
    }

    /// Check if a key is registered. The missing-case handler never is.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cases.contains_key(key)
    }

    /// Bind `handler` to `key`.
    ///
    /// Overwriting an existing key, `default` included, reports a
    /// [`DuplicateKeyWarning`] and then proceeds. Returns the replaced
    /// handler.
    ///
    /// [`DuplicateKeyWarning`]: switchboard_core::DuplicateKeyWarning
    pub fn register<H>(&mut self, key: K, handler: H) -> Option<SharedHandler<A, R>>
    where
        H: Handler<A, R>,
    {
        self.register_shared(key, Arc::new(handler))
    }

    /// Same as [`register`](Self::register).
    pub fn update<H>(&mut self, key: K, handler: H) -> Option<SharedHandler<A, R>>
    where
        H: Handler<A, R>,
    {
        self.register(key, handler)
    }

    /// Bind an already shared handler to `key`.
    pub fn register_shared(
        &mut self,
        key: K,
        handler: SharedHandler<A, R>,
    ) -> Option<SharedHandler<A, R>> {
        match self.cases.entry(key) {
            Entry::Occupied(mut entry) => {
                self.diagnostics.overwrite(entry.key());
                Some(entry.insert(handler))
            }
            Entry::Vacant(entry) => {
                entry.insert(handler);
                None
            }
        }
    }

    /// Register every pair in iteration order; later pairs win.
    ///
    /// Each collision is reported on its own. Returns the resulting cases.
    pub fn merge<I, H>(&mut self, cases: I) -> &HashMap<K, SharedHandler<A, R>>
    where
        I: IntoIterator<Item = (K, H)>,
        H: Handler<A, R>,
    {
        for (key, handler) in cases {
            self.register(key, handler);
        }
        &self.cases
    }

    /// Like [`merge`](Self::merge), for handlers that are already shared,
    /// such as the cases of another table.
    pub fn merge_shared<I>(&mut self, cases: I) -> &HashMap<K, SharedHandler<A, R>>
    where
        I: IntoIterator<Item = (K, SharedHandler<A, R>)>,
    {
        for (key, handler) in cases {
            self.register_shared(key, handler);
        }
        &self.cases
    }

    /// Remove a key. Removing an absent key does nothing.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<SharedHandler<A, R>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cases.remove(key)
    }

    /// Number of registered cases, `default` included while present.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true once every case, `default` included, has been deleted.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The registered cases.
    ///
    /// This borrows the table's own map; clone it to keep a snapshot.
    pub fn all_cases(&self) -> &HashMap<K, SharedHandler<A, R>> {
        &self.cases
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys: Vec<_> = self.cases.keys().collect();
        keys.sort();
        keys
    }

    /// Look up `key` and call the handler it resolves to.
    ///
    /// Unknown keys go to the missing-case handler. Whatever the handler
    /// returns, errors included, is returned unchanged.
    pub fn invoke<Q>(&self, key: &Q, args: A) -> R
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).call(args)
    }

    /// The handler stored under the default key, unless it was deleted.
    pub fn default_handler(&self) -> Option<&SharedHandler<A, R>> {
        self.cases.get(&K::default_case())
    }

    /// The handler unknown keys resolve to.
    pub fn missing_handler(&self) -> &SharedHandler<A, R> {
        &self.missing
    }

    /// Replace the missing-case handler, returning the previous one.
    pub fn set_missing_handler<H>(&mut self, handler: H) -> SharedHandler<A, R>
    where
        H: Handler<A, R>,
    {
        std::mem::replace(&mut self.missing, Arc::new(handler))
    }

    /// The name this table reports diagnostics under.
    pub fn label(&self) -> &'static str {
        self.diagnostics.label()
    }
}

impl<K, A, T, E> DispatchTable<K, A, Result<T, E>>
where
    K: CaseKey,
    A: 'static,
    T: 'static,
    E: From<MissingCaseError> + 'static,
{
    /// Create a table that fails unknown keys with a [`MissingCaseError`].
    pub fn strict<D>(default: D) -> Self
    where
        D: Handler<A, Result<T, E>>,
    {
        Self::with_handlers(default, raise_on_missing::<A, T, E>)
    }
}

impl<K, A, R> Default for DispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: Default + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A, R> CaseTable<K, SharedHandler<A, R>> for DispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    fn route(&self, key: &K) -> Lookup<'_, SharedHandler<A, R>> {
        DispatchTable::route(self, key)
    }
}

/// One `key = handler` line per case in key order, then the missing-case
/// handler.
impl<K, A, R> fmt::Display for DispatchTable<K, A, R>
where
    K: CaseKey + fmt::Display,
    A: 'static,
    R: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys() {
            writeln!(f, "{key} = {}", self.cases[key].name())?;
        }
        write!(f, "<missing> = {}", self.missing.name())
    }
}

impl<K, A, R> fmt::Debug for DispatchTable<K, A, R>
where
    K: CaseKey,
    A: 'static,
    R: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("label", &self.label())
            .field("cases", &self.keys())
            .field("missing", &self.missing.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::no_op;
    use switchboard_core::{Case, SwitchError, named};

    type Table = DispatchTable<String, (i32, i32), i32>;

    fn add((a, b): (i32, i32)) -> i32 {
        a + b
    }

    fn mul((a, b): (i32, i32)) -> i32 {
        a * b
    }

    #[test]
    fn test_new_table_holds_only_default() {
        let table = Table::new();
        assert!(table.contains("default"));
        assert_eq!(table.len(), 1);
        assert!(table.default_handler().is_some());
    }

    #[test]
    fn test_lookup_and_invoke() {
        let mut table = Table::new();
        table.register("add".to_string(), add);

        assert_eq!(table.lookup("add").call((2, 3)), 5);
        assert_eq!(table.invoke("add", (2, 3)), 5);
        assert!(table.route("add").is_matched());
    }

    #[test]
    fn test_unknown_key_goes_to_missing() {
        let table = Table::with_handlers(|_: (i32, i32)| -1, |(a, _): (i32, i32)| a * 100);
        assert!(table.route("nope").is_missing());
        assert_eq!(table.invoke("nope", (4, 0)), 400);
        assert!(!table.contains("nope"));
    }

    #[test]
    fn test_default_is_not_a_fallback() {
        let table = Table::with_handlers(|_: (i32, i32)| 7, |_: (i32, i32)| 9);
        assert_eq!(table.invoke("default", (0, 0)), 7);
        assert_eq!(table.invoke("other", (0, 0)), 9);
    }

    #[test]
    fn test_register_returns_previous() {
        let mut table = Table::new();
        assert!(table.register("op".to_string(), add).is_none());
        let previous = table.update("op".to_string(), mul).unwrap();
        assert_eq!(previous.call((3, 4)), 7);
        assert_eq!(table.invoke("op", (3, 4)), 12);
    }

    #[test]
    fn test_delete_default() {
        let mut table = Table::new();
        table.delete("default");
        assert!(table.is_empty());
        assert!(table.default_handler().is_none());
        // Explicit default dispatch now resolves to the missing handler
        assert!(table.route("default").is_missing());
    }

    #[test]
    fn test_merge_shared_from_other_table() {
        let mut source = Table::new();
        source.register("add".to_string(), add);
        source.register("mul".to_string(), mul);

        let mut target = Table::new();
        let merged = target.merge_shared(source.all_cases().clone());
        assert_eq!(merged.len(), 3);
        assert_eq!(target.invoke("mul", (5, 6)), 30);
    }

    #[test]
    fn test_set_missing_handler() {
        let mut table = Table::new();
        let previous = table.set_missing_handler(|_: (i32, i32)| 42);
        assert_eq!(previous.call((0, 0)), 0);
        assert_eq!(table.invoke("x", (0, 0)), 42);
    }

    #[test]
    fn test_strict_table() {
        let table: DispatchTable<&str, (), Result<u8, SwitchError>> =
            DispatchTable::strict(|_: ()| -> Result<u8, SwitchError> { Ok(1) });
        assert_eq!(table.invoke("default", ()).unwrap(), 1);
        assert!(table.invoke("z", ()).unwrap_err().is_missing());
    }

    #[test]
    fn test_display_sorted() {
        let mut table: DispatchTable<Case<u8>, (), ()> =
            DispatchTable::with_handlers(named("dflt", no_op::<(), ()>), named("none", |_: ()| {}));
        table.register(Case::Key(2), named("two", |_: ()| {}));
        table.register(Case::Key(1), named("one", |_: ()| {}));

        assert_eq!(
            table.to_string(),
            "default = dflt\n1 = one\n2 = two\n<missing> = none"
        );
    }

    #[test]
    fn test_case_table_trait() {
        fn probe<T: CaseTable<String, SharedHandler<(i32, i32), i32>>>(t: &T) -> bool {
            t.contains(&"add".to_string())
        }

        let mut table = Table::new();
        assert!(!probe(&table));
        table.register("add".to_string(), add);
        assert!(probe(&table));
    }

    #[test]
    fn test_debug_lists_keys() {
        let table: DispatchTable<&str, (), ()> = DispatchTable::new();
        let rendered = format!("{table:?}");
        assert!(rendered.contains("DispatchTable"));
        assert!(rendered.contains("\"default\""));
    }
}
