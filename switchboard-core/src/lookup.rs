//! # Lookup Layer
//!
//! A case table maps keys to handlers. Unlike a router that may find nothing,
//! a case table always resolves a key: either to the handler registered for it
//! or to the table's missing-case handler.
//!
//! # Outcomes
//!
//! - **Matched**: the key is registered. This includes the reserved default
//!   key, which is an ordinary entry.
//! - **Missing**: the key is absent and the missing-case handler stands in.
//!
//! A table never falls back to the default entry on its own. Callers that want
//! that behavior point the missing-case handler at the same function.

/// Result of a case lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a, V> {
    /// The key is registered; contains its handler.
    Matched(&'a V),
    /// The key is absent; contains the missing-case handler.
    Missing(&'a V),
}

impl<'a, V> Lookup<'a, V> {
    /// Returns true if the key was registered.
    pub fn is_matched(&self) -> bool {
        matches!(self, Lookup::Matched(_))
    }

    /// Returns true if the missing-case handler stood in.
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }

    /// Returns the matched handler, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            Lookup::Matched(v) => Some(v),
            Lookup::Missing(_) => None,
        }
    }

    /// Returns whichever handler the lookup resolved to.
    pub fn handler(self) -> &'a V {
        match self {
            Lookup::Matched(v) | Lookup::Missing(v) => v,
        }
    }
}

/// A table that resolves case keys to values.
///
/// This trait abstracts over table implementations so code that only reads a
/// table does not depend on how it is stored.
pub trait CaseTable<K: ?Sized, V> {
    /// Resolve a key.
    fn route(&self, key: &K) -> Lookup<'_, V>;

    /// Check if a key is registered.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}
