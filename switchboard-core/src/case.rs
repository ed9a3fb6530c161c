//! Case keys for dispatch tables.

use std::{borrow::Cow, fmt, hash::Hash, sync::Arc};

/// The reserved key string-like key types use for the default case.
pub const DEFAULT_CASE: &str = "default";

/// A key naming one branch of a dispatch table.
///
/// Keys are compared by equality only. They must also be ordered so a table
/// can be rendered deterministically.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// enum Command { Start, Stop, Idle }
///
/// impl CaseKey for Command {
///     fn default_case() -> Self { Command::Idle }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a case key",
    label = "missing `CaseKey` implementation",
    note = "Wrap the key in `Case<{Self}>` to give it a reserved default case."
)]
pub trait CaseKey: Hash + Eq + Ord + Clone + fmt::Debug + 'static {
    /// The reserved key under which a table stores its default handler.
    fn default_case() -> Self;

    /// Returns true if this is the reserved default key.
    fn is_default_case(&self) -> bool {
        *self == Self::default_case()
    }
}

impl CaseKey for String {
    fn default_case() -> Self {
        DEFAULT_CASE.to_owned()
    }
}

impl CaseKey for &'static str {
    fn default_case() -> Self {
        DEFAULT_CASE
    }
}

impl CaseKey for Box<str> {
    fn default_case() -> Self {
        DEFAULT_CASE.into()
    }
}

impl CaseKey for Arc<str> {
    fn default_case() -> Self {
        Arc::from(DEFAULT_CASE)
    }
}

impl CaseKey for Cow<'static, str> {
    fn default_case() -> Self {
        Cow::Borrowed(DEFAULT_CASE)
    }
}

/// A key type extended with a reserved default case.
///
/// Use this for keys with no natural "default" value, such as integers:
/// `DispatchTable<Case<u32>, _, _>` dispatches on `Case::Key(n)` and keeps its
/// default handler under `Case::Default`.
///
/// `Case::Default` sorts before every `Case::Key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Case<K> {
    /// The reserved default case.
    Default,
    /// An ordinary case.
    Key(K),
}

impl<K> Case<K> {
    /// Returns the wrapped key, or `None` for the default case.
    pub fn key(&self) -> Option<&K> {
        match self {
            Case::Default => None,
            Case::Key(k) => Some(k),
        }
    }
}

impl<K> From<K> for Case<K> {
    fn from(key: K) -> Self {
        Case::Key(key)
    }
}

impl<K> CaseKey for Case<K>
where
    K: Hash + Eq + Ord + Clone + fmt::Debug + 'static,
{
    fn default_case() -> Self {
        Case::Default
    }
}

impl<K: fmt::Display> fmt::Display for Case<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Default => f.write_str(DEFAULT_CASE),
            Case::Key(k) => fmt::Display::fmt(k, f),
        }
    }
}
