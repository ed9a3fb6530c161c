//! # Handlers
//!
//! A handler is the callable bound to a case key. The table imposes no
//! signature beyond "accepts the argument bag `A` and returns an `R`".
//!
//! # Usage Patterns
//!
//! 1. **Plain function**: `fn start(args: (u32, String)) -> Reply { ... }`
//! 2. **Closure**: `|(a, b): (i32, i32)| a + b`
//! 3. **Struct implementation**: `impl Handler<Args, Reply> for MyHandler`
//!
//! Several arguments are passed as a tuple. Handlers that can fail return a
//! `Result`; the table passes it through untouched.

use std::{borrow::Cow, sync::Arc};

/// A callable bound to a case key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle arguments of type `{A}`",
    label = "missing `Handler<{A}, {R}>` implementation",
    note = "Closures need an annotated argument, e.g. `|args: {A}| ...`."
)]
pub trait Handler<A, R>: Send + Sync + 'static {
    /// Executes the handler.
    fn call(&self, args: A) -> R;

    /// The name the handler is displayed with. Defaults to its type name.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

// Blanket impl for functions and closures
impl<F, A, R> Handler<A, R> for F
where
    F: Fn(A) -> R + Send + Sync + 'static,
{
    fn call(&self, args: A) -> R {
        (self)(args)
    }
}

/// A handler as stored in a table: shared and type-erased.
pub type SharedHandler<A, R> = Arc<dyn Handler<A, R>>;

/// Erase a handler into a [`SharedHandler`].
pub fn into_shared<A, R, H: Handler<A, R>>(handler: H) -> SharedHandler<A, R> {
    Arc::new(handler)
}

/// A handler with an explicit display name.
///
/// Closures are displayed with compiler-generated names; wrap them to get
/// something readable out of a table's `Display` output.
#[derive(Clone)]
pub struct Named<H> {
    name: Cow<'static, str>,
    handler: H,
}

impl<H> Named<H> {
    /// Get a reference to the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.handler
    }

    /// Unwrap the handler.
    pub fn into_inner(self) -> H {
        self.handler
    }
}

impl<A, R, H> Handler<A, R> for Named<H>
where
    H: Handler<A, R>,
{
    fn call(&self, args: A) -> R {
        self.handler.call(args)
    }

    fn name(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}

/// Give a handler a display name.
pub fn named<H>(name: impl Into<Cow<'static, str>>, handler: H) -> Named<H> {
    Named {
        name: name.into(),
        handler,
    }
}
