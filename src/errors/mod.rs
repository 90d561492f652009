//! Layered error propagation.
//!
//! Every layer wraps the failure it received with its own context and forwards
//! it. Only the top level inspects the result: [`cause`] or [`is`] to branch on
//! the original failure, [`render`] to log the whole trace.

mod kind;
mod sentinel;
mod wrap;

pub use kind::ErrorKind;
pub use sentinel::Sentinel;
pub use wrap::{BoxError, WrapErr, Wrapped, with_message, wrap};

use std::error::Error as StdError;

/// Result type used across the crate.
pub type Result<T, E = Wrapped> = std::result::Result<T, E>;

/// Iterator over the layers of a wrap chain, outermost first.
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .downcast_ref::<Wrapped>()
            .map(|wrapped| wrapped.underlying() as &(dyn StdError + 'static));
        Some(current)
    }
}

/// Walk `err` layer by layer. The last item is the [`cause`].
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The innermost error of a wrap chain, or `err` itself when it is not wrapped.
///
/// Only [`Wrapped`] layers are unwound; a leaf's own `source()` is left alone.
pub fn cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(wrapped) = current.downcast_ref::<Wrapped>() {
        current = wrapped.underlying() as &(dyn StdError + 'static);
    }
    current
}

/// Whether the cause of `err` is `sentinel`.
pub fn is(err: &(dyn StdError + 'static), sentinel: Sentinel) -> bool {
    cause(err).downcast_ref::<Sentinel>() == Some(&sentinel)
}

/// Multi-line trace of every context, outermost first, then the leaf message.
///
/// Meant for operator-facing output; never parse it.
pub fn render(err: &(dyn StdError + 'static)) -> String {
    let mut out = String::new();
    let mut backtrace = None;

    for (depth, layer) in chain(err).enumerate() {
        let message = match layer.downcast_ref::<Wrapped>() {
            Some(wrapped) => {
                if let Some(bt) = wrapped.backtrace() {
                    backtrace = Some(bt);
                }
                wrapped.context().to_string()
            }
            None => layer.to_string(),
        };
        if depth == 0 {
            out.push_str(&message);
        } else {
            out.push_str(&format!("\n  caused by: {message}"));
        }
    }

    if let Some(bt) = backtrace {
        out.push_str(&format!("\n\nBacktrace:\n{bt}"));
    }
    out
}
