//! Context-carrying error wrapper.
//!
//! A [`Wrapped`] owns the error it annotates, so every wrap chain is a
//! singly-linked list that ends at the original failure. Each layer adds one
//! context message describing what it was attempting; the original failure stays
//! reachable through [`cause`](super::cause).

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// Boxed leaf error accepted by [`Wrapped`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error annotated with the context of the layer that forwarded it.
pub struct Wrapped {
    context: String,
    underlying: BoxError,
    backtrace: Option<Backtrace>,
}

impl Wrapped {
    /// Wrap `err` with `context`, capturing a backtrace when `RUST_BACKTRACE` allows it.
    pub fn new(err: impl Into<BoxError>, context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            underlying: err.into(),
            backtrace: Some(Backtrace::capture()),
        }
    }

    /// Wrap `err` with `context` without capturing a backtrace.
    pub fn message(err: impl Into<BoxError>, context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            underlying: err.into(),
            backtrace: None,
        }
    }

    /// The context added by this layer.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The error this layer wraps.
    pub fn underlying(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.underlying
    }

    /// The backtrace captured at this layer, if one was actually recorded.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace
            .as_ref()
            .filter(|bt| bt.status() == BacktraceStatus::Captured)
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.context)?;
        if f.alternate() {
            for layer in super::chain(self).skip(1) {
                match layer.downcast_ref::<Wrapped>() {
                    Some(wrapped) => write!(f, ": {}", wrapped.context)?,
                    None => write!(f, ": {layer}")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("context", &self.context)
            .field("underlying", &self.underlying)
            .finish_non_exhaustive()
    }
}

impl StdError for Wrapped {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.underlying)
    }
}

/// Wrap an optional error with `context`.
///
/// Returns `None` when there is nothing to wrap, so call sites can wrap
/// unconditionally.
pub fn wrap<E: Into<BoxError>>(err: Option<E>, context: impl Into<String>) -> Option<Wrapped> {
    err.map(|err| Wrapped::new(err, context))
}

/// Like [`wrap`], but never captures a backtrace.
pub fn with_message<E: Into<BoxError>>(
    err: Option<E>,
    context: impl Into<String>,
) -> Option<Wrapped> {
    err.map(|err| Wrapped::message(err, context))
}

/// Extension trait for attaching context to the error side of a `Result`.
pub trait WrapErr<T> {
    /// Wrap the error with a static context message.
    fn wrap(self, context: impl Into<String>) -> Result<T, Wrapped>;

    /// Wrap the error with a context message built only on failure.
    fn wrap_with<C, F>(self, f: F) -> Result<T, Wrapped>
    where
        C: Into<String>,
        F: FnOnce() -> C;

    /// Wrap the error with a context message, without capturing a backtrace.
    fn with_message(self, context: impl Into<String>) -> Result<T, Wrapped>;
}

impl<T, E: Into<BoxError>> WrapErr<T> for Result<T, E> {
    fn wrap(self, context: impl Into<String>) -> Result<T, Wrapped> {
        self.map_err(|err| Wrapped::new(err, context))
    }

    fn wrap_with<C, F>(self, f: F) -> Result<T, Wrapped>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Wrapped::new(err, f()))
    }

    fn with_message(self, context: impl Into<String>) -> Result<T, Wrapped> {
        self.map_err(|err| Wrapped::message(err, context))
    }
}
