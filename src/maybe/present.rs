//! A value known to be present, and the error for when it is not.

use std::ops::{Deref, DerefMut};

use super::Maybe;

/// The payload of a `Maybe` that has been checked to be `Just`.
///
/// A `Present<T>` can only be obtained through [`Maybe::present`], so holding
/// one proves presence and every access to the payload is total.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::just;
///
/// if let Ok(present) = just(vec![1, 2, 3]).present() {
///     assert_eq!(present.len(), 3);
///     assert_eq!(present.into_inner(), vec![1, 2, 3]);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Present<T>(T);

impl<T> Present<T> {
    #[inline]
    pub(super) const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns a reference to the payload.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.0
    }

    /// Consumes the wrapper and returns the payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Transforms the payload, staying present.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Present<U>
    where
        F: FnOnce(T) -> U,
    {
        Present(function(self.0))
    }
}

impl<T> Deref for Present<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Present<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<Present<T>> for Maybe<T> {
    #[inline]
    fn from(present: Present<T>) -> Self {
        Self::Just(present.0)
    }
}

/// The error returned by [`Maybe::present`] for `Nothing`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::AbsentError;
///
/// assert_eq!(AbsentError.to_string(), "expected a Just value, found Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbsentError;

impl std::fmt::Display for AbsentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("expected a Just value, found Nothing")
    }
}

impl std::error::Error for AbsentError {}
