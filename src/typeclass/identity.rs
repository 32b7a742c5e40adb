//! Identity wrapper type - the identity functor.
//!
//! `Identity` adds no effect at all. Traversing a `Maybe` into `Identity` is
//! the same as mapping over it, which makes it the reference context for the
//! traversable identity law.

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use justly::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(value: A) -> Self {
        Self(value)
    }
}
