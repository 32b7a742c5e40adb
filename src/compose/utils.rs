//! Helper combinators.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition, and
/// the function the `Maybe` elimination protocol is given when no
/// transformation is wanted: `from_maybe` and `flatten` are both `maybe`
/// applied to `identity`.
///
/// # Examples
///
/// ```
/// use justly::compose::identity;
/// use justly::maybe::{just, nothing, maybe};
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(maybe(0, identity, just(7)), 7);
/// assert_eq!(maybe(0, identity, nothing()), 0);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator.
///
/// # Examples
///
/// ```
/// use justly::compose::constant;
/// use justly::maybe::just;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// assert_eq!(just("ignored").maybe(0, constant(1)), 1);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
