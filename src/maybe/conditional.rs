//! Conditional construction of `Maybe` values.
//!
//! - [`only_when`]: wraps a transformed value when a predicate holds
//! - [`sfinae`]: turns a fallible callable into one returning `Maybe`

use super::Maybe;

/// Returns `Just(function(value))` if `predicate(&value)` holds, and
/// `Nothing` otherwise.
///
/// `function` is only invoked on the taken branch, so it may assume the
/// predicate holds for its input.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, just, only_when};
///
/// let halve_even = |n: i32| only_when(|n: &i32| n % 2 == 0, |n| n / 2, n);
/// assert_eq!(halve_even(8), just(4));
/// assert_eq!(halve_even(7), Maybe::<i32>::Nothing);
/// ```
#[inline]
pub fn only_when<T, R, P, F>(predicate: P, function: F, value: T) -> Maybe<R>
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> R,
{
    if predicate(&value) {
        Maybe::Just(function(value))
    } else {
        Maybe::Nothing
    }
}

/// The result of an invocation that may fail to produce a value.
///
/// `sfinae` accepts any callable whose result implements this trait. A
/// successful attempt becomes `Just`, a failed one becomes `Nothing`.
///
/// `()` deliberately has no implementation: a callable that produces no value
/// cannot be wrapped, and using one with [`sfinae`] fails to compile.
pub trait Attempt {
    /// The value produced by a successful attempt.
    type Value;

    /// Converts the attempt into a `Maybe`.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<V> Attempt for Maybe<V> {
    type Value = V;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<V> Attempt for Option<V> {
    type Value = V;

    #[inline]
    fn into_maybe(self) -> Maybe<V> {
        self.into()
    }
}

impl<V, E> Attempt for Result<V, E> {
    type Value = V;

    #[inline]
    fn into_maybe(self) -> Maybe<V> {
        self.map_or(Maybe::Nothing, Maybe::Just)
    }
}

/// Wraps a fallible callable so that it returns `Maybe`.
///
/// The returned closure invokes `function` with its argument and converts the
/// [`Attempt`] it produces: success yields `Just(value)`, failure yields
/// `Nothing`. Callables of several arguments take them as a tuple.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, just, sfinae};
///
/// let parse = sfinae(|text: &str| text.parse::<i32>());
/// assert_eq!(parse("12"), just(12));
/// assert_eq!(parse("twelve"), Maybe::<i32>::Nothing);
///
/// let divide = sfinae(|(numerator, denominator): (i32, i32)| numerator.checked_div(denominator));
/// assert_eq!(divide((9, 3)), just(3));
/// assert_eq!(divide((9, 0)), Maybe::<i32>::Nothing);
/// ```
#[inline]
pub fn sfinae<A, R, F>(function: F) -> impl Fn(A) -> Maybe<R::Value>
where
    F: Fn(A) -> R,
    R: Attempt,
{
    move |arguments| function(arguments).into_maybe()
}

static_assertions::assert_not_impl_any!((): Attempt);
static_assertions::assert_impl_all!(Option<()>: Attempt);
