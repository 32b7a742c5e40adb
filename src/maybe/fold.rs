//! Unpacking a `Maybe` as a collection of zero or one elements.

use super::Maybe;

/// A consumer that can be called with no element or with exactly one.
///
/// [`unpack`] calls [`Unpack::unpack_one`] for `Just(x)` and
/// [`Unpack::unpack_none`] for `Nothing`. A pair of closures
/// `(on_nothing, on_just)` implements this trait.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, Unpack, just, unpack};
///
/// // Sums the elements it is given, like a variadic `sum()`.
/// struct Sum;
///
/// impl Unpack<i32> for Sum {
///     type Output = i32;
///
///     fn unpack_none(self) -> i32 {
///         0
///     }
///
///     fn unpack_one(self, value: i32) -> i32 {
///         value
///     }
/// }
///
/// assert_eq!(unpack(just(5), Sum), 5);
/// assert_eq!(unpack(Maybe::<i32>::Nothing, Sum), 0);
/// ```
pub trait Unpack<T> {
    /// The result of the call.
    type Output;

    /// Called when there is no element.
    fn unpack_none(self) -> Self::Output;

    /// Called with the single element.
    fn unpack_one(self, value: T) -> Self::Output;
}

impl<T, R, N, J> Unpack<T> for (N, J)
where
    N: FnOnce() -> R,
    J: FnOnce(T) -> R,
{
    type Output = R;

    #[inline]
    fn unpack_none(self) -> R {
        (self.0)()
    }

    #[inline]
    fn unpack_one(self, value: T) -> R {
        (self.1)(value)
    }
}

impl<T> Maybe<T> {
    /// Passes the payload of a `Just` to `unpacker`, or calls it with no
    /// element for `Nothing`.
    #[inline]
    pub fn unpack<U>(self, unpacker: U) -> U::Output
    where
        U: Unpack<T>,
    {
        match self {
            Self::Just(value) => unpacker.unpack_one(value),
            Self::Nothing => unpacker.unpack_none(),
        }
    }
}

/// Free-function form of [`Maybe::unpack`].
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{just, nothing, unpack};
///
/// let count = (|| 0, |_: &str| 1);
/// assert_eq!(unpack(just("x"), count), 1);
/// assert_eq!(unpack(nothing(), count), 0);
/// ```
#[inline]
pub fn unpack<T, U>(value: Maybe<T>, unpacker: U) -> U::Output
where
    U: Unpack<T>,
{
    value.unpack(unpacker)
}
