//! Searching a `Maybe` as a structure of zero or one elements.

use super::{Maybe, only_when};
use crate::compose::identity;

impl<T> Maybe<T> {
    /// Keeps the payload if it satisfies `predicate`.
    ///
    /// `Just(x)` becomes `only_when(predicate, identity, x)`; `Nothing`
    /// stays `Nothing` and the predicate is not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    ///
    /// assert_eq!(just(4).find_if(|n| n % 2 == 0), just(4));
    /// assert_eq!(just(5).find_if(|n| n % 2 == 0), nothing::<i32>());
    /// ```
    #[inline]
    pub fn find_if<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => only_when(predicate, identity, value),
            Self::Nothing => Self::Nothing,
        }
    }

    /// Returns `true` if the payload satisfies `predicate`; `false` for
    /// `Nothing`.
    #[inline]
    pub fn any_of<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.as_ref().maybe(false, predicate)
    }

    /// Returns `true` if the payload satisfies `predicate`; `true` for
    /// `Nothing`.
    #[inline]
    pub fn all_of<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.as_ref().maybe(true, predicate)
    }

    /// Returns `true` unless the payload satisfies `predicate`.
    #[inline]
    pub fn none_of<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        !self.any_of(predicate)
    }

    /// Returns `true` if this is `Just` a value equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::just;
    ///
    /// assert!(just(String::from("key")).contains("key"));
    /// assert!(!just(String::from("key")).contains("other"));
    /// ```
    #[inline]
    pub fn contains<U>(&self, key: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.any_of(|value| value == key)
    }
}

/// Free-function form of [`Maybe::find_if`].
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{find_if, just, nothing};
///
/// assert_eq!(find_if(just(4), |n: &i32| n % 2 == 0), just(4));
/// assert_eq!(find_if(just(5), |n: &i32| n % 2 == 0), nothing::<i32>());
/// ```
#[inline]
pub fn find_if<T, P>(value: Maybe<T>, predicate: P) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    value.find_if(predicate)
}

/// Free-function form of [`Maybe::any_of`]: `maybe(false, predicate, value)`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{any_of, just, nothing};
///
/// assert!(any_of(just(1), |n: &i32| *n > 0));
/// assert!(!any_of(nothing(), |n: &i32| *n > 0));
/// ```
#[inline]
pub fn any_of<T, P>(value: Maybe<T>, predicate: P) -> bool
where
    P: FnOnce(&T) -> bool,
{
    value.any_of(predicate)
}

/// Free-function form of [`Maybe::all_of`].
#[inline]
pub fn all_of<T, P>(value: Maybe<T>, predicate: P) -> bool
where
    P: FnOnce(&T) -> bool,
{
    value.all_of(predicate)
}

/// Free-function form of [`Maybe::none_of`].
#[inline]
pub fn none_of<T, P>(value: Maybe<T>, predicate: P) -> bool
where
    P: FnOnce(&T) -> bool,
{
    value.none_of(predicate)
}

/// Free-function form of [`Maybe::contains`].
#[inline]
pub fn contains<T, U>(value: &Maybe<T>, key: &U) -> bool
where
    T: PartialEq<U>,
    U: ?Sized,
{
    value.contains(key)
}
