//! The `Maybe` optional-value type.
//!
//! `Maybe<T>` is either present, `Just(value)`, or absent, `Nothing`. Every
//! operation of this module and every type class instance of the crate is a
//! case analysis over these two variants, either written as a `match` or
//! expressed through the elimination protocol [`maybe`].
//!
//! # Construction
//!
//! ```rust
//! use justly::maybe::{Maybe, just, nothing};
//!
//! let present: Maybe<i32> = just(42);
//! let absent: Maybe<i32> = nothing();
//!
//! assert!(present.is_just());
//! assert!(absent.is_nothing());
//! ```
//!
//! # Elimination
//!
//! ```rust
//! use justly::maybe::{just, nothing, maybe, from_maybe};
//!
//! assert_eq!(maybe(0, |n: i32| n * 2, just(21)), 42);
//! assert_eq!(maybe(0, |n: i32| n * 2, nothing()), 0);
//!
//! assert_eq!(from_maybe(7, just(1)), 1);
//! assert_eq!(from_maybe(7, nothing()), 7);
//! ```
//!
//! # Comparison
//!
//! `Nothing` is smaller than every `Just`, and two `Just` values compare by
//! their payloads, which may be of different types:
//!
//! ```rust
//! use justly::maybe::{Maybe, just, nothing};
//!
//! let absent: Maybe<i32> = nothing();
//! assert!(absent < just(i32::MIN));
//! assert_eq!(just(String::from("a")), just("a"));
//! ```

mod compare;
mod conditional;
mod fold;
mod iter;
#[cfg(feature = "typeclass")]
mod ops;
mod present;
mod search;
#[cfg(feature = "serde")]
mod serialization;

use std::fmt;

use crate::compose::identity;

pub use compare::{equal, greater, greater_equal, less, less_equal, not_equal};
pub use conditional::{Attempt, only_when, sfinae};
pub use fold::{Unpack, unpack};
pub use iter::{IntoIter, Iter, IterMut};
#[cfg(feature = "typeclass")]
pub use ops::{ap, concat, empty, filter, lift, transform, traverse};
pub use present::{AbsentError, Present};
pub use search::{all_of, any_of, contains, find_if, none_of};

/// An optional value: either `Just` a value of type `T`, or `Nothing`.
///
/// The variant of a `Maybe` is fixed at construction. Operations that
/// transform a `Maybe` consume it and return a new one; the only mutable
/// access goes to the payload of a `Just` (see [`Maybe::value_mut`]).
///
/// # Examples
///
/// ```rust
/// use justly::maybe::Maybe;
///
/// let present = Maybe::Just(3);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert_eq!(present.maybe(0, |n| n + 1), 4);
/// assert_eq!(absent.maybe(0, |n| n + 1), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absence of a value.
    Nothing,
}

/// Constructs a present value.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, just};
///
/// assert_eq!(just(5), Maybe::Just(5));
/// ```
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// Constructs the absent value.
///
/// The payload type is left to inference; annotate it when nothing else
/// fixes it.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, nothing};
///
/// let absent: Maybe<String> = nothing();
/// assert!(absent.is_nothing());
/// ```
#[inline]
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

/// Returns `true` if `value` is a `Just`.
#[inline]
pub const fn is_just<T>(value: &Maybe<T>) -> bool {
    value.is_just()
}

/// Returns `true` if `value` is `Nothing`.
#[inline]
pub const fn is_nothing<T>(value: &Maybe<T>) -> bool {
    value.is_nothing()
}

/// The elimination protocol: `function(x)` for `Just(x)`, `default` for
/// `Nothing`.
///
/// Both branches produce the same type `R`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{just, nothing, maybe};
///
/// let describe = |n: i32| format!("got {n}");
/// assert_eq!(maybe(String::from("none"), describe, just(1)), "got 1");
/// assert_eq!(maybe(String::from("none"), describe, nothing()), "none");
/// ```
#[inline]
pub fn maybe<T, R, F>(default: R, function: F, value: Maybe<T>) -> R
where
    F: FnOnce(T) -> R,
{
    value.maybe(default, function)
}

/// Like [`maybe`], but computes the default only when `value` is `Nothing`.
#[inline]
pub fn maybe_with<T, R, D, F>(default: D, function: F, value: Maybe<T>) -> R
where
    D: FnOnce() -> R,
    F: FnOnce(T) -> R,
{
    value.maybe_with(default, function)
}

/// Returns the payload of a `Just`, or `default` for `Nothing`.
///
/// Equivalent to `maybe(default, identity, value)`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{just, nothing, from_maybe};
///
/// assert_eq!(from_maybe("fallback", just("value")), "value");
/// assert_eq!(from_maybe("fallback", nothing()), "fallback");
/// ```
#[inline]
pub fn from_maybe<T>(default: T, value: Maybe<T>) -> T {
    maybe(default, identity, value)
}

/// Returns the payload of a value the caller knows to be a `Just`.
///
/// Prefer [`Maybe::present`] when presence has not already been established.
///
/// # Panics
///
/// Panics if `value` is `Nothing`. Extracting from `Nothing` is a programmer
/// error, not a recoverable condition.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{just, from_just};
///
/// assert_eq!(from_just(just(9)), 9);
/// ```
#[inline]
#[track_caller]
pub fn from_just<T>(value: Maybe<T>) -> T {
    match value {
        Maybe::Just(inner) => inner,
        Maybe::Nothing => absent("from_just"),
    }
}

/// Collapses one level of nesting.
///
/// Equivalent to `maybe(nothing(), identity, nested)`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, just, nothing, flatten};
///
/// assert_eq!(flatten(just(just(1))), just(1));
/// assert_eq!(flatten(just(nothing::<i32>())), nothing::<i32>());
/// assert_eq!(flatten(nothing::<Maybe<i32>>()), nothing::<i32>());
/// ```
#[inline]
pub fn flatten<T>(nested: Maybe<Maybe<T>>) -> Maybe<T> {
    nested.flatten()
}

#[cold]
#[track_caller]
fn absent(operation: &str) -> ! {
    panic!("called {operation} on a Nothing value")
}

impl<T> Maybe<T> {
    /// Constructs a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Constructs the absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if this is a `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::Maybe;
    ///
    /// const PRESENT: bool = Maybe::just(1).is_just();
    /// assert!(PRESENT);
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match *self {
            Self::Just(ref value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Mutably borrows the payload, producing a `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match *self {
            Self::Just(ref mut value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns a reference to the payload.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => absent("Maybe::value"),
        }
    }

    /// Returns a mutable reference to the payload.
    ///
    /// The variant itself cannot be changed through this reference.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => absent("Maybe::value_mut"),
        }
    }

    /// Consumes `self` and returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => absent("Maybe::into_value"),
        }
    }

    /// Returns the payload, or `default` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just};
    ///
    /// assert_eq!(just(2).value_or(0), 2);
    /// assert_eq!(Maybe::Nothing.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.maybe(default, identity)
    }

    /// Applies `function` to the payload of a `Just`, or returns `default`.
    ///
    /// This is the elimination protocol every other operation reduces to.
    #[inline]
    pub fn maybe<R, F>(self, default: R, function: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Like [`Maybe::maybe`], with a lazily computed default.
    #[inline]
    pub fn maybe_with<R, D, F>(self, default: D, function: F) -> R
    where
        D: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default(),
        }
    }

    /// Converts a `Just` into [`Present`], the known-present wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentError`] if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, AbsentError, just};
    ///
    /// let present = just(String::from("hi")).present().unwrap();
    /// assert_eq!(present.len(), 2);
    ///
    /// let absent: Maybe<String> = Maybe::Nothing;
    /// assert_eq!(absent.present().unwrap_err(), AbsentError);
    /// ```
    #[inline]
    pub fn present(self) -> Result<Present<T>, AbsentError> {
        self.ok_or(AbsentError).map(Present::new)
    }

    /// Converts into a `Result`, mapping `Nothing` to `Err(error)`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.maybe_with(|| Err(error), Ok)
    }

    /// Converts into a `Result`, computing the error only for `Nothing`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.maybe_with(|| Err(error()), Ok)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// The outer `Maybe` is eliminated with `identity`, so `Just(inner)`
    /// yields `inner` and `Nothing` stays `Nothing`.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.maybe(Maybe::Nothing, identity)
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.maybe(None, Some)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "just({value})"),
            Self::Nothing => formatter.write_str("nothing"),
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync, Eq, Ord, std::hash::Hash, Default);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<String>: Copy);
static_assertions::const_assert!(Maybe::just(1).is_just());
static_assertions::const_assert!(nothing::<u8>().is_nothing());
static_assertions::const_assert!(is_just(&just('x').as_ref()));
