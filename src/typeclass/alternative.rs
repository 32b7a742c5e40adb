//! Alternative type class - choice between applicative computations.
//!
//! `Alternative` extends `Applicative` with:
//!
//! - an absent computation (`empty`)
//! - left-biased choice (`alt`, the free function `concat`)
//! - conditional success (`guard`)
//! - optionality (`optional`, `choice`)
//!
//! For `Maybe`, `alt` keeps the first `Just`, and `empty` is `Nothing`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! ### Left Absorption
//!
//! ```text
//! empty.apply(x) == empty
//! ```
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{Maybe, just, nothing};
//! use justly::typeclass::Alternative;
//!
//! assert_eq!(nothing::<i32>().alt(just(2)), just(2));
//! assert_eq!(just(1).alt(just(2)), just(1));
//!
//! let none: Maybe<i32> = <Maybe<()> as Alternative>::empty();
//! assert_eq!(none, nothing::<i32>());
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for applicatives with an absent value and left-biased choice.
///
/// # Laws
///
/// ```text
/// empty.alt(x) == x
/// x.alt(empty) == x
/// (x.alt(y)).alt(z) == x.alt(y.alt(z))
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, nothing};
    /// use justly::typeclass::Alternative;
    ///
    /// let empty: Maybe<String> = <Maybe<()> as Alternative>::empty();
    /// assert_eq!(empty, nothing::<String>());
    /// ```
    fn empty<A>() -> Self::WithType<A>;

    /// Combines two alternatives, returning the first present one.
    ///
    /// `alternative` is evaluated by the caller even when `self` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Alternative;
    ///
    /// assert_eq!(nothing::<i32>().alt(just(42)), just(42));
    /// assert_eq!(just(1).alt(just(2)), just(1));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when `condition` holds, otherwise returns `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just, nothing};
    /// use justly::typeclass::{Alternative, Functor};
    ///
    /// fn positive(n: i32) -> Maybe<i32> {
    ///     <Maybe<()>>::guard(n > 0).fmap(move |()| n)
    /// }
    ///
    /// assert_eq!(positive(5), just(5));
    /// assert_eq!(positive(-3), nothing::<i32>());
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Turns absence into a present `Nothing`, so the result always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Alternative;
    ///
    /// assert_eq!(just(42).optional(), just(just(42)));
    /// assert_eq!(nothing::<i32>().optional(), just(nothing::<i32>()));
    /// ```
    fn optional(self) -> Self::WithType<Maybe<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first present alternative, or `empty` when there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just, nothing};
    /// use justly::typeclass::Alternative;
    ///
    /// let first: Maybe<i32> = Maybe::choice([nothing(), just(1), just(2)]);
    /// assert_eq!(first, just(1));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::Nothing
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative,
        }
    }

    #[inline]
    fn optional(self) -> Maybe<Self> {
        Maybe::Just(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_just)
            .unwrap_or_default()
    }
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Option<Maybe<A>> {
        Some(Maybe::from(self))
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}
