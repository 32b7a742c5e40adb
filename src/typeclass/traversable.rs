//! Traversable type class - running an effect over a structure.
//!
//! Traversing a `Maybe` with an effectful function swaps the two layers:
//! `Maybe<A>` and `A -> G<B>` produce `G<Maybe<B>>`. `Nothing` lifts straight
//! into the target context as `pure(Nothing)` without calling the function.
//!
//! The generic [`Traversable::traverse`] works for any [`Applicative`] target
//! (`Maybe`, `Option`, `Result`, `Identity`); `traverse_option` and
//! `traverse_result` are the common cases spelled out.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! t.traverse(Identity) == Identity(t)
//! ```
//!
//! ## Naturality
//!
//! For an applicative transformation `n`:
//!
//! ```text
//! n(t.traverse(f)) == t.traverse(|x| n(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{Maybe, just, nothing};
//! use justly::typeclass::Traversable;
//!
//! let parsed: Option<Maybe<i32>> = just("12").traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(just(12)));
//!
//! let skipped: Option<Maybe<i32>> = nothing::<&str>().traverse_option(|s| s.parse().ok());
//! assert_eq!(skipped, Some(nothing::<i32>()));
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for structures that can be traversed with an effect.
///
/// # Laws
///
/// ```text
/// t.traverse(Identity) == Identity(t)
/// n(t.traverse(f)) == t.traverse(|x| n(f(x)))
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies an effectful function to each element and collects the results
    /// inside the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just, nothing};
    /// use justly::typeclass::{Identity, Traversable};
    ///
    /// assert_eq!(just(2).traverse(|n| Identity(n * 3)), Identity(just(6)));
    /// assert_eq!(just(2).traverse(|_| nothing::<i32>()), nothing::<Maybe<i32>>());
    /// assert_eq!(nothing::<i32>().traverse(|n| just(n)), just(nothing::<i32>()));
    /// ```
    fn traverse<FB, B, F>(self, function: F) -> FB::WithType<Self::WithType<B>>
    where
        FB: Applicative<Inner = B>,
        F: FnMut(Self::Inner) -> FB;

    /// Applies a function returning `Option` and collects the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just};
    /// use justly::typeclass::Traversable;
    ///
    /// let failed: Option<Maybe<i32>> = just("x").traverse_option(|s| s.parse().ok());
    /// assert_eq!(failed, None);
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` and collects the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just};
    /// use justly::typeclass::Traversable;
    ///
    /// fn positive(n: i32) -> Result<i32, &'static str> {
    ///     if n > 0 { Ok(n) } else { Err("must be positive") }
    /// }
    ///
    /// assert_eq!(just(3).traverse_result(positive), Ok(just(3)));
    /// assert_eq!(just(-3).traverse_result(positive), Err("must be positive"));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Swaps the structure with the applicative it contains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Traversable;
    ///
    /// assert_eq!(just(Ok::<i32, String>(1)).sequence(), Ok(just(1)));
    /// assert_eq!(nothing::<Option<i32>>().sequence(), Some(nothing::<i32>()));
    /// ```
    fn sequence<B>(self) -> <Self::Inner as TypeConstructor>::WithType<Self::WithType<B>>
    where
        Self: Sized,
        Self::Inner: Applicative<Inner = B>,
    {
        self.traverse(|element| element)
    }

    /// Turns a structure of `Option`s inside out.
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out.
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Traversable for Maybe<A> {
    fn traverse<FB, B, F>(self, mut function: F) -> FB::WithType<Maybe<B>>
    where
        FB: Applicative<Inner = B>,
        F: FnMut(A) -> FB,
    {
        match self {
            Self::Just(element) => function(element).fmap(Maybe::Just),
            Self::Nothing => FB::pure(Maybe::Nothing),
        }
    }

    fn traverse_option<B, F>(self, mut function: F) -> Option<Maybe<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Self::Just(element) => function(element).map(Maybe::Just),
            Self::Nothing => Some(Maybe::Nothing),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Maybe<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Self::Just(element) => function(element).map(Maybe::Just),
            Self::Nothing => Ok(Maybe::Nothing),
        }
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse<FB, B, F>(self, mut function: F) -> FB::WithType<Option<B>>
    where
        FB: Applicative<Inner = B>,
        F: FnMut(A) -> FB,
    {
        match self {
            Some(element) => function(element).fmap(Some),
            None => FB::pure(None),
        }
    }

    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Ok(None),
        }
    }
}
