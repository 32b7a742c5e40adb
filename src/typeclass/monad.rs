//! Monad type class - sequencing computations that may stop early.
//!
//! `Monad` extends `Applicative` with `flat_map`: the function receives the
//! value of the previous step and decides the context of the next one. For
//! `Maybe`, a `Nothing` anywhere in the chain short-circuits the remainder.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{Maybe, just, nothing};
//! use justly::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { just(n / 2) } else { nothing() }
//! }
//!
//! assert_eq!(just(8).flat_map(half).flat_map(half), just(2));
//! assert_eq!(just(6).flat_map(half).flat_map(half), nothing::<i32>());
//! ```

use super::applicative::Applicative;
use super::identity::Identity;
use crate::maybe::Maybe;

/// A type class for applicatives whose next step depends on the previous value.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Monad;
    ///
    /// assert_eq!(just(5).flat_map(|n| just(n * 2)), just(10));
    /// assert_eq!(just(5).flat_map(|_| nothing::<i32>()), nothing::<i32>());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// An absent `self` still propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Monad;
    ///
    /// assert_eq!(just(5).then(just("next")), just("next"));
    /// assert_eq!(nothing::<i32>().then(just("next")), nothing::<&str>());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};
    use rstest::rstest;
    use std::cell::Cell;

    fn checked_reciprocal(value: f64) -> Maybe<f64> {
        if value == 0.0 {
            nothing()
        } else {
            just(1.0 / value)
        }
    }

    #[rstest]
    fn maybe_flat_map_just_to_just() {
        assert_eq!(just(4.0).flat_map(checked_reciprocal), just(0.25));
    }

    #[rstest]
    fn maybe_flat_map_just_to_nothing() {
        assert_eq!(just(0.0).flat_map(checked_reciprocal), nothing::<f64>());
    }

    #[rstest]
    fn maybe_flat_map_nothing_skips_function() {
        let calls = Cell::new(0);
        let result = nothing::<f64>().flat_map(|value| {
            calls.set(calls.get() + 1);
            checked_reciprocal(value)
        });
        assert_eq!(result, nothing::<f64>());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn maybe_and_then_alias() {
        assert_eq!(just("42").and_then(|s| Maybe::from(s.parse::<i32>().ok())), just(42));
    }

    #[rstest]
    fn maybe_then_propagates_absence() {
        assert_eq!(just(()).then(just(1)), just(1));
        assert_eq!(just(()).then(nothing::<i32>()), nothing::<i32>());
        assert_eq!(nothing::<()>().then(just(1)), nothing::<i32>());
    }

    #[rstest]
    fn maybe_left_identity_law() {
        let function = |x: i32| if x > 0 { just(x * 10) } else { nothing() };
        assert_eq!(<Maybe<()>>::pure(3).flat_map(function), function(3));
        assert_eq!(<Maybe<()>>::pure(-3).flat_map(function), function(-3));
    }

    #[rstest]
    #[case(just(3))]
    #[case(nothing())]
    fn maybe_right_identity_law(#[case] value: Maybe<i32>) {
        assert_eq!(value.flat_map(<Maybe<()>>::pure), value);
    }

    #[rstest]
    fn result_flat_map_short_circuits() {
        let failure: Result<i32, String> = Err("stop".to_string());
        assert_eq!(failure.flat_map(|n| Ok::<i32, String>(n + 1)), Err("stop".to_string()));
    }

    #[rstest]
    fn identity_flat_map_unwraps() {
        assert_eq!(Identity(2).flat_map(|n| Identity(n + 1)), Identity(3));
    }
}
