//! Monoid type class - semigroups with an identity element.
//!
//! `Nothing` is the identity of the `Maybe` monoid, so `Maybe<T>` is a monoid
//! whenever `T` is a semigroup.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{Maybe, just, nothing};
//! use justly::typeclass::{Monoid, Semigroup};
//!
//! let identity = <Maybe<String> as Monoid>::empty();
//! assert_eq!(identity, nothing::<String>());
//! assert_eq!(identity.combine(just(String::from("a"))), just("a"));
//! ```

use super::semigroup::Semigroup;
use crate::maybe::Maybe;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just, nothing};
    /// use justly::typeclass::Monoid;
    ///
    /// let parts = vec![just(vec![1]), nothing(), just(vec![2, 3])];
    /// assert_eq!(Maybe::combine_all(parts), just(vec![1, 2, 3]));
    ///
    /// let none: Vec<Maybe<Vec<i32>>> = Vec::new();
    /// assert_eq!(Maybe::combine_all(none), nothing::<Vec<i32>>());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Nothing
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};
    use rstest::rstest;

    #[rstest]
    fn maybe_empty_is_nothing() {
        assert_eq!(<Maybe<String> as Monoid>::empty(), nothing::<String>());
    }

    #[rstest]
    #[case(just(String::from("x")))]
    #[case(nothing())]
    fn maybe_identity_laws(#[case] value: Maybe<String>) {
        assert_eq!(
            <Maybe<String> as Monoid>::empty().combine(value.clone()),
            value
        );
        assert_eq!(
            value.clone().combine(<Maybe<String> as Monoid>::empty()),
            value
        );
    }

    #[rstest]
    fn maybe_is_empty_value() {
        assert!(nothing::<String>().is_empty_value());
        assert!(!just(String::new()).is_empty_value());
    }

    #[rstest]
    fn combine_all_of_strings() {
        let words = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::combine_all(words), "abc");
        assert_eq!(String::combine_all(Vec::new()), String::new());
    }

    #[rstest]
    fn unit_empty() {
        let () = <() as Monoid>::empty();
        assert!(().is_empty_value());
    }
}
