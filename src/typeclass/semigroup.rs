//! Semigroup type class - types with an associative binary operation.
//!
//! `Maybe<T>` lifts any semigroup `T`: two `Just` payloads are combined and a
//! `Nothing` operand is skipped. The payload instances provided here are
//! `String`, `Vec<T>` and `()`.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{just, nothing};
//! use justly::typeclass::Semigroup;
//!
//! let greeting = just(String::from("Hello, ")).combine(just(String::from("World!")));
//! assert_eq!(greeting, just("Hello, World!"));
//!
//! let kept = nothing::<String>().combine(just(String::from("only")));
//! assert_eq!(kept, just("only"));
//! ```

use crate::maybe::Maybe;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::typeclass::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::just;
    /// use justly::typeclass::Semigroup;
    ///
    /// assert_eq!(just(String::from("ab")).combine_n(3), just("ababab"));
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements with `combine`, or returns `Nothing` for an empty
    /// iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), just("ab"));
    /// assert_eq!(String::reduce_all(Vec::new()), nothing::<String>());
    /// ```
    fn reduce_all<I>(iterator: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
            .into()
    }
}

/// `Nothing` is skipped; two present payloads are combined.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}
