//! Foldable type class - reducing a structure to a summary value.
//!
//! A `Maybe` holds at most one element, so every fold either returns the
//! initial accumulator untouched (`Nothing`) or applies the step function
//! exactly once (`Just`).
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{just, nothing};
//! use justly::typeclass::Foldable;
//!
//! assert_eq!(just(10).fold_left(5, |accumulator, element| accumulator + element), 15);
//! assert_eq!(nothing::<i32>().fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::maybe::Maybe;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`, `length`, `to_list`
/// - `find`, `exists`, `for_all`
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::just;
    /// use justly::typeclass::Foldable;
    ///
    /// let total = just(3).fold_left(4, |accumulator, element| accumulator * element);
    /// assert_eq!(total, 12);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::just;
    /// use justly::typeclass::Foldable;
    ///
    /// let text = just('a').fold_right(String::from("bc"), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(text, "abc");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Foldable;
    ///
    /// assert_eq!(just(7).fold_map(|n: i32| n.to_string()), "7");
    /// assert_eq!(nothing::<i32>().fold_map(|n: i32| n.to_string()), "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{just, nothing};
    /// use justly::typeclass::Foldable;
    ///
    /// assert_eq!(just(42).to_list(), vec![42]);
    /// assert_eq!(nothing::<i32>().to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::Nothing, |accumulator, element| {
            if accumulator.is_just() {
                accumulator
            } else if predicate(&element) {
                Maybe::Just(element)
            } else {
                Maybe::Nothing
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_just()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// An empty structure satisfies every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Just(element) => function(init, element),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Just(element) => function(element, init),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_just())
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().maybe(false, predicate)
    }

    #[inline]
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().maybe(true, predicate)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}
