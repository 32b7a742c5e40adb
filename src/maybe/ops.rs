//! Free-function forms of the type class operations on `Maybe`.
//!
//! `transform`, `lift`, `ap`, `concat` and `empty` delegate to the
//! corresponding trait method. `traverse` matches on the variant itself so
//! that it can accept an `FnOnce`, which `Traversable::traverse` (`FnMut`)
//! cannot. `filter` has no trait counterpart and is built on `flat_map`.

use super::Maybe;
use crate::typeclass::{Alternative, Applicative, Functor, Monad};

/// Maps `function` over the payload.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{just, nothing, transform};
///
/// assert_eq!(transform(just(2), |n| n * 10), just(20));
/// assert_eq!(transform(nothing::<i32>(), |n| n * 10), nothing::<i32>());
/// ```
#[inline]
pub fn transform<T, R, F>(value: Maybe<T>, function: F) -> Maybe<R>
where
    F: FnOnce(T) -> R,
{
    value.fmap(function)
}

/// Wraps `value` as `Just(value)`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{flatten, just, lift};
///
/// assert_eq!(lift('a'), just('a'));
/// assert_eq!(flatten(lift(just(3))), just(3));
/// ```
#[inline]
pub fn lift<T>(value: T) -> Maybe<T> {
    <Maybe<()>>::pure(value)
}

/// Applies a wrapped function to a wrapped value.
///
/// The result is `Just` only when both operands are `Just`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, ap, just, nothing};
///
/// let negate: Maybe<fn(i32) -> i32> = just(|n| -n);
/// assert_eq!(ap(negate, just(4)), just(-4));
/// assert_eq!(ap(negate, nothing()), nothing::<i32>());
/// assert_eq!(ap(nothing::<fn(i32) -> i32>(), just(4)), nothing::<i32>());
/// ```
#[inline]
pub fn ap<F, T, R>(function: Maybe<F>, value: Maybe<T>) -> Maybe<R>
where
    F: FnOnce(T) -> R,
{
    function.apply(value)
}

/// Returns `first` if it is `Just`, otherwise `second`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{concat, just, nothing};
///
/// assert_eq!(concat(nothing(), just(2)), just(2));
/// assert_eq!(concat(just(1), just(2)), just(1));
/// assert_eq!(concat(just(1), nothing()), just(1));
/// ```
#[inline]
pub fn concat<T>(first: Maybe<T>, second: Maybe<T>) -> Maybe<T> {
    first.alt(second)
}

/// The identity element of [`concat`]: `Nothing`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, concat, empty, just};
///
/// let none: Maybe<u8> = empty();
/// assert!(none.is_nothing());
/// assert_eq!(concat(empty(), just(5_u8)), just(5_u8));
/// ```
#[inline]
pub fn empty<T>() -> Maybe<T> {
    <Maybe<()> as Alternative>::empty()
}

/// Runs `function` over the payload and re-wraps the result inside the
/// applicative context it returns.
///
/// `Nothing` becomes `pure(Nothing)` in that context without calling
/// `function`. The payload is moved into `function`, which runs at most once,
/// so a closure that consumes its captures is accepted.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, just, nothing, traverse};
///
/// let parsed: Result<Maybe<u8>, _> = traverse(just("42"), str::parse::<u8>);
/// assert_eq!(parsed, Ok(just(42)));
///
/// let skipped: Option<Maybe<u8>> = traverse(nothing::<&str>(), |s| s.parse::<u8>().ok());
/// assert_eq!(skipped, Some(nothing::<u8>()));
/// ```
#[inline]
pub fn traverse<T, FB, B, F>(value: Maybe<T>, function: F) -> FB::WithType<Maybe<B>>
where
    FB: Applicative<Inner = B>,
    F: FnOnce(T) -> FB,
{
    match value {
        Maybe::Just(payload) => function(payload).fmap(Maybe::Just),
        Maybe::Nothing => FB::pure(Maybe::Nothing),
    }
}

/// Keeps the payload only when it satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{filter, just, nothing};
///
/// assert_eq!(filter(just(3), |n| *n > 1), just(3));
/// assert_eq!(filter(just(0), |n| *n > 1), nothing::<i32>());
/// ```
#[inline]
pub fn filter<T, P>(value: Maybe<T>, predicate: P) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    value.flat_map(|payload| {
        if predicate(&payload) {
            <Maybe<()>>::pure(payload)
        } else {
            <Maybe<()> as Alternative>::empty()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::compose::identity;
    use crate::maybe::{flatten, just, nothing, only_when};
    use crate::typeclass::Traversable;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(just(3), just(4))]
    #[case(nothing(), nothing())]
    fn transform_table(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(transform(value, |n| n + 1), expected);
    }

    #[rstest]
    #[case(just(3))]
    #[case(nothing())]
    fn transform_identity_law(#[case] value: Maybe<i32>) {
        assert_eq!(transform(value, identity), value);
    }

    #[rstest]
    #[case(just(3))]
    #[case(nothing())]
    fn transform_composition_law(#[case] value: Maybe<i32>) {
        let f = |n: i32| n * 2;
        let g = |n: i32| n - 7;
        assert_eq!(transform(transform(value, f), g), transform(value, compose!(g, f)));
    }

    #[rstest]
    fn lift_then_flatten_is_left_identity() {
        assert_eq!(flatten(lift(just(8))), just(8));
        assert_eq!(flatten(lift(nothing::<i32>())), nothing::<i32>());
    }

    #[rstest]
    fn ap_table() {
        let square: Maybe<fn(i32) -> i32> = just(|n| n * n);
        let missing: Maybe<fn(i32) -> i32> = nothing();

        assert_eq!(ap(square, just(5)), just(25));
        assert_eq!(ap(missing, just(5)), nothing::<i32>());
        assert_eq!(ap(square, nothing()), nothing::<i32>());
        assert_eq!(ap(missing, nothing()), nothing::<i32>());
    }

    #[rstest]
    fn ap_moves_non_copy_payload() {
        let shout = just(|text: String| text.to_uppercase());
        assert_eq!(ap(shout, just(String::from("hey"))), just("HEY"));
    }

    #[rstest]
    #[case(nothing(), just(2), just(2))]
    #[case(just(1), nothing(), just(1))]
    #[case(just(1), just(2), just(1))]
    #[case(nothing(), nothing(), nothing())]
    fn concat_prefers_first(
        #[case] first: Maybe<i32>,
        #[case] second: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(concat(first, second), expected);
    }

    #[rstest]
    fn empty_is_identity_of_concat() {
        assert_eq!(concat(empty(), just('q')), just('q'));
        assert_eq!(concat(just('q'), empty()), just('q'));
        assert_eq!(empty::<char>(), nothing::<char>());
    }

    #[rstest]
    fn traverse_into_option_and_result() {
        let to_option: Option<Maybe<i32>> = traverse(just(2), |n| Some(n * 2));
        assert_eq!(to_option, Some(just(4)));

        let failed: Result<Maybe<i32>, &str> = traverse(just(2), |_| Err("rejected"));
        assert_eq!(failed, Err("rejected"));

        let lifted: Result<Maybe<i32>, &str> = traverse(nothing::<i32>(), Ok);
        assert_eq!(lifted, Ok(nothing::<i32>()));
    }

    #[rstest]
    fn traverse_nothing_never_calls_function() {
        let calls = Cell::new(0);
        let result: Option<Maybe<i32>> = traverse(nothing::<i32>(), |n| {
            calls.set(calls.get() + 1);
            Some(n)
        });
        assert_eq!(result, Some(nothing::<i32>()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn traverse_forwards_move_only_payload() {
        let owned = just(vec![1, 2, 3]);
        let summed: Option<Maybe<i32>> = traverse(owned, |numbers: Vec<i32>| {
            Some(numbers.into_iter().sum())
        });
        assert_eq!(summed, Some(just(6)));
    }

    #[rstest]
    fn traverse_accepts_closure_consuming_its_capture() {
        let suffix = String::from("!");
        let shouted: Option<Maybe<String>> = traverse(just(String::from("hey")), move |text| {
            let mut owned = text;
            owned.push_str(&suffix);
            drop(suffix);
            Some(owned)
        });
        assert_eq!(shouted, Some(just(String::from("hey!"))));
    }

    #[rstest]
    #[case(just("7"))]
    #[case(just("x"))]
    #[case(nothing())]
    fn traverse_agrees_with_trait_method(#[case] value: Maybe<&str>) {
        let free: Option<Maybe<u8>> = traverse(value, |s| s.parse::<u8>().ok());
        let method: Option<Maybe<u8>> = value.traverse(|s| s.parse::<u8>().ok());
        assert_eq!(free, method);
    }

    #[rstest]
    #[case(just(4), just(4))]
    #[case(just(3), nothing())]
    #[case(nothing(), nothing())]
    fn filter_keeps_even(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(filter(value, |n| n % 2 == 0), expected);
    }

    #[rstest]
    fn only_when_then_transform_end_to_end() {
        let doubled = only_when(|n: &i32| *n > 0, |n| n * 2, 5);
        assert_eq!(transform(doubled, |n| n + 1), just(11));

        let rejected = only_when(|n: &i32| *n > 0, |n| n * 2, -5);
        assert_eq!(transform(rejected, |n| n + 1), nothing::<i32>());
    }
}
