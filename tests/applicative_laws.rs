#![cfg(feature = "typeclass")]
//! Property-based tests for Applicative laws on `Maybe`.
//!
//! - **Identity**: `pure(id).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Interchange**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
//! - **Composition**: `pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))`
//!
//! `map2` and `ap` are checked for the "present only when both are present"
//! rule.

use justly::maybe::{Maybe, ap, just, lift, nothing};
use justly::typeclass::Applicative;
use proptest::prelude::*;

fn maybe_of<S: Strategy>(strategy: S) -> impl Strategy<Value = Maybe<S::Value>> {
    proptest::option::of(strategy).prop_map(Maybe::from)
}

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn maybe_function() -> impl Strategy<Value = Maybe<fn(i32) -> i32>> {
    prop_oneof![
        Just(just(increment as fn(i32) -> i32)),
        Just(just(double as fn(i32) -> i32)),
        Just(nothing::<fn(i32) -> i32>()),
    ]
}

proptest! {
    #[test]
    fn prop_identity_law(value in maybe_of(any::<i32>())) {
        let lifted: Maybe<fn(i32) -> i32> = lift(|x| x);
        prop_assert_eq!(lifted.apply(value), value);
    }

    #[test]
    fn prop_homomorphism_law(x in any::<i32>()) {
        let left = lift(increment as fn(i32) -> i32).apply(lift(x));
        prop_assert_eq!(left, lift(increment(x)));
    }

    #[test]
    fn prop_interchange_law(function in maybe_function(), y in any::<i32>()) {
        let left = function.apply(lift(y));
        let right = lift(move |f: fn(i32) -> i32| f(y)).apply(function);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_composition_law(
        u in maybe_function(),
        v in maybe_function(),
        w in maybe_of(any::<i32>())
    ) {
        let compose = |f: fn(i32) -> i32| move |g: fn(i32) -> i32| move |x: i32| f(g(x));
        let left = lift(compose).apply(u).apply(v).apply(w);
        let right = u.apply(v.apply(w));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map2_present_only_when_both_present(
        left in maybe_of(any::<i16>()),
        right in maybe_of(any::<i16>())
    ) {
        let combined = left.map2(right, |a, b| i32::from(a) + i32::from(b));
        prop_assert_eq!(combined.is_just(), left.is_just() && right.is_just());
    }

    #[test]
    fn prop_ap_matches_apply(function in maybe_function(), value in maybe_of(any::<i32>())) {
        prop_assert_eq!(ap(function, value), function.apply(value));
    }

    #[test]
    fn prop_product_pairs_payloads(left in maybe_of(any::<u8>()), right in maybe_of(any::<bool>())) {
        let expected = match (left, right) {
            (Maybe::Just(a), Maybe::Just(b)) => just((a, b)),
            _ => nothing(),
        };
        prop_assert_eq!(left.product(right), expected);
    }
}
