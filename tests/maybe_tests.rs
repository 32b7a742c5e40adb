#![cfg(feature = "typeclass")]
//! Integration tests for `Maybe` through the public prelude.
//!
//! Covers extraction, comparison, conditional construction, searching and
//! the end-to-end pipelines that combine them.

use justly::prelude::*;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::RefCell;
use std::collections::BTreeSet;

fn maybe_of<S: Strategy>(strategy: S) -> impl Strategy<Value = Maybe<S::Value>> {
    proptest::option::of(strategy).prop_map(Maybe::from)
}

// =============================================================================
// Extraction
// =============================================================================

proptest! {
    #[test]
    fn prop_from_just_returns_payload(x in any::<i64>()) {
        prop_assert_eq!(from_just(just(x)), x);
    }

    #[test]
    fn prop_from_maybe_prefers_payload(x in any::<i64>(), default in any::<i64>()) {
        prop_assert_eq!(from_maybe(default, just(x)), x);
        prop_assert_eq!(from_maybe(default, nothing()), default);
    }

    #[test]
    fn prop_maybe_is_the_case_analysis(value in maybe_of(any::<u32>()), default in any::<u64>()) {
        let expected = match value {
            Maybe::Just(x) => u64::from(x) * 2,
            Maybe::Nothing => default,
        };
        prop_assert_eq!(maybe(default, |x: u32| u64::from(x) * 2, value), expected);
    }
}

#[rstest]
#[should_panic(expected = "called from_just on a Nothing value")]
fn from_just_on_nothing_panics() {
    let _ = from_just(nothing::<i32>());
}

#[rstest]
fn present_is_the_checked_extraction() {
    let present = just(String::from("kept")).present().unwrap();
    assert_eq!(present.len(), 4);
    assert_eq!(present.into_inner(), "kept");

    let error = nothing::<String>().present().unwrap_err();
    assert_eq!(error, AbsentError);
    assert_eq!(error.to_string(), "expected a Just value, found Nothing");
}

// =============================================================================
// Comparison
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_is_reflexive_and_symmetric(value in maybe_of(any::<i32>()), other in maybe_of(any::<i32>())) {
        prop_assert!(equal(&value, &value));
        prop_assert_eq!(equal(&value, &other), equal(&other, &value));
        prop_assert_eq!(not_equal(&value, &other), !equal(&value, &other));
    }

    #[test]
    fn prop_just_never_equals_nothing(x in any::<i32>()) {
        prop_assert_ne!(just(x), nothing::<i32>());
        prop_assert!(not_equal(&nothing::<i32>(), &just(x)));
    }

    #[test]
    fn prop_nothing_is_the_minimum(x in any::<i32>()) {
        prop_assert!(less(&nothing::<i32>(), &just(x)));
        prop_assert!(!less(&just(x), &nothing::<i32>()));
        prop_assert!(greater(&just(x), &nothing::<i32>()));
        prop_assert!(less_equal(&nothing::<i32>(), &just(x)));
        prop_assert!(greater_equal(&just(x), &nothing::<i32>()));
    }

    #[test]
    fn prop_just_ordering_follows_payload(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(just(x).cmp(&just(y)), x.cmp(&y));
        prop_assert_eq!(less(&just(x), &just(y)), x < y);
    }
}

#[rstest]
fn nothing_is_not_less_than_nothing() {
    assert!(!less(&nothing::<i32>(), &nothing::<i32>()));
    assert!(equal(&nothing::<String>(), &nothing::<&str>()));
}

#[rstest]
fn comparison_across_payload_types() {
    assert!(equal(&just(String::from("abc")), &just("abc")));
    assert!(not_equal(&just(String::from("abc")), &nothing::<&str>()));
    assert!(less(&just("abc"), &just("abd")));
}

#[rstest]
fn ordered_collections_put_nothing_first() {
    let set: BTreeSet<Maybe<i32>> = [just(3), nothing(), just(-1)].into_iter().collect();
    let ordered: Vec<Maybe<i32>> = set.into_iter().collect();
    assert_eq!(ordered, vec![nothing(), just(-1), just(3)]);
}

// =============================================================================
// Conditional construction
// =============================================================================

#[rstest]
#[case(5, just(10))]
#[case(-5, nothing())]
#[case(0, nothing())]
fn only_when_doubles_positive(#[case] input: i32, #[case] expected: Maybe<i32>) {
    assert_eq!(only_when(|n: &i32| *n > 0, |n| n * 2, input), expected);
}

#[rstest]
fn only_when_never_runs_transform_on_rejected_input() {
    let log = RefCell::new(Vec::new());
    let record = |n: i32| {
        log.borrow_mut().push(n);
        n
    };

    let rejected = only_when(|n: &i32| *n > 0, record, -1);
    assert_eq!(rejected, nothing::<i32>());
    assert!(log.borrow().is_empty());

    let record = |n: i32| {
        log.borrow_mut().push(n);
        n
    };
    let accepted = only_when(|n: &i32| *n > 0, record, 1);
    assert_eq!(accepted, just(1));
    assert_eq!(*log.borrow(), vec![1]);
}

#[rstest]
fn sfinae_wraps_fallible_calls() {
    let parse = sfinae(|text: &str| text.parse::<u8>());
    assert_eq!(parse("200"), just(200_u8));
    assert_eq!(parse("300"), nothing::<u8>());

    let first_char = sfinae(|text: &str| text.chars().next());
    assert_eq!(first_char("xyz"), just('x'));
    assert_eq!(first_char(""), nothing::<char>());
}

// =============================================================================
// Searching
// =============================================================================

#[rstest]
fn find_if_even_end_to_end() {
    assert_eq!(find_if(just(4), |n: &i32| n % 2 == 0), just(4));
    assert_eq!(find_if(just(5), |n: &i32| n % 2 == 0), nothing::<i32>());
}

#[rstest]
fn any_of_nothing_end_to_end() {
    assert!(!any_of(nothing::<i32>(), |n: &i32| *n > 0));
    assert!(all_of(nothing::<i32>(), |n: &i32| *n > 0));
    assert!(none_of(nothing::<i32>(), |n: &i32| *n > 0));
}

proptest! {
    #[test]
    fn prop_search_predicates_agree(value in maybe_of(any::<i32>())) {
        let positive = |n: &i32| *n > 0;
        prop_assert_eq!(any_of(value, positive), find_if(value, positive).is_just());
        prop_assert_eq!(none_of(value, positive), !any_of(value, positive));
        prop_assert_eq!(all_of(value, positive), value.is_nothing() || any_of(value, positive));
    }

    #[test]
    fn prop_contains_matches_equality(value in maybe_of(any::<u8>()), key in any::<u8>()) {
        prop_assert_eq!(contains(&value, &key), value == just(key));
    }
}

// =============================================================================
// End-to-end pipelines
// =============================================================================

#[rstest]
fn only_when_then_transform_gives_eleven() {
    let result = transform(only_when(|n: &i32| *n > 0, |n| n * 2, 5), |n| n + 1);
    assert_eq!(result, just(11));
}

#[rstest]
fn parse_validate_and_combine() {
    let parse = sfinae(|text: &str| text.parse::<i32>());
    let positive = |n: i32| filter(just(n), |n| *n > 0);

    let total = parse("12")
        .flat_map(positive)
        .map2(parse("30").flat_map(positive), |a, b| a + b);
    assert_eq!(total, just(42));

    let rejected = parse("12")
        .flat_map(positive)
        .map2(parse("-30").flat_map(positive), |a, b| a + b);
    assert_eq!(rejected, nothing::<i32>());
}

#[rstest]
fn first_present_configuration_wins() {
    let from_flag = nothing::<&str>();
    let from_environment = just("env");
    let default = just("default");

    let chosen = concat(from_flag, concat(from_environment, default));
    assert_eq!(chosen, just("env"));
    assert_eq!(Maybe::choice([from_flag, from_environment, default]), just("env"));
}

#[rstest]
fn collect_all_or_nothing() {
    let all: Maybe<Vec<i32>> = vec![just(1), just(2), just(3)].into_iter().collect();
    assert_eq!(all, just(vec![1, 2, 3]));

    let some_missing: Maybe<Vec<i32>> = vec![just(1), nothing(), just(3)].into_iter().collect();
    assert_eq!(some_missing, nothing::<Vec<i32>>());
}

#[rstest]
fn display_renders_both_variants() {
    assert_eq!(just(7).to_string(), "just(7)");
    assert_eq!(nothing::<i32>().to_string(), "nothing");
}
