//! Equality, ordering and hashing for `Maybe`.
//!
//! Comparisons are defined between `Maybe<T>` and `Maybe<U>` whenever the
//! payloads are comparable, so `Maybe<String>` compares with `Maybe<&str>`.
//!
//! - `Nothing == Nothing`, and `Just` never equals `Nothing`
//! - `Nothing < Just(x)` for every `x`
//! - two `Just` values compare by their payloads

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Maybe;

impl<T, U> PartialEq<Maybe<U>> for Maybe<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Maybe<U>) -> bool {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => left == right,
            (Self::Nothing, Maybe::Nothing) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T, U> PartialOrd<Maybe<U>> for Maybe<T>
where
    T: PartialOrd<U>,
{
    #[inline]
    fn partial_cmp(&self, other: &Maybe<U>) -> Option<Ordering> {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => left.partial_cmp(right),
            (Self::Nothing, Maybe::Nothing) => Some(Ordering::Equal),
            (Self::Nothing, Maybe::Just(_)) => Some(Ordering::Less),
            (Self::Just(_), Maybe::Nothing) => Some(Ordering::Greater),
        }
    }
}

impl<T: Ord> Ord for Maybe<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => left.cmp(right),
            (Self::Nothing, Self::Nothing) => Ordering::Equal,
            (Self::Nothing, Self::Just(_)) => Ordering::Less,
            (Self::Just(_), Self::Nothing) => Ordering::Greater,
        }
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_just().hash(state);
        if let Self::Just(value) = self {
            value.hash(state);
        }
    }
}

/// Returns `true` if both values are `Nothing`, or both are `Just` with
/// equal payloads.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, equal, just, nothing};
///
/// assert!(equal(&just(1), &just(1)));
/// assert!(equal(&nothing::<String>(), &nothing::<&str>()));
/// assert!(!equal(&just(1), &nothing::<i32>()));
/// ```
#[inline]
pub fn equal<T, U>(left: &Maybe<T>, right: &Maybe<U>) -> bool
where
    T: PartialEq<U>,
{
    left == right
}

/// The negation of [`equal`].
#[inline]
pub fn not_equal<T, U>(left: &Maybe<T>, right: &Maybe<U>) -> bool
where
    T: PartialEq<U>,
{
    left != right
}

/// Returns `true` if `left` orders strictly before `right`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{less, just, nothing};
///
/// assert!(less(&nothing::<i32>(), &just(0)));
/// assert!(!less(&just(0), &nothing::<i32>()));
/// assert!(!less(&nothing::<i32>(), &nothing::<i32>()));
/// assert!(less(&just(1), &just(2)));
/// ```
#[inline]
pub fn less<T, U>(left: &Maybe<T>, right: &Maybe<U>) -> bool
where
    T: PartialOrd<U>,
{
    left < right
}

/// Returns `true` if `left` orders before or equal to `right`.
#[inline]
pub fn less_equal<T, U>(left: &Maybe<T>, right: &Maybe<U>) -> bool
where
    T: PartialOrd<U>,
{
    left <= right
}

/// Returns `true` if `left` orders strictly after `right`.
#[inline]
pub fn greater<T, U>(left: &Maybe<T>, right: &Maybe<U>) -> bool
where
    T: PartialOrd<U>,
{
    left > right
}

/// Returns `true` if `left` orders after or equal to `right`.
#[inline]
pub fn greater_equal<T, U>(left: &Maybe<T>, right: &Maybe<U>) -> bool
where
    T: PartialOrd<U>,
{
    left >= right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};
    use rstest::rstest;
    use std::collections::HashSet;

    #[derive(Debug)]
    struct Opaque;

    static_assertions::assert_not_impl_any!(Maybe<Opaque>: PartialEq, PartialOrd);
    static_assertions::assert_impl_all!(Maybe<String>: PartialEq<Maybe<&'static str>>);
    static_assertions::assert_not_impl_any!(Maybe<i32>: PartialEq<Maybe<String>>);
    static_assertions::assert_not_impl_any!(Maybe<i32>: PartialEq<Maybe<i64>>);

    // =========================================================================
    // Equality
    // =========================================================================

    #[rstest]
    #[case(just(1), just(1), true)]
    #[case(just(1), just(2), false)]
    #[case(just(1), nothing(), false)]
    #[case(nothing(), just(1), false)]
    #[case(nothing(), nothing(), true)]
    fn equality_table(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(equal(&left, &right), expected);
        assert_eq!(not_equal(&left, &right), !expected);
    }

    #[rstest]
    fn equality_across_payload_types() {
        let owned = just(String::from("same"));
        assert!(equal(&owned, &just("same")));
        assert!(!equal(&owned, &just("other")));
        assert!(equal(&nothing::<String>(), &nothing::<&str>()));
    }

    #[rstest]
    fn equality_is_symmetric_for_mixed_variants() {
        let present = just(3);
        let absent: Maybe<i32> = nothing();
        assert_eq!(present == absent, absent == present);
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    #[rstest]
    #[case(nothing(), just(i32::MIN), true)]
    #[case(just(i32::MIN), nothing(), false)]
    #[case(nothing(), nothing(), false)]
    #[case(just(1), just(2), true)]
    #[case(just(2), just(1), false)]
    #[case(just(2), just(2), false)]
    fn less_table(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(less(&left, &right), expected);
    }

    #[rstest]
    fn derived_comparisons_are_consistent() {
        let absent: Maybe<i32> = nothing();
        assert!(less_equal(&absent, &absent));
        assert!(greater_equal(&absent, &absent));
        assert!(greater(&just(0), &absent));
        assert!(!greater(&absent, &just(0)));
    }

    #[rstest]
    fn partial_ordering_delegates_to_payload() {
        let not_a_number = just(f64::NAN);
        assert_eq!(not_a_number.partial_cmp(&just(1.0)), None);
        assert!(!less(&not_a_number, &just(1.0)));
        assert!(less(&nothing::<f64>(), &not_a_number));
    }

    #[rstest]
    fn sorting_places_nothing_first() {
        let mut values = vec![just(3), nothing(), just(1), nothing(), just(2)];
        values.sort();
        assert_eq!(values, vec![nothing(), nothing(), just(1), just(2), just(3)]);
    }

    #[rstest]
    fn max_prefers_any_just() {
        let absent: Maybe<u8> = nothing();
        assert_eq!(absent.max(just(0)), just(0));
    }

    // =========================================================================
    // Hashing
    // =========================================================================

    #[rstest]
    fn equal_values_hash_equally() {
        let set: HashSet<Maybe<i32>> = [just(1), just(1), nothing(), nothing(), just(2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&just(1_i32)));
        assert!(set.contains(&nothing::<i32>()));
    }
}
