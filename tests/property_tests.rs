//! Property-based tests for precept.

use precept::prelude::*;
use proptest::prelude::*;

// ============================================================================
// PASS-THROUGH IDENTITY: a successful guard returns its input unchanged
// ============================================================================

proptest! {
    #[test]
    fn not_negative_is_identity_on_success(n in 0..=i64::MAX) {
        prop_assert_eq!(guard::not_negative(n).unwrap(), n);
    }

    #[test]
    fn not_negative_rejects_all_negatives(n in i64::MIN..0) {
        prop_assert!(guard::not_negative(n).is_err());
    }

    #[test]
    fn in_range_agrees_with_the_inclusive_interval(
        n in any::<i64>(),
        (lo, hi) in any::<(i64, i64)>().prop_map(|(a, b)| (a.min(b), a.max(b)))
    ) {
        let result = guard::in_range(n, lo, hi);
        if n >= lo && n <= hi {
            prop_assert_eq!(result.unwrap(), n);
        } else {
            prop_assert_eq!(result.unwrap_err().kind, GuardKind::OutOfRange);
        }
    }

    #[test]
    fn not_blank_agrees_with_whitespace_scan(s in ".{0,40}") {
        let has_text = s.chars().any(|c| !c.is_whitespace());
        prop_assert_eq!(guard::not_blank(s.as_str()).is_ok(), has_text);
    }
}

// ============================================================================
// OPTIONAL OVERLOADS: absence always passes, presence follows the base check
// ============================================================================

proptest! {
    #[test]
    fn optional_guard_follows_base_guard(n in proptest::option::of(any::<i64>())) {
        let base = n.map(guard::not_negative);
        let result = guard::not_negative_opt(n);
        match base {
            None => prop_assert_eq!(result.unwrap(), None),
            Some(Ok(v)) => prop_assert_eq!(result.unwrap(), Some(v)),
            Some(Err(_)) => prop_assert!(result.is_err()),
        }
    }
}

// ============================================================================
// MATERIALIZATION ROUND-TRIP: same elements, same order, enumerated once
// ============================================================================

proptest! {
    #[test]
    fn materialize_round_trips(items in proptest::collection::vec(any::<i32>(), 0..32)) {
        let seq = materialize(items.clone());
        prop_assert_eq!(seq.as_slice(), items.as_slice());
        prop_assert_eq!(seq.into_vec(), items);
    }

    #[test]
    fn not_empty_agrees_with_emptiness(items in proptest::collection::vec(any::<u8>(), 0..8)) {
        let expected = !items.is_empty();
        prop_assert_eq!(materialize(items).not_empty().is_ok(), expected);
    }

    #[test]
    fn all_satisfy_agrees_with_not_all(items in proptest::collection::vec(any::<i32>(), 0..16)) {
        let even = |n: &i32| n % 2 == 0;
        let violated = not_all(items.clone(), even);
        prop_assert_eq!(materialize(items).all_satisfy(even).is_err(), violated);
    }

    #[test]
    fn all_present_agrees_with_option_scan(
        items in proptest::collection::vec(proptest::option::of(any::<u8>()), 0..16)
    ) {
        let has_missing = items.iter().any(Option::is_none);
        prop_assert_eq!(materialize(items).all_present().is_err(), has_missing);
    }

    #[test]
    fn truncate_keeps_the_longest_clean_prefix(
        items in proptest::collection::vec(any::<i32>(), 0..16),
        error_at in 0usize..16
    ) {
        let source: Vec<Result<i32, &str>> = items
            .iter()
            .enumerate()
            .map(|(i, &v)| if i == error_at { Err("boom") } else { Ok(v) })
            .collect();

        let seq = try_materialize(source, OnSourceError::Truncate).unwrap();
        let expected: Vec<i32> = items.iter().take(error_at.min(items.len())).copied().collect();
        prop_assert_eq!(seq.into_vec(), expected);
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(n in any::<i64>()) {
        let a = at_least(-100_i64);
        let b = at_most(100_i64);
        let combined = a.and(b);

        let a_ok = a.validate(&n).is_ok();
        let b_ok = b.validate(&n).is_ok();
        prop_assert_eq!(combined.validate(&n).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(n in any::<i64>()) {
        let a = at_most(-100_i64);
        let b = at_least(100_i64);
        let combined = a.or(b);

        let a_ok = a.validate(&n).is_ok();
        let b_ok = b.validate(&n).is_ok();
        prop_assert_eq!(combined.validate(&n).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn double_negation_agrees(n in any::<i64>()) {
        let v = in_range(0_i64, 10_i64);
        let double_neg = not(not(v));
        prop_assert_eq!(v.validate(&n).is_ok(), double_neg.validate(&n).is_ok());
    }

    #[test]
    fn validation_is_idempotent(n in any::<i64>()) {
        let v = in_range(-5_i64, 5_i64);
        prop_assert_eq!(v.validate(&n).is_ok(), v.validate(&n).is_ok());
    }
}
