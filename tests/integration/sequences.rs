//! Sequence validation through the public API.

use pretty_assertions::assert_eq;

use precept::foundation::{GuardKind, GuardResult};
use precept::sequence::{self, MaterializeError, OnSourceError, Sequence, materialize, not_all, try_materialize};

// ============================================================================
// MATERIALIZATION
// ============================================================================

#[test]
fn source_is_enumerated_exactly_once_regardless_of_chained_checks() {
    use std::cell::Cell;

    let pulls = Cell::new(0);
    let source = (0..5).map(|n| {
        pulls.set(pulls.get() + 1);
        n
    });

    let seq = materialize(source)
        .not_empty()
        .unwrap()
        .all_satisfy(|n| *n < 5)
        .unwrap()
        .all_satisfy(|n| *n >= 0)
        .unwrap();

    assert_eq!(pulls.get(), 5);
    assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn buffer_preserves_order_and_multiplicity() {
    let seq = materialize(vec![2, 1, 2, 3, 1]);
    assert_eq!(seq.into_vec(), vec![2, 1, 2, 3, 1]);
}

// ============================================================================
// CHAINED CHECKS
// ============================================================================

#[test]
fn empty_buffer_fails_not_empty() {
    let err = materialize(Vec::<u8>::new()).not_empty().unwrap_err();
    assert_eq!(err.kind, GuardKind::InvalidArgument);
}

#[test]
fn single_element_buffer_passes_not_empty() {
    assert!(materialize(vec![7]).not_empty().is_ok());
}

#[test]
fn missing_element_fails_all_present() {
    let err = materialize(vec![Some(1), None, Some(3)])
        .all_present()
        .unwrap_err();
    assert_eq!(err.kind, GuardKind::InvalidArgument);
    assert_eq!(err.param("index"), Some("1"));
}

#[test]
fn evenness_scenario() {
    let is_even = |n: &i32| n % 2 == 0;

    assert!(materialize(vec![2, 4, 6]).all_satisfy(is_even).is_ok());
    assert!(materialize(vec![2, 3, 6]).all_satisfy(is_even).is_err());
}

#[test]
fn full_chain_returns_validated_buffer() {
    fn load_weights(raw: Vec<Option<f64>>) -> GuardResult<Vec<f64>> {
        let weights = materialize(raw)
            .labeled("weights")
            .not_empty()?
            .require_all()?
            .all_satisfy(|w| *w >= 0.0)?;
        Ok(weights.into_vec())
    }

    assert_eq!(
        load_weights(vec![Some(0.25), Some(0.75)]).unwrap(),
        vec![0.25, 0.75]
    );

    let err = load_weights(vec![]).unwrap_err();
    assert_eq!(err.label.as_deref(), Some("weights"));

    let err = load_weights(vec![Some(0.25), None]).unwrap_err();
    assert_eq!(err.code, "all_present");

    let err = load_weights(vec![Some(-0.25)]).unwrap_err();
    assert_eq!(err.code, "all_satisfy");
}

#[test]
fn terminal_access_is_idempotent_and_nondestructive() {
    let seq = materialize(vec!["a", "b"]);
    assert_eq!(seq.as_slice(), seq.as_slice());
    // Reading the buffer does not prevent further checks.
    let seq = seq.not_empty().unwrap();
    assert_eq!(seq.as_slice(), &["a", "b"]);
}

// ============================================================================
// FALLIBLE SOURCES
// ============================================================================

#[derive(Debug, PartialEq)]
struct PullError(&'static str);

impl std::fmt::Display for PullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pull failed: {}", self.0)
    }
}

impl std::error::Error for PullError {}

#[test]
fn propagate_policy_surfaces_the_source_error() {
    let source = vec![Ok(1), Err(PullError("socket closed")), Ok(3)];
    let err = try_materialize(source, OnSourceError::Propagate).unwrap_err();
    assert_eq!(err, PullError("socket closed"));
}

#[test]
fn truncate_policy_keeps_the_partial_buffer() {
    let source = vec![Ok(1), Ok(2), Err(PullError("socket closed")), Ok(4)];
    let seq = try_materialize(source, OnSourceError::Truncate).unwrap();
    assert_eq!(seq.as_slice(), &[1, 2]);
}

#[test]
fn truncated_buffer_flows_into_checks() {
    let source: Vec<Result<i32, PullError>> = vec![Err(PullError("immediate"))];
    let err = sequence::try_non_empty(source, OnSourceError::Truncate).unwrap_err();
    match err {
        MaterializeError::Check(check) => assert_eq!(check.code, "not_empty"),
        MaterializeError::Source(_) => panic!("expected the check to reject the empty buffer"),
    }
}

#[test]
fn materialize_error_renders_both_variants() {
    let source: Vec<Result<i32, PullError>> = vec![Err(PullError("boom"))];
    let err = sequence::try_non_empty(source, OnSourceError::Propagate).unwrap_err();
    assert_eq!(err.to_string(), "sequence source failed: pull failed: boom");
}

// ============================================================================
// COMPOSITE ENTRY POINTS
// ============================================================================

#[test]
fn composites_are_pure_compositions() {
    assert!(sequence::non_empty(vec![1]).is_ok());
    assert!(sequence::non_empty(Vec::<i32>::new()).is_err());

    assert!(sequence::all_present(vec![Some(1), Some(2)]).is_ok());
    assert!(sequence::all_present(vec![Some(1), None]).is_err());

    assert!(sequence::non_empty_all_present(vec![Some(1)]).is_ok());
    assert!(sequence::non_empty_all_present(Vec::<Option<i32>>::new()).is_err());
    assert!(sequence::non_empty_all_present(vec![None::<i32>]).is_err());
}

// ============================================================================
// NOT ALL
// ============================================================================

#[test]
fn not_all_matches_the_all_satisfy_contract() {
    let inputs: Vec<Vec<i32>> = vec![vec![], vec![2, 4], vec![2, 3], vec![1, 3, 5]];
    for input in inputs {
        let helper_says_violation = not_all(input.clone(), |n| n % 2 == 0);
        let check_failed = materialize(input).all_satisfy(|n| n % 2 == 0).is_err();
        assert_eq!(helper_says_violation, check_failed);
    }
}

// ============================================================================
// BUFFER ERGONOMICS
// ============================================================================

#[test]
fn sequence_behaves_like_a_read_only_slice() {
    let seq: Sequence<i32> = vec![10, 20, 30].into();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq[0], 10);
    assert_eq!(seq.iter().sum::<i32>(), 60);
    assert_eq!((&seq).into_iter().count(), 3);

    let collected: Vec<i32> = seq.into_iter().collect();
    assert_eq!(collected, vec![10, 20, 30]);
}
