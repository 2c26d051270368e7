//! Scalar guard behavior through the public API.

use pretty_assertions::assert_eq;
use rstest::rstest;

use precept::foundation::{GuardKind, GuardResultExt};
use precept::guard;

// ============================================================================
// PASS-THROUGH IDENTITY
// ============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(i64::MAX)]
fn not_negative_returns_value_unchanged(#[case] value: i64) {
    assert_eq!(guard::not_negative(value).unwrap(), value);
}

#[rstest]
#[case(-1)]
#[case(i64::MIN)]
fn not_negative_rejects(#[case] value: i64) {
    let err = guard::not_negative(value).unwrap_err();
    assert_eq!(err.kind, GuardKind::InvalidArgument);
}

#[test]
fn not_null_unwraps_present_value() {
    let config = Some(String::from("threshold"));
    assert_eq!(guard::not_null(config).unwrap(), "threshold");
}

#[test]
fn not_null_fails_with_null_violation() {
    let err = guard::not_null(None::<String>).unwrap_err();
    assert_eq!(err.kind, GuardKind::NullViolation);
}

// ============================================================================
// RANGES AND BOUNDS
// ============================================================================

#[rstest]
#[case(0)]
#[case(5)]
#[case(10)]
fn in_range_accepts_inclusive_interval(#[case] value: i64) {
    assert_eq!(guard::in_range(value, 0, 10).unwrap(), value);
}

#[rstest]
#[case(-1)]
#[case(11)]
fn in_range_rejects_either_bound_violation(#[case] value: i64) {
    let err = guard::in_range(value, 0, 10).unwrap_err();
    assert_eq!(err.kind, GuardKind::OutOfRange);
    assert_eq!(err.code, "in_range");
}

#[test]
fn bound_guards_distinguish_kind_from_range() {
    // Single-sided bounds are plain invalid arguments, not range errors.
    assert_eq!(
        guard::at_least(3, 5).unwrap_err().kind,
        GuardKind::InvalidArgument
    );
    assert_eq!(
        guard::at_most(7, 5).unwrap_err().kind,
        GuardKind::InvalidArgument
    );
}

#[test]
fn bounds_work_for_any_ordered_type() {
    assert_eq!(guard::at_least('m', 'a').unwrap(), 'm');
    assert!(guard::at_most('z', 'm').is_err());
    assert_eq!(guard::at_least(1.5_f64, 1.0).unwrap(), 1.5);
}

// ============================================================================
// OPTIONAL OVERLOADS
// ============================================================================

#[test]
fn absent_values_pass_optional_guards() {
    assert_eq!(guard::not_negative_opt(None::<i64>).unwrap(), None);
    assert_eq!(guard::in_range_opt(None::<i64>, 0, 10).unwrap(), None);
}

#[test]
fn present_values_are_checked_by_optional_guards() {
    assert_eq!(guard::not_negative_opt(Some(4_i64)).unwrap(), Some(4));
    assert!(guard::not_negative_opt(Some(-4_i64)).is_err());
    assert_eq!(guard::in_range_opt(Some(4_i64), 0, 10).unwrap(), Some(4));
    assert!(guard::in_range_opt(Some(40_i64), 0, 10).is_err());
}

// ============================================================================
// STRINGS AND PREDICATES
// ============================================================================

#[rstest]
#[case("hello")]
#[case("  x")]
#[case("0")]
fn not_blank_accepts(#[case] value: &str) {
    assert_eq!(guard::not_blank(value).unwrap(), value);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\r\n")]
fn not_blank_rejects(#[case] value: &str) {
    assert_eq!(
        guard::not_blank(value).unwrap_err().kind,
        GuardKind::InvalidArgument
    );
}

#[test]
fn predicate_guard_scenario() {
    assert_eq!(guard::satisfies("abc", |s| s.len() == 3).unwrap(), "abc");

    let err = guard::satisfies_msg("ab", |s| s.len() == 3, "wrong length").unwrap_err();
    assert_eq!(err.kind, GuardKind::InvalidArgument);
    assert_eq!(err.message, "wrong length");
}

// ============================================================================
// RUNTIME TYPE CHECK
// ============================================================================

#[test]
fn instance_of_downcasts_concrete_types() {
    use std::any::Any;

    let value: &dyn Any = &vec![1_u8, 2, 3];
    let bytes = guard::instance_of::<Vec<u8>>(value).unwrap();
    assert_eq!(bytes.len(), 3);

    let err = guard::instance_of::<String>(value).unwrap_err();
    assert_eq!(err.kind, GuardKind::InvalidArgument);
    assert_eq!(err.param("expected"), Some("alloc::string::String"));
}

// ============================================================================
// LABELS
// ============================================================================

#[test]
fn labels_annotate_failures_only() {
    let ok = guard::not_negative(1_i64).labeled("count").unwrap();
    assert_eq!(ok, 1);

    let err = guard::in_range(99_i64, 0, 9).labeled("priority").unwrap_err();
    assert_eq!(err.label.as_deref(), Some("priority"));
    assert!(err.to_string().starts_with("[priority] in_range:"));
}

#[test]
fn guards_chain_with_question_mark() {
    fn connect(host: &str, port: Option<u16>) -> precept::foundation::GuardResult<String> {
        let host = guard::not_blank(host).labeled("host")?;
        let port = guard::in_range_opt(port, 1024, 65535).labeled("port")?;
        Ok(format!("{host}:{}", port.unwrap_or(8080)))
    }

    assert_eq!(connect("db.internal", None).unwrap(), "db.internal:8080");
    assert_eq!(connect("db.internal", Some(5432)).unwrap(), "db.internal:5432");
    assert_eq!(
        connect("", Some(5432)).unwrap_err().label.as_deref(),
        Some("host")
    );
    assert_eq!(
        connect("db.internal", Some(80)).unwrap_err().label.as_deref(),
        Some("port")
    );
}
