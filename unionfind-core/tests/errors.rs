//! Integration tests for error reporting of the checked wrapper.

use rstest::rstest;
use unionfind_core::{CheckedDisjointSet, DisjointSetError, DisjointSetErrorCode};

#[rstest]
#[case::negative(-1)]
#[case::past_end(3)]
fn out_of_range_ids_report_stable_code(#[case] index: i64) {
    let mut set = CheckedDisjointSet::new(3);
    let err = set.size(index).expect_err("id must be rejected");
    assert_eq!(err.code(), DisjointSetErrorCode::IndexOutOfRange);
    assert_eq!(err, DisjointSetError::IndexOutOfRange { index, len: 3 });
}

#[test]
fn negative_length_reports_stable_code() {
    let err = CheckedDisjointSet::try_with_len(i64::MIN).expect_err("length must be rejected");
    assert_eq!(err.code(), DisjointSetErrorCode::NegativeLength);
    assert_eq!(err.code().as_str(), "DISJOINT_SET_NEGATIVE_LENGTH");
}

#[test]
fn unallocatable_length_reports_stable_code() {
    let err = CheckedDisjointSet::try_with_len(i64::MAX).expect_err("length must be rejected");
    assert_eq!(err.code(), DisjointSetErrorCode::LengthTooLarge);
    assert_eq!(
        err.to_string(),
        format!("cannot allocate a universe of {} elements", i64::MAX)
    );
}

#[test]
fn errors_implement_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(DisjointSetError::IndexOutOfRange { index: 8, len: 2 });
    assert!(err.to_string().contains("out of range"));
}
