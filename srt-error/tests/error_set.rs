//! Integration tests for declared error sets and status encoding.

use srt_error::{
    codes, declare_errors, declared_count, status_of, AllocError, Error, ErrorCategory, ErrorSet,
    ErrorSource, IndexOutOfBoundsError, OverflowError, SUCCESS,
};

declare_errors! {
    /// Three-kind set mirroring a string formatting call
    pub enum FormatFailure {
        Overflow(OverflowError),
        IndexOutOfBounds(IndexOutOfBoundsError),
        Alloc(AllocError),
    }
}

fn fail_with(which: u8) -> Result<i64, FormatFailure> {
    match which {
        1 => Err(OverflowError::new("length overflow at argument 2").into()),
        2 => Err(IndexOutOfBoundsError::new("index 7 >= length 3").into()),
        3 => Err(AllocError::new("provider refused 64 bytes").into()),
        _ => Ok(42),
    }
}

fn lifts_single_kind_with_question_mark() -> Result<(), FormatFailure> {
    let single: Result<(), AllocError> = Err(AllocError::new("lifted"));
    single?;
    Ok(())
}

#[test]
fn ordinals_follow_declaration_order() {
    assert_eq!(status_of(&fail_with(0)), SUCCESS);
    assert_eq!(status_of(&fail_with(1)), 1);
    assert_eq!(status_of(&fail_with(2)), 2);
    assert_eq!(status_of(&fail_with(3)), 3);
}

#[test]
fn declared_kinds_are_listed_in_order() {
    assert_eq!(
        FormatFailure::DECLARED,
        &["OverflowError", "IndexOutOfBoundsError", "AllocError"]
    );
    assert_eq!(declared_count::<FormatFailure>(), 3);
}

#[test]
fn set_delegates_source_information_to_kind() {
    let err = fail_with(2).unwrap_err();
    assert_eq!(err.kind_name(), "IndexOutOfBoundsError");
    assert_eq!(err.message(), "index 7 >= length 3");
    assert_eq!(err.code(), codes::OUT_OF_BOUNDS_ERROR);
    assert_eq!(err.to_string(), "IndexOutOfBoundsError: index 7 >= length 3");
}

#[test]
fn question_mark_lifts_a_single_kind_into_the_set() {
    let err = lifts_single_kind_with_question_mark().unwrap_err();
    assert_eq!(err, FormatFailure::Alloc(AllocError::new("lifted")));
    assert_eq!(err.ordinal(), 3);
}

#[test]
fn set_widens_into_categorized_error() {
    let error: Error = fail_with(1).unwrap_err().into();
    assert_eq!(error.category, ErrorCategory::Runtime);
    assert_eq!(error.code, codes::INTEGER_OVERFLOW);
    assert_eq!(error.message, "length overflow at argument 2");
}
