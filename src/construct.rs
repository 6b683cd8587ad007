//! Free-standing entry points for building outcomes.
//!
//! Each of them is pure data assembly and cannot fail.
use crate::{
    outcome::Outcome,
    view::{FailureView, SuccessView},
};

/// Successful outcome, error type comes from context.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::success(value)
}

/// Failed outcome, value type comes from context.
pub fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::fail(error)
}

/// Successful outcome that can be inspected for its value only.
pub fn success_only<T>(value: T) -> SuccessView<T> {
    SuccessView::success(value)
}

/// Failed outcome that can be inspected for its error only.
pub fn fail_only<E>(error: E) -> FailureView<E> {
    FailureView::fail(error)
}

/// Success with nothing to report.
///
/// Note the return type: a value-less success is only interesting to code
/// that checks for failures, hence [`FailureView`].
///
/// ```rust
/// use outcome::prelude::*;
///
/// let done = outcome::success_unit::<String>();
/// assert!(!done.is_fail());
/// ```
pub fn success_unit<E>() -> FailureView<E> {
    FailureView::success()
}

/// Failure with no detail.
///
/// Note the return type: a value-less failure is only interesting to code
/// that looks for a value, hence [`SuccessView`].
pub fn fail_unit<T>() -> SuccessView<T> {
    SuccessView::fail()
}
