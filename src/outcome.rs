use std::fmt::Debug;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::view::{FailureView, SuccessView};

/// Result of a computation that either succeeded with `T` or failed with `E`.
///
/// Exactly one variant is ever active and the value never changes after it
/// has been built. Consumers observe it through `if_*` primitives and `on_*`
/// combinators instead of matching on it:
///
/// ```rust
/// use outcome::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::success(12);
///
/// let mut seen = None;
/// outcome
///     .on_success(|value| seen = Some(*value))
///     .on_fail(|_| unreachable!());
///
/// assert_eq!(seen, Some(12));
/// ```
#[must_use = "an `Outcome` may be a failure, which should be observed"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// Computation finished with a value.
    Success(T),

    /// Computation finished with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Builds Success variant, `E` is taken from context.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Builds Failure variant, `T` is taken from context.
    pub fn fail(error: E) -> Self {
        Self::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Calls `action` with success payload, does nothing for Failure.
    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            action(value)
        }
    }

    /// Calls `action` with failure payload, does nothing for Success.
    pub fn if_fail<F>(&self, action: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = self {
            action(error)
        }
    }

    /// Same as `if_success` but without handing out the payload.
    pub fn if_success_unit<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.is_success() {
            action()
        }
    }

    /// Same as `if_fail` but without handing out the payload.
    pub fn if_fail_unit<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.is_fail() {
            action()
        }
    }

    /// Borrows success payload, `None` for Failure.
    pub fn success_or_none(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Runs `if_success` and hands back the very same outcome, so calls
    /// can be chained:
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("asd");
    ///
    /// let mut message = String::new();
    /// outcome
    ///     .on_success(|_| unreachable!())
    ///     .on_fail(|e| message.push_str(e));
    ///
    /// assert_eq!(message, "asd");
    /// ```
    pub fn on_success<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&T),
    {
        self.if_success(action);
        self
    }

    /// Runs `if_fail` and hands back the very same outcome.
    pub fn on_fail<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&E),
    {
        self.if_fail(action);
        self
    }

    /// Payload-less `on_success`.
    pub fn on_success_unit<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        self.if_success_unit(action);
        self
    }

    /// Payload-less `on_fail`.
    pub fn on_fail_unit<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        self.if_fail_unit(action);
        self
    }

    /// Consumes outcome, returns success payload if there is one.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes outcome, returns failure payload if there is one.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into std `Result`, so the outcome can be propagated with `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Narrows outcome to success capability. Failure payload is dropped,
    /// the fact that computation failed is kept.
    pub fn into_success_view(self) -> SuccessView<T> {
        match self {
            Self::Success(value) => SuccessView::success(value),
            Self::Failure(_) => SuccessView::fail(),
        }
    }

    /// Narrows outcome to failure capability. Success payload is dropped,
    /// the fact that computation succeeded is kept.
    pub fn into_failure_view(self) -> FailureView<E> {
        match self {
            Self::Success(_) => FailureView::success(),
            Self::Failure(error) => FailureView::fail(error),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    T: Debug,
    E: Debug,
{
    /// Logs outcome under `context` and returns it for further chaining.
    /// Success goes out on debug level, Failure on warn level.
    pub fn logged(&self, context: &str) -> &Self {
        match self {
            Self::Success(value) => debug!("{} - success: {:?}", context, value),
            Self::Failure(error) => warn!("{} - failure: {:?}", context, error),
        }
        self
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
