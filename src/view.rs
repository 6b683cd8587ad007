use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Read capability over the success side of an outcome.
///
/// Failure can only be noticed, never inspected: there is no way to reach a
/// failure payload through this trait.
pub trait Successable<T> {
    fn is_success(&self) -> bool;

    /// Calls `action` with success payload if there is one.
    fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T);

    /// Calls `action` if outcome is a failure.
    fn if_fail_unit<F>(&self, action: F)
    where
        F: FnOnce();

    fn success_or_none(&self) -> Option<&T>;
}

/// Read capability over the failure side of an outcome.
///
/// Mirror image of [`Successable`]: success can only be noticed.
pub trait Failable<E> {
    fn is_fail(&self) -> bool;

    /// Calls `action` with failure payload if there is one.
    fn if_fail<F>(&self, action: F)
    where
        F: FnOnce(&E);

    /// Calls `action` if outcome is a success.
    fn if_success_unit<F>(&self, action: F)
    where
        F: FnOnce();
}

impl<T, E> Successable<T> for Outcome<T, E> {
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }

    fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        Outcome::if_success(self, action)
    }

    fn if_fail_unit<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        Outcome::if_fail_unit(self, action)
    }

    fn success_or_none(&self) -> Option<&T> {
        Outcome::success_or_none(self)
    }
}

impl<T, E> Failable<E> for Outcome<T, E> {
    fn is_fail(&self) -> bool {
        Outcome::is_fail(self)
    }

    fn if_fail<F>(&self, action: F)
    where
        F: FnOnce(&E),
    {
        Outcome::if_fail(self, action)
    }

    fn if_success_unit<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        Outcome::if_success_unit(self, action)
    }
}

/// Outcome whose failure carries no information.
///
/// Used when caller cares about produced value only. It has the exact layout
/// of `Outcome<T, ()>` and exposes [`Successable`] operations only.
///
/// ```rust
/// use outcome::prelude::*;
///
/// fn lookup(found: bool) -> SuccessView<i32> {
///     if found {
///         SuccessView::success(12)
///     } else {
///         SuccessView::fail()
///     }
/// }
///
/// assert_eq!(lookup(true).success_or_none(), Some(&12));
/// assert_eq!(lookup(false).success_or_none(), None);
/// ```
#[must_use = "a `SuccessView` may be a failure, which should be observed"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SuccessView<T>(Outcome<T, ()>);

impl<T> SuccessView<T> {
    pub fn success(value: T) -> Self {
        Self(Outcome::Success(value))
    }

    /// Failure without any detail.
    pub fn fail() -> Self {
        Self(Outcome::Failure(()))
    }

    pub fn into_success(self) -> Option<T> {
        self.0.into_success()
    }
}

impl<T> Successable<T> for SuccessView<T> {
    fn is_success(&self) -> bool {
        self.0.is_success()
    }

    fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        self.0.if_success(action)
    }

    fn if_fail_unit<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        self.0.if_fail_unit(action)
    }

    fn success_or_none(&self) -> Option<&T> {
        self.0.success_or_none()
    }
}

/// Outcome whose success carries no information.
///
/// Used when caller only needs to know what went wrong, if anything.
/// It has the exact layout of `Outcome<(), E>` and exposes [`Failable`]
/// operations only.
#[must_use = "a `FailureView` may be a failure, which should be observed"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct FailureView<E>(Outcome<(), E>);

impl<E> FailureView<E> {
    /// Success without any value.
    pub fn success() -> Self {
        Self(Outcome::Success(()))
    }

    pub fn fail(error: E) -> Self {
        Self(Outcome::Failure(error))
    }

    pub fn into_failure(self) -> Option<E> {
        self.0.into_failure()
    }
}

impl<E> Failable<E> for FailureView<E> {
    fn is_fail(&self) -> bool {
        self.0.is_fail()
    }

    fn if_fail<F>(&self, action: F)
    where
        F: FnOnce(&E),
    {
        self.0.if_fail(action)
    }

    fn if_success_unit<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        self.0.if_success_unit(action)
    }
}
