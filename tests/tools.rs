#![allow(dead_code)]
use outcome::prelude::*;
use std::cell::RefCell;

/// Collects side effects of callbacks in the order they fired.
#[derive(Default)]
pub struct Recorder {
    events: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: ToString>(&self, event: T) {
        self.events.borrow_mut().push(event.to_string());
    }

    /// Returns callback recording `label: payload` when called.
    pub fn with_payload<'a, T>(&'a self, label: &'a str) -> impl FnOnce(&T) + 'a
    where
        T: std::fmt::Display + 'a,
    {
        move |payload| self.push(format!("{}: {}", label, payload))
    }

    /// Returns callback recording bare `label` when called.
    pub fn unit<'a>(&'a self, label: &'a str) -> impl FnOnce() + 'a {
        move || self.push(label)
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `12` when `found`, value-less failure otherwise.
pub fn value_or_nothing(found: bool) -> SuccessView<i32> {
    if found {
        outcome::success_only(12)
    } else {
        outcome::fail_unit()
    }
}

/// Narrowed success when `ok`, `asd` error otherwise.
pub fn error_or_nothing(ok: bool) -> FailureView<anyhow::Error> {
    if ok {
        outcome::success::<i32, _>(12).into_failure_view()
    } else {
        outcome::fail_only(anyhow::anyhow!("asd"))
    }
}
