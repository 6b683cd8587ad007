//! Outcomes of computations as plain values.
//!
//! [`Outcome`] holds either a success value or a failure error and never
//! changes after it was built. [`SuccessView`] and [`FailureView`] are
//! narrower versions of it for producers whose other side carries nothing
//! worth inspecting. Reading goes through the [`Successable`] and
//! [`Failable`] capabilities and the `on_*` combinators:
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse() {
//!         Ok(value) => outcome::success(value),
//!         Err(_) => outcome::fail(format!("not a number: {}", input)),
//!     }
//! }
//!
//! let mut log = vec![];
//! parse("12")
//!     .on_success(|v| log.push(format!("got {}", v)))
//!     .on_fail(|e| log.push(e.clone()));
//! parse("x")
//!     .on_success(|v| log.push(format!("got {}", v)))
//!     .on_fail(|e| log.push(e.clone()));
//!
//! assert_eq!(log, vec!["got 12", "not a number: x"]);
//! ```

mod construct;
mod outcome;
mod view;

pub use construct::{fail, fail_only, fail_unit, success, success_only, success_unit};
pub use outcome::Outcome;
pub use view::{Failable, FailureView, SuccessView, Successable};

/// Everything needed to build and observe outcomes.
pub mod prelude {
    pub use crate::outcome::Outcome;
    pub use crate::view::{Failable, FailureView, SuccessView, Successable};
}
