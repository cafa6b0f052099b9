#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::disallowed_types))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_async)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]

//! Expectations for asynchronous tests on the Tokio runtime.
//!
//! This module binds the abstractions defined in `expectation_core_rs` to a
//! tokio-based implementation. [`Expectation`] is the ready-to-use latch: a
//! test hands clones to the tasks under test, which call `fulfill()`, while
//! the test awaits completion with a bounded timeout. Teardown verifies that
//! the expectation was awaited at all, so a forgotten wait cannot silently
//! pass the test.

/// Tokio-backed expectation implementation.
pub mod expectation;

pub use expectation::{Expectation, FulfillSignal, TokioExpectationBackend};
pub use expectation_core_rs::{Aborter, ExpectationBackend, ExpectationConfig, Reporter, SourceLocation};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use expectation_core_rs::{Aborter, ExpectationBackend, ExpectationConfig, Reporter, SourceLocation};

  pub use crate::expectation::{Expectation, FulfillSignal, TokioExpectationBackend};
}
