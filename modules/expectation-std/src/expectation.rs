//! Tokio-based expectation implementation.

mod fulfill_signal;
mod tokio_expectation_backend;


use expectation_core_rs::Expectation as CoreExpectation;
pub use fulfill_signal::FulfillSignal;
pub use tokio_expectation_backend::TokioExpectationBackend;

/// Async test expectation using the Tokio runtime
///
/// A countdown latch that concurrent tasks fulfill and the test awaits with a
/// bounded timeout. When `fulfill()` has been called as many times as the
/// expected count, the completion report fires once and every pending wait is
/// released.
pub type Expectation = CoreExpectation<TokioExpectationBackend>;
