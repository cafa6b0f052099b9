use core::{future::Future, time::Duration};

use crate::{
  expectation::{expectation_backend::ExpectationBackend, expectation_config::ExpectationConfig},
  location::source_location::SourceLocation,
};

/// An expected outcome in an asynchronous test.
///
/// A countdown latch fulfilled by concurrent work and awaited by the test,
/// with a bounded timeout. Outcomes are delivered through the callbacks
/// injected via [`ExpectationConfig`]; nothing is returned to the caller.
///
/// Clones share the same latch, so an expectation can be handed to the tasks
/// that fulfill it while the test keeps awaiting its completion.
#[derive(Clone, Debug)]
pub struct Expectation<B>
where
  B: ExpectationBackend, {
  backend: B,
}

impl<B> Expectation<B>
where
  B: ExpectationBackend,
{
  /// Creates an expectation that must be fulfilled `expected_count` times,
  /// with the panicking default callbacks.
  ///
  /// An `expected_count` of 0 is complete from the start; its first
  /// fulfillment, if any, reports a failure.
  #[must_use]
  #[track_caller]
  pub fn new(expected_count: usize) -> Self {
    Self::with_config(ExpectationConfig::new(expected_count))
  }

  /// Creates an expectation from an explicit config.
  #[must_use]
  pub fn with_config(config: ExpectationConfig) -> Self {
    Self { backend: B::new(config) }
  }

  /// Signals one unit of progress toward the target count.
  ///
  /// Never suspends and may be called from any task, any number of times.
  /// The returned handle resolves once the signal has been applied; it can
  /// be dropped when delivery ordering does not matter.
  #[track_caller]
  pub fn fulfill(&self) -> B::Signal {
    self.backend.fulfill(SourceLocation::caller())
  }

  /// Suspends until the expectation completes or `within` elapses.
  ///
  /// Completion before the timeout is the passing path. On timeout the
  /// injected reporter receives a failing report; the expectation itself
  /// keeps functioning either way.
  #[track_caller]
  pub fn await_fulfillment(&self, within: Duration) -> impl Future<Output = ()> + Send + '_ {
    self.backend.await_fulfillment(within, SourceLocation::caller())
  }

  /// Whether the fulfillment count has reached the target.
  #[must_use]
  pub fn is_complete(&self) -> bool {
    self.backend.is_complete()
  }

  /// Number of fulfillments applied so far.
  #[must_use]
  pub fn fulfillment_count(&self) -> usize {
    self.backend.fulfillment_count()
  }

  /// Gets a reference to the internal backend.
  #[must_use]
  pub const fn backend(&self) -> &B {
    &self.backend
  }
}
