use alloc::boxed::Box;
use core::{future::Future, time::Duration};

use async_trait::async_trait;

use crate::{expectation::expectation_config::ExpectationConfig, location::source_location::SourceLocation};

/// Trait defining the backend implementation for expectations.
///
/// The backend owns the latch state machine and serializes every state access
/// internally; the generic [`Expectation`](crate::expectation::Expectation)
/// facade only captures call sites and delegates. Futures must be `Send` so
/// waiters can be driven from any worker of a multi-threaded runtime.
#[async_trait]
pub trait ExpectationBackend: Clone {
  /// Handle resolving once a fulfillment signal has been applied to the
  /// latch. Awaiting it waits for the signal's own delivery, not for the
  /// expectation's completion.
  type Signal: Future<Output = ()> + Send + 'static;

  /// Initializes the backend from its construction-time policy.
  fn new(config: ExpectationConfig) -> Self;

  /// Records one fulfillment. Never suspends the caller; safe to call from
  /// any number of tasks concurrently.
  fn fulfill(&self, location: SourceLocation) -> Self::Signal;

  /// Suspends until the expectation completes or `within` elapses, whichever
  /// comes first.
  async fn await_fulfillment(&self, within: Duration, location: SourceLocation);

  /// Whether the fulfillment count has reached the target.
  fn is_complete(&self) -> bool;

  /// Number of fulfillments applied so far.
  fn fulfillment_count(&self) -> usize;
}
