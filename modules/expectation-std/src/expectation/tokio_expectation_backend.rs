use core::time::Duration;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use expectation_core_rs::{Aborter, ExpectationBackend, ExpectationConfig, Reporter, SourceLocation};
use tokio_util::sync::CancellationToken;

use crate::expectation::fulfill_signal::FulfillSignal;

/// Mutable latch state, guarded as one unit.
///
/// Every read and write goes through the single mutex in [`Inner`], which is
/// the serialization domain the latch semantics rely on: increments are
/// linearized, the completion report fires exactly once, and an expired
/// watcher that lost the race against completion observes its cancellation
/// before it can report.
#[derive(Default)]
struct ExpectationState {
  fulfill_count: usize,
  reported:      bool,
  awaited:       bool,
  watchers:      Vec<CancellationToken>,
}

struct Inner {
  expected_count: usize,
  reporter:       Reporter,
  aborter:        Option<Aborter>,
  created_at:     SourceLocation,
  state:          Mutex<ExpectationState>,
}

impl Inner {
  /// Enters the serialization domain. Poisoning is recovered: an injected
  /// reporter is allowed to panic while the lock is held, and the latch must
  /// keep linearizing fulfillments afterwards.
  fn lock_state(&self) -> MutexGuard<'_, ExpectationState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn apply_fulfill(&self, location: SourceLocation) {
    let mut state = self.lock_state();
    state.fulfill_count += 1;
    let count = state.fulfill_count;
    tracing::trace!(count, expected = self.expected_count, "fulfillment applied");
    if count < self.expected_count || state.reported {
      return;
    }
    state.reported = true;
    let watchers = core::mem::take(&mut state.watchers);
    let passed = count == self.expected_count;
    tracing::debug!(count, expected = self.expected_count, passed, "expectation completed");
    self.reporter.report(
      passed,
      Some(format!("Expected {} calls to `fulfill()`. Received {}.", self.expected_count, count)),
      location,
    );
    // Watchers are released strictly after the completion report.
    for watcher in &watchers {
      watcher.cancel();
    }
  }
}

impl Drop for Inner {
  fn drop(&mut self) {
    let Some(aborter) = &self.aborter else {
      return;
    };
    let awaited = match self.state.get_mut() {
      | Ok(state) => state.awaited,
      | Err(poisoned) => poisoned.into_inner().awaited,
    };
    if !awaited {
      tracing::error!(created_at = %self.created_at, "expectation dropped without being awaited");
    }
    let created_at = self.created_at;
    aborter.check(
      awaited,
      move || format!("Expectation created at {created_at} was never awaited"),
      created_at,
    );
  }
}

/// Backend implementation of the expectation latch using the Tokio runtime
///
/// Fulfillment signals are applied on a spawned task, so `fulfill()` never
/// suspends its caller and may be invoked from any context inside the
/// runtime. Pending waits register cancellable timeout watchers; completion
/// cancels them all at once.
#[derive(Clone)]
pub struct TokioExpectationBackend {
  inner: Arc<Inner>,
}

#[async_trait]
impl ExpectationBackend for TokioExpectationBackend {
  type Signal = FulfillSignal;

  fn new(config: ExpectationConfig) -> Self {
    let (expected_count, reporter, aborter, created_at) = config.into_parts();
    Self {
      inner: Arc::new(Inner {
        expected_count,
        reporter,
        aborter,
        created_at,
        state: Mutex::new(ExpectationState::default()),
      }),
    }
  }

  fn fulfill(&self, location: SourceLocation) -> Self::Signal {
    let inner = Arc::clone(&self.inner);
    FulfillSignal::new(tokio::spawn(async move {
      inner.apply_fulfill(location);
    }))
  }

  async fn await_fulfillment(&self, within: Duration, location: SourceLocation) {
    let token = {
      let mut state = self.inner.lock_state();
      // Observable by a concurrent teardown before this call ever suspends.
      state.awaited = true;
      if state.fulfill_count >= self.inner.expected_count {
        return;
      }
      let token = CancellationToken::new();
      state.watchers.push(token.clone());
      token
    };
    tokio::select! {
      () = token.cancelled() => {
        // Completion released this watcher; nothing to report.
      }
      () = tokio::time::sleep(within) => {
        let state = self.inner.lock_state();
        if token.is_cancelled() {
          // Completion raced the expiry and cancelled first; it wins.
          return;
        }
        let passed = state.fulfill_count >= self.inner.expected_count;
        tracing::debug!(timeout = ?within, passed, "expectation wait timed out");
        self.inner.reporter.report(
          passed,
          Some(format!("Expectation not fulfilled within {within:?}.")),
          location,
        );
      }
    }
  }

  fn is_complete(&self) -> bool {
    let state = self.inner.lock_state();
    state.fulfill_count >= self.inner.expected_count
  }

  fn fulfillment_count(&self) -> usize {
    self.inner.lock_state().fulfill_count
  }
}

impl core::fmt::Debug for TokioExpectationBackend {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let state = self.inner.lock_state();
    f.debug_struct("TokioExpectationBackend")
      .field("expected_count", &self.inner.expected_count)
      .field("fulfill_count", &state.fulfill_count)
      .field("reported", &state.reported)
      .field("awaited", &state.awaited)
      .field("watchers", &state.watchers.len())
      .finish()
  }
}
