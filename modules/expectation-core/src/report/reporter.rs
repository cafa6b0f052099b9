use alloc::{string::String, sync::Arc};

use crate::location::source_location::SourceLocation;

type ReporterFn = dyn Fn(bool, Option<String>, SourceLocation) + Send + Sync;

/// Shared handle to the assertion callback of the host test framework.
///
/// A report carries a pass/fail flag, an optional human-readable message and
/// the location of the call that produced it. Reports are test outcomes, not
/// errors: the expectation keeps functioning after a failing report.
///
/// The callback runs inside the expectation's serialization domain and must
/// not call back into the expectation that invoked it.
#[derive(Clone)]
pub struct Reporter {
  inner: Arc<ReporterFn>,
}

impl Reporter {
  /// Wraps a custom assertion callback.
  pub fn new<F>(f: F) -> Self
  where
    F: Fn(bool, Option<String>, SourceLocation) + Send + Sync + 'static, {
    Self { inner: Arc::new(f) }
  }

  /// Default integration with the Rust test harness.
  ///
  /// # Panics
  ///
  /// Panics on a failing report, carrying the message and the call-site
  /// location. Hosts with their own assertion machinery inject a custom
  /// callback instead.
  #[must_use]
  pub fn panicking() -> Self {
    Self::new(|passed, message, location| {
      let message = message.unwrap_or_else(|| String::from("expectation failed"));
      assert!(passed, "{message} ({location})");
    })
  }

  /// Delivers one report.
  pub fn report(&self, passed: bool, message: Option<String>, location: SourceLocation) {
    (self.inner)(passed, message, location);
  }
}

impl core::fmt::Debug for Reporter {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Reporter").finish()
  }
}
