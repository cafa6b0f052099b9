use alloc::{string::String, sync::Arc};

use crate::location::source_location::SourceLocation;

type AborterFn = dyn Fn(bool, &dyn Fn() -> String, SourceLocation) + Send + Sync;

/// Shared handle to the fatal misuse check invoked at teardown.
///
/// Invoked with the condition that must hold, a lazy message builder and the
/// location the expectation was created at. The message is only built on the
/// failing branch. Misuse is fatal by convention; the host decides whether the
/// check terminates the process.
#[derive(Clone)]
pub struct Aborter {
  inner: Arc<AborterFn>,
}

impl Aborter {
  /// Wraps a custom misuse-check callback.
  pub fn new<F>(f: F) -> Self
  where
    F: Fn(bool, &dyn Fn() -> String, SourceLocation) + Send + Sync + 'static, {
    Self { inner: Arc::new(f) }
  }

  /// Default check mirroring a precondition.
  ///
  /// # Panics
  ///
  /// Panics when the condition is false. The check runs from `Drop`, so a
  /// failing condition during unwinding aborts the process, which is the
  /// intended severity for an expectation that was never awaited.
  #[must_use]
  pub fn panicking() -> Self {
    Self::new(|condition, message, location| {
      assert!(condition, "{} ({location})", message());
    })
  }

  /// Runs the check; `message` is built only when needed by the callback.
  pub fn check<F>(&self, condition: bool, message: F, location: SourceLocation)
  where
    F: Fn() -> String, {
    (self.inner)(condition, &message, location);
  }
}

impl core::fmt::Debug for Aborter {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Aborter").finish()
  }
}
