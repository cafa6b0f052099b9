use crate::{
  location::source_location::SourceLocation,
  report::{aborter::Aborter, reporter::Reporter},
};

/// Construction-time policy for an expectation.
///
/// Collects the target fulfillment count, the injected callbacks and the
/// creation location. The misuse check at teardown runs only while an aborter
/// is present; [`ExpectationConfig::without_await_check`] removes it for
/// expectations that are legitimately never awaited.
#[derive(Clone)]
pub struct ExpectationConfig {
  expected_count: usize,
  reporter:       Reporter,
  aborter:        Option<Aborter>,
  created_at:     SourceLocation,
}

impl ExpectationConfig {
  /// Creates a config with the panicking default callbacks and the caller's
  /// location.
  #[must_use]
  #[track_caller]
  pub fn new(expected_count: usize) -> Self {
    Self {
      expected_count,
      reporter: Reporter::panicking(),
      aborter: Some(Aborter::panicking()),
      created_at: SourceLocation::caller(),
    }
  }

  /// Replaces the assertion callback.
  #[must_use]
  pub fn with_reporter(mut self, reporter: Reporter) -> Self {
    self.reporter = reporter;
    self
  }

  /// Replaces the misuse-check callback.
  #[must_use]
  pub fn with_aborter(mut self, aborter: Aborter) -> Self {
    self.aborter = Some(aborter);
    self
  }

  /// Disables the teardown check entirely.
  #[must_use]
  pub fn without_await_check(mut self) -> Self {
    self.aborter = None;
    self
  }

  /// Overrides the creation location.
  #[must_use]
  pub fn with_created_at(mut self, created_at: SourceLocation) -> Self {
    self.created_at = created_at;
    self
  }

  /// Required number of fulfillments.
  #[must_use]
  pub const fn expected_count(&self) -> usize {
    self.expected_count
  }

  /// The assertion callback.
  #[must_use]
  pub fn reporter(&self) -> Reporter {
    self.reporter.clone()
  }

  /// The misuse-check callback, when teardown checking is enabled.
  #[must_use]
  pub fn aborter_opt(&self) -> Option<Aborter> {
    self.aborter.clone()
  }

  /// Location the expectation was created at.
  #[must_use]
  pub const fn created_at(&self) -> SourceLocation {
    self.created_at
  }

  /// Decomposes the config for backend construction.
  #[must_use]
  pub fn into_parts(self) -> (usize, Reporter, Option<Aborter>, SourceLocation) {
    (self.expected_count, self.reporter, self.aborter, self.created_at)
  }
}

impl core::fmt::Debug for ExpectationConfig {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ExpectationConfig")
      .field("expected_count", &self.expected_count)
      .field("await_check", &self.aborter.is_some())
      .field("created_at", &self.created_at)
      .finish()
  }
}
