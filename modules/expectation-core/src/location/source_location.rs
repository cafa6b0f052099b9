//! Opaque call-site tags surfaced in expectation diagnostics.

/// Location of a call site, carried through reports unchanged.
///
/// Captured with [`SourceLocation::caller`] at the public entry points and
/// handed to the injected callbacks. No behavior depends on its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
  file:   &'static str,
  line:   u32,
  column: u32,
}

impl SourceLocation {
  /// Creates a location from explicit components.
  #[must_use]
  pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
    Self { file, line, column }
  }

  /// Captures the location of the caller.
  #[must_use]
  #[track_caller]
  pub fn caller() -> Self {
    Self::from(core::panic::Location::caller())
  }

  /// Source file path.
  #[must_use]
  pub const fn file(&self) -> &'static str {
    self.file
  }

  /// 1-based line number.
  #[must_use]
  pub const fn line(&self) -> u32 {
    self.line
  }

  /// 1-based column number.
  #[must_use]
  pub const fn column(&self) -> u32 {
    self.column
  }
}

impl From<&'static core::panic::Location<'static>> for SourceLocation {
  fn from(location: &'static core::panic::Location<'static>) -> Self {
    Self { file: location.file(), line: location.line(), column: location.column() }
  }
}

impl core::fmt::Display for SourceLocation {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}:{}:{}", self.file, self.line, self.column)
  }
}
