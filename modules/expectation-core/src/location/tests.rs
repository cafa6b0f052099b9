use super::SourceLocation;

#[test]
fn caller_captures_this_file() {
  let location = SourceLocation::caller();
  assert!(location.file().ends_with("tests.rs"));
  assert!(location.line() > 0);
  assert!(location.column() > 0);
}

#[test]
fn display_renders_file_line_column() {
  let location = SourceLocation::new("src/demo.rs", 12, 3);
  assert_eq!(location.to_string(), "src/demo.rs:12:3");
}

#[test]
fn from_panic_location_copies_components() {
  let panic_location = core::panic::Location::caller();
  let location = SourceLocation::from(panic_location);
  assert_eq!(location.file(), panic_location.file());
  assert_eq!(location.line(), panic_location.line());
  assert_eq!(location.column(), panic_location.column());
}
