use std::{
  cell::Cell,
  string::String,
  sync::{Arc, Mutex},
};

use super::{Aborter, Reporter};
use crate::location::SourceLocation;

#[test]
fn reporter_invokes_callback_with_report() {
  let reports: Arc<Mutex<Vec<(bool, Option<String>)>>> = Arc::new(Mutex::new(Vec::new()));
  let sink = reports.clone();
  let reporter = Reporter::new(move |passed, message, _location| {
    sink.lock().unwrap().push((passed, message));
  });

  reporter.report(false, Some(String::from("two short")), SourceLocation::caller());

  let recorded = reports.lock().unwrap();
  assert_eq!(recorded.len(), 1);
  assert!(!recorded[0].0);
  assert_eq!(recorded[0].1.as_deref(), Some("two short"));
}

#[test]
fn panicking_reporter_is_silent_on_pass() {
  Reporter::panicking().report(true, None, SourceLocation::caller());
}

#[test]
#[should_panic(expected = "two short")]
fn panicking_reporter_panics_on_failure() {
  Reporter::panicking().report(false, Some(String::from("two short")), SourceLocation::caller());
}

#[test]
fn aborter_skips_message_when_condition_holds() {
  let built = Cell::new(false);
  Aborter::panicking().check(
    true,
    || {
      built.set(true);
      String::from("unused")
    },
    SourceLocation::caller(),
  );
  assert!(!built.get());
}

#[test]
#[should_panic(expected = "never awaited")]
fn panicking_aborter_panics_when_condition_fails() {
  Aborter::panicking().check(false, || String::from("never awaited"), SourceLocation::caller());
}

#[test]
fn aborter_invokes_callback_with_condition() {
  let checks: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
  let sink = checks.clone();
  let aborter = Aborter::new(move |condition, message, _location| {
    let _ = message();
    sink.lock().unwrap().push(condition);
  });

  aborter.check(false, || String::from("diagnostic"), SourceLocation::caller());
  aborter.check(true, || String::from("diagnostic"), SourceLocation::caller());

  assert_eq!(*checks.lock().unwrap(), vec![false, true]);
}
