use core::{
  future::{Future, Ready},
  task::{Context, Poll},
  time::Duration,
};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
  expectation_backend::ExpectationBackend, expectation_config::ExpectationConfig, expectation_struct::Expectation,
};
use crate::location::SourceLocation;

#[derive(Clone)]
struct MockBackend {
  expected_count: usize,
  created_at:     SourceLocation,
  fulfilled_at:   Arc<Mutex<Vec<SourceLocation>>>,
  awaited_with:   Arc<Mutex<Vec<(Duration, SourceLocation)>>>,
}

#[async_trait]
impl ExpectationBackend for MockBackend {
  type Signal = Ready<()>;

  fn new(config: ExpectationConfig) -> Self {
    Self {
      expected_count: config.expected_count(),
      created_at:     config.created_at(),
      fulfilled_at:   Arc::new(Mutex::new(Vec::new())),
      awaited_with:   Arc::new(Mutex::new(Vec::new())),
    }
  }

  fn fulfill(&self, location: SourceLocation) -> Self::Signal {
    self.fulfilled_at.lock().unwrap().push(location);
    core::future::ready(())
  }

  async fn await_fulfillment(&self, within: Duration, location: SourceLocation) {
    self.awaited_with.lock().unwrap().push((within, location));
  }

  fn is_complete(&self) -> bool {
    self.fulfilled_at.lock().unwrap().len() >= self.expected_count
  }

  fn fulfillment_count(&self) -> usize {
    self.fulfilled_at.lock().unwrap().len()
  }
}

#[test]
fn new_captures_the_call_site() {
  let expectation = Expectation::<MockBackend>::new(1);
  let created_at = expectation.backend().created_at;
  assert!(created_at.file().ends_with("tests.rs"));
  assert!(created_at.line() > 0);
}

#[test]
fn fulfill_delegates_and_records_location() {
  let expectation = Expectation::<MockBackend>::new(2);
  let _ = expectation.fulfill();
  assert_eq!(expectation.fulfillment_count(), 1);
  assert!(!expectation.is_complete());

  let _ = expectation.fulfill();
  assert!(expectation.is_complete());

  let fulfilled_at = expectation.backend().fulfilled_at.lock().unwrap();
  assert!(fulfilled_at.iter().all(|location| location.file().ends_with("tests.rs")));
}

#[test]
fn await_fulfillment_passes_timeout_and_location() {
  let expectation = Expectation::<MockBackend>::new(1);
  let future = expectation.await_fulfillment(Duration::from_millis(5));
  let mut future = core::pin::pin!(future);

  let mut cx = Context::from_waker(futures::task::noop_waker_ref());
  assert!(matches!(future.as_mut().poll(&mut cx), Poll::Ready(())));

  let awaited_with = expectation.backend().awaited_with.lock().unwrap();
  assert_eq!(awaited_with.len(), 1);
  assert_eq!(awaited_with[0].0, Duration::from_millis(5));
  assert!(awaited_with[0].1.file().ends_with("tests.rs"));
}

#[test]
fn clones_share_the_same_latch() {
  let expectation = Expectation::<MockBackend>::new(3);
  let clone = expectation.clone();
  let _ = clone.fulfill();
  assert_eq!(expectation.fulfillment_count(), 1);
}

#[test]
fn config_defaults_enable_the_await_check() {
  let config = ExpectationConfig::new(4);
  assert_eq!(config.expected_count(), 4);
  assert!(config.aborter_opt().is_some());
  assert!(config.created_at().file().ends_with("tests.rs"));
}

#[test]
fn config_without_await_check_drops_the_aborter() {
  let config = ExpectationConfig::new(1).without_await_check();
  assert!(config.aborter_opt().is_none());
}

#[test]
fn config_overrides_replace_components() {
  let created_at = SourceLocation::new("src/elsewhere.rs", 7, 1);
  let config = ExpectationConfig::new(1).with_created_at(created_at);
  assert_eq!(config.created_at(), created_at);

  let (expected_count, _reporter, aborter, location) = config.into_parts();
  assert_eq!(expected_count, 1);
  assert!(aborter.is_some());
  assert_eq!(location, created_at);
}
