use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use tokio::task::JoinHandle;

/// Handle to one in-flight fulfillment signal.
///
/// Resolves once the signal has been applied to the latch. Awaiting it waits
/// for the signal's own delivery, not for the expectation's completion, so a
/// test can sequence fulfillments deterministically. Dropping the handle lets
/// delivery proceed in the background.
#[derive(Debug)]
pub struct FulfillSignal {
  handle: JoinHandle<()>,
}

impl FulfillSignal {
  pub(crate) fn new(handle: JoinHandle<()>) -> Self {
    Self { handle }
  }
}

impl Future for FulfillSignal {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    match Pin::new(&mut this.handle).poll(cx) {
      | Poll::Ready(Ok(())) => Poll::Ready(()),
      | Poll::Ready(Err(join_error)) => {
        // An injected reporter panicking on the signal task must still fail
        // the test that awaits the signal.
        if join_error.is_panic() {
          std::panic::resume_unwind(join_error.into_panic());
        }
        Poll::Ready(())
      },
      | Poll::Pending => Poll::Pending,
    }
  }
}
