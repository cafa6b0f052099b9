//! Injected callbacks that connect expectation outcomes to a host test
//! framework.

/// Fatal misuse check invoked at teardown.
pub mod aborter;
/// Assertion callback of the host test framework.
pub mod reporter;

#[cfg(test)]
mod tests;

pub use aborter::Aborter;
pub use reporter::Reporter;
