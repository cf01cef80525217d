//! Error reporting hook invoked whenever a business operation fails.

// self
use crate::{_prelude::*, obs::{self, Operation}};

/// Receives every error raised by a business operation before it is returned to the caller.
///
/// Closures of the shape `Fn(Operation, &Error)` implement this trait, so tests and services
/// can capture failures without defining a type.
pub trait ErrorReporter
where
	Self: Send + Sync,
{
	/// Handles a failure of `operation`.
	fn report(&self, operation: Operation, error: &Error);
}
impl<F> ErrorReporter for F
where
	F: Send + Sync + Fn(Operation, &Error),
{
	fn report(&self, operation: Operation, error: &Error) {
		self(operation, error)
	}
}

/// Default reporter that writes the error message to the diagnostic log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;
impl ErrorReporter for LogReporter {
	fn report(&self, operation: Operation, error: &Error) {
		obs::log_failure(operation, error);
	}
}
