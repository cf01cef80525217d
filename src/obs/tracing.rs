// self
use crate::{_prelude::*, api::Endpoint, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span wrapping one business operation, grant included.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the operation and its endpoint.
	pub fn new(operation: Operation) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"ippies.operation",
				operation = operation.as_str(),
				endpoint = operation.endpoint().path()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = operation;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `debug` event describing a finished HTTP exchange.
pub fn log_exchange(endpoint: Endpoint, status: Option<u16>, parsed: bool) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(endpoint = endpoint.path(), status, parsed, "Exchange completed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, status, parsed);
	}
}

/// Emits an `error` event for a failed operation.
pub fn log_failure(operation: Operation, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(operation = operation.as_str(), error = %error, "Operation failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		eprintln!("{operation}: {error}");
	}
}
