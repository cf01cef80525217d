// self
use crate::obs::{Operation, Outcome};

/// Increments `ippies_operation_total{operation, outcome}` on the global metrics recorder.
///
/// Every business operation records one `attempt` before its grant is requested and then
/// exactly one `success` or `failure`, so `attempt - success - failure` counts calls still in
/// flight. Without the `metrics` feature this does nothing.
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"ippies_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
