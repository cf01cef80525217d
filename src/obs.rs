//! Optional observability helpers for client operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `ippies.operation` with the `operation` and
//!   `endpoint` fields, plus a `debug` event for every HTTP exchange.
//! - Enable `metrics` to increment the `ippies_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, api::Endpoint};

/// Business operations exposed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Link a marketplace customer to a rewards account.
	ConnectAccount,
	/// Unlink a marketplace customer.
	DisconnectAccount,
	/// Reward a placed bid.
	RecordBid,
	/// Reward a won auction.
	RecordAuctionWon,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::ConnectAccount => "connect_account",
			Operation::DisconnectAccount => "disconnect_account",
			Operation::RecordBid => "record_bid",
			Operation::RecordAuctionWon => "record_auction_won",
		}
	}

	/// Endpoint the operation posts to.
	pub const fn endpoint(self) -> Endpoint {
		match self {
			Operation::ConnectAccount => Endpoint::Connect,
			Operation::DisconnectAccount => Endpoint::Disconnect,
			Operation::RecordBid => Endpoint::Transaction,
			Operation::RecordAuctionWon => Endpoint::AuctionWon,
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a business operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure reported and returned to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
