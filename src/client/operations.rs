//! Business operations: account linking and reward events.
//!
//! Each operation runs inside an [`OperationSpan`], counts its attempt and outcome, and hands
//! any failure to the client's [`ErrorReporter`](crate::report::ErrorReporter) before returning
//! it. A successful operation returns the client itself so calls can be chained:
//!
//! ```no_run
//! # async fn demo() -> ippies_rewards::error::Result<()> {
//! use ippies_rewards::{ReqwestIppiesClient, api::Bid};
//!
//! let client = ReqwestIppiesClient::new("client-id", "client-secret")?;
//!
//! client
//! 	.connect_account("customer-1", "customer@example.com")
//! 	.await?
//! 	.record_bid(Bid::new("customer-1", "bid-1").with_amount(250))
//! 	.await?;
//! # Ok(())
//! # }
//! ```

// self
use crate::{
	_prelude::*,
	api::{AuctionWon, Bid, ConnectAccount, DisconnectAccount},
	client::IppiesClient,
	http::{ApiHttpClient, TransportErrorMapper},
	obs::{self, Operation, OperationSpan, Outcome},
};

impl<C, M> IppiesClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Links a marketplace customer to the rewards account registered under `email`.
	pub async fn connect_account(
		&self,
		customer_id: impl Into<String>,
		email: impl Into<String>,
	) -> Result<&Self> {
		let payload = ConnectAccount { id: customer_id.into(), email: email.into() };

		self.perform(Operation::ConnectAccount, &payload).await
	}

	/// Unlinks a marketplace customer from its rewards account.
	pub async fn disconnect_account(&self, customer_id: impl Into<String>) -> Result<&Self> {
		let payload = DisconnectAccount { id: customer_id.into() };

		self.perform(Operation::DisconnectAccount, &payload).await
	}

	/// Rewards the customer for a placed bid.
	pub async fn record_bid(&self, bid: Bid) -> Result<&Self> {
		self.perform(Operation::RecordBid, &bid).await
	}

	/// Rewards the customer for a won auction.
	pub async fn record_auction_won(&self, auction: AuctionWon) -> Result<&Self> {
		self.perform(Operation::RecordAuctionWon, &auction).await
	}

	async fn perform<P>(&self, operation: Operation, payload: &P) -> Result<&Self>
	where
		P: Serialize + Sync,
	{
		let span = OperationSpan::new(operation);

		obs::record_outcome(operation, Outcome::Attempt);

		let result =
			span.instrument(self.authenticated_request(operation.endpoint(), payload)).await;

		match result {
			Ok(_) => {
				obs::record_outcome(operation, Outcome::Success);

				Ok(self)
			},
			Err(e) => {
				obs::record_outcome(operation, Outcome::Failure);
				self.reporter.report(operation, &e);

				Err(e)
			},
		}
	}
}
