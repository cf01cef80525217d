//! Vendor endpoints and the JSON payloads posted to them.
//!
//! Payload structs serialize their fields in declaration order, which is the order the vendor
//! documents. Monetary fields are euro cents and stay JSON integers on the wire.

// self
use crate::_prelude::*;

/// REST endpoints exposed by the rewards platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Client-credentials token grant.
	Grant,
	/// Link a marketplace customer to a rewards account.
	Connect,
	/// Unlink a marketplace customer.
	Disconnect,
	/// Reward for a placed bid.
	Transaction,
	/// Reward for a won auction.
	AuctionWon,
}
impl Endpoint {
	/// Path appended to the configured base URL.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::Grant => "/grant",
			Endpoint::Connect => "/tv/user/connect",
			Endpoint::Disconnect => "/tv/user/disconnect",
			Endpoint::Transaction => "/tv/transaction",
			Endpoint::AuctionWon => "/tv/auctionwon",
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Grant => "grant",
			Endpoint::Connect => "connect",
			Endpoint::Disconnect => "disconnect",
			Endpoint::Transaction => "transaction",
			Endpoint::AuctionWon => "auction_won",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Body of the `/grant` request.
#[derive(Serialize)]
pub(crate) struct GrantRequest<'a> {
	pub(crate) grant_type: &'static str,
	pub(crate) client_id: &'a str,
	pub(crate) client_secret: &'a str,
}
impl<'a> GrantRequest<'a> {
	pub(crate) const CLIENT_CREDENTIALS: &'static str = "client_credentials";

	pub(crate) fn client_credentials(client_id: &'a str, client_secret: &'a str) -> Self {
		Self { grant_type: Self::CLIENT_CREDENTIALS, client_id, client_secret }
	}
}

/// Part of the grant response the client relies on.
#[derive(Deserialize)]
pub(crate) struct GrantResponse {
	pub(crate) access_token: GrantToken,
}

/// Token as issued by the grant endpoint; numeric tokens are sent in their decimal form.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum GrantToken {
	Text(String),
	Number(serde_json::Number),
}
impl GrantToken {
	pub(crate) fn into_secret(self) -> String {
		match self {
			Self::Text(token) => token,
			Self::Number(token) => token.to_string(),
		}
	}
}

/// Body of the `/tv/user/connect` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectAccount {
	/// Marketplace customer identifier.
	pub id: String,
	/// Email address of the rewards account.
	pub email: String,
}

/// Body of the `/tv/user/disconnect` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisconnectAccount {
	/// Marketplace customer identifier.
	pub id: String,
}

/// Body of the `/tv/transaction` request, sent for every placed bid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
	/// Marketplace customer identifier.
	pub id: String,
	/// Bid identifier.
	pub order_id: String,
	/// Reward base in euro cents.
	pub amount: i64,
}
impl Bid {
	/// Amount used when the caller does not supply one.
	pub const DEFAULT_AMOUNT: i64 = 1;

	/// Creates a bid rewarded with [`Bid::DEFAULT_AMOUNT`].
	pub fn new(customer_id: impl Into<String>, bid_id: impl Into<String>) -> Self {
		Self { id: customer_id.into(), order_id: bid_id.into(), amount: Self::DEFAULT_AMOUNT }
	}

	/// Overrides the amount in euro cents.
	pub fn with_amount(mut self, amount_in_cents: i64) -> Self {
		self.amount = amount_in_cents;

		self
	}
}

/// Body of the `/tv/auctionwon` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionWon {
	/// Marketplace customer identifier.
	pub id: String,
	/// Auction identifier.
	pub order_id: String,
	/// Final auction price in euro cents.
	pub order_value: i64,
}
impl AuctionWon {
	/// Price used when the caller does not supply one.
	pub const DEFAULT_PRICE: i64 = 0;

	/// Creates an auction win priced at [`AuctionWon::DEFAULT_PRICE`].
	pub fn new(customer_id: impl Into<String>, auction_id: impl Into<String>) -> Self {
		Self {
			id: customer_id.into(),
			order_id: auction_id.into(),
			order_value: Self::DEFAULT_PRICE,
		}
	}

	/// Overrides the auction price in euro cents.
	pub fn with_price(mut self, price_in_cents: i64) -> Self {
		self.order_value = price_in_cents;

		self
	}
}
