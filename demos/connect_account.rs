//! Connects a customer and records a bid against a local mock of the rewards API, then prints
//! the stored vendor response.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use ippies_rewards::{
	ReqwestIppiesClient, api::Bid, config::ClientConfig, serde_json::json, token::Credentials,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let grant_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/grant");
			then.status(200).json_body(json!({ "access_token": "demo-access" }));
		})
		.await;
	let connect_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/user/connect")
				.header("authorization", "Bearer demo-access");
			then.status(200).json_body(json!({ "connected": true }));
		})
		.await;
	let bid_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tv/transaction");
			then.status(200).json_body(json!({ "ippies": 25 }));
		})
		.await;
	let config = ClientConfig::default()
		.with_base_url(server.base_url())?
		.with_diagnostic_label("TicketVeiling demo");
	let client =
		ReqwestIppiesClient::with_config(Credentials::new("demo-client", "super-secret"), config)?;

	client
		.connect_account("customer-42", "customer@example.com")
		.await?
		.record_bid(Bid::new("customer-42", "bid-1001").with_amount(250))
		.await?;

	println!("Last vendor response: {:?}.", client.last_response());

	grant_mock.assert_calls_async(2).await;
	connect_mock.assert_async().await;
	bid_mock.assert_async().await;

	Ok(())
}
