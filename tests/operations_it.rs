// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use parking_lot::Mutex;
use serde_json::json;
// self
use ippies_rewards::{
	ReqwestIppiesClient,
	api::{AuctionWon, Bid},
	config::ClientConfig,
	error::Error,
	obs::Operation,
	token::Credentials,
};

const CLIENT_ID: &str = "ticketveiling";
const CLIENT_SECRET: &str = "secret-credentials";

type Reports = Arc<Mutex<Vec<(Operation, String)>>>;

fn build_client(server: &MockServer, config: ClientConfig) -> (ReqwestIppiesClient, Reports) {
	let config = config
		.with_base_url(server.base_url())
		.expect("Mock server URL should be a valid base URL.");
	let reports = Reports::default();
	let sink = reports.clone();
	let client =
		ReqwestIppiesClient::with_config(Credentials::new(CLIENT_ID, CLIENT_SECRET), config)
			.expect("Reqwest client should build for tests.")
			.with_reporter(move |operation: Operation, error: &Error| {
				sink.lock().push((operation, error.to_string()));
			});

	(client, reports)
}

async fn mock_grant<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
	let body = json!({ "access_token": token, "token_type": "bearer" }).to_string();

	server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/grant")
				.header("content-type", "application/json")
				.header("accept", "*/*")
				.header("cache-control", "no-cache")
				.json_body(json!({
					"grant_type": "client_credentials",
					"client_id": CLIENT_ID,
					"client_secret": CLIENT_SECRET,
				}));
			then.status(200).header("content-type", "application/json").body(body.as_str());
		})
		.await
}

#[tokio::test]
async fn connect_account_grants_then_posts() {
	let server = MockServer::start_async().await;
	let (client, reports) = build_client(&server, ClientConfig::default());
	let grant = mock_grant(&server, "T").await;
	let connect = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/user/connect")
				.header("authorization", "Bearer T")
				.header("content-type", "application/json")
				.body(r#"{"id":"cust1","email":"a@example.com"}"#);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"status":"connected"}"#);
		})
		.await;

	client
		.connect_account("cust1", "a@example.com")
		.await
		.expect("Connect should succeed against the mock API.");

	grant.assert_async().await;
	connect.assert_async().await;

	assert_eq!(client.last_response(), Some(json!({ "status": "connected" })));
	assert_eq!(client.last_status(), Some(200));
	assert!(reports.lock().is_empty());
}

#[tokio::test]
async fn disconnect_account_posts_customer_id() {
	let server = MockServer::start_async().await;
	let (client, _reports) = build_client(&server, ClientConfig::default());
	let grant = mock_grant(&server, "disconnect-token").await;
	let disconnect = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/user/disconnect")
				.header("authorization", "Bearer disconnect-token")
				.body(r#"{"id":"cust1"}"#);
			then.status(200).body(r#"{"status":"disconnected"}"#);
		})
		.await;

	client.disconnect_account("cust1").await.expect("Disconnect should succeed.");

	grant.assert_async().await;
	disconnect.assert_async().await;

	assert_eq!(client.last_response(), Some(json!({ "status": "disconnected" })));
}

#[tokio::test]
async fn record_bid_defaults_amount_to_one_cent() {
	let server = MockServer::start_async().await;
	let (client, _reports) = build_client(&server, ClientConfig::default());
	let _grant = mock_grant(&server, "T").await;
	let transaction = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/transaction")
				.body(r#"{"id":"cust1","order_id":"bid1","amount":1}"#);
			then.status(200).body(r#"{"ippies":1}"#);
		})
		.await;

	client.record_bid(Bid::new("cust1", "bid1")).await.expect("Bid should be recorded.");

	transaction.assert_async().await;
}

#[tokio::test]
async fn record_auction_won_defaults_price_to_zero() {
	let server = MockServer::start_async().await;
	let (client, _reports) = build_client(&server, ClientConfig::default());
	let _grant = mock_grant(&server, "T").await;
	let won = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/auctionwon")
				.body(r#"{"id":"cust1","order_id":"auc1","order_value":0}"#);
			then.status(200).body(r#"{"ippies":0}"#);
		})
		.await;

	client
		.record_auction_won(AuctionWon::new("cust1", "auc1"))
		.await
		.expect("Auction win should be recorded.");

	won.assert_async().await;
}

#[tokio::test]
async fn operations_chain_and_grant_per_call() {
	let server = MockServer::start_async().await;
	let (client, _reports) = build_client(&server, ClientConfig::default());
	let grant = mock_grant(&server, "T").await;
	let transaction = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/transaction")
				.body(r#"{"id":"cust1","order_id":"bid7","amount":250}"#);
			then.status(200).body(r#"{"kind":"bid"}"#);
		})
		.await;
	let won = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tv/auctionwon")
				.body(r#"{"id":"cust1","order_id":"auc7","order_value":12500}"#);
			then.status(200).body(r#"{"kind":"won"}"#);
		})
		.await;

	client
		.record_bid(Bid::new("cust1", "bid7").with_amount(250))
		.await
		.expect("Bid should be recorded.")
		.record_auction_won(AuctionWon::new("cust1", "auc7").with_price(12_500))
		.await
		.expect("Auction win should be recorded.");

	grant.assert_calls_async(2).await;
	transaction.assert_async().await;
	won.assert_async().await;

	assert_eq!(client.last_response(), Some(json!({ "kind": "won" })));
}

#[tokio::test]
async fn grant_without_access_token_is_reported() {
	let server = MockServer::start_async().await;
	let (client, reports) = build_client(
		&server,
		ClientConfig::default().with_diagnostic_label("TicketVeiling sandbox"),
	);
	let grant = server
		.mock_async(|when, then| {
			when.method(POST).path("/grant");
			then.status(401)
				.header("content-type", "application/json")
				.body(r#"{"error":"invalid_client"}"#);
		})
		.await;
	let connect = server
		.mock_async(|when, then| {
			when.method(POST).path("/tv/user/connect");
			then.status(200).body("{}");
		})
		.await;
	let err = client
		.connect_account("cust1", "a@example.com")
		.await
		.expect_err("Missing access token should fail the operation.");

	assert!(err.is_authentication());
	assert!(err.to_string().starts_with("TicketVeiling sandbox: Error getting an access token"));

	grant.assert_async().await;
	connect.assert_calls_async(0).await;

	assert_eq!(client.last_response(), Some(json!({ "error": "invalid_client" })));
	assert_eq!(client.last_status(), Some(401));

	let reports = reports.lock();

	assert_eq!(reports.len(), 1);
	assert_eq!(reports[0].0, Operation::ConnectAccount);
	assert_eq!(reports[0].1, err.to_string());
}

#[tokio::test]
async fn empty_grant_response_fails_authentication() {
	let server = MockServer::start_async().await;
	let (client, reports) = build_client(&server, ClientConfig::default());
	let _grant = server
		.mock_async(|when, then| {
			when.method(POST).path("/grant");
			then.status(500);
		})
		.await;
	let err = client
		.record_bid(Bid::new("cust1", "bid1"))
		.await
		.expect_err("Empty grant response should fail the operation.");

	assert!(matches!(err, Error::Authentication { .. }));
	assert_eq!(client.last_response(), None);
	assert_eq!(client.last_status(), Some(500));
	assert_eq!(reports.lock().len(), 1);
}

#[tokio::test]
async fn non_json_business_response_is_stored_as_none() {
	let server = MockServer::start_async().await;
	let (client, _reports) = build_client(&server, ClientConfig::default());
	let _grant = mock_grant(&server, "T").await;
	let _connect = server
		.mock_async(|when, then| {
			when.method(POST).path("/tv/user/connect");
			then.status(502).body("<html>Bad Gateway</html>");
		})
		.await;

	client
		.connect_account("cust1", "a@example.com")
		.await
		.expect("Lenient parsing should not fail the operation.");

	assert_eq!(client.last_response(), None);
	assert_eq!(client.last_status(), Some(502));
}

#[tokio::test]
async fn null_business_response_is_stored_as_none() {
	let server = MockServer::start_async().await;
	let (client, reports) = build_client(&server, ClientConfig::default());
	let _grant = mock_grant(&server, "T").await;
	let _connect = server
		.mock_async(|when, then| {
			when.method(POST).path("/tv/user/connect");
			then.status(200).header("content-type", "application/json").body("null");
		})
		.await;

	client
		.connect_account("cust1", "a@example.com")
		.await
		.expect("A JSON null body should not fail the operation.");

	assert_eq!(client.last_response(), None);
	assert_eq!(client.last_status(), Some(200));
	assert!(reports.lock().is_empty());
}

#[tokio::test]
async fn strict_mode_rejects_malformed_json() {
	let server = MockServer::start_async().await;
	let (client, reports) =
		build_client(&server, ClientConfig::default().with_strict_responses(true));
	let _grant = mock_grant(&server, "T").await;
	let _connect = server
		.mock_async(|when, then| {
			when.method(POST).path("/tv/user/connect");
			then.status(200).body("not json");
		})
		.await;
	let err = client
		.connect_account("cust1", "a@example.com")
		.await
		.expect_err("Strict mode should surface malformed bodies.");

	assert!(matches!(err, Error::MalformedResponse { status: Some(200), .. }));
	assert_eq!(client.last_response(), None);
	assert_eq!(reports.lock().len(), 1);
}

#[tokio::test]
async fn unreachable_host_maps_to_transport_error() {
	let config = ClientConfig::default()
		.with_base_url("http://127.0.0.1:1")
		.expect("Loopback URL should be a valid base URL.");
	let client =
		ReqwestIppiesClient::with_config(Credentials::new(CLIENT_ID, CLIENT_SECRET), config)
			.expect("Reqwest client should build for tests.");
	let err = client
		.disconnect_account("cust1")
		.await
		.expect_err("Connection refused should fail the operation.");

	assert!(err.is_transport());

	let exchange = client.last_exchange().expect("The failed grant should be recorded.");

	assert_eq!(exchange.endpoint, ippies_rewards::api::Endpoint::Grant);
	assert_eq!(exchange.status, None);
	assert_eq!(exchange.response, None);
}
