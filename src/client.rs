//! The rewards API client.

mod operations;
mod request;

// self
use crate::{
	_prelude::*,
	api::Endpoint,
	config::ClientConfig,
	http::{ApiHttpClient, TransportErrorMapper},
	report::{ErrorReporter, LogReporter},
	token::{Credentials, FreshGrant, TokenSource},
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestIppiesClient = IppiesClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Outcome of the most recent HTTP exchange issued by a client.
#[derive(Clone, Debug, PartialEq)]
pub struct LastExchange {
	/// Endpoint that was called.
	pub endpoint: Endpoint,
	/// HTTP status, absent when the transport failed.
	pub status: Option<u16>,
	/// Parsed JSON body, absent when the body was empty, unparseable, or never received.
	pub response: Option<Value>,
}

/// Connects marketplace customers to rewards accounts and reports bids and won auctions.
///
/// Every business operation performs a client-credentials grant followed by the business
/// request, strictly in that order. Both exchanges overwrite the stored [`LastExchange`], so
/// after a successful call [`IppiesClient::last_response`] holds the business response and after
/// a failed grant it holds whatever the grant endpoint answered.
///
/// The last exchange is per-instance state. Sharing one client between tasks is safe, but
/// concurrent calls overwrite each other's last exchange.
pub struct IppiesClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Hook receiving every failed operation.
	pub reporter: Arc<dyn ErrorReporter>,
	/// Source of bearer tokens for authenticated requests.
	pub token_source: Arc<dyn TokenSource>,
	credentials: Credentials,
	config: ClientConfig,
	last_exchange: Mutex<Option<LastExchange>>,
}
impl<C, M> IppiesClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		credentials: Credentials,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			reporter: Arc::new(LogReporter),
			token_source: Arc::new(FreshGrant),
			credentials,
			config,
			last_exchange: Mutex::new(None),
		}
	}

	/// Replaces the default [`LogReporter`].
	pub fn with_reporter(mut self, reporter: impl 'static + ErrorReporter) -> Self {
		self.reporter = Arc::new(reporter);

		self
	}

	/// Replaces the default [`FreshGrant`] token source.
	pub fn with_token_source(mut self, source: impl 'static + TokenSource) -> Self {
		self.token_source = Arc::new(source);

		self
	}

	/// Credentials used for the client-credentials grant.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Parsed body of the most recent exchange, if any exchange happened and it carried JSON.
	pub fn last_response(&self) -> Option<Value> {
		self.last_exchange.lock().as_ref().and_then(|exchange| exchange.response.clone())
	}

	/// HTTP status of the most recent exchange.
	pub fn last_status(&self) -> Option<u16> {
		self.last_exchange.lock().as_ref().and_then(|exchange| exchange.status)
	}

	/// Full record of the most recent exchange.
	pub fn last_exchange(&self) -> Option<LastExchange> {
		self.last_exchange.lock().clone()
	}

	fn store_exchange(&self, exchange: LastExchange) {
		*self.last_exchange.lock() = Some(exchange);
	}
}
#[cfg(feature = "reqwest")]
impl IppiesClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client for the production API using the default configuration.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
		Self::with_config(Credentials::new(client_id, client_secret), ClientConfig::default())
	}

	/// Creates a client with a custom configuration and a reqwest transport built from it.
	pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Ok(Self::with_http_client(credentials, config, http_client, ReqwestTransportErrorMapper))
	}
}
impl<C, M> Debug for IppiesClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IppiesClient")
			.field("credentials", &self.credentials)
			.field("config", &self.config)
			.field("last_exchange", &*self.last_exchange.lock())
			.finish()
	}
}
