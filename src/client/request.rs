//! Request primitives shared by every business operation.

// crates.io
use oauth2::{
	AccessToken, AsyncHttpClient, HttpRequest,
	http::{
		Method, Request, Version,
		header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
	},
};
// self
use crate::{
	_prelude::*,
	api::{Endpoint, GrantRequest, GrantResponse},
	client::{IppiesClient, LastExchange},
	error::ConfigError,
	http::{ApiHttpClient, TransportErrorMapper},
	obs,
	token::TokenFuture,
};

impl<C, M> IppiesClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges the client credentials for a bearer token.
	///
	/// The response must carry `access_token` as a string or a number. Anything else, including
	/// `null` or a missing field, fails with [`Error::Authentication`].
	pub(crate) async fn acquire_access_token(&self) -> Result<AccessToken> {
		let credentials = self.credentials();
		let payload = GrantRequest::client_credentials(
			credentials.client_id.as_str(),
			credentials.client_secret.secret(),
		);
		let response = self
			.request(Endpoint::Grant, &payload, None)
			.await?
			.ok_or_else(|| self.authentication_error("the grant endpoint returned no response"))?;
		let grant: GrantResponse = serde_path_to_error::deserialize(response)
			.map_err(|e| self.authentication_error(e.to_string()))?;

		Ok(AccessToken::new(grant.access_token.into_secret()))
	}

	/// Posts `payload` with a bearer token resolved through the configured token source.
	pub(crate) async fn authenticated_request<P>(
		&self,
		endpoint: Endpoint,
		payload: &P,
	) -> Result<Option<Value>>
	where
		P: ?Sized + Serialize + Sync,
	{
		let grant: TokenFuture<'_> = Box::pin(self.acquire_access_token());
		let token = self.token_source.access_token(grant).await?;

		self.request(endpoint, payload, Some(&token)).await
	}

	/// Posts `payload` as JSON and records the outcome as the last exchange.
	pub(crate) async fn request<P>(
		&self,
		endpoint: Endpoint,
		payload: &P,
		bearer: Option<&AccessToken>,
	) -> Result<Option<Value>>
	where
		P: ?Sized + Serialize + Sync,
	{
		let body = serde_json::to_vec(payload).map_err(ConfigError::from)?;
		let request = build_request(&self.config().endpoint_url(endpoint), body, bearer)?;
		let handle = self.http_client.handle();
		let response = match handle.call(request).await {
			Ok(response) => response,
			Err(e) => {
				self.store_exchange(LastExchange { endpoint, status: None, response: None });
				obs::log_exchange(endpoint, None, false);

				return Err(self.transport_mapper.map_transport_error(endpoint, e));
			},
		};
		let status = response.status().as_u16();
		let (parsed, malformed) = match parse_body(response.body()) {
			Ok(parsed) => (parsed, None),
			Err(e) => (None, Some(e)),
		};

		obs::log_exchange(endpoint, Some(status), parsed.is_some());
		self.store_exchange(LastExchange {
			endpoint,
			status: Some(status),
			response: parsed.clone(),
		});

		match malformed {
			Some(source) if self.config().strict_responses =>
				Err(Error::MalformedResponse { endpoint, status: Some(status), source }),
			_ => Ok(parsed),
		}
	}

	fn authentication_error(&self, reason: impl Into<String>) -> Error {
		Error::Authentication {
			label: self.config().diagnostic_label.clone(),
			reason: reason.into(),
		}
	}
}

fn build_request(url: &str, body: Vec<u8>, bearer: Option<&AccessToken>) -> Result<HttpRequest> {
	let mut builder = Request::builder()
		.method(Method::POST)
		.uri(url)
		.version(Version::HTTP_11)
		.header(ACCEPT, "*/*")
		.header(CACHE_CONTROL, "no-cache")
		.header(CONTENT_LENGTH, body.len().to_string())
		.header(CONTENT_TYPE, "application/json");

	if let Some(token) = bearer {
		builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.secret()));
	}

	builder.body(body).map_err(|e| ConfigError::from(e).into())
}

/// Empty bodies and a literal `null` yield `None`; anything else must be a complete JSON document.
fn parse_body(body: &[u8]) -> Result<Option<Value>, serde_json::Error> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(None);
	}

	let value: Value = serde_json::from_slice(body)?;

	Ok(Some(value).filter(|value| !value.is_null()))
}
