//! Client configuration.

// std
use std::time::Duration;
// self
use crate::{_prelude::*, api::Endpoint, error::ConfigError};

/// Production host of the rewards REST API.
pub const DEFAULT_BASE_URL: &str = "https://rest.ippies.nl";
/// Prefix used in authentication error messages.
pub const DEFAULT_DIAGNOSTIC_LABEL: &str = "Ippies/Vendor/Ticketveiling";

/// Tunables shared by the client and its default transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Origin every endpoint path is appended to.
	pub base_url: Url,
	/// Label prefixed to authentication errors.
	pub diagnostic_label: String,
	/// Raise [`Error::MalformedResponse`] instead of storing `None` for unparseable bodies.
	pub strict_responses: bool,
	/// TCP/TLS connect timeout for the default transport.
	pub connect_timeout: Duration,
	/// Whole-request timeout for the default transport.
	pub request_timeout: Duration,
}
impl ClientConfig {
	const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
	const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

	/// Points the client at another origin, e.g. a staging host or a local mock.
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
		let url = Url::parse(base_url.as_ref())
			.map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { url: url.to_string() });
		}

		self.base_url = url;

		Ok(self)
	}

	/// Overrides the label used in authentication errors.
	pub fn with_diagnostic_label(mut self, label: impl Into<String>) -> Self {
		self.diagnostic_label = label.into();

		self
	}

	/// Toggles strict JSON parsing of response bodies.
	pub fn with_strict_responses(mut self, strict: bool) -> Self {
		self.strict_responses = strict;

		self
	}

	/// Overrides the connect timeout.
	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout = timeout;

		self
	}

	/// Overrides the request timeout.
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;

		self
	}

	/// Full URL for `endpoint`, keeping any path prefix of the base URL.
	pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
		format!("{}{}", self.base_url.as_str().trim_end_matches('/'), endpoint.path())
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL must parse."),
			diagnostic_label: DEFAULT_DIAGNOSTIC_LABEL.into(),
			strict_responses: false,
			connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
			request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
		}
	}
}
