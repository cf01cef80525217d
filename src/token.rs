//! Credentials and the access-token seam used by authenticated requests.

// crates.io
use oauth2::{AccessToken, ClientId, ClientSecret};
// self
use crate::_prelude::*;

/// Boxed future resolving to a bearer token.
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<AccessToken>> + 'a + Send>>;

/// Decides where the bearer token for the next business call comes from.
///
/// The client passes `grant`, an un-polled future that performs a fresh client-credentials
/// grant and records its response as the last response. Returning `grant` unchanged fetches a
/// new token per call; a source that resolves a token some other way never polls it, so no
/// grant request is sent.
pub trait TokenSource
where
	Self: Send + Sync,
{
	/// Resolves the token for one authenticated request.
	fn access_token<'a>(&'a self, grant: TokenFuture<'a>) -> TokenFuture<'a>;
}

/// Fetches a fresh token before every authenticated request.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreshGrant;
impl TokenSource for FreshGrant {
	fn access_token<'a>(&'a self, grant: TokenFuture<'a>) -> TokenFuture<'a> {
		grant
	}
}

/// Client-credentials pair issued by the vendor.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Client identifier.
	pub client_id: ClientId,
	/// Client secret; redacted in `Debug` output.
	pub client_secret: ClientSecret,
}
impl Credentials {
	/// Wraps the raw identifier and secret.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn fresh_grant_polls_the_grant_future() {
		let token = FreshGrant
			.access_token(Box::pin(async { Ok::<_, Error>(AccessToken::new("fresh".into())) }))
			.await
			.expect("Fresh grant should resolve the supplied grant.");

		assert_eq!(token.secret(), "fresh");
	}

	#[test]
	fn credentials_debug_redacts_secret() {
		let credentials = Credentials::new("client-1", "very-secret");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("client-1"));
		assert!(!rendered.contains("very-secret"));
	}
}
