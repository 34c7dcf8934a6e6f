//! Final leg: trade an authorized request token and its verifier for token credentials.

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	auth::Token,
	client::OAuthClient,
	error::ConfigError,
	flows::common::{self, CallbackConfirmation},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	signing::SigningContext,
	transport::OAuthHttpClient,
};

impl<C> OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// POSTs to the access token endpoint at `path`, signing with `token`'s secret and verifier.
	///
	/// Fails with [`ConfigError::MissingVerifier`] before any network call when `token` has no
	/// verifier. The returned token carries no verifier.
	pub async fn access_token(&self, path: &str, token: &Token) -> Result<Token> {
		const KIND: FlowKind = FlowKind::AccessToken;

		let span = FlowSpan::new(KIND, "access_token");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				if !token.has_verifier() {
					return Err(Error::from(ConfigError::MissingVerifier));
				}

				let ctx = SigningContext::new(Method::POST, path).with_token(token.clone());
				let response = self.dispatch(&ctx).await?;

				common::parse_token_response(
					&response,
					KIND.as_str(),
					CallbackConfirmation::NotRequired,
				)
			})
			.await;

		obs::record_flow_result(KIND, &result);

		result
	}
}
