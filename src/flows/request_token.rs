//! First leg: temporary credentials.

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	auth::Token,
	client::OAuthClient,
	flows::{
		OUT_OF_BAND,
		common::{self, CallbackConfirmation},
	},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	signing::SigningContext,
	transport::OAuthHttpClient,
};

impl<C> OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// POSTs to the request token endpoint at `path` and returns the unauthorized token.
	///
	/// A missing or empty `callback` becomes [`OUT_OF_BAND`]. The provider must answer 200 with
	/// `oauth_callback_confirmed=true`.
	pub async fn request_token(&self, path: &str, callback: Option<&str>) -> Result<Token> {
		const KIND: FlowKind = FlowKind::RequestToken;

		let span = FlowSpan::new(KIND, "request_token");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let callback = callback.filter(|callback| !callback.is_empty()).unwrap_or(OUT_OF_BAND);
				let ctx = SigningContext::new(Method::POST, path).with_callback(callback);
				let response = self.dispatch(&ctx).await?;

				common::parse_token_response(&response, KIND.as_str(), CallbackConfirmation::Required)
			})
			.await;

		obs::record_flow_result(KIND, &result);

		result
	}
}
