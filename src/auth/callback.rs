//! Parameters the provider appends to the callback URL after the user authorizes a token.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::Token,
	error::ConfigError,
	signing::{OAUTH_TOKEN, OAUTH_VERIFIER},
};

/// `oauth_token` and `oauth_verifier` from the provider's redirect back to the application.
#[derive(Clone, PartialEq, Eq)]
pub struct CallbackParams {
	/// Request token the user authorized.
	pub token: String,
	/// One-time verifier proving the authorization.
	pub verifier: String,
}
impl CallbackParams {
	/// Reads the parameters from the callback URL's query.
	pub fn from_url(url: &Url) -> Result<Self> {
		Self::from_query(url.query().unwrap_or_default())
	}

	/// Reads the parameters from a raw query string (without the leading `?`).
	pub fn from_query(query: &str) -> Result<Self> {
		let mut token = None;
		let mut verifier = None;

		for (name, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
			match name.as_ref() {
				OAUTH_TOKEN => token = Some(value.into_owned()),
				OAUTH_VERIFIER => verifier = Some(value.into_owned()),
				_ => {},
			}
		}

		let token = token
			.filter(|value| !value.is_empty())
			.ok_or(ConfigError::MissingCallbackParam { param: OAUTH_TOKEN })?;
		let verifier = verifier
			.filter(|value| !value.is_empty())
			.ok_or(ConfigError::MissingCallbackParam { param: OAUTH_VERIFIER })?;

		Ok(Self { token, verifier })
	}

	/// Attaches the verifier to `request_token` after checking it is the token the provider
	/// redirected for.
	pub fn apply(self, request_token: Token) -> Result<Token> {
		if self.token != request_token.token {
			return Err(ConfigError::CallbackTokenMismatch.into());
		}

		Ok(request_token.with_verifier(self.verifier))
	}
}
impl Debug for CallbackParams {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CallbackParams")
			.field("token", &self.token)
			.field("verifier", &"<redacted>")
			.finish()
	}
}
