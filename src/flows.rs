//! Three-legged handshake orchestration on top of the [`OAuthClient`] facade.
//!
//! [`OAuthClient::request_token`] and [`OAuthClient::access_token`] are the two stateless round
//! trips; [`TokenExchange`] strings them together and refuses calls made out of order.

pub mod authorize;
pub mod common;

mod access_token;
mod request_token;

pub use authorize::*;
pub use common::*;

// self
use crate::{_prelude::*, auth::Token, client::OAuthClient, transport::OAuthHttpClient};

/// Callback value telling the provider to display the verifier instead of redirecting.
pub const OUT_OF_BAND: &str = "oob";

/// Progress of a [`TokenExchange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandshakeState {
	/// Nothing has been sent yet.
	Init,
	/// Request token call is in flight.
	RequestTokenSent,
	/// Request token obtained; waiting for the user to authorize it.
	RequestTokenReceived,
	/// Access token call is in flight.
	AccessTokenSent,
	/// Access token obtained.
	AccessTokenReceived,
	/// A call failed; the exchange cannot continue.
	Failed,
}
impl HandshakeState {
	/// Returns a stable label for logs and errors.
	pub const fn as_str(self) -> &'static str {
		match self {
			HandshakeState::Init => "init",
			HandshakeState::RequestTokenSent => "request_token_sent",
			HandshakeState::RequestTokenReceived => "request_token_received",
			HandshakeState::AccessTokenSent => "access_token_sent",
			HandshakeState::AccessTokenReceived => "access_token_received",
			HandshakeState::Failed => "failed",
		}
	}

	/// Returns `true` once no further calls are accepted.
	pub const fn is_terminal(self) -> bool {
		matches!(self, HandshakeState::AccessTokenReceived | HandshakeState::Failed)
	}
}
impl Display for HandshakeState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Stateful driver for one run of the three-legged handshake.
///
/// `access_token` may be called straight from [`HandshakeState::Init`] when the request token
/// was obtained earlier (for example in another process before the user redirect). Any error
/// moves the exchange to [`HandshakeState::Failed`]; nothing is retried.
pub struct TokenExchange<'c, C>
where
	C: ?Sized + OAuthHttpClient,
{
	client: &'c OAuthClient<C>,
	state: HandshakeState,
	request_token: Option<Token>,
}
impl<'c, C> TokenExchange<'c, C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Starts a fresh exchange in [`HandshakeState::Init`].
	pub fn new(client: &'c OAuthClient<C>) -> Self {
		Self { client, state: HandshakeState::Init, request_token: None }
	}

	/// Current state.
	pub fn state(&self) -> HandshakeState {
		self.state
	}

	/// Request token obtained by this exchange, if any.
	pub fn request_token(&self) -> Option<&Token> {
		self.request_token.as_ref()
	}

	/// Fetches a request token; only valid from [`HandshakeState::Init`].
	pub async fn fetch_request_token(
		&mut self,
		path: &str,
		callback: Option<&str>,
	) -> Result<Token> {
		const OPERATION: &str = "request_token";

		if self.state != HandshakeState::Init {
			return Err(self.invalid(OPERATION));
		}

		self.state = HandshakeState::RequestTokenSent;

		match self.client.request_token(path, callback).await {
			Ok(token) => {
				self.state = HandshakeState::RequestTokenReceived;
				self.request_token = Some(token.clone());

				Ok(token)
			},
			Err(e) => {
				self.state = HandshakeState::Failed;

				Err(e)
			},
		}
	}

	/// Exchanges `token` (carrying its verifier) for an access token.
	///
	/// Valid from [`HandshakeState::Init`] or [`HandshakeState::RequestTokenReceived`].
	pub async fn fetch_access_token(&mut self, path: &str, token: &Token) -> Result<Token> {
		const OPERATION: &str = "access_token";

		if !matches!(self.state, HandshakeState::Init | HandshakeState::RequestTokenReceived) {
			return Err(self.invalid(OPERATION));
		}

		self.state = HandshakeState::AccessTokenSent;

		match self.client.access_token(path, token).await {
			Ok(access) => {
				self.state = HandshakeState::AccessTokenReceived;

				Ok(access)
			},
			Err(e) => {
				self.state = HandshakeState::Failed;

				Err(e)
			},
		}
	}

	fn invalid(&self, operation: &'static str) -> Error {
		Error::InvalidState { state: self.state, operation }
	}
}
impl<C> Debug for TokenExchange<'_, C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenExchange")
			.field("state", &self.state)
			.field("request_token", &self.request_token)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn only_final_states_are_terminal() {
		assert!(HandshakeState::AccessTokenReceived.is_terminal());
		assert!(HandshakeState::Failed.is_terminal());
		assert!(!HandshakeState::Init.is_terminal());
		assert!(!HandshakeState::RequestTokenReceived.is_terminal());
		assert_eq!(HandshakeState::AccessTokenSent.to_string(), "access_token_sent");
	}
}
