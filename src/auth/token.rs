//! Request and access token values.

// self
use crate::{_prelude::*, auth::Secret};

/// Token/secret pair issued by the provider, plus the verifier once the user has authorized it.
///
/// Request tokens come back from [`OAuthClient::request_token`](crate::client::OAuthClient)
/// without a verifier; attach the one from the callback redirect before exchanging. Access
/// tokens never carry one. The client does not store tokens; serialize them where needed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
	/// Public `oauth_token` value.
	pub token: String,
	/// `oauth_token_secret`, half of every signing key made with this token.
	pub secret: Secret,
	/// `oauth_verifier` returned to the callback after user authorization.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub verifier: Option<String>,
}
impl Token {
	/// Creates a token without a verifier.
	pub fn new(token: impl Into<String>, secret: impl Into<Secret>) -> Self {
		Self { token: token.into(), secret: secret.into(), verifier: None }
	}

	/// Returns the token with `verifier` attached.
	pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
		self.set_verifier(verifier);

		self
	}

	/// Attaches or replaces the verifier in place.
	pub fn set_verifier(&mut self, verifier: impl Into<String>) {
		self.verifier = Some(verifier.into());
	}

	/// Returns `true` once a verifier is attached.
	pub fn has_verifier(&self) -> bool {
		self.verifier.is_some()
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("token", &self.token)
			.field("secret", &self.secret)
			.field("verifier", &self.verifier.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_hides_secret_and_verifier() {
		let token = Token::new("public", "hidden").with_verifier("one-time");
		let rendered = format!("{token:?}");

		assert!(rendered.contains("public"));
		assert!(!rendered.contains("hidden"));
		assert!(!rendered.contains("one-time"));
	}

	#[test]
	fn persisted_tokens_round_trip_through_json() {
		let token: Token = serde_json::from_str("{\"token\":\"t\",\"secret\":\"s\"}")
			.expect("Token JSON without a verifier should deserialize.");

		assert_eq!(token, Token::new("t", "s"));
		assert!(!token.has_verifier());
		assert_eq!(
			serde_json::to_string(&token).expect("Token should serialize."),
			"{\"token\":\"t\",\"secret\":\"s\"}",
		);
	}
}
