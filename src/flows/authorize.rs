//! Middle leg: sending the user to the provider to authorize a request token.
//!
//! The provider then redirects to the callback with `oauth_token` + `oauth_verifier`; see
//! [`CallbackParams`](crate::auth::CallbackParams) for reading them back.

// self
use crate::{_prelude::*, auth::Token, signing::OAUTH_TOKEN};

/// Appends `oauth_token` to the provider's authorization endpoint, keeping its existing query.
pub fn authorization_url(endpoint: &Url, token: &Token) -> Url {
	let mut url = endpoint.clone();

	url.query_pairs_mut().append_pair(OAUTH_TOKEN, &token.token);

	url
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn appends_token_to_endpoint() {
		let endpoint = Url::parse("https://provider.test/oauth/authorize")
			.expect("Endpoint fixture should parse.");
		let url = authorization_url(&endpoint, &Token::new("hh5s93j4hdidpola", "secret"));

		assert_eq!(url.as_str(), "https://provider.test/oauth/authorize?oauth_token=hh5s93j4hdidpola");

		let endpoint = Url::parse("https://provider.test/authorize?lang=en")
			.expect("Endpoint fixture should parse.");
		let url = authorization_url(&endpoint, &Token::new("a/b", "secret"));

		assert_eq!(url.query(), Some("lang=en&oauth_token=a%2Fb"));
	}
}
