//! Response decoding shared by the request and access token endpoints.

// crates.io
use http::StatusCode;
use url::form_urlencoded;
// self
use crate::{_prelude::*, auth::Token, signing::OAUTH_TOKEN, transport::HttpResponse};

/// Form field carrying the token secret in token endpoint responses.
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
/// Form field a request token endpoint sets to `true` when it accepted `oauth_callback`.
pub const OAUTH_CALLBACK_CONFIRMED: &str = "oauth_callback_confirmed";

/// Whether a token response must confirm the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackConfirmation {
	/// `oauth_callback_confirmed=true` must be present.
	Required,
	/// The field is ignored.
	NotRequired,
}

/// Decodes a token endpoint response into a [`Token`] without verifier.
///
/// Non-200 answers and a missing callback confirmation are protocol violations; an undecodable
/// body or absent token fields are malformed responses. The raw body rides along either way.
pub fn parse_token_response(
	response: &HttpResponse,
	endpoint: &str,
	confirmation: CallbackConfirmation,
) -> Result<Token> {
	let status = response.status();
	let body = response.body();

	if status != StatusCode::OK {
		return Err(Error::ProtocolViolation {
			reason: format!("{endpoint} endpoint answered with HTTP {}", status.as_u16()),
			status: Some(status.as_u16()),
			body: String::from_utf8_lossy(body).into_owned(),
		});
	}

	let text = std::str::from_utf8(body).map_err(|e| Error::MalformedResponse {
		reason: format!("{endpoint} response is not valid UTF-8 ({e})"),
		body: String::from_utf8_lossy(body).into_owned(),
	})?;
	let fields = form_urlencoded::parse(text.as_bytes()).into_owned().collect::<HashMap<_, _>>();

	if confirmation == CallbackConfirmation::Required
		&& !fields
			.get(OAUTH_CALLBACK_CONFIRMED)
			.is_some_and(|value| value.eq_ignore_ascii_case("true"))
	{
		return Err(Error::ProtocolViolation {
			reason: format!("{endpoint} response did not confirm the callback"),
			status: Some(status.as_u16()),
			body: text.to_owned(),
		});
	}

	let token = fields.get(OAUTH_TOKEN).filter(|value| !value.is_empty()).ok_or_else(|| {
		Error::MalformedResponse {
			reason: format!("{endpoint} response is missing {OAUTH_TOKEN}"),
			body: text.to_owned(),
		}
	})?;
	let secret = fields.get(OAUTH_TOKEN_SECRET).ok_or_else(|| Error::MalformedResponse {
		reason: format!("{endpoint} response is missing {OAUTH_TOKEN_SECRET}"),
		body: text.to_owned(),
	})?;

	Ok(Token::new(token.as_str(), secret.as_str()))
}
