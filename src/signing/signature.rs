//! Signing key derivation and HMAC-SHA1 signatures (RFC 5849 section 3.4.2).

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	signing::{OAuthParams, build_base_string, encode},
};

type HmacSha1 = Hmac<Sha1>;

/// Signature methods this client can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignatureMethod {
	/// `HMAC-SHA1`, the only method implemented.
	#[default]
	HmacSha1,
}
impl SignatureMethod {
	/// Returns the identifier sent as `oauth_signature_method`.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::HmacSha1 => "HMAC-SHA1",
		}
	}

	/// Signs `base_string` with the key derived from both secrets and returns base64 output.
	pub fn sign(
		self,
		base_string: &str,
		consumer_secret: &str,
		token_secret: Option<&str>,
	) -> String {
		match self {
			SignatureMethod::HmacSha1 =>
				hmac_sha1_base64(&signing_key(consumer_secret, token_secret), base_string),
		}
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethod {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
			other => Err(Error::UnsupportedAlgorithm { method: other.to_owned() }),
		}
	}
}

/// Derives `encode(consumer_secret)&encode(token_secret)`; a missing token secret leaves the
/// second half empty.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
	format!("{}&{}", encode(consumer_secret), encode(token_secret.unwrap_or_default()))
}

/// Builds the base string for a request and signs it with the client's configured method.
pub fn sign(
	method: &str,
	url: &str,
	explicit: &OAuthParams,
	extra: &[(String, String)],
	config: &ClientConfig,
	token_secret: Option<&str>,
) -> String {
	let base_string = build_base_string(method, url, explicit, extra);

	config.signature_method.sign(&base_string, config.consumer_secret.expose(), token_secret)
}

fn hmac_sha1_base64(key: &str, data: &str) -> String {
	// HMAC pads or hashes the key, so every key length is valid.
	let mut mac = match HmacSha1::new_from_slice(key.as_bytes()) {
		Ok(mac) => mac,
		Err(_) => unreachable!("HMAC accepts keys of any length"),
	};

	mac.update(data.as_bytes());

	STANDARD.encode(mac.finalize().into_bytes())
}
