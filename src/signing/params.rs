//! The `oauth_*` protocol parameter set carried in the `Authorization` header.

// self
use crate::{_prelude::*, signing::encode};

/// `oauth_callback`
pub const OAUTH_CALLBACK: &str = "oauth_callback";
/// `oauth_consumer_key`
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// `oauth_nonce`
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// `oauth_signature`
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
/// `oauth_signature_method`
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// `oauth_timestamp`
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// `oauth_token`
pub const OAUTH_TOKEN: &str = "oauth_token";
/// `oauth_verifier`
pub const OAUTH_VERIFIER: &str = "oauth_verifier";
/// `oauth_version`
pub const OAUTH_VERSION: &str = "oauth_version";

/// Protocol version advertised on every request.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Insertion-ordered protocol parameters whose names and values are stored percent-encoded.
///
/// Header order follows insertion order; the base string re-sorts independently, so the order
/// here only affects how the header reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthParams(Vec<(String, String)>);
impl OAuthParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Encodes `value` and stores it under `name`, replacing an existing entry in place.
	pub fn insert(&mut self, name: &str, value: &str) {
		self.insert_encoded(name, encode(value));
	}

	/// Stores an already-encoded `value` under `name`, replacing an existing entry in place.
	pub fn insert_encoded(&mut self, name: &str, value: impl Into<String>) {
		let name = encode(name);
		let value = value.into();

		match self.0.iter_mut().find(|(existing, _)| *existing == name) {
			Some(slot) => slot.1 = value,
			None => self.0.push((name, value)),
		}
	}

	/// Returns the encoded value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(existing, _)| existing == name).map(|(_, value)| value.as_str())
	}

	/// Returns `true` when `name` is present.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Iterates encoded `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of stored parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameter has been stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Renders the `Authorization` header value: `OAuth name="value", ...`.
	pub fn to_header(&self) -> String {
		let fields =
			self.iter().map(|(name, value)| format!("{name}=\"{value}\"")).collect::<Vec<_>>();

		format!("OAuth {}", fields.join(", "))
	}
}
impl Display for OAuthParams {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.to_header())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn insert_replaces_in_place_and_keeps_order() {
		let mut params = OAuthParams::new();

		params.insert(OAUTH_VERSION, PROTOCOL_VERSION);
		params.insert(OAUTH_CONSUMER_KEY, "first");
		params.insert(OAUTH_NONCE, "n");
		params.insert(OAUTH_CONSUMER_KEY, "second");

		assert_eq!(params.len(), 3);
		assert_eq!(
			params.iter().collect::<Vec<_>>(),
			[(OAUTH_VERSION, "1.0"), (OAUTH_CONSUMER_KEY, "second"), (OAUTH_NONCE, "n")],
		);
	}

	#[test]
	fn header_renders_encoded_values() {
		let mut params = OAuthParams::new();

		params.insert(OAUTH_CALLBACK, "https://app.test/cb?a=1");
		params.insert_encoded(OAUTH_SIGNATURE, "abc%3D");

		assert_eq!(
			params.to_header(),
			"OAuth oauth_callback=\"https%3A%2F%2Fapp.test%2Fcb%3Fa%3D1\", oauth_signature=\"abc%3D\"",
		);
		assert_eq!(params.get(OAUTH_SIGNATURE), Some("abc%3D"));
		assert!(!params.contains(OAUTH_TOKEN));
	}
}
