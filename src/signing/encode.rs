//! Percent-encoding with the OAuth reserved-character set.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except `ALPHA / DIGIT / "-" / "." / "_" / "~"` is escaped.
///
/// Generic URL encoders leave `* ! ' ( )` alone; OAuth does not.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `value` for use in a base string, signing key, or `Authorization` header.
pub fn encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Encodes both halves of a decoded name/value pair.
pub fn encode_pair(name: &str, value: &str) -> (String, String) {
	(encode(name), encode(value))
}
