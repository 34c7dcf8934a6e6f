//! Client-level error types shared across signing, transports, and token exchanges.

// self
use crate::{_prelude::*, flows::HandshakeState};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS); safe for the caller to retry.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The configured signature method is not implemented.
	#[error("Signature method `{method}` is not supported.")]
	UnsupportedAlgorithm {
		/// Identifier that was requested.
		method: String,
	},
	/// Provider answered in a way the OAuth 1.0a handshake does not allow.
	#[error("Provider violated the OAuth 1.0a protocol: {reason}.")]
	ProtocolViolation {
		/// Human-readable description of the violation.
		reason: String,
		/// HTTP status code returned by the provider, when available.
		status: Option<u16>,
		/// Raw response body kept for diagnostics.
		body: String,
	},
	/// Provider response could not be decoded into token fields.
	#[error("Provider returned a malformed response: {reason}.")]
	MalformedResponse {
		/// Description of the decoding failure.
		reason: String,
		/// Raw response body kept for diagnostics.
		body: String,
	},
	/// A token exchange was driven past one of its terminal states.
	#[error("Cannot run {operation} while the handshake is {state}.")]
	InvalidState {
		/// Handshake state at the time of the call.
		state: HandshakeState,
		/// Operation that was attempted.
		operation: &'static str,
	},
}

/// Configuration and validation failures raised before any request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The client configuration never received an API URL.
	#[error("Missing API URL.")]
	MissingApiUrl,
	/// API URL cannot be parsed.
	#[error("API URL is invalid.")]
	InvalidApiUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// API URL uses a scheme other than `http` or `https`.
	#[error("API URL scheme `{scheme}` is not supported.")]
	UnsupportedScheme {
		/// Scheme found in the URL.
		scheme: String,
	},
	/// API URL has no host component.
	#[error("API URL is missing a host.")]
	MissingHost,
	/// Request path does not start with `/`.
	#[error("Request path `{path}` must start with `/`.")]
	InvalidPath {
		/// Offending path.
		path: String,
	},
	/// Access token exchange needs the verifier returned by the provider's callback.
	#[error("Token is missing the oauth_verifier required for the access token exchange.")]
	MissingVerifier,
	/// Callback redirect carried a different token than the one being authorized.
	#[error("Callback token does not match the pending request token.")]
	CallbackTokenMismatch,
	/// Callback redirect did not include a required parameter.
	#[error("Callback is missing the `{param}` parameter.")]
	MissingCallbackParam {
		/// Name of the missing query parameter.
		param: &'static str,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// A header value contained bytes that HTTP does not allow.
	#[error(transparent)]
	InvalidHeader(#[from] http::header::InvalidHeaderValue),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

impl Error {
	/// Returns the raw provider response body attached to network-path errors.
	pub fn response_body(&self) -> Option<&str> {
		match self {
			Self::ProtocolViolation { body, .. } | Self::MalformedResponse { body, .. } =>
				Some(body),
			_ => None,
		}
	}

	/// Returns `true` when retrying the same operation later may succeed.
	pub fn is_retriable(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}
