//! Transport primitives for signed OAuth requests.
//!
//! The client's only dependency on an HTTP stack is [`OAuthHttpClient`], which executes a fully
//! built [`HttpRequest`] and hands back the raw [`HttpResponse`]. Signing happens before the
//! transport sees the request, so implementations never touch credentials beyond forwarding the
//! `Authorization` header.

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Request type handed to transports.
pub type HttpRequest = http::Request<Vec<u8>>;
/// Response type returned by transports.
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed future returned by [`OAuthHttpClient::execute`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing signed OAuth requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can back many
/// concurrent operations, and the futures they return must be `Send` so callers can spawn the
/// client's futures onto multi-threaded executors.
pub trait OAuthHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the provider's response, whatever its status.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;

	/// Converts a transport failure into a client [`Error`].
	///
	/// The default treats everything as a retriable network failure.
	fn map_transport_error(&self, error: Self::TransportError) -> Error {
		TransportError::network(error).into()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token endpoints answer directly, so clients built with [`ReqwestHttpClient::without_redirects`]
/// surface a provider's redirect as a non-200 response instead of following it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that never follows redirects.
	pub fn without_redirects() -> Result<Self, ConfigError> {
		let client =
			ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl OAuthHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(reqwest::Request::try_from(request)?).await?;
			let status = response.status();
			let version = response.version();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.version_mut() = version;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}

	fn map_transport_error(&self, error: Self::TransportError) -> Error {
		if error.is_builder() {
			return ConfigError::from(error).into();
		}

		TransportError::from(error).into()
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
