//! The [`OAuthClient`] facade: immutable consumer configuration plus a transport.

// crates.io
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::Token,
	config::ClientConfig,
	error::ConfigError,
	flows::{self, TokenExchange},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	signing::{
		Clock, NonceSource, RandomNonce, RequestSigner, SignedRequest, SigningContext, SystemClock,
	},
	transport::{HttpRequest, HttpResponse, OAuthHttpClient},
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestHttpClient;

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOAuthClient = OAuthClient<ReqwestHttpClient>;

/// Signs requests and drives the OAuth 1.0a handshake against one API host.
///
/// The client holds only immutable state: the validated [`ClientConfig`], the transport, and
/// the nonce/clock sources. Cloning is cheap and every operation is independent, so one client
/// can serve any number of concurrent signings and exchanges.
pub struct OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	config: Arc<ClientConfig>,
	nonce_source: Arc<dyn NonceSource>,
	clock: Arc<dyn Clock>,
}
impl<C> OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			config: Arc::new(config),
			nonce_source: Arc::new(RandomNonce),
			clock: Arc::new(SystemClock),
		}
	}

	/// Replaces the nonce source (tests pin it to reproduce signatures).
	pub fn with_nonce_source(mut self, source: impl 'static + NonceSource) -> Self {
		self.nonce_source = Arc::new(source);

		self
	}

	/// Replaces the timestamp source.
	pub fn with_clock(mut self, clock: impl 'static + Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Validated configuration backing this client.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Normalized API host, port included when non-default.
	pub fn host(&self) -> &str {
		self.config.endpoint.host()
	}

	/// Returns `true` when requests go over HTTPS.
	pub fn is_secure(&self) -> bool {
		self.config.endpoint.is_secure()
	}

	/// Returns a signer bound to this client's configuration and sources.
	pub fn signer(&self) -> RequestSigner<'_> {
		RequestSigner::new(&self.config, self.nonce_source.as_ref(), self.clock.as_ref())
	}

	/// Signs `ctx` and returns the `Authorization` header with the final parameter set.
	pub fn sign(&self, ctx: &SigningContext) -> Result<SignedRequest> {
		self.signer().build_authorization_header(ctx)
	}

	/// Builds the signed HTTP request described by `ctx` without sending it.
	///
	/// Form fields become an `application/x-www-form-urlencoded` body. Body-less requests carry
	/// `Content-Length: 0`, which some providers insist on for POSTs.
	pub fn prepare(&self, ctx: &SigningContext) -> Result<HttpRequest> {
		let signed = self.sign(ctx)?;
		let authorization =
			HeaderValue::from_str(&signed.authorization).map_err(ConfigError::from)?;
		let mut builder = http::Request::builder()
			.method(ctx.method.clone())
			.uri(signed.url.as_str())
			.header(AUTHORIZATION, authorization);
		let body = if ctx.form.is_empty() {
			builder = builder.header(CONTENT_LENGTH, "0");

			Vec::new()
		} else {
			builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);

			form_urlencoded::Serializer::new(String::new())
				.extend_pairs(ctx.form.iter())
				.finish()
				.into_bytes()
		};

		Ok(builder.body(body).map_err(ConfigError::from)?)
	}

	/// Signs and sends an arbitrary API request, returning the provider's response as-is.
	pub async fn send(&self, ctx: SigningContext) -> Result<HttpResponse> {
		const KIND: FlowKind = FlowKind::SignedRequest;

		let span = FlowSpan::new(KIND, "send");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.dispatch(&ctx)).await;

		obs::record_flow_result(KIND, &result);

		result
	}

	/// Builds the URL the end user visits to authorize `token`.
	///
	/// `path` is the provider's authorization endpoint on the API host and may carry its own
	/// query parameters; `oauth_token` is appended.
	pub fn authorization_url(&self, path: &str, token: &Token) -> Result<Url> {
		let raw = self.config.endpoint.url_for(path)?;
		let endpoint = Url::parse(&raw).map_err(|source| ConfigError::InvalidApiUrl { source })?;

		Ok(flows::authorization_url(&endpoint, token))
	}

	/// Starts a stateful three-legged handshake on this client.
	pub fn exchange(&self) -> TokenExchange<'_, C> {
		TokenExchange::new(self)
	}

	pub(crate) async fn dispatch(&self, ctx: &SigningContext) -> Result<HttpResponse> {
		let request = self.prepare(ctx)?;

		self.http_client.execute(request).await.map_err(|err| self.http_client.map_transport_error(err))
	}
}
#[cfg(feature = "reqwest")]
impl OAuthClient<ReqwestHttpClient> {
	/// Creates a new client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Clone for OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			config: self.config.clone(),
			nonce_source: self.nonce_source.clone(),
			clock: self.clock.clone(),
		}
	}
}
impl<C> Debug for OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthClient")
			.field("consumer_key", &self.config.consumer_key)
			.field("host", &self.host())
			.field("secure", &self.is_secure())
			.field("signature_method", &self.config.signature_method)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::Mutex;
	// crates.io
	use http::{Method, StatusCode};
	// self
	use super::*;
	use crate::{
		error::TransportError,
		signing::{FixedClock, FixedNonce},
		transport::HttpFuture,
	};

	#[derive(Debug, ThisError)]
	#[error("Unreachable.")]
	struct Unreachable;

	#[derive(Default)]
	struct RecordingClient {
		requests: Mutex<Vec<HttpRequest>>,
	}
	impl OAuthHttpClient for RecordingClient {
		type TransportError = Unreachable;

		fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
			self.requests.lock().expect("Recording lock should not be poisoned.").push(request);

			Box::pin(async {
				let mut response = HttpResponse::new(b"ok".to_vec());

				*response.status_mut() = StatusCode::OK;

				Ok(response)
			})
		}
	}

	struct OfflineClient;
	impl OAuthHttpClient for OfflineClient {
		type TransportError = Unreachable;

		fn execute(&self, _request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
			Box::pin(async { Err(Unreachable) })
		}
	}

	fn config() -> ClientConfig {
		ClientConfig::builder("consumer", "consumer-secret")
			.api_url("https://API.Example.com:8443")
			.build()
			.expect("Client configuration fixture should build.")
	}

	#[test]
	fn prepare_sets_headers_and_form_body() {
		let client = OAuthClient::with_http_client(config(), RecordingClient::default())
			.with_nonce_source(FixedNonce::new("nonce"))
			.with_clock(FixedClock::at(1_700_000_000));
		let ctx = SigningContext::new(Method::POST, "/statuses?x=1")
			.with_token(Token::new("access", "access-secret"))
			.with_form_param("status", "hi there*");
		let request = client.prepare(&ctx).expect("Request should build.");
		let authorization = request
			.headers()
			.get(AUTHORIZATION)
			.and_then(|value| value.to_str().ok())
			.expect("Authorization header should be present.");

		assert_eq!(request.method(), Method::POST);
		assert_eq!(request.uri(), "https://api.example.com:8443/statuses?x=1");
		assert!(authorization.starts_with("OAuth oauth_version=\"1.0\", oauth_consumer_key=\"consumer\""));
		assert!(authorization.contains("oauth_token=\"access\""));
		assert_eq!(request.headers().get(CONTENT_TYPE).map(HeaderValue::as_bytes), Some(FORM_CONTENT_TYPE.as_bytes()));
		assert_eq!(request.body().as_slice(), b"status=hi+there*");
	}

	#[test]
	fn bodyless_requests_declare_zero_length() {
		let client = OAuthClient::with_http_client(config(), RecordingClient::default());
		let request = client
			.prepare(&SigningContext::new(Method::POST, "/oauth/request_token"))
			.expect("Request should build.");

		assert_eq!(request.headers().get(CONTENT_LENGTH).map(HeaderValue::as_bytes), Some(&b"0"[..]));
		assert!(request.body().is_empty());
	}

	#[tokio::test]
	async fn send_dispatches_through_the_transport() {
		let transport = Arc::new(RecordingClient::default());
		let client = OAuthClient::<RecordingClient>::with_http_client(config(), transport.clone());
		let response = client
			.send(SigningContext::new(Method::GET, "/account"))
			.await
			.expect("Recording transport should answer.");

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(transport.requests.lock().expect("Recording lock should not be poisoned.").len(), 1);
	}

	#[tokio::test]
	async fn transport_failures_surface_as_transport_errors() {
		let client = OAuthClient::with_http_client(config(), OfflineClient);
		let err = client
			.send(SigningContext::new(Method::GET, "/account"))
			.await
			.expect_err("Offline transport should fail.");

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}

	#[test]
	fn authorization_url_carries_the_request_token() {
		let client = OAuthClient::with_http_client(config(), OfflineClient);
		let url = client
			.authorization_url("/oauth/authorize?force_login=true", &Token::new("req token", "s"))
			.expect("Authorization URL should build.");

		assert_eq!(url.as_str(), "https://api.example.com:8443/oauth/authorize?force_login=true&oauth_token=req+token");
	}

	#[test]
	fn clones_share_configuration_and_debug_hides_secrets() {
		let client = OAuthClient::with_http_client(config(), OfflineClient);
		let clone = client.clone();

		assert_eq!(clone.host(), "api.example.com:8443");
		assert!(clone.is_secure());
		assert!(!format!("{client:?}").contains("consumer-secret"));
	}
}
