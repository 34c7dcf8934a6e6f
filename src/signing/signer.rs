//! Protocol parameter assembly and `Authorization` header rendering.

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	auth::Token,
	config::ClientConfig,
	signing::{
		Clock, NonceSource, OAUTH_CALLBACK, OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE,
		OAUTH_SIGNATURE_METHOD, OAUTH_TIMESTAMP, OAUTH_TOKEN, OAUTH_VERIFIER, OAUTH_VERSION,
		OAuthParams, PROTOCOL_VERSION, encode_pair, signature,
	},
};

/// Per-request inputs to the signer.
///
/// Form parameters are stored decoded; the signer encodes them for the base string and the
/// transport serializes them as the request body. They never reach the header.
#[derive(Clone, Debug)]
pub struct SigningContext {
	/// HTTP method of the outgoing request.
	pub method: Method,
	/// Absolute path on the API host, optionally followed by a query string.
	pub path: String,
	/// Callback URL announced during the request-token step.
	pub callback: Option<String>,
	/// Token whose secret keys the signature and whose value is sent as `oauth_token`.
	pub token: Option<Token>,
	/// Decoded `application/x-www-form-urlencoded` body fields.
	pub form: Vec<(String, String)>,
}
impl SigningContext {
	/// Creates a context for `method` + `path` with no token, callback, or body.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), callback: None, token: None, form: Vec::new() }
	}

	/// Sets the callback URL sent as `oauth_callback`; an empty value is never sent.
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = Some(callback.into());

		self
	}

	/// Attaches the token used for `oauth_token`, `oauth_verifier`, and the signing key.
	pub fn with_token(mut self, token: Token) -> Self {
		self.token = Some(token);

		self
	}

	/// Appends decoded form fields to the request body.
	pub fn with_form<I, K, V>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.form.extend(fields.into_iter().map(|(name, value)| (name.into(), value.into())));

		self
	}

	/// Appends a single decoded form field.
	pub fn with_form_param(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.with_form([(name.into(), value.into())])
	}
}

/// Output of [`RequestSigner::build_authorization_header`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
	/// Value for the `Authorization` header.
	pub authorization: String,
	/// Final protocol parameters, `oauth_signature` included, values percent-encoded.
	pub params: OAuthParams,
	/// Absolute URL (query included) the signature covers.
	pub url: String,
}
impl SignedRequest {
	/// Percent-encoded `oauth_signature` value.
	pub fn signature(&self) -> Option<&str> {
		self.params.get(OAUTH_SIGNATURE)
	}

	/// Percent-encoded `oauth_nonce` value.
	pub fn nonce(&self) -> Option<&str> {
		self.params.get(OAUTH_NONCE)
	}
}

/// Signs requests for one client configuration. Performs no I/O.
#[derive(Clone, Copy)]
pub struct RequestSigner<'a> {
	config: &'a ClientConfig,
	nonce_source: &'a dyn NonceSource,
	clock: &'a dyn Clock,
}
impl<'a> RequestSigner<'a> {
	/// Borrows the configuration and sources used to sign requests.
	pub fn new(
		config: &'a ClientConfig,
		nonce_source: &'a dyn NonceSource,
		clock: &'a dyn Clock,
	) -> Self {
		Self { config, nonce_source, clock }
	}

	/// Builds the protocol parameters for `ctx`, signs them, and renders the header.
	pub fn build_authorization_header(&self, ctx: &SigningContext) -> Result<SignedRequest> {
		let url = self.config.endpoint.url_for(&ctx.path)?;
		let mut params = OAuthParams::new();

		params.insert(OAUTH_VERSION, PROTOCOL_VERSION);
		params.insert(OAUTH_CONSUMER_KEY, &self.config.consumer_key);
		params.insert(OAUTH_SIGNATURE_METHOD, self.config.signature_method.as_str());
		params.insert(OAUTH_TIMESTAMP, &self.clock.timestamp().to_string());
		params.insert(OAUTH_NONCE, &self.nonce_source.nonce());

		if let Some(callback) = ctx.callback.as_deref().filter(|callback| !callback.is_empty()) {
			params.insert(OAUTH_CALLBACK, callback);
		}
		if let Some(token) = ctx.token.as_ref() {
			if let Some(verifier) = token.verifier.as_deref() {
				params.insert(OAUTH_VERIFIER, verifier);
			}
			if !token.token.is_empty() {
				params.insert(OAUTH_TOKEN, &token.token);
			}
		}

		let body = ctx.form.iter().map(|(name, value)| encode_pair(name, value)).collect::<Vec<_>>();
		let token_secret = ctx.token.as_ref().map(|token| token.secret.expose());
		let signature = signature::sign(
			ctx.method.as_str(),
			&url,
			&params,
			&body,
			self.config,
			token_secret,
		);

		params.insert(OAUTH_SIGNATURE, &signature);

		Ok(SignedRequest { authorization: params.to_header(), params, url })
	}
}
impl Debug for RequestSigner<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestSigner").field("config", self.config).finish_non_exhaustive()
	}
}
