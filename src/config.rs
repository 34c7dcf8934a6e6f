//! Validated client configuration: consumer credentials, API endpoint, and signature method.
//!
//! Everything is checked when the configuration is built, so an [`OAuthClient`] can never hold
//! an unsupported signature method or an unusable host.
//!
//! [`OAuthClient`]: crate::client::OAuthClient

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError, signing::SignatureMethod};

/// Scheme, normalized host, and port of the API every request targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint {
	host: String,
	secure: bool,
}
impl ApiEndpoint {
	const HTTPS_PORT: u16 = 443;
	const HTTP_PORT: u16 = 80;

	/// Parses an API URL such as `https://api.example.com` or `http://localhost:8080`.
	///
	/// The host is lowercased and a port is kept only when it differs from the scheme's default.
	/// Any path or query on the URL is ignored; request paths are supplied per call.
	pub fn parse(api_url: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(api_url).map_err(|source| ConfigError::InvalidApiUrl { source })?;
		let secure = match url.scheme() {
			"https" => true,
			"http" => false,
			other => return Err(ConfigError::UnsupportedScheme { scheme: other.to_owned() }),
		};
		let host = url
			.host_str()
			.filter(|host| !host.is_empty())
			.ok_or(ConfigError::MissingHost)?
			.to_ascii_lowercase();
		let default_port = if secure { Self::HTTPS_PORT } else { Self::HTTP_PORT };
		let host = match url.port() {
			Some(port) if port != default_port => format!("{host}:{port}"),
			_ => host,
		};

		Ok(Self { host, secure })
	}

	/// Lowercased host, with `:port` when the port is not the scheme's default.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Returns `true` for `https` endpoints.
	pub fn is_secure(&self) -> bool {
		self.secure
	}

	/// `https` or `http`.
	pub fn scheme(&self) -> &'static str {
		if self.secure { "https" } else { "http" }
	}

	/// Joins `path` (which must start with `/` and may carry a query) onto the endpoint.
	pub fn url_for(&self, path: &str) -> Result<String, ConfigError> {
		if !path.starts_with('/') {
			return Err(ConfigError::InvalidPath { path: path.to_owned() });
		}

		Ok(format!("{}://{}{path}", self.scheme(), self.host))
	}
}

/// Immutable settings shared by every request a client signs.
///
/// Deserializes from `{ consumer_key, consumer_secret, api_url, signature_method? }` and runs
/// the same validation as [`ClientConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Consumer key identifying the application.
	pub consumer_key: String,
	/// Consumer secret; first half of every signing key.
	pub consumer_secret: Secret,
	/// API the client talks to.
	pub endpoint: ApiEndpoint,
	/// Signature method advertised and used for every request.
	pub signature_method: SignatureMethod,
}
impl ClientConfig {
	/// Starts a builder for the provided consumer credentials.
	pub fn builder(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<Secret>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder::new(consumer_key, consumer_secret)
	}
}
impl<'de> Deserialize<'de> for ClientConfig {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let raw = RawClientConfig::deserialize(deserializer)?;
		let mut builder =
			ClientConfig::builder(raw.consumer_key, raw.consumer_secret).api_url(raw.api_url);

		if let Some(method) = raw.signature_method {
			builder = builder.signature_method(method);
		}

		builder.build().map_err(serde::de::Error::custom)
	}
}

#[derive(Deserialize)]
struct RawClientConfig {
	consumer_key: String,
	consumer_secret: Secret,
	api_url: String,
	#[serde(default)]
	signature_method: Option<String>,
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Consumer key identifying the application.
	pub consumer_key: String,
	/// Consumer secret.
	pub consumer_secret: Secret,
	/// API URL; required.
	pub api_url: Option<String>,
	/// Signature method identifier; defaults to `HMAC-SHA1`.
	pub signature_method: Option<String>,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the consumer credentials.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			api_url: None,
			signature_method: None,
		}
	}

	/// Sets the API URL whose scheme decides transport security.
	pub fn api_url(mut self, url: impl Into<String>) -> Self {
		self.api_url = Some(url.into());

		self
	}

	/// Overrides the signature method identifier.
	pub fn signature_method(mut self, method: impl Into<String>) -> Self {
		self.signature_method = Some(method.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	///
	/// The signature method is checked first so an unsupported algorithm is reported even
	/// when other fields are also wrong.
	pub fn build(self) -> Result<ClientConfig> {
		let signature_method = match self.signature_method.as_deref() {
			Some(method) => method.parse::<SignatureMethod>()?,
			None => SignatureMethod::default(),
		};
		let api_url = self.api_url.ok_or(ConfigError::MissingApiUrl)?;
		let endpoint = ApiEndpoint::parse(&api_url)?;

		Ok(ClientConfig {
			consumer_key: self.consumer_key,
			consumer_secret: self.consumer_secret,
			endpoint,
			signature_method,
		})
	}
}
