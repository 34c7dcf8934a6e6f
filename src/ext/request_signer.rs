//! Attaching an OAuth `Authorization` header to requests the caller already built.

// crates.io
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::Token,
	client::{FORM_CONTENT_TYPE, OAuthClient},
	error::ConfigError,
	signing::SigningContext,
	transport::{HttpRequest, OAuthHttpClient},
};

/// Describes how to sign an outbound request with an optional [`Token`] without constraining
/// the HTTP client type.
pub trait RequestSignerExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes the request and returns it with an `Authorization` header attached.
	fn attach_token(&self, request: Request, token: Option<&Token>) -> Result<Request, Error>;
}

/// Signs `http::Request<Vec<u8>>` values against the client's configured host.
///
/// Method, path, and query come from the request; its authority is not consulted. A
/// form-encoded body is folded into the signature and left untouched.
impl<C> RequestSignerExt<HttpRequest, Error> for OAuthClient<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn attach_token(&self, mut request: HttpRequest, token: Option<&Token>) -> Result<HttpRequest> {
		let path = request.uri().path_and_query().map_or("/", |pq| pq.as_str());
		let mut ctx = SigningContext::new(request.method().clone(), path);

		if let Some(token) = token {
			ctx = ctx.with_token(token.clone());
		}
		if is_form(&request) {
			ctx = ctx.with_form(form_urlencoded::parse(request.body()).into_owned());
		}

		let signed = self.sign(&ctx)?;
		let authorization =
			HeaderValue::from_str(&signed.authorization).map_err(ConfigError::from)?;

		request.headers_mut().insert(AUTHORIZATION, authorization);

		Ok(request)
	}
}

fn is_form(request: &HttpRequest) -> bool {
	request
		.headers()
		.get(CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(';').next())
		.is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}
