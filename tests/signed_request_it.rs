// crates.io
use httpmock::prelude::*;
// self
use oauth1_client::{
	_preludet::*,
	auth::Token,
	client::ReqwestOAuthClient,
	ext::RequestSignerExt,
	http::{self, Method, header::CONTENT_TYPE},
	signing::SigningContext,
	transport::OAuthHttpClient,
	url::form_urlencoded,
};

const CONSUMER_KEY: &str = "xvz1evFS4wEEPTGEFPHBog";
const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
const STATUS: &str = "Hello Ladies + Gentlemen, a signed OAuth request!";

fn build_client(server: &MockServer) -> ReqwestOAuthClient {
	build_deterministic_test_client(
		&server.base_url(),
		CONSUMER_KEY,
		CONSUMER_SECRET,
		"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
		1_318_622_958,
	)
}

fn access_token() -> Token {
	Token::new(
		"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
		"LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
	)
}

fn status_context() -> SigningContext {
	SigningContext::new(Method::POST, "/1.1/statuses/update.json?include_entities=true")
		.with_token(access_token())
		.with_form_param("status", STATUS)
}

#[tokio::test]
async fn send_posts_form_body_with_matching_header() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let authorization =
		client.sign(&status_context()).expect("Signing should succeed.").authorization;
	let body = form_urlencoded::Serializer::new(String::new()).append_pair("status", STATUS).finish();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/1.1/statuses/update.json")
				.query_param("include_entities", "true")
				.header("content-type", "application/x-www-form-urlencoded")
				.header("authorization", authorization.as_str())
				.body(body.as_str());
			then.status(200).body("{\"id\":1}");
		})
		.await;
	let response = client.send(status_context()).await.expect("Signed request should be sent.");

	assert_eq!(response.status(), 200);
	assert_eq!(response.body().as_slice(), b"{\"id\":1}");

	mock.assert_async().await;
}

#[tokio::test]
async fn send_returns_error_statuses_untouched() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);

	server
		.mock_async(|when, then| {
			when.method(GET).path("/1/account/verify_credentials.json");
			then.status(401).body("{\"errors\":[]}");
		})
		.await;

	let response = client
		.send(SigningContext::new(Method::GET, "/1/account/verify_credentials.json").with_token(access_token()))
		.await
		.expect("Non-200 answers are not transport failures.");

	assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn attached_header_is_accepted_by_the_transport() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let expected =
		client.sign(&status_context()).expect("Signing should succeed.").authorization;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/1.1/statuses/update.json")
				.header("authorization", expected.as_str());
			then.status(200);
		})
		.await;
	let body = form_urlencoded::Serializer::new(String::new()).append_pair("status", STATUS).finish();
	let request = http::Request::builder()
		.method(Method::POST)
		.uri(server.url("/1.1/statuses/update.json?include_entities=true"))
		.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(body.into_bytes())
		.expect("Request should build.");
	let request = client
		.attach_token(request, Some(&access_token()))
		.expect("Token should attach to the prebuilt request.");
	let response =
		client.http_client.execute(request).await.expect("Transport should deliver the request.");

	assert_eq!(response.status(), 200);

	mock.assert_async().await;
}
