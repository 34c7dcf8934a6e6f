//! Runs the three-legged handshake against a real provider.
//!
//! Reads `OAUTH1_CONSUMER_KEY`, `OAUTH1_CONSUMER_SECRET`, and `OAUTH1_API_URL` (for example
//! `https://api.twitter.com`), prints the authorization URL, then waits for the PIN shown by
//! the provider in out-of-band mode.

// std
use std::{env, io};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use oauth1_client::{
	client::OAuthClient,
	config::ClientConfig,
	http::Method,
	signing::SigningContext,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::builder(
		env::var("OAUTH1_CONSUMER_KEY").wrap_err("OAUTH1_CONSUMER_KEY is not set")?,
		env::var("OAUTH1_CONSUMER_SECRET").wrap_err("OAUTH1_CONSUMER_SECRET is not set")?,
	)
	.api_url(env::var("OAUTH1_API_URL").wrap_err("OAUTH1_API_URL is not set")?)
	.build()?;
	let client = OAuthClient::new(config);
	let mut exchange = client.exchange();
	let request_token = exchange.fetch_request_token("/oauth/request_token", None).await?;

	println!("Authorize at {}.", client.authorization_url("/oauth/authorize", &request_token)?);
	println!("Enter the PIN:");

	let mut pin = String::new();

	io::stdin().read_line(&mut pin)?;

	let authorized = request_token.with_verifier(pin.trim());
	let access = exchange.fetch_access_token("/oauth/access_token", &authorized).await?;

	println!("Access token {} obtained ({}).", access.token, exchange.state());

	let response = client
		.send(
			SigningContext::new(Method::GET, "/1.1/account/verify_credentials.json")
				.with_token(access),
		)
		.await?;

	println!("verify_credentials answered HTTP {}.", response.status());

	Ok(())
}
