//! Signs the well-known status update request offline and prints the resulting header.

// crates.io
use color_eyre::Result;
// self
use oauth1_client::{
	auth::Token,
	client::OAuthClient,
	config::ClientConfig,
	http::Method,
	signing::{FixedClock, FixedNonce, SigningContext},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::builder(
		"xvz1evFS4wEEPTGEFPHBog",
		"kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
	)
	.api_url("https://api.twitter.com")
	.build()?;
	let client = OAuthClient::new(config)
		.with_nonce_source(FixedNonce::new("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"))
		.with_clock(FixedClock::at(1_318_622_958));
	let token = Token::new(
		"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
		"LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
	);
	let ctx = SigningContext::new(Method::POST, "/1.1/statuses/update.json?include_entities=true")
		.with_token(token)
		.with_form_param("status", "Hello Ladies + Gentlemen, a signed OAuth request!");
	let signed = client.sign(&ctx)?;

	println!("POST {}", signed.url);
	println!("Authorization: {}", signed.authorization);
	println!("Signature: {}.", signed.signature().unwrap_or_default());

	Ok(())
}
