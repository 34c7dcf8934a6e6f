//! Signature base string construction (RFC 5849 section 3.4.1).

// crates.io
use url::form_urlencoded;
// self
use crate::signing::{OAUTH_SIGNATURE, OAuthParams, encode, encode_pair};

/// Builds the signature base string for a request.
///
/// `explicit` holds the protocol parameters and `extra` the form-body parameters, both already
/// percent-encoded. Any query string on `url` is split off, decoded, re-encoded, and merged in.
/// When a name exists in `explicit`, same-named query/body pairs are dropped so the protocol
/// value wins and the name is signed once.
pub fn build_base_string(
	method: &str,
	url: &str,
	explicit: &OAuthParams,
	extra: &[(String, String)],
) -> String {
	let (base_url, query) = split_url(url);
	let query_pairs = query.map(parse_query).unwrap_or_default();
	let normalized = normalize_parameters(explicit, extra.iter().chain(query_pairs.iter()));

	format!("{}&{}&{}", encode(&method.to_uppercase()), encode(base_url), encode(&normalized))
}

/// Sorts and joins the merged parameters into `name=value&name=value` form.
///
/// Pairs are ordered by name and then by value, comparing bytes. `oauth_signature` never
/// takes part in its own input.
pub fn normalize_parameters<'a, I>(explicit: &'a OAuthParams, others: I) -> String
where
	I: IntoIterator<Item = &'a (String, String)>,
{
	let mut pairs = explicit.iter().collect::<Vec<_>>();

	pairs.extend(
		others
			.into_iter()
			.filter(|(name, _)| !explicit.contains(name))
			.map(|(name, value)| (name.as_str(), value.as_str())),
	);
	pairs.retain(|(name, _)| *name != OAUTH_SIGNATURE);
	pairs.sort_unstable();

	pairs.iter().map(|(name, value)| format!("{name}={value}")).collect::<Vec<_>>().join("&")
}

fn split_url(url: &str) -> (&str, Option<&str>) {
	let url = url.split_once('#').map_or(url, |(head, _)| head);

	match url.split_once('?') {
		Some((base, query)) => (base, Some(query)),
		None => (url, None),
	}
}

fn parse_query(query: &str) -> Vec<(String, String)> {
	form_urlencoded::parse(query.as_bytes()).map(|(name, value)| encode_pair(&name, &value)).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::signing::{
		OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE_METHOD, OAUTH_TIMESTAMP, OAUTH_TOKEN,
		OAUTH_VERSION,
	};

	fn appendix_params() -> OAuthParams {
		let mut params = OAuthParams::new();

		params.insert(OAUTH_VERSION, "1.0");
		params.insert(OAUTH_TOKEN, "nnch734d00sl2jdk");
		params.insert(OAUTH_TIMESTAMP, "1191242096");
		params.insert(OAUTH_SIGNATURE_METHOD, "HMAC-SHA1");
		params.insert(OAUTH_NONCE, "kllo9940pd9333jh");
		params.insert(OAUTH_CONSUMER_KEY, "dpf43f3p2l4k3l03");

		params
	}

	#[test]
	fn reproduces_the_oauth_core_appendix_base_string() {
		let base = build_base_string(
			"get",
			"http://photos.example.net/photos?size=original&file=vacation.jpg",
			&appendix_params(),
			&[],
		);

		assert_eq!(
			base,
			"GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal",
		);
	}

	#[test]
	fn ordering_does_not_depend_on_input_order() {
		let forward = vec![("b".to_owned(), "2".to_owned()), ("a".to_owned(), "1".to_owned())];
		let backward = forward.iter().rev().cloned().collect::<Vec<_>>();
		let params = appendix_params();
		let first = build_base_string("POST", "https://api.test/x?z=26&c=3", &params, &forward);
		let second = build_base_string("POST", "https://api.test/x?c=3&z=26", &params, &backward);

		assert_eq!(first, second);

		let normalized = normalize_parameters(&params, forward.iter());
		let names = normalized
			.split('&')
			.map(|pair| pair.split_once('=').map_or(pair, |(name, _)| name))
			.collect::<Vec<_>>();

		assert!(names.windows(2).all(|w| w[0] < w[1]), "names must be strictly ascending: {names:?}");
	}

	#[test]
	fn repeated_names_sort_by_value() {
		let params = OAuthParams::new();
		let normalized = normalize_parameters(
			&params,
			[("a".to_owned(), "3".to_owned()), ("a".to_owned(), "1".to_owned())].iter(),
		);

		assert_eq!(normalized, "a=1&a=3");
	}

	#[test]
	fn explicit_parameters_win_collisions() {
		let mut params = OAuthParams::new();

		params.insert(OAUTH_TOKEN, "explicit");

		let body = vec![(OAUTH_TOKEN.to_owned(), "from-body".to_owned())];
		let base = build_base_string("GET", "https://api.test/r?oauth_token=from-query", &params, &body);

		assert_eq!(base, "GET&https%3A%2F%2Fapi.test%2Fr&oauth_token%3Dexplicit");
	}

	#[test]
	fn query_values_are_decoded_then_reencoded() {
		let params = OAuthParams::new();
		let base = build_base_string("GET", "https://api.test/r?q=a+b%21&x=*#frag", &params, &[]);

		assert_eq!(base, "GET&https%3A%2F%2Fapi.test%2Fr&q%3Da%2520b%2521%26x%3D%252A");
	}

	#[test]
	fn signature_is_excluded_from_its_own_input() {
		let mut params = OAuthParams::new();

		params.insert(OAUTH_NONCE, "n");
		params.insert_encoded(OAUTH_SIGNATURE, "sig");

		assert_eq!(normalize_parameters(&params, []), "oauth_nonce=n");
	}
}
