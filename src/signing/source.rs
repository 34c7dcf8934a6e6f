//! Injectable nonce and clock sources.
//!
//! Production clients use [`RandomNonce`] and [`SystemClock`]. Tests and signature fixtures
//! swap in [`FixedNonce`] and [`FixedClock`] (or any closure) to reproduce exact signatures.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

const NONCE_LEN: usize = 32;

/// Produces the `oauth_nonce` value for each signed request.
pub trait NonceSource: Send + Sync {
	/// Returns a fresh nonce; must differ between calls in production sources.
	fn nonce(&self) -> String;
}
impl<F> NonceSource for F
where
	F: Fn() -> String + Send + Sync,
{
	fn nonce(&self) -> String {
		self()
	}
}

/// Produces the `oauth_timestamp` value (seconds since the Unix epoch).
pub trait Clock: Send + Sync {
	/// Returns the current Unix timestamp in seconds.
	fn timestamp(&self) -> i64;
}
impl<F> Clock for F
where
	F: Fn() -> i64 + Send + Sync,
{
	fn timestamp(&self) -> i64 {
		self()
	}
}

/// Cryptographically random alphanumeric nonces drawn from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomNonce;
impl NonceSource for RandomNonce {
	fn nonce(&self) -> String {
		rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
	}
}

/// Wall clock backed by [`OffsetDateTime::now_utc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn timestamp(&self) -> i64 {
		OffsetDateTime::now_utc().unix_timestamp()
	}
}

/// Returns the same nonce on every call.
#[derive(Clone, Debug)]
pub struct FixedNonce(String);
impl FixedNonce {
	/// Pins the nonce to `value`.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}
}
impl NonceSource for FixedNonce {
	fn nonce(&self) -> String {
		self.0.clone()
	}
}

/// Returns the same timestamp on every call.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(i64);
impl FixedClock {
	/// Pins the clock to `timestamp` seconds since the epoch.
	pub const fn at(timestamp: i64) -> Self {
		Self(timestamp)
	}
}
impl Clock for FixedClock {
	fn timestamp(&self) -> i64 {
		self.0
	}
}
