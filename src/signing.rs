//! OAuth 1.0a request signing (RFC 5849 section 3).
//!
//! The pieces compose leaves first: [`encode`] implements the protocol's percent-encoding,
//! [`base_string`] normalizes a request into the signature base string, [`signature`] keys and
//! runs HMAC-SHA1, and [`RequestSigner`] assembles the `oauth_*` parameter set and renders the
//! `Authorization` header. Everything here is pure; nonces and timestamps come from the
//! injectable sources in [`source`].

pub mod base_string;
pub mod encode;
pub mod params;
pub mod signature;
pub mod signer;
pub mod source;

pub use base_string::*;
pub use encode::*;
pub use params::*;
pub use signature::*;
pub use signer::*;
pub use source::*;
