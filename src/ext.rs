//! Extension contracts for signing requests built outside the client.

pub mod request_signer;

pub use request_signer::*;
