//! Credential values handed to and returned from the OAuth 1.0a handshake.

pub mod callback;
pub mod secret;
pub mod token;

pub use callback::*;
pub use secret::*;
pub use token::*;
