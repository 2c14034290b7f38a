//! Client domain
//!
//! A client is the relying party a token is issued for: an identifier that
//! becomes the token audience, and the symmetric secret that signs it.

mod entity;
mod provider;
mod validation;

pub use entity::{ClientId, ClientIdentity, SecretKey};
pub use provider::SecretProvider;
pub use validation::{validate_client_id, validate_secret, ClientValidationError};

#[cfg(test)]
pub use provider::MockSecretProvider;
