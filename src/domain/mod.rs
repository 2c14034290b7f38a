//! Domain layer - Client identities and token claims

pub mod client;
pub mod error;
pub mod token;

pub use client::{
    ClientId, ClientIdentity, ClientValidationError, SecretKey, SecretProvider,
};
pub use error::DomainError;
pub use token::{ClaimSet, TOKEN_LIFETIME_DAYS};
