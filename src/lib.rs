//! client-token
//!
//! Issues and validates signed, time-bounded tokens for a client:
//! - HS256 compact tokens whose audience is the client ID
//! - Optional end-user subject
//! - Fixed 30 day lifetime, strictly validated with zero leeway
//! - Bearer header extraction for HTTP callers

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{ClaimSet, ClientId, ClientIdentity, DomainError, SecretKey, SecretProvider};
pub use infrastructure::auth::{
    bearer_token, HeaderSource, InvalidAuthorizationHeader, InvalidToken, TokenCodec,
};
