//! Authentication infrastructure module
//!
//! This module provides the HS256 client token codec and bearer header parsing.

mod header;
mod jwt;

pub use header::{bearer_token, HeaderSource, InvalidAuthorizationHeader};
pub use jwt::{InvalidToken, TokenCodec};
