//! API middleware components

pub mod auth;

pub use auth::RequireClientToken;
