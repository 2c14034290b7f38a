//! Infrastructure layer - Token codec, secret sources and logging

pub mod auth;
pub mod logging;
pub mod secrets;
