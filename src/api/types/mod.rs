//! API request/response types

pub mod error;
pub mod json;
pub mod tokens;

pub use error::{ApiError, ApiErrorResponse};
pub use json::JsonBody;
pub use tokens::{IssueTokenRequest, IssueTokenResponse, VerifyTokenResponse};
