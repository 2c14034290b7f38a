//! Token domain - the claim set carried by a signed client token

mod claims;

pub use claims::{ClaimSet, TOKEN_LIFETIME_DAYS};
