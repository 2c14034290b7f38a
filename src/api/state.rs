//! Application state for shared services

use std::sync::Arc;

use crate::domain::ClientIdentity;
use crate::infrastructure::auth::TokenCodec;

/// Read-only state shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Arc<ClientIdentity>,
    pub codec: TokenCodec,
}

impl AppState {
    pub fn new(client: ClientIdentity) -> Self {
        Self {
            client: Arc::new(client),
            codec: TokenCodec::new(),
        }
    }
}
