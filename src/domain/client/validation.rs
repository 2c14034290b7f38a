//! Client identity validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during client validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientValidationError {
    #[error("Client ID cannot be empty")]
    EmptyId,

    #[error("Client ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Client ID contains a control character")]
    ControlCharacter,

    #[error("Client secret cannot be empty")]
    EmptySecret,
}

impl From<ClientValidationError> for DomainError {
    fn from(err: ClientValidationError) -> Self {
        match err {
            ClientValidationError::EmptySecret => DomainError::configuration(err.to_string()),
            _ => DomainError::invalid_id(err.to_string()),
        }
    }
}

const MAX_CLIENT_ID_LENGTH: usize = 128;

/// Validate a client ID
///
/// Rules:
/// - Cannot be empty
/// - Maximum 128 characters
/// - No control characters
pub fn validate_client_id(id: &str) -> Result<(), ClientValidationError> {
    if id.is_empty() {
        return Err(ClientValidationError::EmptyId);
    }

    if id.chars().count() > MAX_CLIENT_ID_LENGTH {
        return Err(ClientValidationError::IdTooLong(MAX_CLIENT_ID_LENGTH));
    }

    if id.chars().any(char::is_control) {
        return Err(ClientValidationError::ControlCharacter);
    }

    Ok(())
}

/// Validate raw secret material
pub fn validate_secret(secret: &[u8]) -> Result<(), ClientValidationError> {
    if secret.is_empty() {
        return Err(ClientValidationError::EmptySecret);
    }

    Ok(())
}
