//! Authentication error types.

use delivery_core::error::DeliveryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session not found")]
    SessionNotFound,

    #[error("session has expired")]
    SessionExpired,

    #[error("duplicate account email: {0}")]
    DuplicateAccount(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for DeliveryError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::SessionNotFound
            | AuthError::SessionExpired => {
                DeliveryError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::DuplicateAccount(_) => DeliveryError::validation(err.to_string()),
            AuthError::Crypto(msg) => DeliveryError::Internal(msg),
        }
    }
}
