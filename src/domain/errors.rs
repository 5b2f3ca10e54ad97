use thiserror::Error;

// Domain-level errors for access and session workflows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("access code is required")]
    CodeRequired,
    #[error("invalid access code")]
    InvalidCode,
    #[error("no authentication token provided")]
    MissingToken,
    #[error("invalid session token")]
    InvalidToken,
    #[error("session expired")]
    SessionExpired,
    #[error("session storage failure")]
    StorageFailure,
}
