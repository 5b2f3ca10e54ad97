use crate::domain::entities::Session;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStore;

// Response returned by the logout use case.
pub struct LogoutResponse {
    // Session that was ended, if the token was live.
    pub ended: Option<Session>,
}

// Logout use case with injected dependencies.
pub struct LogoutUseCase<S> {
    pub store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, token: Option<String>) -> Result<LogoutResponse, AuthError> {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Ok(LogoutResponse { ended: None });
        };

        let ended = self
            .store
            .remove(&token)
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        Ok(LogoutResponse { ended })
    }
}
