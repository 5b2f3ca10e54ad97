use crate::domain::entities::Session;
use crate::domain::errors::AuthError;
use crate::domain::ports::{Clock, SessionStore};

// Token verification use case with injected dependencies.
pub struct VerifyTokenUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> VerifyTokenUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(&self, token: String) -> Result<Session, AuthError> {
        let session = self
            .store
            .get(&token)
            .await
            .map_err(|_| AuthError::StorageFailure)?
            .ok_or(AuthError::InvalidToken)?;

        if session.is_expired_at(self.clock.now_epoch_seconds()) {
            // Lazy expiry: evict on first sight.
            self.store
                .remove(&token)
                .await
                .map_err(|_| AuthError::StorageFailure)?;
            return Err(AuthError::SessionExpired);
        }

        Ok(session)
    }
}
