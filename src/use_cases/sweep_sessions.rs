use crate::domain::errors::AuthError;
use crate::domain::ports::{Clock, SessionStore};

// Expired-session sweep used by the periodic reaper.
pub struct SweepSessionsUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> SweepSessionsUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    // Returns how many sessions were removed.
    pub async fn execute(&self) -> Result<usize, AuthError> {
        self.store
            .sweep(self.clock.now_epoch_seconds())
            .await
            .map_err(|_| AuthError::StorageFailure)
    }
}
