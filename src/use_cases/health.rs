use crate::domain::errors::AuthError;
use crate::domain::ports::{Clock, SessionStore};

pub struct HealthReport {
    pub checked_at: u64,
    pub active_sessions: usize,
}

// Liveness snapshot; no authentication involved.
pub struct HealthUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> HealthUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(&self) -> Result<HealthReport, AuthError> {
        let active_sessions = self
            .store
            .count()
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        Ok(HealthReport {
            checked_at: self.clock.now_epoch_seconds(),
            active_sessions,
        })
    }
}
