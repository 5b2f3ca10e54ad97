use std::sync::Arc;

use crate::domain::access::filter_schedule;
use crate::domain::entities::{ScheduleEntry, Session};
use crate::domain::errors::AuthError;
use crate::domain::ports::{Clock, SessionStore};
use crate::use_cases::verify_token::VerifyTokenUseCase;

// Role-filtered view handed to presentation.
pub struct EventDetails {
    pub session: Session,
    pub schedule: Vec<ScheduleEntry>,
    pub total_entries: usize,
}

// Event details use case: authorize the bearer, then filter the schedule.
pub struct EventDetailsUseCase<C, S> {
    pub verify: VerifyTokenUseCase<C, S>,
    pub schedule: Arc<[ScheduleEntry]>,
}

impl<C, S> EventDetailsUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(&self, token: Option<String>) -> Result<EventDetails, AuthError> {
        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let session = self.verify.execute(token).await?;
        let schedule = filter_schedule(session.role, &self.schedule);

        Ok(EventDetails {
            session,
            schedule,
            total_entries: self.schedule.len(),
        })
    }
}
