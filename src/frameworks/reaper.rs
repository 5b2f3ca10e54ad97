// Periodic sweep of expired sessions, independent of request traffic.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::domain::ports::{Clock, SessionStore};
use crate::use_cases::sweep_sessions::SweepSessionsUseCase;

pub fn spawn_session_reaper<C, S>(clock: C, store: S, period: Duration) -> JoinHandle<()>
where
    C: Clock + 'static,
    S: SessionStore + 'static,
{
    let use_case = SweepSessionsUseCase { clock, store };

    tokio::spawn(async move {
        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match use_case.execute().await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "cleaned expired sessions"),
                Err(err) => tracing::error!(error = %err, "session sweep failed"),
            }
        }
    })
}
