use async_trait::async_trait;

use crate::domain::entities::{GuestRecord, Session};

// Port for session storage used by auth use cases.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: Session) -> Result<(), String>;
    async fn get(&self, token: &str) -> Result<Option<Session>, String>;
    async fn remove(&self, token: &str) -> Result<Option<Session>, String>;
    // Removes every session whose expiry is strictly before `now`.
    async fn sweep(&self, now: u64) -> Result<usize, String>;
    async fn count(&self) -> Result<usize, String>;
}

// Port for resolving access codes into guest identities.
pub trait CodeRegistry: Send + Sync {
    fn lookup(&self, code: &str) -> Option<GuestRecord>;
}

// Port for issuing opaque session tokens.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}
