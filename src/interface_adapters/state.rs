use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::domain::codes::normalize_code;
use crate::domain::entities::{EventInfo, GuestRecord, ScheduleEntry, Session};
use crate::domain::ports::{Clock, CodeRegistry, SessionStore, TokenGenerator};

pub type SessionTable = Arc<Mutex<HashMap<String, Session>>>;

// Application state shared by handlers and the reaper.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionTable,
    pub registry: StaticCodeRegistry,
    pub schedule: Arc<[ScheduleEntry]>,
    pub event: Arc<EventInfo>,
    pub session_ttl_seconds: u64,
}

impl AppState {
    pub fn new(
        registry: StaticCodeRegistry,
        schedule: Vec<ScheduleEntry>,
        event: EventInfo,
        session_ttl_seconds: u64,
    ) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            registry,
            schedule: Arc::from(schedule),
            event: Arc::new(event),
            session_ttl_seconds,
        }
    }

    pub fn session_store(&self) -> InMemorySessionStore {
        InMemorySessionStore {
            sessions: self.sessions.clone(),
        }
    }
}

// In-memory session store adapter; the mutex is held for each whole operation.
#[derive(Clone)]
pub struct InMemorySessionStore {
    pub sessions: SessionTable,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<Option<Session>, String> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.remove(token))
    }

    async fn sweep(&self, now: u64) -> Result<usize, String> {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, String> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.len())
    }
}

// Immutable code registry loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticCodeRegistry {
    codes: Arc<HashMap<String, GuestRecord>>,
}

impl StaticCodeRegistry {
    pub fn new(codes: impl IntoIterator<Item = (String, GuestRecord)>) -> Self {
        let codes = codes
            .into_iter()
            .map(|(code, guest)| (normalize_code(&code), guest))
            .collect();
        Self {
            codes: Arc::new(codes),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl CodeRegistry for StaticCodeRegistry {
    fn lookup(&self, code: &str) -> Option<GuestRecord> {
        self.codes.get(&normalize_code(code)).cloned()
    }
}

// 32 random bytes, hex encoded (256 bits of entropy).
#[derive(Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let bytes: [u8; 32] = rand::rng().random();
        hex::encode(bytes)
    }
}

// System clock adapter used by auth use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
