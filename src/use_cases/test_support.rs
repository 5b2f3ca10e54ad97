use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::codes::normalize_code;
use crate::domain::entities::{GuestRecord, Role, Session};
use crate::domain::ports::{Clock, CodeRegistry, SessionStore, TokenGenerator};

pub(crate) type SessionTable = Arc<Mutex<HashMap<String, Session>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub get: bool,
    pub remove: bool,
    pub sweep: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    sessions: SessionTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_session(&self, session: Session) {
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(session.token.clone(), session);
    }

    pub(crate) fn get_test_session(&self, token: &str) -> Option<Session> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.get(token).cloned()
    }

    pub(crate) fn session_count(&self) -> usize {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.len()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<Option<Session>, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.remove(token))
    }

    async fn sweep(&self, now: u64) -> Result<usize, String> {
        if self.failures.sweep {
            return Err("sweep failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_at(now));
        Ok(before - guard.len())
    }

    async fn count(&self) -> Result<usize, String> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.len())
    }
}

// Small registry fake with the same normalization as production.
pub(crate) struct FixedRegistry(HashMap<String, GuestRecord>);

impl FixedRegistry {
    pub(crate) fn new() -> Self {
        let mut codes = HashMap::new();
        codes.insert(
            "011387".to_string(),
            GuestRecord {
                guest_name: "Prathamesh Pawar".to_string(),
                role: Role::Vip,
            },
        );
        codes.insert(
            "PSDVIN".to_string(),
            GuestRecord {
                guest_name: "Vinay Polisetty".to_string(),
                role: Role::Friend,
            },
        );
        Self(codes)
    }
}

impl CodeRegistry for FixedRegistry {
    fn lookup(&self, code: &str) -> Option<GuestRecord> {
        self.0.get(&normalize_code(code)).cloned()
    }
}

// Predictable tokens: "token-1", "token-2", ...
#[derive(Default)]
pub(crate) struct SequenceTokens(AtomicU64);

impl TokenGenerator for SequenceTokens {
    fn generate(&self) -> String {
        let next = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        format!("token-{next}")
    }
}

pub(crate) fn session(token: &str, role: Role, expires_at: u64) -> Session {
    Session {
        token: token.to_string(),
        guest_name: "Pilot Guest".to_string(),
        role,
        code: "011387".to_string(),
        created_at: expires_at.saturating_sub(86_400),
        expires_at,
    }
}
