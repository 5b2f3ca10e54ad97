use serde::{Deserialize, Serialize};

// Guest role bound to an access code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Vip,
    Friend,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Vip => "vip",
            Role::Friend => "friend",
        }
    }
}

// Identity resolved from an access code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub guest_name: String,
    pub role: Role,
}

// Guest session record stored in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub guest_name: String,
    pub role: Role,
    // Normalized access code that opened the session.
    pub code: String,
    pub created_at: u64,
    pub expires_at: u64,
}

impl Session {
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.expires_at
    }
}

// Visibility tier of a schedule entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    Vip,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub activity: String,
    pub access_level: AccessLevel,
}

// Venue and host details shown to every authenticated guest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub address_lines: Vec<String>,
    pub parking: String,
    pub google_maps_url: String,
    pub apple_maps_url: String,
    pub timezone_label: String,
    pub hosts: String,
    pub host_message: String,
}
