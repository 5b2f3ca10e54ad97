use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::codes::normalize_code;
use crate::domain::entities::{EventInfo, GuestRecord, Role, ScheduleEntry};
use crate::interface_adapters::state::StaticCodeRegistry;

const BUILTIN_EVENT: &str = include_str!("../../config/event.toml");

#[derive(Debug, Error)]
pub enum EventDataError {
    #[error("failed to read event config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse event config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("access code {0} is listed more than once")]
    DuplicateCode(String),
    #[error("access code for {0} is empty")]
    EmptyCode(String),
}

#[derive(Debug, Deserialize)]
pub struct GuestEntry {
    pub code: String,
    pub guest_name: String,
    pub role: Role,
}

// Guest list, schedule and event details, loaded once at startup.
#[derive(Debug, Deserialize)]
pub struct EventData {
    pub event: EventInfo,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub guests: Vec<GuestEntry>,
}

impl EventData {
    pub fn builtin() -> Result<Self, EventDataError> {
        Self::parse(BUILTIN_EVENT)
    }

    pub fn from_file(path: &Path) -> Result<Self, EventDataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| EventDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    // Built-in data unless a file path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, EventDataError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EventDataError> {
        let data: EventData = toml::from_str(raw)?;
        data.check_codes()?;
        Ok(data)
    }

    // Codes must stay unique after normalization or lookups become ambiguous.
    fn check_codes(&self) -> Result<(), EventDataError> {
        let mut seen = HashSet::new();
        for guest in &self.guests {
            let code = normalize_code(&guest.code);
            if code.is_empty() {
                return Err(EventDataError::EmptyCode(guest.guest_name.clone()));
            }
            if !seen.insert(code.clone()) {
                return Err(EventDataError::DuplicateCode(code));
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> StaticCodeRegistry {
        StaticCodeRegistry::new(self.guests.iter().map(|guest| {
            (
                guest.code.clone(),
                GuestRecord {
                    guest_name: guest.guest_name.clone(),
                    role: guest.role,
                },
            )
        }))
    }
}
