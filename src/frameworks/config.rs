use std::{env, path::PathBuf, time::Duration};

// Runtime/server settings.

// Fixed session lifetime.
pub const SESSION_TTL_SECONDS: u64 = 24 * 60 * 60;

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10000)
}

pub fn session_sweep_interval() -> Duration {
    let secs = env::var("SESSION_SWEEP_INTERVAL_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(60 * 60);
    Duration::from_secs(secs)
}

// Optional TOML file replacing the built-in event data.
pub fn event_config_path() -> Option<PathBuf> {
    env::var_os("EVENT_CONFIG")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
