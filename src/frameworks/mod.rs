// Frameworks layer: configuration, bootstrap and background tasks.

pub mod config;
pub mod event_data;
pub mod reaper;
pub mod server;
