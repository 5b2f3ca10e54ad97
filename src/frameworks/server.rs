// Framework bootstrap for the invite server runtime.

use crate::frameworks::config;
use crate::frameworks::event_data::EventData;
use crate::frameworks::reaper::spawn_session_reaper;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, SystemClock};
use std::io::Result;
use std::net::SocketAddr;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;

    // The reaper lives as long as the process; it is never cancelled.
    spawn_session_reaper(
        SystemClock,
        state.session_store(),
        config::session_sweep_interval(),
    );

    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<AppState> {
    let path = config::event_config_path();
    let data = EventData::load(path.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "failed to load event data");
        std::io::Error::other(format!("failed to load event data: {e}"))
    })?;

    let registry = data.registry();
    let source = path
        .as_deref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    tracing::info!(
        %source,
        guests = registry.len(),
        schedule_entries = data.schedule.len(),
        "event data loaded"
    );

    Ok(AppState::new(
        registry,
        data.schedule,
        data.event,
        config::SESSION_TTL_SECONDS,
    ))
}
