//! Booking action server entry point

use anyhow::Context;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use booking_slot_actions::server::{AppState, create_router};
use booking_slot_actions::settings::{ENV_SELECTOR, Settings, load_settings};
use booking_slot_actions::ActionRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var(ENV_SELECTOR).ok();
    let settings = load_settings(env.as_deref()).context("loading settings")?;

    init_tracing(&settings);

    let registry = ActionRegistry::booking();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = env.as_deref().unwrap_or("default"),
        actions = ?registry.names(),
        "starting booking action server"
    );

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, "listening");

    axum::serve(listener, create_router(AppState::new(registry)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving action webhook")?;

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("booking_slot_actions={level},booking_actions={level},tower_http=debug").into()
    });

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Wait for Ctrl+C or SIGTERM
///
/// A signal that cannot be installed never fires; the other one still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
