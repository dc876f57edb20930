//! # charfreq-server
//!
//! HTTP server for the CharFreq tutorial: serves the instructional page,
//! the stored sample text, server-side frequency computation, and the
//! mailbox animation scripts.

use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tracing::info;

pub mod config;
pub mod content;
pub mod error;
pub mod presentation;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

/// Initialize state, bind, and serve until shutdown.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(config).await?;
    let app = routes::router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
