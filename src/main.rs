mod model;
mod server;

use std::net::SocketAddr;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, service::token::TokenService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let blobs = startup::prepare_blob_store(&config).await?;
    let tokens = TokenService::new(
        &config.jwt_secret,
        config.jwt_expires_in,
        config.app_url.clone(),
    );

    startup::check_for_admin(&db).await?;

    let login_limit = startup::login_rate_limit()?;
    startup::spawn_rate_limit_cleanup(login_limit.clone());

    let app = server::router::router(config.cors_allowed_origin.as_deref(), login_limit)?
        .with_state(AppState::new(db, blobs, tokens));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on {} ({})", address, config.app_url);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
