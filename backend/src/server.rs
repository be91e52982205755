use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Config;
use crate::services::ProductService;
use crate::{AppState, build_router, db};

/// Open the database, build the router and serve until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<(), anyhow::Error> {
    let pool = db::create_pool(&config.database).await?;
    let catalog = Arc::new(ProductService::new(pool));
    let state = Arc::new(AppState::new(catalog, config.i18n.default_locale.clone()));

    let app = build_router(state, &config.static_config);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("Storefront listening on http://{}", address);
    tracing::info!("API docs available at http://{}/api-docs", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            },
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
