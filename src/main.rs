use anyhow::Context;
use genre_recommender::{
    api::{create_router, AppState},
    config::Config,
    logging,
    models::Catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("genre_recommender=info,tower_http=info");

    let config = Config::from_env()?;

    let catalog = Catalog::load(&config.catalog_path)
        .await
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;

    let state = AppState::new(catalog);

    #[cfg(unix)]
    spawn_reload_on_sighup(state.clone(), config.catalog_path.clone())?;

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Recommender listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Reloads the catalog file whenever the process receives SIGHUP
#[cfg(unix)]
fn spawn_reload_on_sighup(state: AppState, catalog_path: String) -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup()).context("Failed to install SIGHUP handler")?;

    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            match state.reload_from(&catalog_path).await {
                Ok(()) => tracing::info!(path = %catalog_path, "Catalog reloaded"),
                Err(e) => tracing::error!(error = %e, "Catalog reload failed, keeping current catalog"),
            }
        }
    });

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
