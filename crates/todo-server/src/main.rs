//! # Todo API Server
//!
//! Main entry point: loads configuration, connects to PostgreSQL, runs
//! migrations, and serves the REST API until SIGINT/SIGTERM.

use std::sync::Arc;
use todo_config::ConfigLoader;
use todo_core::{TodoError, TodoResult};
use todo_repository::{create_pool, PgTodoRepository, TodoRepository};
use todo_rest::{create_router, AppState};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Todo API Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> TodoResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and verify the connection
    let db_pool = create_pool(&config.database).await?;
    db_pool.health_check().await?;

    // Run migrations
    db_pool.run_migrations().await?;

    // Wire the repository into the REST layer
    let todos: Arc<dyn TodoRepository> = Arc::new(PgTodoRepository::new(db_pool.clone()));
    let state = AppState::new(todos);
    let router = create_router(state, &config.server);

    // Start the HTTP server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TodoError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TodoError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,todo=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
