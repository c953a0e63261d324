//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use itemhub_common::{AppConfig, JwtService, PasswordService, StorageBackend};
use itemhub_db::{
    create_pool, run_migrations, InMemoryItemRepository, InMemoryUserRepository,
    PgItemRepository, PgUserRepository,
};
use itemhub_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    Router::new()
        .merge(health_routes())
        .merge(api)
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let builder = ServiceContextBuilder::new()
        .password_hasher(Arc::new(PasswordService::new()))
        .token_issuer(Arc::new(JwtService::from_config(&config.jwt)));

    let builder = match config.storage {
        StorageBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .context("DATABASE_URL is required for postgres storage")?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(db_config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            info!("PostgreSQL connection established");

            if db_config.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                info!("Database migrations applied");
            }

            builder
                .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
                .item_repo(Arc::new(PgItemRepository::new(pool.clone())))
                .pool(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            builder
                .user_repo(Arc::new(InMemoryUserRepository::new()))
                .item_repo(Arc::new(InMemoryItemRepository::new()))
        }
    };

    let service_context = builder.build()?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener until a shutdown signal arrives
pub async fn run_server(app: Router, listener: TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.api.address()))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM signal, shutting down gracefully"),
    }
}
