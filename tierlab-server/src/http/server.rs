//! Axum server setup
//!
//! Pool connect and schema bootstrap run before the listener binds; a
//! failure in either stops the process before it can serve traffic.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error;
use super::routes;
use crate::config::AppConfig;
use crate::db;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: AppConfig,
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let dev_mode = state.config.dev_mode;

    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .merge(routes::status::router())
        .merge(routes::users::router())
        .fallback(routes::root::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn std::any::Any + Send + 'static>| {
                error::panic_response(dev_mode, err)
            },
        ))
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// Connects the pool, runs the idempotent schema bootstrap, then serves
/// until Ctrl+C/SIGTERM. Bootstrap failure is fatal.
pub async fn run_server(config: AppConfig, bind: &str) -> Result<(), ServerError> {
    let pool = db::create_pool(&config.db).await?;
    db::bootstrap::run(&pool).await?;

    let port = config.port;
    let environment = config.environment.clone();
    let app = build_router(AppState {
        pool: pool.clone(),
        config,
    });

    let addr = parse_bind_addr(bind, port)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Environment: {}", environment);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release pooled connections before exit
    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Parse the bind address as an IP (v4 or v6, no brackets needed).
fn parse_bind_addr(bind: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let ip: IpAddr = bind.parse().map_err(|_| ServerError::InvalidBindAddr {
        bind: bind.to_string(),
        port,
    })?;

    Ok(SocketAddr::new(ip, port))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("invalid bind address: {bind}:{port}")]
    InvalidBindAddr { bind: String, port: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ipv4_bind() {
        let addr = parse_bind_addr("0.0.0.0", 8080).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn parses_ipv6_bind_without_brackets() {
        let addr = parse_bind_addr("::1", 8080).unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn rejects_non_ip_bind() {
        let err = parse_bind_addr("not-an-ip", 8080).unwrap_err();
        assert!(matches!(
            err,
            ServerError::InvalidBindAddr { port: 8080, .. }
        ));
    }
}
