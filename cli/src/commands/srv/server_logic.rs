//! # VIKAS HTTP API Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exposes the reply engine over HTTP with Axum so a web chat page (or any
//! other client) can talk to the assistant. The API is stateless: the client
//! remembers the user's name and sends it along with every message.
//!
//! ## Routes
//!
//! | Method | Path            | Body                  | Response                          |
//! |--------|-----------------|-----------------------|-----------------------------------|
//! | GET    | `/api/greeting` |                       | `{reply, kind: "greeting", guide}` |
//! | POST   | `/api/reply`    | `{name?, message}`    | `{reply, kind, guide}`            |
//! | GET    | `/api/guides`   |                       | the catalogue, in priority order  |
//!
//! `POST /api/reply` requires `Content-Type: application/json`. Both body
//! fields may be omitted; a missing message is treated like an empty one and
//! answered with the clarifying follow-up.
//!
//! ## Lifecycle
//!
//! 1. Find a free port, starting at the configured one and trying the next
//!    few if it is taken
//! 2. Build the router with tracing and optional CORS middleware
//! 3. Serve until Ctrl+C or SIGTERM, then shut down gracefully
//!
use super::config::ServerConfig;
use crate::commands::guides::{guide_views, GuideView};
use crate::commands::reply::ReplyOutput;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};
use vikas::assistant::{compose_reply, greeting_reply};
use vikas::core::error::{Result, VikasError};

/// How many consecutive ports to try before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// Body of `POST /api/reply`.
#[derive(Deserialize, Debug)]
pub struct ReplyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after `config.port` and serves the API
/// until a shutdown signal arrives.
///
/// ## Errors
///
/// - No free port within [`MAX_PORT_ATTEMPTS`] attempts.
/// - The listener cannot be bound (e.g. the address is not local).
/// - Axum reports a fatal serve error.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let app = create_app(&config);

    println!("\n=================================================================");
    println!("🤖 VIKAS AI Assistant API");
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting VIKAS API server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
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

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port`, `start_port + 1`, ... up to `max_attempts` ports on
/// `host` and returns the first address that can be bound.
async fn find_available_port(host: IpAddr, start_port: u16, max_attempts: u8) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    Err(VikasError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        host, start_port, max_attempts
    ))
    .into())
}

/// # Create Axum Application (`create_app`)
///
/// Builds the API router with request tracing and, when enabled, permissive CORS.
pub fn create_app(config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/greeting", get(greeting))
        .route("/api/reply", post(reply))
        .route("/api/guides", get(list_guides))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

async fn greeting() -> Json<ReplyOutput> {
    Json(ReplyOutput::from(greeting_reply()))
}

async fn reply(Json(request): Json<ReplyRequest>) -> Json<ReplyOutput> {
    let reply = compose_reply(request.name.as_deref(), &request.message);
    debug!(kind = ?reply.kind, guide = ?reply.guide, "API reply composed");
    Json(ReplyOutput::from(reply))
}

async fn list_guides() -> Json<Vec<GuideView>> {
    Json(guide_views())
}
