mod cli;
mod handlers;
mod headers;
mod rate_limit;

pub use cli::ServeOptions;

use cli::IdentityOptions;
use rate_limit::RateLimiter;

use crate::prelude::{eprintln, *};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Router};
use bfhl_core::identifier::format_identifier;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub identity: IdentityOptions,
}

/// Build the full application: routes, 404 fallback, body limit, rate
/// limiting, CORS and security headers.
pub fn router(state: AppState, limiter: RateLimiter, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .route("/bfhl", post(handlers::bfhl).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(
            Arc::new(limiter),
            rate_limit::limit,
        ))
        .layer(cors);

    headers::apply(app)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    // Fail fast on a name that cannot produce a user_id.
    let today = chrono::Local::now().date_naive();
    let sample = format_identifier(&options.identity.full_name, today).map_err(|e| {
        eyre!(
            "Invalid full name {:?}: {e}",
            options.identity.full_name
        )
    })?;

    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Starting BFHL API on {}...", addr);
        eprintln!("user_id for today: {}", sample);
        eprintln!(
            "Rate limit: {} requests per {}s",
            options.rate_limit_max, options.rate_limit_window
        );
    }

    let app = router(
        AppState {
            identity: options.identity,
        },
        RateLimiter::new(
            options.rate_limit_max,
            Duration::from_secs(options.rate_limit_window),
        ),
        options.body_limit,
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("BFHL API listening on http://{addr}");

    if global.verbose {
        eprintln!("Health check: http://{}/health", addr);
        eprintln!("Main endpoint: http://{}/bfhl", addr);
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("BFHL API stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
