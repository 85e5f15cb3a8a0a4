//! HTTP router and handlers.
//!
//! The only route renders the dashboard from scratch on every request; the
//! configuration is the only state shared between requests.

use axum::{Router, extract::State, response::Html, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::core::constants::http::DASHBOARD_ROUTE;
use crate::core::error::{LogSightError, Result};
use crate::reporting::dashboard::{HtmlDashboard, build_dashboard};
use crate::reporting::logging;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(DASHBOARD_ROUTE, get(dashboard_index))
        .with_state(state)
}

/// Render the dashboard page.
///
/// Parsing and drawing are synchronous, so they run on the blocking pool.
pub async fn dashboard_index(State(state): State<AppState>) -> Result<Html<String>> {
    let config = Arc::clone(&state.config);
    let data = tokio::task::spawn_blocking(move || build_dashboard(&config))
        .await
        .map_err(|e| LogSightError::Render(format!("Dashboard task failed: {e}")))??;

    Ok(Html(HtmlDashboard::render(&data)))
}

/// Serve the dashboard on an already bound listener until the process exits.
pub async fn serve_on(listener: TcpListener, config: Config) -> Result<()> {
    let addr = listener.local_addr()?;
    logging::log_server_start(&addr);

    axum::serve(listener, build_router(AppState::new(config))).await?;
    Ok(())
}

/// Bind the configured address and serve the dashboard.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, config).await
}
