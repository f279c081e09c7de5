//! Kotoba · Japanese Placement Backend
//!
//! - Axum HTTP API: placement test, vocabulary catalog, romaji helper
//! - Optional account/billing gateway (via environment variables)
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT              : u16 (default 3000)
//!   ACCOUNT_API_KEY   : enables account/billing endpoints if present
//!   ACCOUNT_BASE_URL  : default "http://localhost:54321"
//!   BANK_CONFIG_PATH  : path to TOML config (extra questions + vocabulary)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use kotoba_backend::routes::build_router;
use kotoba_backend::state::AppState;
use kotoba_backend::telemetry;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (validated corpus, catalog, gateway).
  // Corpus validation errors abort startup here.
  let state = Arc::new(AppState::new()?);

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "kotoba_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
