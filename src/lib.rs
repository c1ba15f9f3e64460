//! HTTP surface of the compile relay: one JSON endpoint per configured
//! route, plus `/health` and `/languages`.

mod config;
mod error;
mod extract;

pub use config::ServerConfig;
pub use error::ServerError;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use code_relay::{Language, LanguageInfo, RelayService, Submission};
use extract::RelayJson;
use piston_client::PistonClient;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct CompileResponse {
    pub message: String,
}

#[derive(Clone)]
pub struct AppState {
    relay: RelayService,
}

/// Build the router for `config`, talking to the Piston API it names.
pub fn create_app(config: &ServerConfig) -> Result<Router, ServerError> {
    config.validate()?;

    let client = PistonClient::new(config.piston_config())
        .map_err(|e| ServerError::Configuration(e.to_string()))?;

    Ok(router(RelayService::new(client), &config.routes))
}

/// Router over an existing relay, with the compile endpoint under each of `routes`.
pub fn router(relay: RelayService, routes: &[String]) -> Router {
    let state = AppState { relay };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(languages));
    for route in routes {
        app = app.route(route, post(compile));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    info!("Starting compile relay on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn languages() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.into_iter().map(LanguageInfo::from).collect())
}

async fn compile(
    State(state): State<AppState>,
    RelayJson(submission): RelayJson<Submission>,
) -> Result<Json<CompileResponse>, ServerError> {
    let message = state.relay.handle(&submission).await?;
    Ok(Json(CompileResponse { message }))
}
