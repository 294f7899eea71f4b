//! HTTP routes and process setup for the fixture server.

use crate::{
    catalog::SchemaCatalog,
    config::{Cli, ServerConfiguration},
    messages::MatchResponse,
};
use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use clap::Parser;
use credschema_model::CredentialSchema;
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::EnvFilter;

/// Default address on which to listen for incoming connections.
pub(crate) fn default_listener() -> SocketAddr {
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 80)
}

#[derive(Debug)]
struct Fixtures {
    config: ServerConfiguration,
    catalog: SchemaCatalog,
}

/// Build the routes serving the schemas listed in `config`.
pub fn routes(config: ServerConfiguration) -> Router {
    let catalog = SchemaCatalog::new(config.schemas.iter().cloned());

    tracing::info!(
        label = %config.label,
        schemas = catalog.len(),
        "loaded credential schema fixtures"
    );

    Router::new()
        .route("/config", get(serve_config))
        .route("/schemas", get(schemas))
        .route("/schemas/{id}", get(schema))
        .route("/match", post(match_schema))
        .with_state(Arc::new(Fixtures { config, catalog }))
}

/// Load configuration named on the command line, then serve its fixtures over HTTP until
/// interrupted.
pub async fn server_main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServerConfiguration::load(&cli)?;

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .context(format!(
            "failed to bind address {:?}",
            config.listen_address
        ))?;

    tracing::info!(
        listen_address = %config.listen_address,
        "started the credential schema fixture server"
    );

    axum::serve(listener, routes(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Print the configuration.
async fn serve_config(State(fixtures): State<Arc<Fixtures>>) -> Json<ServerConfiguration> {
    tracing::info!("serving config endpoint");
    Json(fixtures.config.clone())
}

/// List every schema in the catalog.
async fn schemas(State(fixtures): State<Arc<Fixtures>>) -> Json<Vec<CredentialSchema>> {
    Json(fixtures.catalog.schemas().to_vec())
}

/// Look up the first schema with the requested id.
async fn schema(
    State(fixtures): State<Arc<Fixtures>>,
    Path(id): Path<String>,
) -> Result<Json<CredentialSchema>, StatusCode> {
    match fixtures.catalog.find(&id) {
        Some(schema) => Ok(Json(schema.clone())),
        None => {
            tracing::debug!(id = %id, "no credential schema with requested id");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Report whether the posted schema equals one in the catalog.
async fn match_schema(
    State(fixtures): State<Arc<Fixtures>>,
    Json(request): Json<CredentialSchema>,
) -> Json<MatchResponse> {
    let known = fixtures.catalog.contains(&request);
    tracing::info!(id = request.id(), known, "matching credential schema");

    Json(MatchResponse { known })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
