mod adapter;
pub mod handlers;
mod types;

pub use adapter::{
    INVOCATION_ERROR_PREFIX, InvocationOutcome, PROMPT_REQUIRED_MESSAGE, RequestAdapter,
};
pub use types::{ErrorResponse, InvocationRequest, InvocationResponse};

use crate::{
    Error, Result,
    agent::{AgentCoreClient, AgentRuntimeClient},
    config::Config,
};
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Every path and method reaches the adapter, so stage prefixes and
/// Function URL paths all get the JSON envelope.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .fallback(handlers::invoke)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn build_state(config: &Config) -> handlers::AppState {
    let client: Arc<dyn AgentRuntimeClient> = Arc::new(AgentCoreClient::new(&config.agent).await);
    let adapter = RequestAdapter::new(client, Arc::new(config.agent.clone()));

    handlers::AppState {
        adapter: Arc::new(adapter),
    }
}

/// Serves Lambda HTTP events (Function URL / API Gateway).
pub async fn run_lambda(config: Config) -> Result<()> {
    let app = router(build_state(&config).await);

    info!(
        "Starting Lambda handler for agent runtime {} in {}",
        config.agent.runtime_arn, config.agent.region
    );

    lambda_http::run(app)
        .await
        .map_err(|e| Error::internal(format!("Lambda runtime error: {}", e)))
}

pub async fn run_local(config: Config) -> Result<()> {
    let app = router(build_state(&config).await);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting local server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
