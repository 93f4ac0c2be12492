use super::adapter::{InvocationOutcome, RequestAdapter};
use axum::{body::Bytes, extract::State};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<RequestAdapter>,
}

/// Takes the raw body so malformed JSON still gets the regular 400 envelope.
pub async fn invoke(State(state): State<AppState>, body: Bytes) -> InvocationOutcome {
    info!("Received invocation request ({} byte body)", body.len());

    state.adapter.handle(&body).await
}
