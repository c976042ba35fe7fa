//! Request handlers. Each one maps a route onto a single core operation.

use super::AppState;
use super::extract::{JsonBody, TicketId};
use crate::{
    core::{SystemStatus, TicketView, generate_access_code},
    errors::Result,
};
use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

/// Registration payload. Missing fields become empty strings and fail validation.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    contact: String,
    #[serde(default)]
    tag: String,
}

pub async fn activate(State(state): State<AppState>) -> Json<Value> {
    state.gate.activate();
    Json(json!({ "message": "System activated", "active": true }))
}

pub async fn deactivate(State(state): State<AppState>) -> Json<Value> {
    state.gate.deactivate();
    Json(json!({ "message": "System deactivated", "active": false }))
}

pub async fn status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(state.status.status())
}

pub async fn access_code(State(state): State<AppState>) -> Result<Json<Value>> {
    let qr_code = generate_access_code(&state.join_url)?;
    Ok(Json(json!({ "qr_code": qr_code })))
}

pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<Value>> {
    let ticket = state
        .queue
        .register(&request.name, &request.contact, &request.tag)
        .await?;
    Ok(Json(json!({ "message": "Ticket registered", "id": ticket.id })))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TicketView>>> {
    Ok(Json(state.queue.list_all().await?))
}

pub async fn call_next(State(state): State<AppState>) -> Result<Json<Value>> {
    let ticket = state.queue.call_next().await?;
    Ok(Json(json!({
        "message": "Entrant notified and marked as called",
        "ticket": TicketView::from(ticket),
    })))
}

pub async fn recall(
    State(state): State<AppState>,
    TicketId(id): TicketId,
) -> Result<Json<Value>> {
    state.queue.recall(id).await?;
    Ok(Json(json!({ "message": "Entrant notified again" })))
}

pub async fn remove(
    State(state): State<AppState>,
    TicketId(id): TicketId,
) -> Result<Json<Value>> {
    state.queue.remove(id).await?;
    Ok(Json(json!({ "message": "Ticket removed from the queue" })))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<Value>> {
    state.queue.reset_all().await?;
    Ok(Json(json!({ "message": "Queue reset" })))
}
