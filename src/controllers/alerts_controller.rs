use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    error::AlertError,
    models::{CreateAlertInput, UpdateAlertInput},
    AppState,
};

// GET /api/alerts
pub async fn get_alerts(State(state): State<AppState>) -> Response {
    let alerts = state.alerts.list();
    let total = alerts.len();

    Json(json!({ "alerts": alerts, "total": total })).into_response()
}

// POST /api/alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Json(input): Json<CreateAlertInput>,
) -> Result<Response, AlertError> {
    let alert = state.alerts.create(input)?;
    Ok((StatusCode::CREATED, Json(alert)).into_response())
}

// PUT /api/alerts/:id
pub async fn put_update_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAlertInput>,
) -> Result<Response, AlertError> {
    let alert = state.alerts.update(&id, input)?;
    Ok(Json(alert).into_response())
}

// DELETE /api/alerts/:id
pub async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AlertError> {
    let alert = state.alerts.delete(&id)?;

    Ok(Json(json!({
        "message": "Alert deleted successfully",
        "alert": alert,
    }))
    .into_response())
}
