use axum::{http::StatusCode, http::Uri, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "PriceWatch - stock price alert API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "alerts": {
                "list": "GET /api/alerts",
                "create": "POST /api/alerts",
                "update": "PUT /api/alerts/:id",
                "delete": "DELETE /api/alerts/:id"
            }
        }
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Route {uri} not found"),
        })),
    )
}
