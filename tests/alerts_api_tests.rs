use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pricewatch::{config::Settings, routes, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app(dir: &TempDir) -> Router {
    let settings = Settings {
        alerts_file: dir.path().join("alerts.json"),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
    };

    routes::app(AppState::new(settings))
}

async fn response_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn list_on_fresh_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app.oneshot(get_request("/api/alerts")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["alerts"], serde_json::json!([]));
}

#[tokio::test]
async fn create_then_list_returns_the_alert() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            r#"{"asset_id":"asset_1","type":"price_below","target_value":150}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let created = response_json(res).await;
    assert_eq!(created["asset_symbol"], "SYMBOL_asset_1");
    assert_eq!(created["type"], "price_below");
    assert_eq!(created["target_value"], 150.0);
    assert_eq!(created["is_active"], true);
    assert!(created["triggered_at"].is_null());
    assert!(!created["id"].as_str().unwrap().is_empty());

    let res = app.oneshot(get_request("/api/alerts")).await.unwrap();
    let body = response_json(res).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["alerts"][0], created);
}

#[tokio::test]
async fn create_missing_fields_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .oneshot(json_request("POST", "/api/alerts", r#"{"asset_id":"X"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("missing required fields"));
}

#[tokio::test]
async fn create_invalid_type_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            r#"{"asset_id":"X","type":"bogus","target_value":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("invalid alert type"));
}

#[tokio::test]
async fn put_merges_and_coerces_string_target_value() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            r#"{"asset_id":"asset_1","asset_symbol":"AAPL","type":"price_above","target_value":10}"#,
        ))
        .await
        .unwrap();
    let created = response_json(res).await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/alerts/{id}"),
            r#"{"target_value":"99.5","is_active":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let updated = response_json(res).await;
    assert_eq!(updated["target_value"], 99.5);
    assert_eq!(updated["is_active"], false);
    // untouched fields survive the merge
    assert_eq!(updated["asset_symbol"], "AAPL");
    assert_eq!(updated["type"], "price_above");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn put_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .oneshot(json_request(
            "PUT",
            "/api/alerts/nonexistent-id",
            r#"{"target_value":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_json(res).await;
    assert_eq!(body["error"], "Alert not found");
}

#[tokio::test]
async fn delete_returns_removed_alert_and_list_shrinks() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            r#"{"asset_id":"asset_1","type":"percentage_change","target_value":5}"#,
        ))
        .await
        .unwrap();
    let created = response_json(res).await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/alerts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["message"], "Alert deleted successfully");
    assert_eq!(body["alert"]["id"], id.as_str());

    let res = app.oneshot(get_request("/api/alerts")).await.unwrap();
    let body = response_json(res).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/alerts/nonexistent-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn alerts_survive_a_new_app_instance() {
    let dir = TempDir::new().unwrap();

    let app = test_app(&dir);
    let res = app
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            r#"{"asset_id":"asset_1","type":"price_above","target_value":10}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // a fresh router over the same file sees the persisted alert
    let app = test_app(&dir);
    let res = app.oneshot(get_request("/api/alerts")).await.unwrap();
    let body = response_json(res).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["alerts"][0]["asset_id"], "asset_1");
}

#[tokio::test]
async fn health_reports_healthy() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn index_describes_the_api() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["endpoints"]["alerts"]["list"], "GET /api/alerts");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let res = app.oneshot(get_request("/api/screener")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_json(res).await;
    assert_eq!(body["error"], "Not Found");
}
