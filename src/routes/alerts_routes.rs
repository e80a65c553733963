use axum::{
    routing::{get, put},
    Router,
};

use crate::{controllers::alerts_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/alerts",
            get(alerts_controller::get_alerts).post(alerts_controller::post_create_alert),
        )
        .route(
            "/api/alerts/:id",
            put(alerts_controller::put_update_alert).delete(alerts_controller::delete_alert),
        )
}
