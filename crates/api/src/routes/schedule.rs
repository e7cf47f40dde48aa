use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/:kind/:id/schedules",
            get(handlers::schedule::get_schedules)
                .put(handlers::schedule::update_schedules)
                .delete(handlers::schedule::delete_schedules),
        )
        .route(
            "/api/:kind/:id/schedules/seed",
            post(handlers::schedule::seed_schedules),
        )
        .route(
            "/api/schedules/validate",
            post(handlers::schedule::validate_schedules),
        )
}
