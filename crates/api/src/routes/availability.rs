use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/:kind/:id/schedules/status",
            get(handlers::availability::get_status),
        )
        .route(
            "/api/:kind/:id/schedules/slots",
            get(handlers::availability::get_slots),
        )
}
