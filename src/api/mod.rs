pub mod faculty;
pub mod health;

use axum::{routing::get, Router};

use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/faculty", get(faculty::list_faculty))
        .with_state(state)
}
