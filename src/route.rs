use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", get(get_todos))
        .route("/todos/:todo_id", get(get_todo))
        .route("/", get(health_checker_handler))
        .with_state(app_state)
}
