use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{error::ApiError, schema::ListTodosParams, AppState};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Todo read API with Rust, SQLX, SQLite, and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for getting a specific Todo by ID
pub async fn get_todo(
    Path(todo_id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = data.todo_service.get_todo(todo_id).await?;
    Ok((StatusCode::OK, Json(todo)))
}

// Handler for the paginated, filtered Todo listing
pub async fn get_todos(
    State(data): State<Arc<AppState>>,
    Query(params): Query<ListTodosParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = data.todo_service.get_todos(params).await?;
    Ok((StatusCode::OK, Json(page)))
}
