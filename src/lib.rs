pub mod error;
pub mod handler;
pub mod model;
pub mod response;
pub mod route;
pub mod schema;
pub mod service;
pub mod store;

use crate::service::TodoService;

// Struct representing the application state
pub struct AppState {
    pub todo_service: TodoService,
}
