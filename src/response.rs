use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::TodoRecord;

// Reduced view of a user embedded in a TodoResponse
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
}

// Client-facing shape of a single Todo item
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    pub user: UserSummary,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl From<TodoRecord> for TodoResponse {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            contents: record.contents,
            weather: record.weather,
            user: UserSummary {
                id: record.user_id,
                email: record.user_email,
            },
            created_at: record.created_at,
            modified_at: record.modified_at,
        }
    }
}

// An offset-based slice of a filtered result set with total-count metadata.
// `page` echoes the 1-indexed value the client asked for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: i64, size: i64, total_elements: i64) -> Self {
        let total_pages = if size > 0 && total_elements > 0 {
            (total_elements + size - 1) / size
        } else {
            0
        };
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}
