use std::sync::Arc;

use crate::error::ApiError;
use crate::response::{Page, TodoResponse};
use crate::schema::ListTodosParams;
use crate::store::{TodoFilter, TodoStore};

// Read-path service: validates filter parameters, translates 1-indexed pages
// to offsets, and maps store rows into client-facing responses.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn get_todo(&self, todo_id: i64) -> Result<TodoResponse, ApiError> {
        let record = self
            .store
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;
        Ok(record.into())
    }

    pub async fn get_todos(
        &self,
        params: ListTodosParams,
    ) -> Result<Page<TodoResponse>, ApiError> {
        if params.page < 1 {
            return Err(ApiError::Validation(
                "page must be 1 or greater".to_string(),
            ));
        }
        if params.size < 1 {
            return Err(ApiError::Validation(
                "size must be 1 or greater".to_string(),
            ));
        }
        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            if start > end {
                return Err(ApiError::Validation(
                    "startDate must not be after endDate".to_string(),
                ));
            }
        }

        let filter = TodoFilter {
            weather: params.weather,
            start_date: params.start_date,
            end_date: params.end_date,
        };
        // page is 1-indexed at the API boundary; saturating math keeps a
        // huge page past the end instead of wrapping to a negative offset
        let offset = params.page.saturating_sub(1).saturating_mul(params.size);
        let (records, total) = self
            .store
            .find_by_filters(&filter, params.size, offset)
            .await?;

        let content = records.into_iter().map(TodoResponse::from).collect();
        Ok(Page::new(content, params.page, params.size, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoRecord;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StubStore {
        todos: Vec<TodoRecord>,
    }

    #[async_trait]
    impl TodoStore for StubStore {
        async fn find_by_id(&self, todo_id: i64) -> Result<Option<TodoRecord>, sqlx::Error> {
            Ok(self.todos.iter().find(|t| t.id == todo_id).cloned())
        }

        async fn find_by_filters(
            &self,
            filter: &TodoFilter,
            limit: i64,
            offset: i64,
        ) -> Result<(Vec<TodoRecord>, i64), sqlx::Error> {
            let matching: Vec<TodoRecord> = self
                .todos
                .iter()
                .filter(|t| match &filter.weather {
                    Some(weather) => &t.weather == weather,
                    None => true,
                })
                .cloned()
                .collect();
            let total = matching.len() as i64;
            let rows = matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            Ok((rows, total))
        }
    }

    fn todo(id: i64, weather: &str) -> TodoRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        TodoRecord {
            id,
            title: format!("todo-{id}"),
            contents: "contents".to_string(),
            weather: weather.to_string(),
            user_id: 1,
            user_email: "user@email.com".to_string(),
            created_at: ts,
            modified_at: ts,
        }
    }

    fn service(todos: Vec<TodoRecord>) -> TodoService {
        TodoService::new(Arc::new(StubStore { todos }))
    }

    fn params(page: i64, size: i64) -> ListTodosParams {
        ListTodosParams {
            page,
            size,
            weather: None,
            start_date: None,
            end_date: None,
        }
    }

    #[tokio::test]
    async fn get_todo_returns_response_for_existing_id() {
        let service = service(vec![todo(1, "sunny")]);
        let response = service.get_todo(1).await.unwrap();
        assert_eq!(response.id, 1);
        assert_eq!(response.user.email, "user@email.com");
    }

    #[tokio::test]
    async fn get_todo_maps_missing_row_to_not_found() {
        let service = service(vec![]);
        let err = service.get_todo(1).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Todo not found");
    }

    #[tokio::test]
    async fn get_todos_rejects_non_positive_page() {
        let service = service(vec![]);
        let err = service.get_todos(params(0, 10)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn get_todos_rejects_inverted_date_range() {
        let service = service(vec![]);
        let mut p = params(1, 10);
        p.start_date = Some(
            NaiveDate::from_ymd_opt(2024, 10, 3)
                .unwrap()
                .and_hms_opt(17, 0, 0)
                .unwrap(),
        );
        p.end_date = Some(
            NaiveDate::from_ymd_opt(2024, 10, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        let err = service.get_todos(p).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn get_todos_translates_page_to_offset() {
        let service = service(vec![todo(1, "sunny"), todo(2, "sunny"), todo(3, "sunny")]);
        let page = service.get_todos(params(2, 2)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn get_todos_huge_page_yields_empty_page() {
        let service = service(vec![todo(1, "sunny")]);
        let page = service.get_todos(params(i64::MAX, 10)).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn get_todos_with_no_matches_returns_empty_page() {
        let service = service(vec![todo(1, "rainy")]);
        let mut p = params(1, 10);
        p.weather = Some("sunny".to_string());
        let page = service.get_todos(p).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }
}
