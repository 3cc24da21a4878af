use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite};

use crate::model::TodoRecord;

// Filter criteria for the todo listing query. Date bounds are inclusive
// against the creation timestamp; a missing bound leaves that side open.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub weather: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

// Read-side seam over the relational store. Kept as a trait so handlers and
// tests can run against a substitute store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_by_id(&self, todo_id: i64) -> Result<Option<TodoRecord>, sqlx::Error>;

    // Returns one page of matching rows, newest first, plus the total number
    // of rows matching the filter.
    async fn find_by_filters(
        &self,
        filter: &TodoFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TodoRecord>, i64), sqlx::Error>;
}

pub struct SqliteTodoStore {
    db: Pool<Sqlite>,
}

impl SqliteTodoStore {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn find_by_id(&self, todo_id: i64) -> Result<Option<TodoRecord>, sqlx::Error> {
        sqlx::query_as::<_, TodoRecord>(
            "SELECT t.id, t.title, t.contents, t.weather, t.user_id, u.email AS user_email, \
                    t.created_at, t.modified_at \
             FROM todos t \
             JOIN users u ON u.id = t.user_id \
             WHERE t.id = ?",
        )
        .bind(todo_id)
        .fetch_optional(&self.db)
        .await
    }

    async fn find_by_filters(
        &self,
        filter: &TodoFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TodoRecord>, i64), sqlx::Error> {
        // id breaks ties between equal timestamps so pagination stays stable
        let rows = sqlx::query_as::<_, TodoRecord>(
            "SELECT t.id, t.title, t.contents, t.weather, t.user_id, u.email AS user_email, \
                    t.created_at, t.modified_at \
             FROM todos t \
             JOIN users u ON u.id = t.user_id \
             WHERE (?1 IS NULL OR t.weather = ?1) \
               AND (?2 IS NULL OR t.created_at >= ?2) \
               AND (?3 IS NULL OR t.created_at <= ?3) \
             ORDER BY t.created_at DESC, t.id DESC \
             LIMIT ?4 OFFSET ?5",
        )
        .bind(filter.weather.as_deref())
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) \
             FROM todos t \
             WHERE (?1 IS NULL OR t.weather = ?1) \
               AND (?2 IS NULL OR t.created_at >= ?2) \
               AND (?3 IS NULL OR t.created_at <= ?3)",
        )
        .bind(filter.weather.as_deref())
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_one(&self.db)
        .await?;

        Ok((rows, total))
    }
}

// Create the read-model tables if they don't exist
pub async fn init_db(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        nickname TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'USER'
    );"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        contents TEXT NOT NULL,
        weather TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users(id),
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        modified_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
