use chrono::NaiveDateTime;

// User role stored as text on the users table ('USER' / 'ADMIN')
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

// Data model representing a Todo item joined with its owning user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    pub user_id: i64,
    pub user_email: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}
