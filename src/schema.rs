use chrono::NaiveDateTime;

// Query parameters accepted by the todo listing route. Dates are ISO-8601
// local date-times, e.g. 2024-10-01T12:00:00.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    pub weather: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}
