use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct CreateSessionDayRequest {
    pub grupo: i64,
    pub fecha: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Serialize)]
pub struct UpdateSessionDayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
