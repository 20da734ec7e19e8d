use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct CreateAsistenciaRequest {
    pub alumno: i64,
    pub fecha: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presente: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateAsistenciaRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alumno: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presente: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota: Option<String>,
}
