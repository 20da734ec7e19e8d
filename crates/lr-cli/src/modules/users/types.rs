use chrono::NaiveDate;
use serde::Serialize;

use lr_core::Rol;

#[derive(Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Rol>,
    // Always serialized: the API requires the field and accepts an explicit null.
    pub grupo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exento_pago: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivo_desde: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Rol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exento_pago: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivo_desde: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
