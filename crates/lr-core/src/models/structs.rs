use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Rol, TipoTransaccion};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub rol: Rol,
    pub grupo: Option<i64>,
    pub uuid: Uuid,
    pub exento_pago: bool,
    pub inactivo_desde: Option<NaiveDate>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grupo {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asistencia {
    pub id: i64,
    pub alumno: i64,
    pub fecha: NaiveDate,
    pub presente: bool,
    pub nota: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDay {
    pub id: i64,
    pub grupo: i64,
    pub fecha: NaiveDate,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pago {
    pub id: i64,
    pub alumno: i64,
    pub fecha_pago: NaiveDate,
    pub numero_referencia: String,
    pub banco_emisor: Option<String>,
    pub tipo_transaccion: TipoTransaccion,
    pub captura_comprobante: Option<String>,
}
