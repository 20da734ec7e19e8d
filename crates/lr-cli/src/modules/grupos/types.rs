use serde::Serialize;

#[derive(Serialize)]
pub struct CreateGrupoRequest {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateGrupoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}
