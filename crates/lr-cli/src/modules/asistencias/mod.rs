mod actions;
pub(crate) mod args;
mod http;
pub(crate) mod types;

pub(crate) use actions::handle_asistencia;
pub(crate) use types::{CreateAsistenciaRequest, UpdateAsistenciaRequest};
