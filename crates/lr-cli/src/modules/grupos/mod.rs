mod actions;
pub(crate) mod args;
mod http;
pub(crate) mod types;

pub(crate) use actions::handle_grupo;
pub(crate) use types::{CreateGrupoRequest, UpdateGrupoRequest};
