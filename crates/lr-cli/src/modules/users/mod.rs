mod actions;
pub(crate) mod args;
mod http;
pub(crate) mod types;

pub(crate) use actions::handle_user;
pub(crate) use types::{CreateUserRequest, UpdateUserRequest};
