mod actions;
pub(crate) mod args;
mod jwt;
mod session;
mod store;
pub(crate) mod types;

pub(crate) use actions::{handle_login_command, handle_logout_command, handle_session_command};
pub(crate) use store::{KeyringStore, MemoryStore, TokenStore};
pub(crate) use types::RefreshError;
