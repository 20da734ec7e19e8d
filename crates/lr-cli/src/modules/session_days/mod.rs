mod actions;
pub(crate) mod args;
mod http;
pub(crate) mod types;

pub(crate) use actions::handle_session_day;
pub(crate) use types::{CreateSessionDayRequest, UpdateSessionDayRequest};
