pub(crate) mod asistencias;
pub(crate) mod auth;
pub(crate) mod grupos;
pub(crate) mod pagos;
pub(crate) mod session_days;
pub(crate) mod shared;
pub(crate) mod system;
pub(crate) mod users;
