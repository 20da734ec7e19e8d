pub mod auth;
pub mod pagination;
pub mod stats;

pub use auth::*;
pub use pagination::*;
pub use stats::*;
