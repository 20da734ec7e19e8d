use serde::Deserialize;

/// Body returned by `GET /stats/users-count/`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersCountResponse {
    pub athletes_count: i64,
}
