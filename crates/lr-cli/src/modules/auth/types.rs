use reqwest::StatusCode;

/// Why a token refresh did not produce a new access token.
#[derive(Debug, Clone, thiserror::Error)]
pub(crate) enum RefreshError {
    #[error("no refresh token stored")]
    MissingRefreshToken,
    #[error("token refresh rejected: {status} {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("token refresh failed: {0}")]
    Transport(String),
    #[error("token storage failed: {0}")]
    Storage(String),
}
