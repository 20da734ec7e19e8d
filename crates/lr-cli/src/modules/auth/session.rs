use chrono::{DateTime, TimeZone, Utc};
use reqwest::Method;
use tracing::debug;

use lr_core::{LoginRequest, TokenPair};

use super::jwt::decode_claims;
use crate::modules::system::http::{parse_json, ApiClient, RequestBody};

/// Authentication state derived from the stored token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionState {
    Bootstrapping,
    Authenticated {
        user_id: Option<i64>,
        expires_at: Option<DateTime<Utc>>,
    },
    Unauthenticated,
}

pub(crate) struct Session {
    api: ApiClient,
    state: SessionState,
}

impl Session {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: SessionState::Bootstrapping,
        }
    }

    pub(crate) fn state(&self) -> &SessionState {
        &self.state
    }

    /// Restores authentication from stored tokens. An expired or unreadable
    /// access token is traded in for a fresh one when a refresh token exists;
    /// otherwise the session settles as unauthenticated.
    pub(crate) async fn bootstrap(&mut self) -> anyhow::Result<()> {
        let access = match self.api.store().get_access()? {
            Some(token) => token,
            None => {
                self.state = SessionState::Unauthenticated;
                return Ok(());
            }
        };
        if let Some(state) = authenticated_state(&access) {
            if still_valid(&state) {
                self.state = state;
                return Ok(());
            }
        }
        debug!("stored access token expired or unreadable; refreshing");
        match self.api.refresh_access().await {
            Ok(access) => {
                self.state = authenticated_state(&access).unwrap_or(SessionState::Authenticated {
                    user_id: None,
                    expires_at: None,
                });
            }
            Err(err) => {
                debug!(error = %err, "token refresh failed during bootstrap");
                self.state = SessionState::Unauthenticated;
            }
        }
        Ok(())
    }

    /// Exchanges credentials for a token pair and stores it. On failure the
    /// stored tokens and the current state are left as they were.
    pub(crate) async fn login(&mut self, username: &str, password: &str) -> anyhow::Result<()> {
        let url = format!("{}/token/", self.api.addr().trim_end_matches('/'));
        let payload = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .api
            .send_request(Method::POST, url, RequestBody::Json(payload))
            .await?;
        let tokens: TokenPair = parse_json(response).await?;
        self.api.store().set_access(&tokens.access)?;
        self.api.store().set_refresh(&tokens.refresh)?;
        self.state = authenticated_state(&tokens.access).unwrap_or(SessionState::Authenticated {
            user_id: None,
            expires_at: None,
        });
        Ok(())
    }

    /// Drops the stored tokens. Local only, nothing is revoked server side.
    pub(crate) fn logout(&mut self) {
        self.api.clear_tokens();
        self.state = SessionState::Unauthenticated;
    }
}

fn authenticated_state(access: &str) -> Option<SessionState> {
    let claims = decode_claims(access)?;
    let expires_at = claims
        .exp
        .and_then(|exp| Utc.timestamp_opt(exp, 0).single());
    Some(SessionState::Authenticated {
        user_id: claims.user_id,
        expires_at,
    })
}

fn still_valid(state: &SessionState) -> bool {
    match state {
        SessionState::Authenticated {
            expires_at: Some(expires_at),
            ..
        } => *expires_at > Utc::now(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    use super::*;
    use crate::modules::auth::store::{MemoryStore, TokenStore};

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"user_id":7}}"#));
        format!("{header}.{payload}.signature")
    }

    fn api_client(addr: &str, store: Arc<MemoryStore>) -> ApiClient {
        ApiClient::new(reqwest::Client::new(), addr.to_string(), true, store)
    }

    #[tokio::test]
    async fn bootstrap_without_tokens_is_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        let refresh = server
            .mock("POST", "/token/refresh/")
            .expect(0)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        let mut session = Session::new(api_client(&server.url(), store));
        assert_eq!(session.state(), &SessionState::Bootstrapping);
        session.bootstrap().await.expect("bootstrap");
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn bootstrap_with_valid_token_authenticates_without_refresh() {
        let mut server = mockito::Server::new_async().await;
        let refresh = server
            .mock("POST", "/token/refresh/")
            .expect(0)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        let exp = Utc::now().timestamp() + 3600;
        store.set_access(&token_with_exp(exp)).expect("set access");
        let mut session = Session::new(api_client(&server.url(), store));
        session.bootstrap().await.expect("bootstrap");
        match session.state() {
            SessionState::Authenticated {
                user_id,
                expires_at,
            } => {
                assert_eq!(*user_id, Some(7));
                assert_eq!(expires_at.map(|at| at.timestamp()), Some(exp));
            }
            other => panic!("expected authenticated state, got {other:?}"),
        }
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn bootstrap_with_expired_token_refreshes() {
        let mut server = mockito::Server::new_async().await;
        let fresh = token_with_exp(Utc::now().timestamp() + 3600);
        let refresh = server
            .mock("POST", "/token/refresh/")
            .with_status(200)
            .with_body(format!(r#"{{"access":"{fresh}"}}"#))
            .expect(1)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        store
            .set_access(&token_with_exp(Utc::now().timestamp() - 3600))
            .expect("set access");
        store.set_refresh("refresh-1").expect("set refresh");
        let mut session = Session::new(api_client(&server.url(), store.clone()));
        session.bootstrap().await.expect("bootstrap");
        assert!(matches!(
            session.state(),
            SessionState::Authenticated { .. }
        ));
        assert_eq!(
            store.get_access().expect("get access").as_deref(),
            Some(fresh.as_str())
        );
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn bootstrap_with_expired_token_and_no_refresh_token() {
        let mut server = mockito::Server::new_async().await;
        let refresh = server
            .mock("POST", "/token/refresh/")
            .expect(0)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        store
            .set_access(&token_with_exp(Utc::now().timestamp() - 3600))
            .expect("set access");
        let mut session = Session::new(api_client(&server.url(), store.clone()));
        session.bootstrap().await.expect("bootstrap");
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(store.get_access().expect("get access"), None);
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn bootstrap_when_refresh_is_rejected_clears_tokens() {
        let mut server = mockito::Server::new_async().await;
        let refresh = server
            .mock("POST", "/token/refresh/")
            .with_status(401)
            .with_body(r#"{"detail":"Token is invalid or expired"}"#)
            .expect(1)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        store
            .set_access(&token_with_exp(Utc::now().timestamp() - 3600))
            .expect("set access");
        store.set_refresh("refresh-1").expect("set refresh");
        let mut session = Session::new(api_client(&server.url(), store.clone()));
        session.bootstrap().await.expect("bootstrap");
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(store.get_access().expect("get access"), None);
        assert_eq!(store.get_refresh().expect("get refresh"), None);
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn bootstrap_with_unreadable_token_refreshes() {
        let mut server = mockito::Server::new_async().await;
        let fresh = token_with_exp(Utc::now().timestamp() + 3600);
        let refresh = server
            .mock("POST", "/token/refresh/")
            .with_status(200)
            .with_body(format!(r#"{{"access":"{fresh}"}}"#))
            .expect(1)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        store.set_access("not-a-jwt").expect("set access");
        store.set_refresh("refresh-1").expect("set refresh");
        let mut session = Session::new(api_client(&server.url(), store));
        session.bootstrap().await.expect("bootstrap");
        assert!(matches!(
            session.state(),
            SessionState::Authenticated { .. }
        ));
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn login_stores_token_pair() {
        let mut server = mockito::Server::new_async().await;
        let access = token_with_exp(Utc::now().timestamp() + 3600);
        let login = server
            .mock("POST", "/token/")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "admin",
                "password": "secret",
            })))
            .with_status(200)
            .with_body(format!(r#"{{"access":"{access}","refresh":"refresh-9"}}"#))
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        let mut session = Session::new(api_client(&server.url(), store.clone()));
        session.login("admin", "secret").await.expect("login");
        assert!(matches!(
            session.state(),
            SessionState::Authenticated { .. }
        ));
        assert_eq!(
            store.get_access().expect("get access").as_deref(),
            Some(access.as_str())
        );
        assert_eq!(
            store.get_refresh().expect("get refresh").as_deref(),
            Some("refresh-9")
        );
        login.assert_async().await;
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let mut server = mockito::Server::new_async().await;
        let _login = server
            .mock("POST", "/token/")
            .with_status(401)
            .with_body(r#"{"detail":"No active account found with the given credentials"}"#)
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        let mut session = Session::new(api_client(&server.url(), store.clone()));
        let err = session
            .login("admin", "wrong")
            .await
            .expect_err("login should fail");
        assert!(err.to_string().contains("Request failed: 401"));
        assert_eq!(store.get_access().expect("get access"), None);
        assert_eq!(store.get_refresh().expect("get refresh"), None);
        assert!(!matches!(
            session.state(),
            SessionState::Authenticated { .. }
        ));
    }

    #[tokio::test]
    async fn logout_clears_stored_tokens() {
        let server = mockito::Server::new_async().await;
        let store = Arc::new(MemoryStore::default());
        store.set_access("a1").expect("set access");
        store.set_refresh("r1").expect("set refresh");
        let mut session = Session::new(api_client(&server.url(), store.clone()));
        session.logout();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(store.get_access().expect("get access"), None);
        assert_eq!(store.get_refresh().expect("get refresh"), None);
    }
}
