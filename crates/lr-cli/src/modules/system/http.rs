use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, warn};

use lr_core::{RefreshRequest, RefreshResponse};

use crate::modules::auth::{RefreshError, TokenStore};
use crate::modules::system::CommandContext;

type RefreshOutcome = Result<String, RefreshError>;

struct RefreshState {
    in_flight: bool,
    queue: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// HTTP client for the API. Owns the stored token pair and the refresh
/// bookkeeping, so concurrent callers share one refresh round trip.
#[derive(Clone)]
pub(crate) struct ApiClient {
    http: reqwest::Client,
    addr: String,
    allow_insecure: bool,
    store: Arc<dyn TokenStore>,
    refresh: Arc<Mutex<RefreshState>>,
}

impl ApiClient {
    pub(crate) fn new(
        http: reqwest::Client,
        addr: String,
        allow_insecure: bool,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            http,
            addr,
            allow_insecure,
            store,
            refresh: Arc::new(Mutex::new(RefreshState {
                in_flight: false,
                queue: Vec::new(),
            })),
        }
    }

    pub(crate) fn addr(&self) -> &str {
        &self.addr
    }

    pub(crate) fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Sends a request, refreshing the access token and resubmitting once
    /// on 401. A 401 with no stored refresh token is returned as-is; a
    /// failed refresh becomes the request's error.
    pub(crate) async fn send_request(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
    ) -> anyhow::Result<reqwest::Response> {
        let first = self
            .send_request_once(method.clone(), url.clone(), body.clone())
            .await?;
        if first.status() != StatusCode::UNAUTHORIZED {
            return Ok(first);
        }
        info!(method = %method, url = %url, "http request unauthorized; refreshing access token");
        match self.refresh_access().await {
            Ok(_) => self.send_request_once(method, url, body).await,
            Err(RefreshError::MissingRefreshToken) => Ok(first),
            Err(err) => Err(err.into()),
        }
    }

    async fn send_request_once(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
    ) -> anyhow::Result<reqwest::Response> {
        if url.starts_with("http://") && !self.allow_insecure {
            anyhow::bail!("refusing to use http:// without --insecure");
        }
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(token) = self.store.get_access()? {
            builder = builder.headers(auth_headers(&token)?);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(payload) => builder.json(&payload),
            RequestBody::Multipart(fields) => builder.multipart(fields.to_form()?),
        };
        debug!(method = %method, url = %url, "http request");
        let start = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    /// Obtains a fresh access token, coalescing concurrent callers into a
    /// single round trip. The caller that finds no refresh in flight runs
    /// the exchange; everyone else queues and is settled with the same
    /// outcome, in arrival order.
    pub(crate) async fn refresh_access(&self) -> RefreshOutcome {
        let waiter = {
            let mut state = self.refresh.lock().await;
            if state.in_flight {
                let (tx, rx) = oneshot::channel();
                state.queue.push(tx);
                Some(rx)
            } else {
                state.in_flight = true;
                None
            }
        };

        if let Some(rx) = waiter {
            return match rx.await {
                Ok(outcome) => outcome,
                Err(_) => Err(RefreshError::Transport(
                    "refresh settled without an outcome".to_string(),
                )),
            };
        }

        let outcome = self.run_refresh().await;
        let mut state = self.refresh.lock().await;
        for tx in state.queue.drain(..) {
            let _ = tx.send(outcome.clone());
        }
        state.in_flight = false;
        outcome
    }

    async fn run_refresh(&self) -> RefreshOutcome {
        let refresh_token = match self.store.get_refresh() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.clear_tokens();
                return Err(RefreshError::MissingRefreshToken);
            }
            Err(err) => return Err(RefreshError::Storage(err.to_string())),
        };
        let url = format!("{}/token/refresh/", self.addr.trim_end_matches('/'));
        debug!(url = %url, "refreshing access token");
        let response = match self
            .http
            .post(&url)
            .json(&RefreshRequest {
                refresh: refresh_token,
            })
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                self.clear_tokens();
                return Err(RefreshError::Transport(err.to_string()));
            }
        };
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            self.clear_tokens();
            return Err(RefreshError::Rejected { status, body });
        }
        let parsed: RefreshResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(err) => {
                self.clear_tokens();
                return Err(RefreshError::Transport(err.to_string()));
            }
        };
        if let Err(err) = self.store.set_access(&parsed.access) {
            return Err(RefreshError::Storage(err.to_string()));
        }
        Ok(parsed.access)
    }

    pub(crate) fn clear_tokens(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear stored tokens");
        }
    }
}

/// Request payload shapes the client knows how to (re)submit.
#[derive(Debug, Clone)]
pub(crate) enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartFields),
}

/// Plain-data form description. `reqwest::multipart::Form` is not `Clone`,
/// so the form is rebuilt from this on every submission attempt.
#[derive(Debug, Clone, Default)]
pub(crate) struct MultipartFields {
    pub(crate) text: Vec<(String, String)>,
    pub(crate) file: Option<FilePart>,
}

#[derive(Debug, Clone)]
pub(crate) struct FilePart {
    pub(crate) field_name: String,
    pub(crate) file_name: String,
    pub(crate) mime: String,
    pub(crate) bytes: Vec<u8>,
}

impl MultipartFields {
    fn to_form(&self) -> anyhow::Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in &self.text {
            form = form.text(key.clone(), value.clone());
        }
        if let Some(file) = &self.file {
            let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)?;
            form = form.part(file.field_name.clone(), part);
        }
        Ok(form)
    }
}

pub(crate) async fn send_request(
    ctx: &CommandContext<'_>,
    method: Method,
    url: String,
    body: RequestBody,
) -> anyhow::Result<reqwest::Response> {
    ctx.api.send_request(method, url, body).await
}

fn auth_headers(token: &str) -> anyhow::Result<HeaderMap> {
    if token.trim().is_empty() {
        anyhow::bail!("access token is empty (run `lr login` or set LR_TOKEN)");
    }
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

pub(crate) async fn print_json_response(response: reqwest::Response) -> anyhow::Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {status} {body}");
    }
    let body: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub(crate) async fn print_empty_response(
    response: reqwest::Response,
    message: &str,
) -> anyhow::Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {status} {body}");
    }
    println!("{message}");
    Ok(())
}

pub(crate) async fn parse_json<T: for<'de> serde::Deserialize<'de>>(
    response: reqwest::Response,
) -> anyhow::Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {status} {body}");
    }
    Ok(response.json().await?)
}

pub(crate) fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub(crate) fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

pub(crate) fn append_params(url: &mut String, params: Vec<(String, String)>) {
    if params.is_empty() {
        return;
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    url.push('?');
    url.push_str(&query);
}
