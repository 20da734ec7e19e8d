use reqwest::Method;

use crate::modules::session_days::{CreateSessionDayRequest, UpdateSessionDayRequest};
use crate::modules::system::http::{
    append_params, build_params, opt_param, send_request, RequestBody,
};
use crate::modules::system::CommandContext;

pub(crate) async fn list_session_days(
    ctx: &CommandContext<'_>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> anyhow::Result<reqwest::Response> {
    let mut url = format!("{}/session-days/", ctx.api.addr().trim_end_matches('/'));
    let params = build_params([
        opt_param("page", page.map(|value| value.to_string())),
        opt_param("page_size", page_size.map(|value| value.to_string())),
    ]);
    append_params(&mut url, params);
    send_request(ctx, Method::GET, url, RequestBody::Empty).await
}

pub(crate) async fn get_session_day(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = format!(
        "{}/session-days/{}/",
        ctx.api.addr().trim_end_matches('/'),
        id
    );
    send_request(ctx, Method::GET, url, RequestBody::Empty).await
}

pub(crate) async fn create_session_day(
    ctx: &CommandContext<'_>,
    payload: CreateSessionDayRequest,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/session-days/", ctx.api.addr().trim_end_matches('/'));
    send_request(
        ctx,
        Method::POST,
        url,
        RequestBody::Json(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn update_session_day(
    ctx: &CommandContext<'_>,
    id: i64,
    payload: UpdateSessionDayRequest,
) -> anyhow::Result<reqwest::Response> {
    let url = format!(
        "{}/session-days/{}/",
        ctx.api.addr().trim_end_matches('/'),
        id
    );
    send_request(
        ctx,
        Method::PATCH,
        url,
        RequestBody::Json(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn delete_session_day(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = format!(
        "{}/session-days/{}/",
        ctx.api.addr().trim_end_matches('/'),
        id
    );
    send_request(ctx, Method::DELETE, url, RequestBody::Empty).await
}

pub(crate) async fn activate_session_day(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = format!(
        "{}/session-days/{}/activate/",
        ctx.api.addr().trim_end_matches('/'),
        id
    );
    send_request(ctx, Method::POST, url, RequestBody::Empty).await
}

pub(crate) async fn deactivate_session_day(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = format!(
        "{}/session-days/{}/deactivate/",
        ctx.api.addr().trim_end_matches('/'),
        id
    );
    send_request(ctx, Method::POST, url, RequestBody::Empty).await
}
