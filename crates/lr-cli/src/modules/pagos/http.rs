use reqwest::Method;

use crate::modules::system::http::{
    append_params, build_params, opt_param, send_request, MultipartFields, RequestBody,
};
use crate::modules::system::CommandContext;

pub(crate) async fn list_pagos(
    ctx: &CommandContext<'_>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> anyhow::Result<reqwest::Response> {
    let mut url = format!("{}/pagos/", ctx.api.addr().trim_end_matches('/'));
    let params = build_params([
        opt_param("page", page.map(|value| value.to_string())),
        opt_param("page_size", page_size.map(|value| value.to_string())),
    ]);
    append_params(&mut url, params);
    send_request(ctx, Method::GET, url, RequestBody::Empty).await
}

pub(crate) async fn get_pago(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/pagos/{}/", ctx.api.addr().trim_end_matches('/'), id);
    send_request(ctx, Method::GET, url, RequestBody::Empty).await
}

pub(crate) async fn create_pago(
    ctx: &CommandContext<'_>,
    fields: MultipartFields,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/pagos/", ctx.api.addr().trim_end_matches('/'));
    send_request(ctx, Method::POST, url, RequestBody::Multipart(fields)).await
}

pub(crate) async fn update_pago(
    ctx: &CommandContext<'_>,
    id: i64,
    fields: MultipartFields,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/pagos/{}/", ctx.api.addr().trim_end_matches('/'), id);
    send_request(ctx, Method::PATCH, url, RequestBody::Multipart(fields)).await
}

pub(crate) async fn delete_pago(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/pagos/{}/", ctx.api.addr().trim_end_matches('/'), id);
    send_request(ctx, Method::DELETE, url, RequestBody::Empty).await
}
