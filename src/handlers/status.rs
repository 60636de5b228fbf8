// GET /api/, POST /api/status, GET /api/status handlers

use std::convert::Infallible;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::store::{StoreError, LIST_LIMIT};

pub async fn root_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&json!({ "message": "Hello World" })))
}

pub async fn record_status(
    request: StatusCheckCreate,
    ctx: &AppContext,
) -> Result<StatusCheck, StoreError> {
    let check = StatusCheck::new(request.client_name);
    ctx.store.insert(&check).await?;

    info!(id = %check.id, client = %check.client_name, "status check recorded");
    Ok(check)
}

pub async fn create_status_handler(
    request: StatusCheckCreate,
    ctx: Arc<AppContext>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let check = record_status(request, &ctx).await.map_err(ApiError::from)?;
    Ok(warp::reply::json(&check))
}

pub async fn list_status_handler(ctx: Arc<AppContext>) -> Result<impl warp::Reply, warp::Rejection> {
    let checks = ctx.store.list(LIST_LIMIT).await.map_err(ApiError::from)?;
    Ok(warp::reply::json(&checks))
}
