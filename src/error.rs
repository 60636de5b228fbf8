// Rejections and the recovery handler for the HTTP layer

use std::convert::Infallible;

use serde::Serialize;
use thiserror::Error;
use tracing::error;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl Reject for ApiError {}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

fn error_reply(status: StatusCode, detail: impl Into<String>) -> warp::reply::Response {
    let body = ErrorBody {
        detail: detail.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

/// Turn any rejection into a JSON `{"detail": ...}` response.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if err.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "Not Found"));
    }

    if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, e.to_string()));
    }

    if let Some(e) = err.find::<ApiError>() {
        error!(error = %e, "request failed");
        return Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
    }

    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(error_reply(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Media Type",
        ));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"));
    }

    error!(rejection = ?err, "unhandled rejection");
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    ))
}
