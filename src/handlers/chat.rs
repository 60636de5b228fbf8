// POST /api/chat, POST /api/search, GET /api/agents/capabilities handlers

use std::convert::Infallible;
use std::sync::Arc;

use tracing::warn;
use warp::http::StatusCode;
use warp::Reply;

use crate::agents::AgentKind;
use crate::context::AppContext;
use crate::models::{ChatRequest, ChatResponse, SearchRequest};

/// Status and body for a chat request. Unknown agent types are rejected
/// with 400 before any agent is touched.
pub async fn chat_response(request: ChatRequest, ctx: &AppContext) -> (StatusCode, ChatResponse) {
    let kind = match request.agent_type.parse::<AgentKind>() {
        Ok(kind) => kind,
        Err(e) => {
            warn!(agent_type = %request.agent_type, "rejecting chat request");
            return (
                StatusCode::BAD_REQUEST,
                ChatResponse::failure(request.agent_type, e.to_string()),
            );
        }
    };

    (StatusCode::OK, ctx.agents.chat(&request.message, kind).await)
}

pub async fn chat_handler(
    request: ChatRequest,
    ctx: Arc<AppContext>,
) -> Result<warp::reply::Response, Infallible> {
    let (status, body) = chat_response(request, &ctx).await;
    Ok(warp::reply::with_status(warp::reply::json(&body), status).into_response())
}

pub async fn search_handler(
    request: SearchRequest,
    ctx: Arc<AppContext>,
) -> Result<impl warp::Reply, Infallible> {
    let response = ctx.agents.search(&request.query, request.max_results).await;
    Ok(warp::reply::json(&response))
}

pub async fn capabilities_handler(ctx: Arc<AppContext>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&ctx.agents.capabilities().await))
}
