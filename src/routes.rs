// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::context::AppContext;
use crate::error::handle_rejection;
use crate::handlers;

fn with_context(
    ctx: Arc<AppContext>,
) -> impl Filter<Extract = (Arc<AppContext>,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}

/// Request headers accepted on cross-origin calls. warp has no wildcard,
/// so preflights asking for anything outside this list get a 403.
pub const CORS_ALLOWED_HEADERS: [&str; 14] = [
    "accept",
    "accept-language",
    "authorization",
    "cache-control",
    "content-language",
    "content-type",
    "if-match",
    "if-none-match",
    "origin",
    "pragma",
    "user-agent",
    "x-api-key",
    "x-csrf-token",
    "x-requested-with",
];

fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_credentials(true)
        .allow_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allow_headers(CORS_ALLOWED_HEADERS)
}

pub fn configure_routes(
    ctx: Arc<AppContext>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api");

    // GET /api/
    let root = api
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::root_handler);

    // POST /api/status
    let create_status = api
        .and(warp::path("status"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_context(ctx.clone()))
        .and_then(handlers::create_status_handler);

    // GET /api/status
    let list_status = api
        .and(warp::path("status"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_context(ctx.clone()))
        .and_then(handlers::list_status_handler);

    // POST /api/chat
    let chat = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_context(ctx.clone()))
        .and_then(handlers::chat_handler);

    // POST /api/search
    let search = api
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_context(ctx.clone()))
        .and_then(handlers::search_handler);

    // POST /api/news
    let news = api
        .and(warp::path("news"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_context(ctx.clone()))
        .and_then(handlers::news_handler);

    // GET /api/news/categories
    let categories = api
        .and(warp::path!("news" / "categories"))
        .and(warp::get())
        .and_then(handlers::categories_handler);

    // GET /api/agents/capabilities
    let capabilities = api
        .and(warp::path!("agents" / "capabilities"))
        .and(warp::get())
        .and(with_context(ctx))
        .and_then(handlers::capabilities_handler);

    root.or(create_status)
        .or(list_status)
        .or(chat)
        .or(search)
        .or(news)
        .or(categories)
        .or(capabilities)
        .recover(handle_rejection)
        .with(cors())
}
