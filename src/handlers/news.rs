// POST /api/news, GET /api/news/categories handlers

use std::convert::Infallible;
use std::sync::Arc;

use crate::context::AppContext;
use crate::models::{CategoriesResponse, NewsRequest, NewsResponse};
use crate::news::catalog;

pub async fn news_response(request: NewsRequest, ctx: &AppContext) -> NewsResponse {
    match ctx
        .news
        .fetch_articles(&request.category, &request.country, request.limit)
        .await
    {
        Ok(articles) => NewsResponse::from_articles(&request, articles),
        Err(e) => NewsResponse::failure(&request, e.to_string()),
    }
}

pub fn categories_response() -> CategoriesResponse {
    CategoriesResponse {
        success: true,
        categories: catalog::categories(),
        countries: catalog::countries(),
    }
}

pub async fn news_handler(
    request: NewsRequest,
    ctx: Arc<AppContext>,
) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&news_response(request, &ctx).await))
}

pub async fn categories_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&categories_response()))
}
