use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::models::config::ServerConfig;
use crate::repository::{BookmarkStore, CatalogRepository};
use crate::routes::error_response;
use crate::services::articles::show_article as show_article_service;
use crate::services::home::show_home_feed as show_home_feed_service;

#[derive(Deserialize, Debug)]
pub struct HomeFeedQueryParams {
    pub category: Option<String>,
}

#[get("/v1/articles")]
pub async fn show_home_feed(
    params: web::Query<HomeFeedQueryParams>,
    repo: web::Data<CatalogRepository>,
    bookmarks: web::Data<BookmarkStore>,
) -> impl Responder {
    let category = params.category.as_deref().unwrap_or_default();

    match show_home_feed_service(category, repo.get_ref(), bookmarks.get_ref()) {
        Ok(feed) => HttpResponse::Ok().json(feed),
        Err(err) => error_response(err),
    }
}

#[get("/v1/articles/{article_id}")]
pub async fn show_article(
    article_id: web::Path<String>,
    repo: web::Data<CatalogRepository>,
    bookmarks: web::Data<BookmarkStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match show_article_service(
        &article_id,
        repo.get_ref(),
        bookmarks.get_ref(),
        server_config.related_limit,
    ) {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(err) => error_response(err),
    }
}
