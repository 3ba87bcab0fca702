use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::repository::{BookmarkStore, CatalogRepository};
use crate::routes::error_response;
use crate::services::bookmarks::{
    set_bookmark as set_bookmark_service, show_bookmarks as show_bookmarks_service,
};

#[derive(Serialize)]
struct BookmarkResponse {
    article_id: String,
    bookmarked: bool,
}

#[get("/v1/bookmarks")]
pub async fn show_bookmarks(
    repo: web::Data<CatalogRepository>,
    bookmarks: web::Data<BookmarkStore>,
) -> impl Responder {
    match show_bookmarks_service(repo.get_ref(), bookmarks.get_ref()) {
        Ok(articles) => HttpResponse::Ok().json(articles),
        Err(err) => error_response(err),
    }
}

#[post("/v1/bookmarks/{article_id}")]
pub async fn toggle_bookmark(
    article_id: web::Path<String>,
    repo: web::Data<CatalogRepository>,
    bookmarks: web::Data<BookmarkStore>,
) -> impl Responder {
    match set_bookmark_service(&article_id, repo.get_ref(), bookmarks.get_ref()) {
        Ok(bookmarked) => HttpResponse::Ok().json(BookmarkResponse {
            article_id: article_id.into_inner(),
            bookmarked,
        }),
        Err(err) => error_response(err),
    }
}
