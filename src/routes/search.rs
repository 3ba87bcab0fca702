use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::domain::search::SearchOutcome;
use crate::dto::articles::ArticleCardDto;
use crate::forms::search::{SearchForm, SearchFormPayload};
use crate::repository::{BookmarkStore, CatalogRepository};
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::search::search_articles as search_articles_service;

/// Responds `204 No Content` while the search is inactive, otherwise with the
/// matching articles (possibly an empty array).
#[get("/v1/search")]
pub async fn search_articles(
    web::Query(form): web::Query<SearchForm>,
    repo: web::Data<CatalogRepository>,
    bookmarks: web::Data<BookmarkStore>,
) -> impl Responder {
    let payload: SearchFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::Form(e.to_string())),
    };

    match search_articles_service(payload, repo.get_ref(), bookmarks.get_ref()) {
        Ok(SearchOutcome::Inactive) => HttpResponse::NoContent().finish(),
        Ok(SearchOutcome::Results(articles)) => {
            HttpResponse::Ok().json(ArticleCardDto::from_articles(articles, Utc::now()))
        }
        Err(err) => error_response(err),
    }
}
