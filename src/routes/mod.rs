use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod articles;
pub mod bookmarks;
pub mod categories;
pub mod search;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Map a service failure onto an HTTP response with a JSON error body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody {
            error: err.to_string(),
        }),
        ServiceError::TypeConstraint(_) | ServiceError::Form(_) => {
            HttpResponse::BadRequest().json(ErrorBody {
                error: err.to_string(),
            })
        }
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

/// Register every API route on an actix `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(articles::show_home_feed)
        .service(articles::show_article)
        .service(search::search_articles)
        .service(categories::show_categories)
        .service(categories::show_category_articles)
        .service(bookmarks::show_bookmarks)
        .service(bookmarks::toggle_bookmark);
}
