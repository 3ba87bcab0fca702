use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::dto::articles::ArticleCardDto;
use crate::dto::categories::CategoryDto;
use crate::repository::{BookmarkStore, CatalogRepository};
use crate::routes::error_response;
use crate::services::categories::{
    show_categories as show_categories_service,
    show_category_articles as show_category_articles_service,
};

#[derive(Serialize)]
struct CategoryArticlesResponse {
    category: CategoryDto,
    articles: Vec<ArticleCardDto>,
}

#[get("/v1/categories")]
pub async fn show_categories(repo: web::Data<CatalogRepository>) -> impl Responder {
    match show_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err),
    }
}

#[get("/v1/categories/{name}/articles")]
pub async fn show_category_articles(
    name: web::Path<String>,
    repo: web::Data<CatalogRepository>,
    bookmarks: web::Data<BookmarkStore>,
) -> impl Responder {
    match show_category_articles_service(&name, repo.get_ref(), bookmarks.get_ref()) {
        Ok((category, articles)) => {
            HttpResponse::Ok().json(CategoryArticlesResponse { category, articles })
        }
        Err(err) => error_response(err),
    }
}
