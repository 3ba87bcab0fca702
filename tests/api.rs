use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use pushkind_news::models::config::ServerConfig;
use pushkind_news::repository::{BookmarkStore, CatalogRepository};
use pushkind_news::routes::configure;
use pushkind_news::seed::parse_catalog;

mod common;

fn state() -> (CatalogRepository, BookmarkStore) {
    let catalog = parse_catalog(common::SCENARIO_DOCUMENT).expect("scenario catalog is valid");
    let bookmarks = BookmarkStore::from_articles(catalog.articles());
    (CatalogRepository::new(catalog), bookmarks)
}

macro_rules! init_app {
    () => {{
        let (repo, bookmarks) = state();
        test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(bookmarks))
                .app_data(web::Data::new(ServerConfig::default()))
                .configure(configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn home_feed_filters_by_category() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/v1/articles?category=Tech")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["selected"], "Tech");
    assert_eq!(body["featured"]["id"], "1");
    assert_eq!(body["articles"][0]["id"], "3");
    assert_eq!(body["chips"][0], "All");
}

#[actix_web::test]
async fn unknown_article_is_404() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/v1/articles/404").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn article_detail_includes_related() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/v1/articles/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["paragraphs"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["related"][0]["id"], "3");
}

#[actix_web::test]
async fn inactive_search_has_no_content() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/v1/search").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn search_without_matches_is_empty_array() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/v1/search?query=zzz")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, Value::Array(vec![]));
}

#[actix_web::test]
async fn search_filters_by_categories() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/v1/search?categories=Sports")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], "2");
}

#[actix_web::test]
async fn bookmark_toggle_is_shared() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/v1/bookmarks/3").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["bookmarked"], true);

    let req = test::TestRequest::get().uri("/v1/bookmarks").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<_> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|a| a["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["2", "3"]);

    let req = test::TestRequest::get().uri("/v1/articles/3").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["is_bookmarked"], true);
}

#[actix_web::test]
async fn categories_list_resolves_icons() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/v1/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body[0]["icon"], "smartphone");
    assert_eq!(body[1]["icon"], "trophy");

    let req = test::TestRequest::get()
        .uri("/v1/categories/Weather/articles")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
