use std::env;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::{Config, Environment, File};
use dotenvy::dotenv;

use pushkind_news::models::config::ServerConfig;
use pushkind_news::repository::{BookmarkStore, CatalogRepository};
use pushkind_news::routes::configure;
use pushkind_news::seed::{default_catalog, load_catalog};

fn load_server_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match load_server_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let catalog = match &server_config.seed_path {
        Some(path) => load_catalog(path),
        None => default_catalog(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
    };

    let bookmarks = BookmarkStore::from_articles(catalog.articles());
    bookmarks.subscribe(|event| {
        log::debug!(
            "Bookmark changed: {} -> {}",
            event.article_id,
            event.bookmarked
        );
    });
    let repo = CatalogRepository::new(catalog);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(bookmarks.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
