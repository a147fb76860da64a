mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::database::{MongoDB, Store, UnavailableStore};

/// Connection failures are logged, never fatal: without a database every
/// request ends in a 500.
async fn connect_store(config: &Config) -> Arc<dyn Store> {
    let Some(url) = config.mongo_url.as_deref() else {
        log::error!("❌ MONGO_URL is not set, starting without a database");
        return Arc::new(UnavailableStore::new("MONGO_URL is not set"));
    };

    match MongoDB::new(url, config.mongo_database.as_deref()).await {
        Ok(db) => {
            log::info!("✅ DB Connected Successfully");
            Arc::new(db)
        }
        Err(e) => {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}

fn cors(origins: &[String]) -> Cors {
    let cors = if origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("🚀 Starting RECIPEDIA...");

    let store = connect_store(&config).await;
    let store_data: web::Data<dyn Store> = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!(
        "📚 Swagger UI available at: http://{}:{}/swagger-ui/",
        config.host,
        config.port
    );

    let cors_origins = config.cors_allowed_origins.clone();
    let openapi = api::swagger::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(cors(&cors_origins))
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
