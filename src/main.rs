// src/main.rs
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use log::info;
use std::sync::Arc;

mod errors;
mod flows;
mod handlers;
mod models;
mod styles;

use crate::flows::ImageClient;
use crate::handlers::{generate_post_image, list_styles, style_defaults};
use crate::styles::StyleRegistry;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<StyleRegistry>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting InstaGenius service...");

    let client = Arc::new(ImageClient::new(
        std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set"),
    ));
    let registry = Arc::new(StyleRegistry::new(client));

    let app_state = AppState { registry };

    let bind_addr =
        std::env::var("INSTAGENIUS_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1")
                    .route("/generate", web::post().to(generate_post_image))
                    .route("/styles", web::get().to(list_styles))
                    .route(
                        "/styles/{style_id}/defaults",
                        web::post().to(style_defaults),
                    ),
            )
            .route("/health", web::get().to(health_check))
    })
    .bind(bind_addr)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "instagenius",
        "version": "0.1.0"
    }))
}
