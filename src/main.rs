use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
#[cfg(test)]
mod fixtures;
mod model;
mod report;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let AppState { backend, scanner } =
        AppState::new(&config).expect("Failed to initialize application state");

    let backend_data = web::Data::from(backend);
    let scanner_data = web::Data::new(scanner);

    tracing::info!("Starting screening gateway on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(backend_data.clone())
            .app_data(scanner_data.clone())
            .configure(api::health::configure)
            .configure(api::screening::configure)
            .configure(api::results::configure)
            .configure(api::namescan::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
