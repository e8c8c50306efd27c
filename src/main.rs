use dotenvy::dotenv;
use tracing::info;

use movies_api::app;
use movies_api::config::settings::AppConfig;
use movies_api::infrastructure::db::memory::load_database;
use movies_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();
    let db = load_database(&config.movies_data)?;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = AppState::new(config, db);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
