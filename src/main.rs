mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::build_router(AppState::new(db, &config));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;

    tracing::info!(
        "Starting server on port {} ({})",
        config.server_port,
        config.app_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
