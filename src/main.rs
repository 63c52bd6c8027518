mod config;
mod error;
mod routes;

use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // Missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(
        addr = %config.bind_addr(),
        api_base_url = %lyceum_client::config::ApiConfig::from_build_env().base_url(),
        "lyceum listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
