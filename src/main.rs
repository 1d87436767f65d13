mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        api_url = %config.host.api_url,
        auth_url = %config.host.auth_url,
        remotes = config.host.remotes.len(),
        remotes_dir = %config.remotes_dir.display(),
        "host configuration loaded"
    );

    let port = config.port;
    let app = routes::app(config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "mesto host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
