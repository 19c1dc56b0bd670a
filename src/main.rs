use dotenvy::dotenv;
use std::error::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::{AppConfig, LogFormat};
use activities::web;

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("activities=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let config = AppConfig::from_env();

    init_logging(config.log_format);

    let directory = activities::load_directory(&config)?;
    info!(
        activities = directory.list_activities().await.len(),
        source = ?config.activities_file,
        "activity directory loaded"
    );

    let app = web::build_router(directory, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_bind_addr();
            warn!(
                addr = %config.bind_addr(),
                error = %e,
                fallback = %fallback,
                "bind failed, trying fallback"
            );
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);
    info!("open http://{}/ for the activities page", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
