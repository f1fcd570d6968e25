mod config;
mod routes;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let cfg = config::ServerConfig::from_env()?;
    let (app, leptos_options) = routes::leptos_app().map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!(addr = %cfg.addr(), site_root = %leptos_options.site_root, "clubhub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
