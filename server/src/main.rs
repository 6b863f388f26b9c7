//! Yandex.Disk public folder viewer (yadisk-view)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod disk;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yadisk_view=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Using Yandex.Disk API at {}", config.disk_api_url);

    let addr = config.socket_addr();
    let state = api::AppState::new(config);

    tracing::info!("REST listening on {}", addr);
    api::rest::serve(addr, state).await
}
