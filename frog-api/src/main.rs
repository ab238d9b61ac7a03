mod adapters;
mod app_state;
mod config;
mod domain;
mod router;
mod routes;

use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frog_api=debug,tower_http=debug".into()),
        )
        .with_timer(LocalTime::rfc_3339())
        .init();

    let config = config::read_config()?;
    let app = router::create(&config);

    let address = config.application.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
