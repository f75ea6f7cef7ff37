use anyhow::Context;

use fleet_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fleet_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let app = fleet_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        agency = %config.agency_name,
        data_file = %config.data_file.display(),
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
