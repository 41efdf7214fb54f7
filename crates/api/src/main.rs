use std::sync::Arc;

use anyhow::Context;

use banklite_api::app::{self, services::AppServices};
use banklite_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, warnings) = Config::from_env();
    banklite_observability::init(config.log_format);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let services = AppServices::from_config(&config).with_context(|| {
        format!("failed to open user store at {}", config.users_file.display())
    })?;

    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
