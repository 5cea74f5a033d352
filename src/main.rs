use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use school_activities::config::AppConfig;
use school_activities::database::catalog_repo::ActivityCatalog;
use school_activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let catalog = Arc::new(ActivityCatalog::seeded());
    info!(
        build_id = env!("SCHOOL_ACTIVITIES_BUILD_ID"),
        activities = catalog.len(),
        static_dir = %config.static_dir.display(),
        "catalog_seeded"
    );

    let app = web::router(catalog, &config.static_dir);

    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind_failed_trying_fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
