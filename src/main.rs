use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::AppConfig;
use activity_signup::services::seed;
use activity_signup::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let directory = seed::load_directory(config.seed_path.as_deref())
        .context("could not load activity seed")?;
    info!(
        activities = directory.len(),
        seed = ?config.seed_path,
        build_id = env!("ACTIVITIES_BUILD_ID"),
        "activity directory ready"
    );

    let app = web::build_router(AppState::new(directory), &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
