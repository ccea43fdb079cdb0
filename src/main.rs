use anyhow::Result;
use tracing::info;

use cookenu::{api, config, db};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cookenu=info".parse()?),
        )
        .init();

    info!("Starting Cookenu v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load()?;
    info!("Configuration loaded");

    let db_pool = db::init(&cfg).await?;
    info!("Database initialized");

    api::serve(cfg, db_pool).await?;

    Ok(())
}
