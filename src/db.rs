use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens the pool and establishes the first connection, so a bad host or credentials fail here.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(cfg.connect_options())
        .await
        .with_context(|| {
            format!(
                "connect to database {} at {}:{} as {}",
                cfg.name, cfg.host, cfg.port, cfg.user
            )
        })?;
    info!(host = %cfg.host, port = cfg.port, database = %cfg.name, "database connected");
    Ok(db)
}
