// src/bin/explore.rs
//
// Runs the fixed exploration sequence against a database populated by the
// loader. Safe to run against an empty database: counts print as 0.

use anyhow::Result;
use nobelharvest::{config::Config, query, store::Store};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cfg = Config::from_env();
    let store = Store::connect(&cfg.mongodb_uri, &cfg.db_name).await?;

    println!("=== exploring `{}` ===", store.database_name());
    query::run_all(&store).await?;

    info!("done");
    Ok(())
}
