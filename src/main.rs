use anyhow::Result;
use mongodb::bson::doc;
use nobelharvest::{config::Config, fetch, resource::Resource, store::Store};
use reqwest::Client;
use tokio::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) config + clients ─────────────────────────────────────────
    let cfg = Config::from_env();
    info!(api_base = %cfg.api_base, db = %cfg.db_name, "configured");
    let client = Client::new();
    let store = Store::connect(&cfg.mongodb_uri, &cfg.db_name).await?;

    // ─── 3) fetch + insert each resource ─────────────────────────────
    for resource in Resource::ALL {
        let start = Instant::now();
        let docs = fetch::fetch_documents(&client, &cfg.api_base, resource).await?;

        // Inserts are append-only; a non-empty collection means an earlier
        // run's records are still there and counts will double.
        let existing = store.count(resource.plural(), doc! {}).await?;
        if existing > 0 {
            warn!(resource = %resource, existing, "collection already populated; inserting anyway");
        }

        if docs.is_empty() {
            warn!(resource = %resource, "API returned no records; nothing to insert");
            continue;
        }
        let inserted = store.insert_all(resource.plural(), docs).await?;
        info!(resource = %resource, inserted, elapsed = ?start.elapsed(), "loaded");
    }

    // ─── 4) sanity report ────────────────────────────────────────────
    println!("databases: {:?}", store.database_names().await?);
    println!(
        "collections in `{}`: {:?}",
        store.database_name(),
        store.collection_names().await?
    );
    for resource in Resource::ALL {
        let n = store.count(resource.plural(), doc! {}).await?;
        println!("{:>6}  documents in {}", n, resource);
    }

    info!("all done");
    Ok(())
}
