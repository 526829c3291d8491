// src/store.rs

use anyhow::{Context, Result};
use mongodb::bson::Document;
use mongodb::{Client, Database};
use tracing::debug;

/// Handle to the document store: one client, one database.
///
/// The driver connects lazily, so constructing a `Store` only validates the
/// URI; the first operation performs the actual connection. Collections and
/// the database itself are created implicitly on first write.
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .with_context(|| format!("parsing MongoDB URI {}", uri))?;
        let db = client.database(db_name);
        Ok(Self { client, db })
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    /// Bulk-insert `docs` into `collection`, returning how many went in.
    /// No upsert and no dedup: inserting the same records twice stores them twice.
    pub async fn insert_all(&self, collection: &str, docs: Vec<Document>) -> Result<usize> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_many(docs)
            .await
            .with_context(|| format!("inserting into `{}`", collection))?;
        debug!(collection, inserted = result.inserted_ids.len(), "insert_many done");
        Ok(result.inserted_ids.len())
    }

    /// Count documents in `collection` matching `filter`.
    pub async fn count(&self, collection: &str, filter: Document) -> Result<u64> {
        self.db
            .collection::<Document>(collection)
            .count_documents(filter)
            .await
            .with_context(|| format!("counting documents in `{}`", collection))
    }

    /// First document in `collection` matching `filter`, if any.
    pub async fn find_first(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        self.db
            .collection::<Document>(collection)
            .find_one(filter)
            .await
            .with_context(|| format!("finding one document in `{}`", collection))
    }

    /// Names of the collections in the target database.
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        self.db
            .list_collection_names()
            .await
            .context("listing collection names")
    }

    /// Names of every database the server manages.
    pub async fn database_names(&self) -> Result<Vec<String>> {
        self.client
            .list_database_names()
            .await
            .context("listing database names")
    }
}
