// src/fetch.rs

use anyhow::{anyhow, Context, Result};
use mongodb::bson::{self, Document};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::resource::Resource;

async fn get_json_core(client: &Client, url: &Url) -> Result<Value> {
    debug!("Fetching JSON from {}", url);
    client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .json()
        .await
        .with_context(|| format!("Decoding JSON body from {}", url))
}

/// Pull the record array out of a response body.
///
/// The API wraps each collection in an object keyed by the plural resource
/// name, e.g. `{"laureates": [...]}`. Every element must itself be a JSON
/// object; records are carried through untouched as BSON documents.
pub fn extract_documents(body: &Value, key: &str) -> Result<Vec<Document>> {
    let records = body
        .get(key)
        .ok_or_else(|| anyhow!("response body has no top-level `{}` field", key))?
        .as_array()
        .ok_or_else(|| anyhow!("`{}` field is not an array", key))?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            bson::to_document(record)
                .with_context(|| format!("`{}` element {} is not a JSON object", key, i))
        })
        .collect()
}

/// Fetch one resource collection from the API and return its records.
pub async fn fetch_documents(
    client: &Client,
    base: &str,
    resource: Resource,
) -> Result<Vec<Document>> {
    let url = resource.endpoint(base)?;
    let body = get_json_core(client, &url).await?;
    let docs = extract_documents(&body, resource.plural())
        .with_context(|| format!("extracting `{}` from {}", resource.plural(), url))?;
    info!(resource = %resource, count = docs.len(), "fetched");
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_records_under_plural_key() {
        let body = json!({
            "laureates": [
                {"firstname": "Marie", "surname": "Curie", "bornCountry": "Poland"},
                {"firstname": "Albert", "surname": "Einstein", "bornCountry": "Germany"},
            ]
        });
        let docs = extract_documents(&body, "laureates").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].get_str("firstname").unwrap(), "Marie");
        assert_eq!(docs[1].get_str("bornCountry").unwrap(), "Germany");
    }

    #[test]
    fn records_survive_untouched() {
        // Nested structure must come through exactly as the API sent it.
        let body = json!({
            "prizes": [{
                "year": "1903",
                "category": "physics",
                "laureates": [{"id": "6", "share": "4"}],
            }]
        });
        let docs = extract_documents(&body, "prizes").unwrap();
        let prize = &docs[0];
        assert_eq!(prize.get_str("year").unwrap(), "1903");
        let shares = prize.get_array("laureates").unwrap();
        assert_eq!(shares.len(), 1);
    }

    #[test]
    fn missing_key_is_an_error() {
        let body = json!({"prizes": []});
        let err = extract_documents(&body, "laureates").unwrap_err();
        assert!(err.to_string().contains("laureates"));
    }

    #[test]
    fn non_array_value_is_an_error() {
        let body = json!({"laureates": {"firstname": "Marie"}});
        assert!(extract_documents(&body, "laureates").is_err());
    }

    #[test]
    fn non_object_element_is_an_error() {
        let body = json!({"laureates": [1, 2, 3]});
        assert!(extract_documents(&body, "laureates").is_err());
    }

    #[test]
    fn empty_collection_is_fine() {
        let body = json!({"laureates": []});
        assert!(extract_documents(&body, "laureates").unwrap().is_empty());
    }
}
