// src/resource.rs

use anyhow::{Context, Result};
use url::Url;

/// Default base of the Nobel Prize API. Override with `NOBEL_API_BASE`.
pub const DEFAULT_API_BASE: &str = "http://api.nobelprize.org";

/// The two resource collections the API exposes.
///
/// The singular name appears in the endpoint URL; the plural name is both
/// the top-level array key in the response body and the target collection
/// name in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Prize,
    Laureate,
}

impl Resource {
    /// Every resource, in load order.
    pub const ALL: [Resource; 2] = [Resource::Prize, Resource::Laureate];

    pub fn singular(self) -> &'static str {
        match self {
            Resource::Prize => "prize",
            Resource::Laureate => "laureate",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Resource::Prize => "prizes",
            Resource::Laureate => "laureates",
        }
    }

    /// Build the API endpoint `<base>/v1/<singular>.json` for this resource.
    pub fn endpoint(self, base: &str) -> Result<Url> {
        let base = Url::parse(base).with_context(|| format!("parsing API base URL {}", base))?;
        base.join(&format!("v1/{}.json", self.singular()))
            .with_context(|| format!("building endpoint for {}", self.singular()))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_singular_name() {
        let url = Resource::Prize.endpoint(DEFAULT_API_BASE).unwrap();
        assert_eq!(url.as_str(), "http://api.nobelprize.org/v1/prize.json");

        let url = Resource::Laureate.endpoint(DEFAULT_API_BASE).unwrap();
        assert_eq!(url.as_str(), "http://api.nobelprize.org/v1/laureate.json");
    }

    #[test]
    fn endpoint_respects_custom_base() {
        let url = Resource::Laureate.endpoint("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/laureate.json");
    }

    #[test]
    fn endpoint_rejects_garbage_base() {
        assert!(Resource::Prize.endpoint("not a url").is_err());
    }

    #[test]
    fn load_order_is_prizes_then_laureates() {
        assert_eq!(Resource::ALL, [Resource::Prize, Resource::Laureate]);
    }
}
