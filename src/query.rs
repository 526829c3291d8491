// src/query.rs

use anyhow::Result;
use mongodb::bson::{doc, Document};
use tracing::debug;

use crate::store::Store;

/// How an exploration evaluates its filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Count,
    FindOne,
}

/// One entry of the exploration sequence: a labelled filter and how to run it.
pub struct Exploration {
    pub label: &'static str,
    pub collection: &'static str,
    pub filter: Document,
    pub kind: QueryKind,
}

/// The fixed exploration sequence, in the order the results are reported.
///
/// The first three entries are the baseline sanity block (raw counts plus a
/// sample prize document); the rest interrogate the laureates collection
/// with progressively narrower filters.
pub fn catalogue() -> Vec<Exploration> {
    vec![
        Exploration {
            label: "all prizes",
            collection: "prizes",
            filter: doc! {},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "all laureates",
            collection: "laureates",
            filter: doc! {},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "sample prize document",
            collection: "prizes",
            filter: doc! {},
            kind: QueryKind::FindOne,
        },
        Exploration {
            label: "laureates who died in the USA",
            collection: "laureates",
            filter: doc! {"diedCountry": "USA"},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "laureates who died in the USA but were born in Germany",
            collection: "laureates",
            filter: doc! {"diedCountry": "USA", "bornCountry": "Germany"},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "Germany-born laureates named Albert who died in the USA",
            collection: "laureates",
            filter: doc! {
                "bornCountry": "Germany",
                "diedCountry": "USA",
                "firstname": "Albert",
            },
            kind: QueryKind::Count,
        },
        Exploration {
            label: "laureates born in the USA, Canada, or Mexico",
            collection: "laureates",
            filter: doc! {"bornCountry": {"$in": ["USA", "Canada", "Mexico"]}},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "laureates who died in the USA and were not born there",
            collection: "laureates",
            filter: doc! {"diedCountry": "USA", "bornCountry": {"$ne": "USA"}},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "organizational laureates (no `born` field)",
            collection: "laureates",
            filter: doc! {"born": {"$exists": false}},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "laureates with at least three prizes",
            collection: "laureates",
            filter: doc! {"prizes.2": {"$exists": true}},
            kind: QueryKind::Count,
        },
        Exploration {
            label: "one Germany-born Albert who died in the USA",
            collection: "laureates",
            filter: doc! {
                "bornCountry": "Germany",
                "diedCountry": "USA",
                "firstname": "Albert",
            },
            kind: QueryKind::FindOne,
        },
    ]
}

/// Run every exploration in order, printing each result to stdout.
pub async fn run_all(store: &Store) -> Result<()> {
    for exploration in catalogue() {
        debug!(label = exploration.label, "running exploration");
        match exploration.kind {
            QueryKind::Count => {
                let n = store
                    .count(exploration.collection, exploration.filter)
                    .await?;
                println!("{:>6}  {}", n, exploration.label);
            }
            QueryKind::FindOne => {
                match store
                    .find_first(exploration.collection, exploration.filter)
                    .await?
                {
                    Some(document) => println!("        {}\n{}", exploration.label, document),
                    None => println!("        {} -> no match", exploration.label),
                }
            }
        }
    }
    Ok(())
}
