use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tokio::fs;

use crate::{
    dto::{customers::CreateCustomerRequest, vegetables::CreateVegetableRequest},
    store::{Store, StoreResult},
};

/// Initial store contents, read from the file named by `STORE_SEED_PATH`.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub vegetables: Vec<CreateVegetableRequest>,
    #[serde(default)]
    pub customers: Vec<CreateCustomerRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub vegetables: usize,
    pub customers: usize,
}

impl Seed {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("seed file is not valid JSON")
    }

    /// Validates and inserts every record. Stops at the first bad record.
    pub fn apply(self, store: &mut Store) -> StoreResult<SeedSummary> {
        let summary = SeedSummary {
            vegetables: self.vegetables.len(),
            customers: self.customers.len(),
        };
        for vegetable in self.vegetables {
            store.add_vegetable(vegetable.into_vegetable()?);
        }
        for customer in self.customers {
            store.add_customer(customer.into_customer()?)?;
        }
        Ok(summary)
    }
}

pub async fn load_seed(path: &Path) -> anyhow::Result<Seed> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    Seed::from_json(&raw)
}
