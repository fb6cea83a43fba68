use depot_catalog::{DurableGood, PerishableGood, ProductError};
use depot_core::{EntityId, Repository, RepositoryError};
use tracing::{info, warn};

use crate::app_config::{DurableGoodSeed, PerishableGoodSeed, SeedConfig};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result of loading seed rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub durable_inserted: usize,
    pub perishable_inserted: usize,
    /// Rows rejected because their id was already taken
    pub skipped: Vec<EntityId>,
}

/// Two independent repositories, one per product kind.
#[derive(Debug, Default)]
pub struct Warehouse {
    pub durable: Repository<DurableGood>,
    pub perishable: Repository<PerishableGood>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a warehouse from configured seed rows.
    pub fn seeded(seed: &SeedConfig) -> Result<(Self, SeedSummary), SeedError> {
        let mut warehouse = Self::new();
        let summary = warehouse.seed(seed)?;
        Ok((warehouse, summary))
    }

    /// Insert every seed row. Duplicate ids are skipped; an invalid row aborts.
    pub fn seed(&mut self, seed: &SeedConfig) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        for row in &seed.durable_goods {
            match self.durable.insert(durable_from_seed(row)?) {
                Ok(()) => summary.durable_inserted += 1,
                Err(RepositoryError::DuplicateId { id }) => {
                    warn!("Skipping durable seed row, id {} already present", id);
                    summary.skipped.push(id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        for row in &seed.perishable_goods {
            match self.perishable.insert(perishable_from_seed(row)?) {
                Ok(()) => summary.perishable_inserted += 1,
                Err(RepositoryError::DuplicateId { id }) => {
                    warn!("Skipping perishable seed row, id {} already present", id);
                    summary.skipped.push(id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            "Seeded {} durable and {} perishable goods ({} skipped)",
            summary.durable_inserted,
            summary.perishable_inserted,
            summary.skipped.len()
        );
        Ok(summary)
    }
}

fn durable_from_seed(row: &DurableGoodSeed) -> Result<DurableGood, ProductError> {
    DurableGood::new(
        row.id,
        row.name.clone(),
        row.quantity,
        row.brand.clone(),
        row.warranty_months,
    )
}

fn perishable_from_seed(row: &PerishableGoodSeed) -> Result<PerishableGood, ProductError> {
    PerishableGood::new(row.id, row.name.clone(), row.quantity, row.expiry_date)
}
