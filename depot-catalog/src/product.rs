use chrono::NaiveDate;
use depot_core::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Product kinds held by the warehouse
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductKind {
    Durable,
    Perishable,
}

/// Product construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("Invalid product {id}: {reason}")]
    InvalidEntity { id: EntityId, reason: String },
}

fn validated_name(id: EntityId, name: impl Into<String>) -> Result<String, ProductError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(ProductError::InvalidEntity {
            id,
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(name)
}

// Construction accepts any quantity; only repository updates are range-checked.
fn note_negative_quantity(id: EntityId, quantity: i64) {
    if quantity < 0 {
        warn!("Product {} constructed with negative quantity {}", id, quantity);
    }
}

/// Long-lived goods sold with a warranty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DurableGoodRecord")]
pub struct DurableGood {
    id: EntityId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

#[derive(Deserialize)]
struct DurableGoodRecord {
    id: EntityId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl TryFrom<DurableGoodRecord> for DurableGood {
    type Error = ProductError;

    fn try_from(record: DurableGoodRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.name,
            record.quantity,
            record.brand,
            record.warranty_months,
        )
    }
}

impl DurableGood {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Result<Self, ProductError> {
        let name = validated_name(id, name)?;
        note_negative_quantity(id, quantity);

        Ok(Self {
            id,
            name,
            quantity,
            brand: brand.into(),
            warranty_months,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for DurableGood {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn replace_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

/// Goods that must leave the shelf before their expiry date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PerishableGoodRecord")]
pub struct PerishableGood {
    id: EntityId,
    name: String,
    quantity: i64,
    expiry_date: NaiveDate,
}

#[derive(Deserialize)]
struct PerishableGoodRecord {
    id: EntityId,
    name: String,
    quantity: i64,
    expiry_date: NaiveDate,
}

impl TryFrom<PerishableGoodRecord> for PerishableGood {
    type Error = ProductError;

    fn try_from(record: PerishableGoodRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.name, record.quantity, record.expiry_date)
    }
}

impl PerishableGood {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        expiry_date: NaiveDate,
    ) -> Result<Self, ProductError> {
        let name = validated_name(id, name)?;
        note_negative_quantity(id, quantity);

        Ok(Self {
            id,
            name,
            quantity,
            expiry_date,
        })
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Expired once `today` is past the expiry date.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

impl Entity for PerishableGood {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn replace_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

/// Any product the warehouse stocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Product {
    Durable(DurableGood),
    Perishable(PerishableGood),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Durable(_) => ProductKind::Durable,
            Product::Perishable(_) => ProductKind::Perishable,
        }
    }
}

impl From<DurableGood> for Product {
    fn from(good: DurableGood) -> Self {
        Product::Durable(good)
    }
}

impl From<PerishableGood> for Product {
    fn from(good: PerishableGood) -> Self {
        Product::Perishable(good)
    }
}

impl Entity for Product {
    fn id(&self) -> EntityId {
        match self {
            Product::Durable(good) => good.id(),
            Product::Perishable(good) => good.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Product::Durable(good) => good.name(),
            Product::Perishable(good) => good.name(),
        }
    }

    fn quantity(&self) -> i64 {
        match self {
            Product::Durable(good) => good.quantity(),
            Product::Perishable(good) => good.quantity(),
        }
    }

    fn replace_quantity(&mut self, quantity: i64) {
        match self {
            Product::Durable(good) => good.replace_quantity(quantity),
            Product::Perishable(good) => good.replace_quantity(quantity),
        }
    }
}
