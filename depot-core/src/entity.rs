use serde::{Deserialize, Serialize};

/// Identity of an entity within one repository.
pub type EntityId = u32;

/// Capability surface the repository needs from a stored record:
/// a stable id, a display name and a mutable stock quantity.
pub trait Entity: Clone {
    fn id(&self) -> EntityId;

    fn name(&self) -> &str;

    fn quantity(&self) -> i64;

    /// Overwrite the stored quantity.
    ///
    /// Only [`crate::Repository`] calls this on entries it owns, after the
    /// new value has passed quantity validation.
    fn replace_quantity(&mut self, quantity: i64);

    fn summary(&self) -> EntitySummary {
        EntitySummary {
            id: self.id(),
            name: self.name().to_string(),
            quantity: self.quantity(),
        }
    }
}

/// Read-only projection shared by every entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
}
