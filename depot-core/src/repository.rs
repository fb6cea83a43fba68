use std::collections::HashMap;

use tracing::debug;

use crate::entity::{Entity, EntityId, EntitySummary};
use crate::quantity::{checked_increase, validate_increase, validate_quantity};
use crate::{RepositoryError, RepositoryResult};

/// In-memory store of entities keyed by id.
///
/// The repository owns every entry. Reads hand out clones or shared
/// borrows, so stored quantities only change through
/// [`Repository::set_quantity`] and [`Repository::increase_quantity`].
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: HashMap<EntityId, T>,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Add a new entity. Existing ids are never overwritten.
    pub fn insert(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateId { id });
        }

        debug!("Inserted entity {} ({})", id, item.name());
        self.items.insert(id, item);
        Ok(())
    }

    /// Snapshot of the entity currently stored under `id`.
    pub fn get(&self, id: EntityId) -> RepositoryResult<T> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    /// Delete the entry for `id`, handing back what was stored.
    pub fn remove(&mut self, id: EntityId) -> RepositoryResult<T> {
        let removed = self
            .items
            .remove(&id)
            .ok_or(RepositoryError::NotFound { id })?;

        debug!("Removed entity {}", id);
        Ok(removed)
    }

    /// Copies of every stored entity, in no particular order.
    pub fn list_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Replace the stored quantity.
    ///
    /// A negative quantity is rejected before the id is looked up, so
    /// `InvalidQuantity` wins over `NotFound`.
    pub fn set_quantity(&mut self, id: EntityId, quantity: i64) -> RepositoryResult<()> {
        let quantity = validate_quantity(quantity)?;
        self.write_quantity(id, quantity)
    }

    /// Add `delta` units to the stored quantity.
    pub fn increase_quantity(&mut self, id: EntityId, delta: i64) -> RepositoryResult<()> {
        let delta = validate_increase(delta)?;
        let current = self.entry(id)?.quantity();
        let total = checked_increase(current, delta)?;
        self.set_quantity(id, total)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowed read-only views over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Full scan returning copies of every entity matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .values()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn summaries(&self) -> Vec<EntitySummary> {
        self.items.values().map(|item| item.summary()).collect()
    }

    fn entry(&self, id: EntityId) -> RepositoryResult<&T> {
        self.items.get(&id).ok_or(RepositoryError::NotFound { id })
    }

    fn write_quantity(&mut self, id: EntityId, quantity: i64) -> RepositoryResult<()> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound { id })?;

        debug!("Quantity of entity {}: {} -> {}", id, item.quantity(), quantity);
        item.replace_quantity(quantity);
        Ok(())
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pallet {
        id: EntityId,
        name: String,
        quantity: i64,
    }

    impl Pallet {
        fn new(id: EntityId, name: &str, quantity: i64) -> Self {
            Self {
                id,
                name: name.to_string(),
                quantity,
            }
        }
    }

    impl Entity for Pallet {
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

    fn sorted(mut items: Vec<Pallet>) -> Vec<Pallet> {
        items.sort_by_key(|p| p.id);
        items
    }

    #[test]
    fn test_insert_and_list() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(3, "Bolts", 100)).unwrap();
        repo.insert(Pallet::new(1, "Nuts", 50)).unwrap();
        repo.insert(Pallet::new(2, "Washers", 0)).unwrap();

        assert_eq!(repo.len(), 3);
        assert_eq!(
            sorted(repo.list_all()),
            vec![
                Pallet::new(1, "Nuts", 50),
                Pallet::new(2, "Washers", 0),
                Pallet::new(3, "Bolts", 100),
            ]
        );
        assert_eq!(repo.get(2).unwrap(), Pallet::new(2, "Washers", 0));
    }

    #[test]
    fn test_duplicate_insert_leaves_state_unchanged() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 50)).unwrap();
        let before = sorted(repo.list_all());

        let result = repo.insert(Pallet::new(1, "Impostor", 999));

        assert_eq!(result, Err(RepositoryError::DuplicateId { id: 1 }));
        assert_eq!(sorted(repo.list_all()), before);
        assert_eq!(repo.get(1).unwrap().name, "Nuts");
    }

    #[test]
    fn test_get_missing() {
        let repo: Repository<Pallet> = Repository::new();
        assert_eq!(repo.get(42), Err(RepositoryError::NotFound { id: 42 }));
    }

    #[test]
    fn test_remove_twice() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 50)).unwrap();

        let removed = repo.remove(1).unwrap();
        assert_eq!(removed.name, "Nuts");
        assert_eq!(repo.remove(1), Err(RepositoryError::NotFound { id: 1 }));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_takes_precedence() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 50)).unwrap();

        assert_eq!(
            repo.set_quantity(1, -1),
            Err(RepositoryError::InvalidQuantity { quantity: -1 })
        );
        assert_eq!(
            repo.set_quantity(999, -1),
            Err(RepositoryError::InvalidQuantity { quantity: -1 })
        );
        assert_eq!(repo.get(1).unwrap().quantity, 50);
    }

    #[test]
    fn test_set_quantity() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 50)).unwrap();

        repo.set_quantity(1, 0).unwrap();
        assert_eq!(repo.get(1).unwrap().quantity, 0);
        assert_eq!(
            repo.set_quantity(2, 10),
            Err(RepositoryError::NotFound { id: 2 })
        );
    }

    #[test]
    fn test_increase_quantity() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 10)).unwrap();

        repo.increase_quantity(1, 5).unwrap();
        assert_eq!(repo.get(1).unwrap().quantity, 15);

        assert_eq!(
            repo.increase_quantity(1, 0),
            Err(RepositoryError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            repo.increase_quantity(1, -4),
            Err(RepositoryError::InvalidQuantity { quantity: -4 })
        );
        assert_eq!(repo.get(1).unwrap().quantity, 15);

        // delta is validated before the id is looked up
        assert_eq!(
            repo.increase_quantity(7, 0),
            Err(RepositoryError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            repo.increase_quantity(7, 3),
            Err(RepositoryError::NotFound { id: 7 })
        );
    }

    #[test]
    fn test_increase_overflow_is_rejected() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", i64::MAX)).unwrap();

        assert!(matches!(
            repo.increase_quantity(1, 1),
            Err(RepositoryError::InvalidQuantity { .. })
        ));
        assert_eq!(repo.get(1).unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_snapshots_are_detached() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 10)).unwrap();

        let mut listed = repo.list_all();
        listed[0].quantity = -100;
        listed.clear();

        let mut fetched = repo.get(1).unwrap();
        fetched.replace_quantity(-50);

        assert_eq!(repo.get(1).unwrap().quantity, 10);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_find_and_summaries() {
        let mut repo = Repository::new();
        repo.insert(Pallet::new(1, "Nuts", 10)).unwrap();
        repo.insert(Pallet::new(2, "Bolts", 0)).unwrap();
        repo.insert(Pallet::new(3, "Washers", 0)).unwrap();

        let empty = sorted(repo.find(|p| p.quantity == 0));
        assert_eq!(empty.len(), 2);
        assert_eq!(empty[0].id, 2);
        assert!(repo.find(|p| p.name == "Gears").is_empty());

        let mut summaries = repo.summaries();
        summaries.sort_by_key(|s| s.id);
        assert_eq!(summaries[0].name, "Nuts");
        assert_eq!(repo.iter().map(|p| p.quantity).sum::<i64>(), 10);
        assert!(repo.contains(3));
        assert!(!repo.contains(4));
    }

    #[test]
    fn test_reinsert_after_remove() {
        let mut repo = Repository::with_capacity(4);
        repo.insert(Pallet::new(1, "Nuts", 10)).unwrap();
        repo.remove(1).unwrap();
        repo.insert(Pallet::new(1, "Nuts v2", 20)).unwrap();

        assert_eq!(repo.get(1).unwrap(), Pallet::new(1, "Nuts v2", 20));
    }
}
