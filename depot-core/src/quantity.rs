use crate::{RepositoryError, RepositoryResult};

/// A stored quantity must never be negative.
pub fn validate_quantity(quantity: i64) -> RepositoryResult<i64> {
    if quantity < 0 {
        return Err(RepositoryError::InvalidQuantity { quantity });
    }
    Ok(quantity)
}

/// An increase must add at least one unit.
pub fn validate_increase(delta: i64) -> RepositoryResult<i64> {
    if delta <= 0 {
        return Err(RepositoryError::InvalidQuantity { quantity: delta });
    }
    Ok(delta)
}

/// Sum of `current` and a validated `delta`, checked against overflow.
pub fn checked_increase(current: i64, delta: i64) -> RepositoryResult<i64> {
    let delta = validate_increase(delta)?;
    let total = current
        .checked_add(delta)
        .ok_or(RepositoryError::InvalidQuantity { quantity: delta })?;
    validate_quantity(total)
}
