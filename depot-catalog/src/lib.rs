pub mod product;

pub use product::{DurableGood, PerishableGood, Product, ProductError, ProductKind};
