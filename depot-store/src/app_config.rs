use chrono::NaiveDate;
use depot_core::EntityId;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "depot_cli=info,depot_store=info,depot_core=debug".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Sample rows loaded into a fresh warehouse
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub durable_goods: Vec<DurableGoodSeed>,
    #[serde(default)]
    pub perishable_goods: Vec<PerishableGoodSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DurableGoodSeed {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    #[serde(default)]
    pub warranty_months: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerishableGoodSeed {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/development.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `DEPOT_LOGGING__FILTER=debug`
            .add_source(config::Environment::with_prefix("DEPOT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_rows() {
        let config = Config::from_toml_str(
            r#"
            [logging]
            filter = "warn"

            [[seed.durable_goods]]
            id = 1
            name = "Laptop"
            quantity = 5
            brand = "Lenovo"
            warranty_months = 24

            [[seed.perishable_goods]]
            id = 1
            name = "Milk"
            quantity = 40
            expiry_date = "2026-10-30"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.seed.durable_goods.len(), 1);
        assert_eq!(config.seed.durable_goods[0].brand, "Lenovo");
        assert_eq!(
            config.seed.perishable_goods[0].expiry_date,
            NaiveDate::from_ymd_opt(2026, 10, 30).unwrap()
        );
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config.logging.filter, default_filter());
        assert!(config.seed.durable_goods.is_empty());
        assert!(config.seed.perishable_goods.is_empty());
    }
}
