pub mod scenario;

pub use scenario::{Scenario, ScenarioReport, StepOutcome};

use chrono::NaiveDate;
use depot_core::Entity;
use depot_store::Warehouse;
use tracing::{info, warn};

/// Log every stock line of the warehouse, lowest id first.
pub fn log_inventory(warehouse: &Warehouse, today: NaiveDate) {
    let mut durable = warehouse.durable.list_all();
    durable.sort_by_key(|g| g.id());
    for good in &durable {
        info!(
            "[durable] #{} {} x{} ({}, {} months warranty)",
            good.id(),
            good.name(),
            good.quantity(),
            good.brand(),
            good.warranty_months()
        );
    }

    let mut perishable = warehouse.perishable.list_all();
    perishable.sort_by_key(|g| g.id());
    for good in &perishable {
        info!(
            "[perishable] #{} {} x{} (expires {})",
            good.id(),
            good.name(),
            good.quantity(),
            good.expiry_date()
        );
    }

    for good in warehouse.perishable.find(|g| g.is_expired_on(today)) {
        warn!("Perishable #{} {} expired on {}", good.id(), good.name(), good.expiry_date());
    }
}

pub fn log_report(report: &ScenarioReport) {
    for outcome in &report.steps {
        match &outcome.result {
            Ok(()) => info!("{}: ok", outcome.step),
            Err(e) => warn!("{}: {}", outcome.step, e),
        }
    }
    info!(
        "Scenario finished: {} succeeded, {} rejected",
        report.succeeded(),
        report.failures().count()
    );
}
