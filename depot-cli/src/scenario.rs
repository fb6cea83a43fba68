use depot_catalog::{DurableGood, ProductError};
use depot_core::{EntityId, RepositoryError};
use depot_store::Warehouse;

/// Ids the demonstration operates on
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Expected to be present in both repositories
    pub target: EntityId,
    /// Expected to be absent
    pub missing: EntityId,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            target: 1,
            missing: 999,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: String,
    pub result: Result<(), RepositoryError>,
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    pub steps: Vec<StepOutcome>,
}

impl ScenarioReport {
    fn record<T>(&mut self, step: impl Into<String>, result: Result<T, RepositoryError>) {
        self.steps.push(StepOutcome {
            step: step.into(),
            result: result.map(|_| ()),
        });
    }

    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| s.result.is_err())
    }
}

impl Scenario {
    /// Exercise each repository operation, including every failure kind.
    pub fn run(&self, warehouse: &mut Warehouse) -> Result<ScenarioReport, ProductError> {
        let mut report = ScenarioReport::default();
        let (target, missing) = (self.target, self.missing);

        let duplicate = DurableGood::new(target, "Duplicate", 1, "Unknown", 0)?;
        report.record(
            format!("insert duplicate durable {}", target),
            warehouse.durable.insert(duplicate),
        );
        report.record(
            format!("increase durable {} by 5", target),
            warehouse.durable.increase_quantity(target, 5),
        );
        report.record(
            format!("remove durable {}", missing),
            warehouse.durable.remove(missing),
        );
        report.record(
            format!("set durable {} to -3", target),
            warehouse.durable.set_quantity(target, -3),
        );
        report.record(
            format!("increase perishable {} by 0", target),
            warehouse.perishable.increase_quantity(target, 0),
        );
        report.record(
            format!("set perishable {} to 10", target),
            warehouse.perishable.set_quantity(target, 10),
        );
        report.record(
            format!("get perishable {}", missing),
            warehouse.perishable.get(missing),
        );

        Ok(report)
    }
}
