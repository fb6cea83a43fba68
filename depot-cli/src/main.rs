use depot_cli::{log_inventory, log_report, Scenario};
use depot_store::{Config, Warehouse};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (mut warehouse, summary) = Warehouse::seeded(&config.seed)?;
    tracing::info!(
        "Warehouse ready with {} durable and {} perishable goods",
        summary.durable_inserted,
        summary.perishable_inserted
    );

    let today = chrono::Local::now().date_naive();
    log_inventory(&warehouse, today);

    let report = Scenario::default().run(&mut warehouse)?;
    log_report(&report);

    log_inventory(&warehouse, today);
    Ok(())
}
