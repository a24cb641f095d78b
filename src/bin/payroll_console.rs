//! Employee Payroll Registry - Console Entry Point

use std::sync::Arc;

use payroll_registry::application::PayrollService;
use payroll_registry::infrastructure::driven_adapters::config::AppConfig;
use payroll_registry::infrastructure::driven_adapters::database;
use payroll_registry::infrastructure::driven_adapters::employee_repository::PostgresEmployeeRepository;
use payroll_registry::infrastructure::driven_adapters::telemetry::init_tracing;
use payroll_registry::infrastructure::driving_adapters::console::ConsoleMenu;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // The menu owns stdout
    init_tracing(&config.log, std::io::stderr)?;

    let pool = database::connect(&config.database).await?;

    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pool.clone()));
    let payroll_service = Arc::new(PayrollService::new(employee_repository));

    let stdin = std::io::stdin();
    let mut menu = ConsoleMenu::new(payroll_service, stdin.lock(), std::io::stdout());
    let outcome = menu.run().await;

    pool.close().await;
    tracing::info!("Database pool closed");

    outcome?;
    Ok(())
}
