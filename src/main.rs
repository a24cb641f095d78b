//! Employee Payroll Registry - HTTP Server Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;

use payroll_registry::application::PayrollService;
use payroll_registry::infrastructure::driven_adapters::config::AppConfig;
use payroll_registry::infrastructure::driven_adapters::database;
use payroll_registry::infrastructure::driven_adapters::employee_repository::PostgresEmployeeRepository;
use payroll_registry::infrastructure::driven_adapters::telemetry::init_tracing;
use payroll_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log, std::io::stdout)?;
    tracing::info!("Configuration loaded successfully");

    // Pool, connectivity check and migrations; any failure is fatal
    let pool = database::connect(&config.database).await?;

    // Wire repository, service and router
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pool.clone()));
    let payroll_service = Arc::new(PayrollService::new(employee_repository));
    let app = api_rest::router(AppState::new(payroll_service));

    // Start server
    let addr = config.server.address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
