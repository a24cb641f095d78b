//! Driven Adapters
//!
//! Implementations of gateway traits and other outbound concerns:
//! - Database pool and repositories
//! - Configuration
//! - Tracing setup

pub mod config;
pub mod database;
pub mod employee_repository;
pub mod telemetry;

pub use config::AppConfig;
pub use employee_repository::PostgresEmployeeRepository;
