//! Application Layer
//!
//! Contains use cases that orchestrate business logic.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod payroll_service;
pub mod use_cases;

pub use payroll_service::PayrollService;
