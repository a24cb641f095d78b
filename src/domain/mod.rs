//! Domain Layer
//!
//! Contains the payroll record model and the gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::employee_repository::EmployeeRepository;
pub use models::employee::{Employee, EmployeeData, EmployeeId, UpdateEmployeeData};
