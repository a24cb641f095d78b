//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod employee;

pub use employee::{Employee, EmployeeData, EmployeeId, UpdateEmployeeData};
