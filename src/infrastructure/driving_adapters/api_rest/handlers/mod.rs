//! HTTP Handlers

pub mod employees;
pub mod payroll;
