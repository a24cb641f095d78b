//! Employee Payroll Registry
//!
//! Keeps employee compensation records, derives net salary
//! (`basic + allowance - tax`) and exposes the payroll operations through an
//! HTTP JSON API and a console menu. Follows Clean/Hexagonal Architecture
//! principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
