//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers and DTOs
//! - Console menu

pub mod api_rest;
pub mod console;
