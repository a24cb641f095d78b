//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;
pub mod request_context;

pub use errors::{ApiError, ConsoleError, DomainError, RepositoryError, UseCaseError};
