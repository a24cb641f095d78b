//! Employee Repository Gateway
//!
//! Abstract trait defining the contract for employee persistence operations.
//! The store is the only authority for identifier assignment.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::models::employee::{Employee, EmployeeId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Employee persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee; the returned record carries the assigned ID
    async fn create(&self, employee: &Employee) -> Result<Employee, RepositoryError>;

    /// Overwrite every mutable field of the row with the given ID.
    /// Returns `None` when no row matches.
    async fn update(&self, id: EmployeeId, employee: &Employee) -> Result<Option<Employee>, RepositoryError>;

    /// Delete the row with the given ID, returning whether a row was removed
    async fn delete(&self, id: EmployeeId) -> Result<bool, RepositoryError>;

    /// Find an employee by its ID
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// Find all employees, sorted by ID ascending
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Find employees whose designation contains `fragment`, sorted by ID ascending
    async fn find_by_designation(&self, fragment: &str) -> Result<Vec<Employee>, RepositoryError>;

    /// Sum of net salary across all rows, zero when empty
    async fn total_net_salary(&self) -> Result<Decimal, RepositoryError>;
}
