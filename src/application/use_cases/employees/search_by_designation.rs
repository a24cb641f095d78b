//! Search Employees By Designation Use Case
//!
//! Unanchored substring match against the designation field. The fragment
//! is used verbatim, surrounding whitespace included.

use std::sync::Arc;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::Employee;
use crate::shared::errors::UseCaseError;

/// Use case for searching employees by designation
pub struct SearchByDesignationUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl SearchByDesignationUseCase {
    /// Create a new SearchByDesignationUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case. No match is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the fragment is empty.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, fragment: &str) -> Result<Vec<Employee>, UseCaseError> {
        if fragment.is_empty() {
            return Err(UseCaseError::Validation(vec![
                "designation: search term must not be empty".to_string(),
            ]));
        }

        tracing::debug!(designation = %fragment, "Searching employees by designation");

        let employees = self.employee_repository.find_by_designation(fragment).await?;

        tracing::debug!(count = employees.len(), "Found matching employees");
        Ok(employees)
    }
}
