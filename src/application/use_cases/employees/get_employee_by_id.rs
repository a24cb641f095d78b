//! Get Employee By ID Use Case
//!
//! Point lookup of a single employee.

use std::sync::Arc;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::{Employee, EmployeeId};
use crate::shared::errors::UseCaseError;

/// Use case for getting an employee by ID
pub struct GetEmployeeByIdUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl GetEmployeeByIdUseCase {
    /// Create a new GetEmployeeByIdUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case. Absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EmployeeId) -> Result<Option<Employee>, UseCaseError> {
        tracing::debug!(employee_id = %id, "Getting employee by ID");

        let employee = self.employee_repository.find_by_id(id).await?;

        if employee.is_none() {
            tracing::debug!(employee_id = %id, "Employee not found");
        }
        Ok(employee)
    }
}
