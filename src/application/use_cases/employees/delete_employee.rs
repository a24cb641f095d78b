//! Delete Employee Use Case
//!
//! Permanently removes an employee record.

use std::sync::Arc;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::EmployeeId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting an employee
pub struct DeleteEmployeeUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DeleteEmployeeUseCase {
    /// Create a new DeleteEmployeeUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the employee doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EmployeeId) -> Result<(), UseCaseError> {
        tracing::info!(employee_id = %id, "Deleting employee");

        let deleted = self.employee_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(employee_id = %id, "Employee not found for deletion");
            return Err(UseCaseError::employee_not_found(id));
        }

        tracing::info!(employee_id = %id, "Employee deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::employee_repository::MockEmployeeRepository;

    #[tokio::test]
    async fn should_delete_employee_when_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_delete()
            .withf(|id| *id == EmployeeId::new(1))
            .returning(|_| Ok(true));

        let use_case = DeleteEmployeeUseCase::new(Arc::new(repo));
        assert!(use_case.execute(EmployeeId::new(1)).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_employee_does_not_exist() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteEmployeeUseCase::new(Arc::new(repo));
        let result = use_case.execute(EmployeeId::new(404)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
