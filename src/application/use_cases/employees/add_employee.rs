//! Add Employee Use Case
//!
//! Persists a new employee record; the store assigns the identifier.

use std::sync::Arc;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::{Employee, EmployeeData};
use crate::shared::errors::UseCaseError;

/// Use case for adding a new employee
pub struct AddEmployeeUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl AddEmployeeUseCase {
    /// Create a new AddEmployeeUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the record breaks a payroll rule.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: EmployeeData) -> Result<Employee, UseCaseError> {
        tracing::info!(name = %data.name, designation = %data.designation, "Adding new employee");

        // Net salary is derived on construction
        let employee = Employee::new(data);
        employee.validate()?;

        let created = self.employee_repository.create(&employee).await?;

        tracing::info!(
            employee_id = ?created.id().map(|id| id.value()),
            net_salary = %created.net_salary(),
            "Employee added successfully"
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::employee_repository::MockEmployeeRepository;
    use crate::domain::models::employee::EmployeeId;
    use crate::shared::errors::RepositoryError;
    use rust_decimal_macros::dec;

    fn create_test_data() -> EmployeeData {
        EmployeeData {
            name: "A. Kumar".to_string(),
            designation: "Engineer".to_string(),
            basic_salary: dec!(50000),
            allowance: dec!(8000),
            tax: dec!(4000),
        }
    }

    #[tokio::test]
    async fn should_persist_employee_with_computed_net_salary() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .withf(|employee| employee.id().is_none() && employee.net_salary() == dec!(54000))
            .times(1)
            .returning(|employee| Ok(employee.clone().with_id(EmployeeId::new(1))));

        let use_case = AddEmployeeUseCase::new(Arc::new(repo));
        let created = use_case.execute(create_test_data()).await.unwrap();

        assert_eq!(created.id(), Some(EmployeeId::new(1)));
        assert_eq!(created.net_salary(), dec!(54000.00));
    }

    #[tokio::test]
    async fn should_reject_invalid_employee_without_touching_store() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create().never();

        let use_case = AddEmployeeUseCase::new(Arc::new(repo));
        let result = use_case
            .execute(EmployeeData {
                name: String::new(),
                ..create_test_data()
            })
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Domain(_)));
    }

    #[tokio::test]
    async fn should_surface_storage_failure() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let use_case = AddEmployeeUseCase::new(Arc::new(repo));
        let result = use_case.execute(create_test_data()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
