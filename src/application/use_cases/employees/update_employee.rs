//! Update Employee Use Case
//!
//! Overwrites every mutable field of an existing employee.

use std::sync::Arc;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::Employee;
use crate::shared::errors::UseCaseError;

/// Use case for updating an employee
pub struct UpdateEmployeeUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl UpdateEmployeeUseCase {
    /// Create a new UpdateEmployeeUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case
    ///
    /// The net salary is re-derived before the write, whatever the caller
    /// put in the record.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the record carries no identifier.
    /// Returns `UseCaseError::Domain` if the record breaks a payroll rule.
    /// Returns `UseCaseError::NotFound` if no employee has that identifier.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, mut employee: Employee) -> Result<Employee, UseCaseError> {
        let id = employee
            .id()
            .ok_or_else(|| UseCaseError::Validation(vec!["id: is required for update".to_string()]))?;

        tracing::info!(employee_id = %id, "Updating employee");

        employee.recalculate_net_salary();
        employee.validate()?;

        let updated = self
            .employee_repository
            .update(id, &employee)
            .await?
            .ok_or_else(|| {
                tracing::warn!(employee_id = %id, "Employee not found for update");
                UseCaseError::employee_not_found(id)
            })?;

        tracing::info!(employee_id = %id, "Employee updated successfully");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::employee_repository::MockEmployeeRepository;
    use crate::domain::models::employee::EmployeeId;
    use rust_decimal_macros::dec;

    fn stale_employee(id: i32) -> Employee {
        Employee::restore(
            EmployeeId::new(id),
            "R. Sharma".to_string(),
            "Accountant".to_string(),
            dec!(40000),
            dec!(5000),
            dec!(3000),
            dec!(1),
        )
    }

    #[tokio::test]
    async fn should_recompute_net_salary_before_writing() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_update()
            .withf(|id, employee| *id == EmployeeId::new(2) && employee.net_salary() == dec!(42000))
            .times(1)
            .returning(|_, employee| Ok(Some(employee.clone())));

        let use_case = UpdateEmployeeUseCase::new(Arc::new(repo));
        let updated = use_case.execute(stale_employee(2)).await.unwrap();

        assert_eq!(updated.net_salary(), dec!(42000));
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_row_matches() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let use_case = UpdateEmployeeUseCase::new(Arc::new(repo));
        let result = use_case.execute(stale_employee(99)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_require_identifier() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_update().never();

        let employee = Employee::new(crate::domain::models::employee::EmployeeData {
            name: "No Id".to_string(),
            designation: "Clerk".to_string(),
            basic_salary: dec!(100),
            allowance: dec!(0),
            tax: dec!(0),
        });

        let use_case = UpdateEmployeeUseCase::new(Arc::new(repo));
        let result = use_case.execute(employee).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_reject_tax_above_gross() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_update().never();

        let mut employee = stale_employee(2);
        employee.set_tax(dec!(50000));

        let use_case = UpdateEmployeeUseCase::new(Arc::new(repo));
        let result = use_case.execute(employee).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Domain(_)));
    }
}
