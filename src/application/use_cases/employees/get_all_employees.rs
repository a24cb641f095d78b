//! Get All Employees Use Case
//!
//! Retrieves every employee, ordered by identifier.

use std::sync::Arc;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::Employee;
use crate::shared::errors::UseCaseError;

/// Use case for listing all employees
pub struct GetAllEmployeesUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl GetAllEmployeesUseCase {
    /// Create a new GetAllEmployeesUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Employee>, UseCaseError> {
        tracing::debug!("Getting all employees");

        let employees = self.employee_repository.find_all().await?;

        tracing::debug!(count = employees.len(), "Found employees");
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::employee_repository::MockEmployeeRepository;
    use crate::domain::models::employee::EmployeeData;
    use rust_decimal_macros::dec;

    fn create_test_employee(id: i32, name: &str) -> Employee {
        Employee::new(EmployeeData {
            name: name.to_string(),
            designation: "Operator".to_string(),
            basic_salary: dec!(30000),
            allowance: dec!(2000),
            tax: dec!(1000),
        })
        .with_id(id.into())
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let use_case = GetAllEmployeesUseCase::new(Arc::new(repo));
        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_employees_in_store_order() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                create_test_employee(1, "First"),
                create_test_employee(2, "Second"),
            ])
        });

        let use_case = GetAllEmployeesUseCase::new(Arc::new(repo));
        let employees = use_case.execute().await.unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name(), "First");
        assert_eq!(employees[1].name(), "Second");
    }
}
