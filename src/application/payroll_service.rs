//! Payroll Service
//!
//! The single contract shared by the HTTP and console adapters. Each
//! operation delegates to its use case.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::use_cases::{
    AddEmployeeUseCase, DeleteEmployeeUseCase, GetAllEmployeesUseCase, GetEmployeeByIdUseCase,
    SearchByDesignationUseCase, TotalPayrollExpenseUseCase, UpdateEmployeeUseCase,
};
use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::{Employee, EmployeeData, EmployeeId};
use crate::shared::errors::UseCaseError;

/// Payroll operations over a single employee store
pub struct PayrollService {
    add_employee_use_case: AddEmployeeUseCase,
    update_employee_use_case: UpdateEmployeeUseCase,
    delete_employee_use_case: DeleteEmployeeUseCase,
    get_employee_by_id_use_case: GetEmployeeByIdUseCase,
    get_all_employees_use_case: GetAllEmployeesUseCase,
    search_by_designation_use_case: SearchByDesignationUseCase,
    total_payroll_expense_use_case: TotalPayrollExpenseUseCase,
}

impl PayrollService {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            add_employee_use_case: AddEmployeeUseCase::new(employee_repository.clone()),
            update_employee_use_case: UpdateEmployeeUseCase::new(employee_repository.clone()),
            delete_employee_use_case: DeleteEmployeeUseCase::new(employee_repository.clone()),
            get_employee_by_id_use_case: GetEmployeeByIdUseCase::new(employee_repository.clone()),
            get_all_employees_use_case: GetAllEmployeesUseCase::new(employee_repository.clone()),
            search_by_designation_use_case: SearchByDesignationUseCase::new(employee_repository.clone()),
            total_payroll_expense_use_case: TotalPayrollExpenseUseCase::new(employee_repository),
        }
    }

    /// Add a new employee; the store assigns the identifier
    ///
    /// # Errors
    ///
    /// See [`AddEmployeeUseCase::execute`].
    pub async fn add(&self, data: EmployeeData) -> Result<Employee, UseCaseError> {
        self.add_employee_use_case.execute(data).await
    }

    /// Overwrite the mutable fields of an existing employee
    ///
    /// # Errors
    ///
    /// See [`UpdateEmployeeUseCase::execute`].
    pub async fn update(&self, employee: Employee) -> Result<Employee, UseCaseError> {
        self.update_employee_use_case.execute(employee).await
    }

    /// Delete an employee
    ///
    /// # Errors
    ///
    /// See [`DeleteEmployeeUseCase::execute`].
    pub async fn delete(&self, id: EmployeeId) -> Result<(), UseCaseError> {
        self.delete_employee_use_case.execute(id).await
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, UseCaseError> {
        self.get_employee_by_id_use_case.execute(id).await
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn get_all(&self) -> Result<Vec<Employee>, UseCaseError> {
        self.get_all_employees_use_case.execute().await
    }

    /// # Errors
    ///
    /// See [`SearchByDesignationUseCase::execute`].
    pub async fn search_by_designation(&self, fragment: &str) -> Result<Vec<Employee>, UseCaseError> {
        self.search_by_designation_use_case.execute(fragment).await
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn total_payroll_expense(&self) -> Result<Decimal, UseCaseError> {
        self.total_payroll_expense_use_case.execute().await
    }
}
