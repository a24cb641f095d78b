//! Employee Use Cases
//!
//! Business logic for managing employee payroll records.

mod add_employee;
mod delete_employee;
mod get_all_employees;
mod get_employee_by_id;
mod search_by_designation;
mod total_payroll_expense;
mod update_employee;

pub use add_employee::AddEmployeeUseCase;
pub use delete_employee::DeleteEmployeeUseCase;
pub use get_all_employees::GetAllEmployeesUseCase;
pub use get_employee_by_id::GetEmployeeByIdUseCase;
pub use search_by_designation::SearchByDesignationUseCase;
pub use total_payroll_expense::TotalPayrollExpenseUseCase;
pub use update_employee::UpdateEmployeeUseCase;
