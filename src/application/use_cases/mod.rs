//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod employees;

pub use employees::{
    AddEmployeeUseCase, DeleteEmployeeUseCase, GetAllEmployeesUseCase, GetEmployeeByIdUseCase,
    SearchByDesignationUseCase, TotalPayrollExpenseUseCase, UpdateEmployeeUseCase,
};
