//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod employee;

pub use employee::{
    EmployeeRequestDto, EmployeeResponseDto, PayrollExpenseDto, SearchQuery, StatusResponseDto,
};
