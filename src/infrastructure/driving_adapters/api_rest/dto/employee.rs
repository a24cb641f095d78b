//! Employee DTOs
//!
//! Data transfer objects for employee and payroll API endpoints.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::employee::{Employee, EmployeeData};
use crate::shared::errors::ApiError;

/// Converts a JSON number to Decimal; the domain rounds it to cents
fn f64_to_decimal(field: &str, value: f64) -> Result<Decimal, ApiError> {
    Decimal::from_f64(value)
        .ok_or_else(|| ApiError::BadRequest(format!("{field} cannot be represented as a decimal")))
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// DTO for creating or fully updating an employee
///
/// `id` and `netSalary` are ignored if sent; net salary is always derived.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequestDto {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub designation: String,

    #[validate(range(min = 0.0, max = 9_999_999_999.99, message = "must be between 0 and 9999999999.99"))]
    pub basic_salary: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 9_999_999_999.99, message = "must be between 0 and 9999999999.99"))]
    pub hra: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 9_999_999_999.99, message = "must be between 0 and 9999999999.99"))]
    pub tax: f64,
}

impl TryFrom<EmployeeRequestDto> for EmployeeData {
    type Error = ApiError;

    fn try_from(dto: EmployeeRequestDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name,
            designation: dto.designation,
            basic_salary: f64_to_decimal("basicSalary", dto.basic_salary)?,
            allowance: f64_to_decimal("hra", dto.hra)?,
            tax: f64_to_decimal("tax", dto.tax)?,
        })
    }
}

/// Employee response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponseDto {
    pub id: Option<i32>,
    pub name: String,
    pub designation: String,
    pub basic_salary: f64,
    pub hra: f64,
    pub tax: f64,
    pub net_salary: f64,
}

impl From<&Employee> for EmployeeResponseDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id().map(|id| id.value()),
            name: employee.name().to_string(),
            designation: employee.designation().to_string(),
            basic_salary: decimal_to_f64(employee.basic_salary()),
            hra: decimal_to_f64(employee.allowance()),
            tax: decimal_to_f64(employee.tax()),
            net_salary: decimal_to_f64(employee.net_salary()),
        }
    }
}

impl From<Employee> for EmployeeResponseDto {
    fn from(employee: Employee) -> Self {
        Self::from(&employee)
    }
}

/// Outcome of a mutating request
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponseDto {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeResponseDto>,
}

impl StatusResponseDto {
    #[must_use]
    pub fn success(message: impl Into<String>, employee: Option<EmployeeResponseDto>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            employee,
        }
    }
}

/// Query string for designation search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub designation: Option<String>,
}

/// Total payroll expense response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollExpenseDto {
    pub total_payroll_expense: f64,
}

impl From<Decimal> for PayrollExpenseDto {
    fn from(total: Decimal) -> Self {
        Self {
            total_payroll_expense: decimal_to_f64(total),
        }
    }
}
