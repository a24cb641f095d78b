//! Employee Domain Model
//!
//! Represents an employee payroll record and owns the net salary formula.

use std::num::ParseIntError;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::shared::errors::DomainError;

/// Maximum length for name and designation
pub const MAX_TEXT_LENGTH: usize = 100;

/// Largest amount a `NUMERIC(12,2)` column can hold
#[must_use]
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Net salary formula: basic + allowance - tax
#[must_use]
pub fn calculate_net_salary(basic_salary: Decimal, allowance: Decimal, tax: Decimal) -> Decimal {
    basic_salary + allowance - tax
}

/// Normalizes an amount to whole cents
fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Newtype wrapper for the store-assigned employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(i32);

impl EmployeeId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EmployeeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Data required to create a new Employee
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeData {
    pub name: String,
    pub designation: String,
    pub basic_salary: Decimal,
    pub allowance: Decimal,
    pub tax: Decimal,
}

/// Data for a partial update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeData {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub basic_salary: Option<Decimal>,
    pub allowance: Option<Decimal>,
    pub tax: Option<Decimal>,
}

impl UpdateEmployeeData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.designation.is_none()
            && self.basic_salary.is_none()
            && self.allowance.is_none()
            && self.tax.is_none()
    }
}

/// Employee payroll record
///
/// `net_salary` is derived from the three amounts and kept in sync by every
/// setter that touches one of them. Records restored from storage keep the
/// stored net salary until an amount changes or
/// [`Employee::recalculate_net_salary`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: Option<EmployeeId>,
    name: String,
    designation: String,
    basic_salary: Decimal,
    allowance: Decimal,
    tax: Decimal,
    net_salary: Decimal,
}

impl Employee {
    /// Create a new, not yet persisted, Employee
    #[must_use]
    pub fn new(data: EmployeeData) -> Self {
        let basic_salary = to_cents(data.basic_salary);
        let allowance = to_cents(data.allowance);
        let tax = to_cents(data.tax);

        Self {
            id: None,
            name: data.name.trim().to_string(),
            designation: data.designation.trim().to_string(),
            basic_salary,
            allowance,
            tax,
            net_salary: calculate_net_salary(basic_salary, allowance, tax),
        }
    }

    /// Restore an Employee from persisted data
    #[must_use]
    pub fn restore(
        id: EmployeeId,
        name: String,
        designation: String,
        basic_salary: Decimal,
        allowance: Decimal,
        tax: Decimal,
        net_salary: Decimal,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            designation,
            basic_salary,
            allowance,
            tax,
            net_salary,
        }
    }

    /// Attach the identifier assigned by the store
    #[must_use]
    pub fn with_id(self, id: EmployeeId) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    pub fn set_designation(&mut self, designation: &str) {
        self.designation = designation.trim().to_string();
    }

    pub fn set_basic_salary(&mut self, basic_salary: Decimal) {
        self.basic_salary = to_cents(basic_salary);
        self.recalculate_net_salary();
    }

    pub fn set_allowance(&mut self, allowance: Decimal) {
        self.allowance = to_cents(allowance);
        self.recalculate_net_salary();
    }

    pub fn set_tax(&mut self, tax: Decimal) {
        self.tax = to_cents(tax);
        self.recalculate_net_salary();
    }

    /// Re-derive the net salary from basic salary, allowance and tax
    pub fn recalculate_net_salary(&mut self) {
        self.net_salary = calculate_net_salary(self.basic_salary, self.allowance, self.tax);
    }

    /// Apply a partial update through the setters
    pub fn apply_updates(&mut self, data: UpdateEmployeeData) {
        if let Some(name) = data.name {
            self.set_name(&name);
        }
        if let Some(designation) = data.designation {
            self.set_designation(&designation);
        }
        if let Some(basic_salary) = data.basic_salary {
            self.set_basic_salary(basic_salary);
        }
        if let Some(allowance) = data.allowance {
            self.set_allowance(allowance);
        }
        if let Some(tax) = data.tax {
            self.set_tax(tax);
        }
    }

    /// Check the payroll rules before the record is written
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` listing every violated rule, each as
    /// `field: message`.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        check_text("name", &self.name, &mut errors);
        check_text("designation", &self.designation, &mut errors);
        check_amount("basic_salary", self.basic_salary, &mut errors);
        check_amount("allowance", self.allowance, &mut errors);
        check_amount("tax", self.tax, &mut errors);

        if self.tax > self.gross_salary() {
            errors.push("tax: must not exceed gross salary".to_string());
        }
        // The derived column has the same limit as the inputs
        if self.net_salary > max_amount() {
            errors.push(format!("net_salary: must be at most {}", max_amount()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    #[must_use]
    pub fn basic_salary(&self) -> Decimal {
        self.basic_salary
    }

    #[must_use]
    pub fn allowance(&self) -> Decimal {
        self.allowance
    }

    #[must_use]
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    #[must_use]
    pub fn net_salary(&self) -> Decimal {
        self.net_salary
    }

    #[must_use]
    pub fn gross_salary(&self) -> Decimal {
        self.basic_salary + self.allowance
    }
}

fn check_text(field: &str, value: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{field}: must not be empty"));
    } else if value.chars().count() > MAX_TEXT_LENGTH {
        errors.push(format!("{field}: must be at most {MAX_TEXT_LENGTH} characters"));
    }
}

fn check_amount(field: &str, value: Decimal, errors: &mut Vec<String>) {
    if value < Decimal::ZERO {
        errors.push(format!("{field}: must not be negative"));
    } else if value > max_amount() {
        errors.push(format!("{field}: must be at most {}", max_amount()));
    }
}
