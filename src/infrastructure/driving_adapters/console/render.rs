//! Plain-text rendering of employee records

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::models::employee::Employee;

const RULE_WIDTH: usize = 96;

/// Two decimal places, always
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let mut amount = amount;
    amount.rescale(2);
    amount.to_string()
}

fn id_text(employee: &Employee) -> String {
    employee.id().map_or_else(|| "-".to_string(), |id| id.to_string())
}

/// One record as labelled lines
pub struct EmployeeDetails<'a>(pub &'a Employee);

impl fmt::Display for EmployeeDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let employee = self.0;
        writeln!(f, "ID           : {}", id_text(employee))?;
        writeln!(f, "Name         : {}", employee.name())?;
        writeln!(f, "Designation  : {}", employee.designation())?;
        writeln!(f, "Basic Salary : {}", format_money(employee.basic_salary()))?;
        writeln!(f, "HRA          : {}", format_money(employee.allowance()))?;
        writeln!(f, "Tax          : {}", format_money(employee.tax()))?;
        writeln!(f, "Net Salary   : {}", format_money(employee.net_salary()))
    }
}

/// All records as a fixed-width table
pub struct EmployeeTable<'a>(pub &'a [Employee]);

impl fmt::Display for EmployeeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{:<5} {:<22} {:<20} {:>11} {:>10} {:>10} {:>12}",
            "ID", "Name", "Designation", "Basic", "HRA", "Tax", "Net Salary"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for employee in self.0 {
            writeln!(
                f,
                "{:<5} {:<22} {:<20} {:>11} {:>10} {:>10} {:>12}",
                id_text(employee),
                employee.name(),
                employee.designation(),
                format_money(employee.basic_salary()),
                format_money(employee.allowance()),
                format_money(employee.tax()),
                format_money(employee.net_salary()),
            )?;
        }
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Total employees: {}", self.0.len())
    }
}

/// Payslip with gross salary and deductions
pub struct Payslip<'a>(pub &'a Employee);

impl fmt::Display for Payslip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let employee = self.0;
        let rule = "-".repeat(48);
        writeln!(f, "{rule}")?;
        writeln!(f, "EMPLOYEE PAYSLIP")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Employee ID  : {}", id_text(employee))?;
        writeln!(f, "Name         : {}", employee.name())?;
        writeln!(f, "Designation  : {}", employee.designation())?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Basic Salary : {}", format_money(employee.basic_salary()))?;
        writeln!(f, "HRA          : {}", format_money(employee.allowance()))?;
        writeln!(f, "Gross Salary : {}", format_money(employee.gross_salary()))?;
        writeln!(f, "Tax          : {}", format_money(employee.tax()))?;
        writeln!(f, "{rule}")?;
        writeln!(f, "NET SALARY   : {}", format_money(employee.net_salary()))?;
        writeln!(f, "{rule}")
    }
}
