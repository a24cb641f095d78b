//! Console Menu
//!
//! Line-oriented menu over the payroll service. Reads one command at a time
//! from any `BufRead` and writes to any `Write`, so the binary binds stdin and
//! stdout while tests use in-memory buffers.

use std::io::{BufRead, Write};
use std::sync::Arc;

use rust_decimal::Decimal;

use super::render::{format_money, EmployeeDetails, EmployeeTable, Payslip};
use crate::application::PayrollService;
use crate::domain::models::employee::{Employee, EmployeeData, EmployeeId, UpdateEmployeeData};
use crate::shared::errors::{ConsoleError, UseCaseError};

type ConsoleResult<T> = Result<T, ConsoleError>;

const MENU: &str = "\
1. Add Employee
2. Update Employee
3. Delete Employee
4. View All Employees
5. View Employee by ID
6. Generate Payslip
7. Search by Designation
8. Total Payroll Expense
9. Exit";

/// Interactive payroll menu
pub struct ConsoleMenu<R, W> {
    service: Arc<PayrollService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMenu<R, W> {
    #[must_use]
    pub fn new(service: Arc<PayrollService>, input: R, output: W) -> Self {
        Self { service, input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input ends
    ///
    /// Payroll failures are printed and the menu keeps going.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if reading input or writing output fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "EMPLOYEE PAYROLL SYSTEM")?;

        match self.command_loop().await {
            Ok(()) => {}
            Err(ConsoleError::EndOfInput) => {
                tracing::debug!("Console input closed");
                writeln!(self.output)?;
            }
            Err(ConsoleError::Io(err)) => return Err(err),
        }

        writeln!(self.output, "Exiting payroll system.")?;
        self.output.flush()
    }

    async fn command_loop(&mut self) -> ConsoleResult<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let choice = self.read_line("Enter your choice: ")?;

            match choice.as_str() {
                "1" => self.add_employee().await?,
                "2" => self.update_employee().await?,
                "3" => self.delete_employee().await?,
                "4" => self.view_all().await?,
                "5" => self.view_by_id().await?,
                "6" => self.payslip().await?,
                "7" => self.search_by_designation().await?,
                "8" => self.total_expense().await?,
                "9" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice, enter a number from 1 to 9.")?,
            }
        }
    }

    async fn add_employee(&mut self) -> ConsoleResult<()> {
        let data = EmployeeData {
            name: self.prompt_required_text("Enter name: ")?,
            designation: self.prompt_required_text("Enter designation: ")?,
            basic_salary: self.prompt_amount("Enter basic salary: ")?,
            allowance: self.prompt_amount("Enter HRA: ")?,
            tax: self.prompt_amount("Enter tax: ")?,
        };

        let preview = Employee::new(data.clone());
        writeln!(self.output, "Computed net salary: {}", format_money(preview.net_salary()))?;

        if !self.confirm("Save this employee? (Y/N): ")? {
            writeln!(self.output, "Employee not added.")?;
            return Ok(());
        }

        match self.service.add(data).await {
            Ok(employee) => {
                let id = employee.id().map_or_else(String::new, |id| id.to_string());
                writeln!(self.output, "Employee added successfully with ID {id}.")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    async fn update_employee(&mut self) -> ConsoleResult<()> {
        let id = self.prompt_id("Enter employee ID to update: ")?;
        let Some(mut employee) = self.fetch(id).await? else {
            return Ok(());
        };

        write!(self.output, "{}", EmployeeDetails(&employee))?;
        writeln!(self.output, "Press Enter to keep the current value.")?;

        let name = self.prompt_optional_text(&format!("Name [{}]: ", employee.name()))?;
        let designation = self.prompt_optional_text(&format!("Designation [{}]: ", employee.designation()))?;
        let basic_salary =
            self.prompt_optional_amount(&format!("Basic salary [{}]: ", format_money(employee.basic_salary())))?;
        let allowance = self.prompt_optional_amount(&format!("HRA [{}]: ", format_money(employee.allowance())))?;
        let tax = self.prompt_optional_amount(&format!("Tax [{}]: ", format_money(employee.tax())))?;

        let changes = UpdateEmployeeData {
            name,
            designation,
            basic_salary,
            allowance,
            tax,
        };
        if changes.is_empty() {
            writeln!(self.output, "No changes entered.")?;
            return Ok(());
        }
        employee.apply_updates(changes);

        match self.service.update(employee).await {
            Ok(updated) => writeln!(
                self.output,
                "Employee updated successfully. Net salary: {}",
                format_money(updated.net_salary())
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    async fn delete_employee(&mut self) -> ConsoleResult<()> {
        let id = self.prompt_id("Enter employee ID to delete: ")?;
        let Some(employee) = self.fetch(id).await? else {
            return Ok(());
        };

        write!(self.output, "{}", EmployeeDetails(&employee))?;
        if !self.confirm("Delete this employee? (Y/N): ")? {
            writeln!(self.output, "Deletion cancelled.")?;
            return Ok(());
        }

        match self.service.delete(id).await {
            Ok(()) => writeln!(self.output, "Employee deleted successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    async fn view_all(&mut self) -> ConsoleResult<()> {
        match self.service.get_all().await {
            Ok(employees) if employees.is_empty() => writeln!(self.output, "No employees found.")?,
            Ok(employees) => write!(self.output, "{}", EmployeeTable(&employees))?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    async fn view_by_id(&mut self) -> ConsoleResult<()> {
        let id = self.prompt_id("Enter employee ID: ")?;
        if let Some(employee) = self.fetch(id).await? {
            write!(self.output, "{}", EmployeeDetails(&employee))?;
        }
        Ok(())
    }

    async fn payslip(&mut self) -> ConsoleResult<()> {
        let id = self.prompt_id("Enter employee ID for payslip: ")?;
        if let Some(employee) = self.fetch(id).await? {
            write!(self.output, "{}", Payslip(&employee))?;
        }
        Ok(())
    }

    async fn search_by_designation(&mut self) -> ConsoleResult<()> {
        let fragment = self.read_line("Enter designation to search: ")?;

        match self.service.search_by_designation(&fragment).await {
            Ok(employees) if employees.is_empty() => writeln!(
                self.output,
                "No employees found with designation containing '{fragment}'."
            )?,
            Ok(employees) => write!(self.output, "{}", EmployeeTable(&employees))?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    async fn total_expense(&mut self) -> ConsoleResult<()> {
        match self.service.total_payroll_expense().await {
            Ok(total) => writeln!(self.output, "Total payroll expense: {}", format_money(total))?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    /// Look up a record, printing the reason when there is none
    async fn fetch(&mut self, id: EmployeeId) -> ConsoleResult<Option<Employee>> {
        match self.service.get_by_id(id).await {
            Ok(Some(employee)) => Ok(Some(employee)),
            Ok(None) => {
                writeln!(self.output, "Employee with ID {id} not found.")?;
                Ok(None)
            }
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &UseCaseError) -> ConsoleResult<()> {
        match err {
            UseCaseError::Repository(_) => {
                tracing::error!(error = %err, "Payroll operation failed");
                writeln!(self.output, "Storage error: {err}")?;
            }
            UseCaseError::NotFound { .. } => writeln!(self.output, "{err}.")?,
            UseCaseError::Validation(_) | UseCaseError::Domain(_) => {
                let messages = err.validation_messages().unwrap_or_default();
                writeln!(self.output, "Invalid input: {}", messages.join("; "))?;
            }
        }
        Ok(())
    }

    // Input helpers

    /// Print a prompt and read one trimmed line
    fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_required_text(&mut self, prompt: &str) -> ConsoleResult<String> {
        loop {
            let value = self.read_line(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "Value must not be empty.")?;
        }
    }

    fn prompt_optional_text(&mut self, prompt: &str) -> ConsoleResult<Option<String>> {
        let value = self.read_line(prompt)?;
        Ok((!value.is_empty()).then_some(value))
    }

    fn prompt_amount(&mut self, prompt: &str) -> ConsoleResult<Decimal> {
        loop {
            if let Some(amount) = self.prompt_optional_amount(prompt)? {
                return Ok(amount);
            }
            writeln!(self.output, "An amount is required.")?;
        }
    }

    /// Blank input is `None`; anything else must be a non-negative number
    fn prompt_optional_amount(&mut self, prompt: &str) -> ConsoleResult<Option<Decimal>> {
        loop {
            let value = self.read_line(prompt)?;
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse::<Decimal>() {
                Ok(amount) if amount >= Decimal::ZERO => return Ok(Some(amount)),
                _ => writeln!(self.output, "Invalid amount, enter a non-negative number.")?,
            }
        }
    }

    fn prompt_id(&mut self, prompt: &str) -> ConsoleResult<EmployeeId> {
        loop {
            match self.read_line(prompt)?.parse::<EmployeeId>() {
                Ok(id) => return Ok(id),
                Err(_) => writeln!(self.output, "Invalid ID, enter a whole number.")?,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> ConsoleResult<bool> {
        let answer = self.read_line(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}
