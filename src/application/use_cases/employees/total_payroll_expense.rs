//! Total Payroll Expense Use Case
//!
//! Sums net salary across every employee.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::EmployeeRepository;
use crate::shared::errors::UseCaseError;

/// Use case for computing the total payroll expense
pub struct TotalPayrollExpenseUseCase {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl TotalPayrollExpenseUseCase {
    /// Create a new TotalPayrollExpenseUseCase
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }

    /// Execute the use case. An empty store totals zero.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Decimal, UseCaseError> {
        let total = self.employee_repository.total_net_salary().await?;

        tracing::debug!(total = %total, "Computed total payroll expense");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::employee_repository::MockEmployeeRepository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn should_return_zero_for_empty_store() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_total_net_salary().returning(|| Ok(Decimal::ZERO));

        let use_case = TotalPayrollExpenseUseCase::new(Arc::new(repo));
        assert_eq!(use_case.execute().await.unwrap(), dec!(0));
    }

    #[tokio::test]
    async fn should_return_store_total() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_total_net_salary().returning(|| Ok(dec!(106345.67)));

        let use_case = TotalPayrollExpenseUseCase::new(Arc::new(repo));
        assert_eq!(use_case.execute().await.unwrap(), dec!(106345.67));
    }
}
