//! Payroll Handlers
//!
//! Aggregate payroll figures.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::employee::PayrollExpenseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/payroll/total-expense", get(total_payroll_expense))
}

/// GET /payroll/total-expense - Sum of net salary over all employees
async fn total_payroll_expense(State(state): State<AppState>) -> Result<Json<PayrollExpenseDto>, ApiError> {
    let total = state.payroll_service.total_payroll_expense().await?;

    Ok(Json(PayrollExpenseDto::from(total)))
}
