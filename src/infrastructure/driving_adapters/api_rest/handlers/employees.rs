//! Employee Handlers
//!
//! HTTP handlers for employee CRUD and search.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::employee::{Employee, EmployeeData, EmployeeId};
use crate::infrastructure::driving_adapters::api_rest::dto::employee::{
    EmployeeRequestDto, EmployeeResponseDto, SearchQuery, StatusResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for employee endpoints
///
/// `/employees/search` is a static segment and wins over `/employees/:id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(get_all_employees).post(create_employee))
        .route("/employees/search", get(search_employees))
        .route(
            "/employees/:id",
            get(get_employee_by_id).put(update_employee).delete(delete_employee),
        )
}

/// Validate the body and convert it to domain data
fn parse_body(payload: Result<Json<EmployeeRequestDto>, JsonRejection>) -> Result<EmployeeData, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;
    EmployeeData::try_from(dto)
}

/// GET /employees - List every employee, ordered by id
///
/// # Responses
///
/// * 200 OK - JSON array of employees
/// * 500 Internal Server Error - Storage failure
async fn get_all_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeResponseDto>>, ApiError> {
    let employees = state.payroll_service.get_all().await?;

    Ok(Json(employees.into_iter().map(EmployeeResponseDto::from).collect()))
}

/// POST /employees - Add a new employee
///
/// # Responses
///
/// * 201 Created - Status message with the created employee
/// * 400 Bad Request - Malformed JSON or validation error
/// * 500 Internal Server Error - Storage failure
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusResponseDto>), ApiError> {
    let data = parse_body(payload)?;

    let employee = state.payroll_service.add(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponseDto::success(
            "Employee added successfully",
            Some(EmployeeResponseDto::from(employee)),
        )),
    ))
}

/// GET /employees/:id - Get an employee by ID
///
/// # Responses
///
/// * 200 OK - Employee found
/// * 400 Bad Request - ID is not an integer
/// * 404 Not Found - Employee does not exist
async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponseDto>, ApiError> {
    let employee_id: EmployeeId = id.parse()?;

    let employee = state
        .payroll_service
        .get_by_id(employee_id)
        .await?
        .ok_or_else(|| UseCaseError::employee_not_found(employee_id))?;

    Ok(Json(EmployeeResponseDto::from(employee)))
}

/// PUT /employees/:id - Overwrite an employee
///
/// # Responses
///
/// * 200 OK - Status message with the updated employee
/// * 400 Bad Request - Bad ID, malformed JSON or validation error
/// * 404 Not Found - Employee does not exist
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequestDto>, JsonRejection>,
) -> Result<Json<StatusResponseDto>, ApiError> {
    let employee_id: EmployeeId = id.parse()?;
    let data = parse_body(payload)?;

    let employee = state
        .payroll_service
        .update(Employee::new(data).with_id(employee_id))
        .await?;

    Ok(Json(StatusResponseDto::success(
        "Employee updated successfully",
        Some(EmployeeResponseDto::from(employee)),
    )))
}

/// DELETE /employees/:id - Permanently delete an employee
///
/// # Responses
///
/// * 200 OK - Status message
/// * 400 Bad Request - ID is not an integer
/// * 404 Not Found - Employee does not exist
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponseDto>, ApiError> {
    let employee_id: EmployeeId = id.parse()?;

    state.payroll_service.delete(employee_id).await?;

    Ok(Json(StatusResponseDto::success("Employee deleted successfully", None)))
}

/// GET /employees/search?designation=X - Substring search on designation
///
/// # Responses
///
/// * 200 OK - JSON array, possibly empty
/// * 400 Bad Request - `designation` missing or blank
async fn search_employees(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<EmployeeResponseDto>>, ApiError> {
    let Query(query) = query?;
    let designation = query
        .designation
        .ok_or_else(|| ApiError::BadRequest("designation query parameter is required".to_string()))?;

    let employees = state.payroll_service.search_by_designation(&designation).await?;

    Ok(Json(employees.into_iter().map(EmployeeResponseDto::from).collect()))
}
