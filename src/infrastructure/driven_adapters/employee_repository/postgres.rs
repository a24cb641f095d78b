//! PostgreSQL Employee Repository Implementation
//!
//! Implements the EmployeeRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::EmployeeRepository;
use crate::domain::models::employee::{Employee, EmployeeId};
use crate::shared::errors::RepositoryError;

const SELECT_COLUMNS: &str = "id, name, designation, basic_salary, hra, tax, net_salary";

/// Database row representation for the employee_payroll table
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    name: String,
    designation: String,
    basic_salary: Decimal,
    hra: Decimal,
    tax: Decimal,
    net_salary: Decimal,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::restore(
            EmployeeId::new(row.id),
            row.name,
            row.designation,
            row.basic_salary,
            row.hra,
            row.tax,
            row.net_salary,
        )
    }
}

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Create a new PostgresEmployeeRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: &Employee) -> Result<Employee, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            INSERT INTO employee_payroll (name, designation, basic_salary, hra, tax, net_salary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(employee.name())
        .bind(employee.designation())
        .bind(employee.basic_salary())
        .bind(employee.allowance())
        .bind(employee.tax())
        .bind(employee.net_salary())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: EmployeeId, employee: &Employee) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            UPDATE employee_payroll
            SET name = $2,
                designation = $3,
                basic_salary = $4,
                hra = $5,
                tax = $6,
                net_salary = $7
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id.value())
        .bind(employee.name())
        .bind(employee.designation())
        .bind(employee.basic_salary())
        .bind(employee.allowance())
        .bind(employee.tax())
        .bind(employee.net_salary())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM employee_payroll WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM employee_payroll WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM employee_payroll ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_designation(&self, fragment: &str) -> Result<Vec<Employee>, RepositoryError> {
        // strpos keeps the match literal; LIKE would treat % and _ as wildcards
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM employee_payroll
            WHERE strpos(designation, $1) > 0
            ORDER BY id ASC
            "#
        ))
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn total_net_salary(&self) -> Result<Decimal, RepositoryError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(net_salary), 0) FROM employee_payroll",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
