//! Common test utilities for integration tests
//!
//! Provides an in-memory employee store, a router wired to it, request
//! helpers, and a PostgreSQL container for the repository tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use payroll_registry::application::PayrollService;
use payroll_registry::domain::gateways::EmployeeRepository;
use payroll_registry::domain::models::employee::{Employee, EmployeeId};
use payroll_registry::infrastructure::driving_adapters::api_rest::{self, AppState};
use payroll_registry::shared::errors::RepositoryError;

/// Employee store held in memory; identifiers start at 1 like a fresh SERIAL
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    next_id: i32,
    rows: BTreeMap<i32, Employee>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: &Employee) -> Result<Employee, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let stored = employee.clone().with_id(EmployeeId::new(id));
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: EmployeeId, employee: &Employee) -> Result<Option<Employee>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.get_mut(&id.value()).map(|row| {
            *row = employee.clone().with_id(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.remove(&id.value()).is_some())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_designation(&self, fragment: &str) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|employee| employee.designation().contains(fragment))
            .cloned()
            .collect())
    }

    async fn total_net_salary(&self) -> Result<Decimal, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .map(Employee::net_salary)
            .sum())
    }
}

/// Store whose every call fails as if the database were unreachable
pub struct UnavailableEmployeeRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl EmployeeRepository for UnavailableEmployeeRepository {
    async fn create(&self, _employee: &Employee) -> Result<Employee, RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _id: EmployeeId, _employee: &Employee) -> Result<Option<Employee>, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: EmployeeId) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_designation(&self, _fragment: &str) -> Result<Vec<Employee>, RepositoryError> {
        Err(unavailable())
    }

    async fn total_net_salary(&self) -> Result<Decimal, RepositoryError> {
        Err(unavailable())
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub service: Arc<PayrollService>,
}

impl TestApp {
    /// Application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryEmployeeRepository::default()))
    }

    /// Application whose store always fails
    pub fn unavailable() -> Self {
        Self::with_repository(Arc::new(UnavailableEmployeeRepository))
    }

    pub fn with_repository(repository: Arc<dyn EmployeeRepository>) -> Self {
        let service = Arc::new(PayrollService::new(repository));
        let router = api_rest::router(AppState::new(service.clone()));
        Self { router, service }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn request(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, headers, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, Some(&body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(&body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

/// Decoded HTTP response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Request body for the sample engineer used across tests
pub fn kumar() -> Value {
    serde_json::json!({
        "name": "A. Kumar",
        "designation": "Engineer",
        "basicSalary": 50000,
        "hra": 8000,
        "tax": 4000
    })
}

/// PostgreSQL container with migrations applied
pub struct TestDatabase {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestDatabase {
    /// Start a fresh PostgreSQL container and run migrations
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _container: container,
        }
    }
}
