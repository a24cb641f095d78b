//! Employee Repository Implementations

mod postgres;

pub use postgres::PostgresEmployeeRepository;
