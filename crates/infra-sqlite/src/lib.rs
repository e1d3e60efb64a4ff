// Jobly Infrastructure - SQLite Adapter
// Implements: CompanyRepository, JobRepository, plus the SQL clause builders they use

mod company_repository;
mod connection;
mod error;
mod job_repository;
mod migration;
mod rows;
pub mod sql;

pub use company_repository::SqliteCompanyRepository;
pub use connection::create_pool;
pub use job_repository::SqliteJobRepository;
pub use migration::run_migrations;

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
