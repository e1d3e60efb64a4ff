// Domain Layer - Entities, inputs and filters

pub mod company;
pub mod error;
pub mod job;
pub mod user;

mod nullable;

// Re-exports
pub use company::{Company, CompanyDetail, CompanyFilter, CompanyUpdate, CompanyWithJobs, NewCompany};
pub use error::DomainError;
pub use job::{Job, JobFilter, JobUpdate, NewJob};
pub use user::{TokenClaims, UserIdentity};
