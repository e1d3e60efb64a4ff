// Port Layer - Interfaces for external dependencies

pub mod company_repository;
pub mod job_repository;
pub mod time_provider; // For deterministic token timestamps
pub mod token_issuer;

// Re-exports
pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;
pub use time_provider::TimeProvider;
pub use token_issuer::TokenIssuer;
