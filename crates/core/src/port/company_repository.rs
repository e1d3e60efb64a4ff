// Company Repository Port (Interface)

use crate::domain::{
    Company, CompanyDetail, CompanyFilter, CompanyUpdate, CompanyWithJobs, NewCompany,
};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Company persistence
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a new company (BadRequest on duplicate handle)
    async fn create(&self, company: &NewCompany) -> Result<Company>;

    /// All companies, ordered by handle
    async fn find_all(&self) -> Result<Vec<Company>>;

    /// Companies matching the filter, each with its job titles attached
    ///
    /// NotFound when a non-empty filter matches nothing.
    async fn get(&self, filter: &CompanyFilter) -> Result<Vec<CompanyWithJobs>>;

    /// Single company with its jobs
    async fn get_by_handle(&self, handle: &str) -> Result<CompanyDetail>;

    /// Apply a partial update and return the full row
    async fn update(&self, handle: &str, data: &CompanyUpdate) -> Result<Company>;

    /// Delete a company (jobs cascade)
    async fn remove(&self, handle: &str) -> Result<()>;
}
