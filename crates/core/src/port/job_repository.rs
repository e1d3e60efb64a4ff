// Job Repository Port (Interface)

use crate::domain::{Job, JobFilter, JobUpdate, NewJob};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job (BadRequest on duplicate title)
    async fn create(&self, job: &NewJob) -> Result<Job>;

    /// Jobs matching the filter, ordered by title
    ///
    /// NotFound when a non-empty filter matches nothing.
    async fn get(&self, filter: &JobFilter) -> Result<Vec<Job>>;

    /// Apply a partial update to the job with this title
    async fn update(&self, title: &str, data: &JobUpdate) -> Result<Job>;

    /// Delete the job with this title
    async fn remove(&self, title: &str) -> Result<()>;
}
