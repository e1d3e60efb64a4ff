// SQLite JobRepository Implementation

use crate::error::{is_unique_violation, map_sqlx_error};
use crate::rows::{equity_text, JobRow, JOB_COLUMNS};
use crate::sql::{bind_values_as, job_where_clause, sql_for_partial_update, SqlValue};
use async_trait::async_trait;
use jobly_core::domain::{Job, JobFilter, JobUpdate, NewJob};
use jobly_core::error::{AppError, Result};
use jobly_core::port::JobRepository;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Updatable job fields and their columns
const JOB_UPDATE_COLUMNS: &[(&str, &str)] = &[
    ("salary", "salary"),
    ("equity", "equity"),
    ("companyHandle", "company_handle"),
];

fn duplicate_job(title: &str) -> AppError {
    AppError::BadRequest(format!("Duplicate job: {}", title))
}

fn job_not_found(title: &str) -> AppError {
    AppError::NotFound(format!("No job: {}", title))
}

/// Present fields of an update, in column order
///
/// Equity is bound in its canonical text form.
fn job_changes(data: &JobUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut changes = Vec::new();

    if let Some(salary) = data.salary {
        changes.push(("salary", SqlValue::from(salary)));
    }
    if let Some(equity) = data.equity {
        changes.push(("equity", SqlValue::from(equity.map(equity_text))));
    }
    if let Some(company_handle) = &data.company_handle {
        changes.push(("companyHandle", SqlValue::from(company_handle.as_str())));
    }

    changes
}

pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job> {
        job.validate()?;

        let existing: Option<String> = sqlx::query_scalar("SELECT title FROM jobs WHERE title = $1")
            .bind(&job.title)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if existing.is_some() {
            warn!(title = %job.title, "Rejected duplicate job");
            return Err(duplicate_job(&job.title));
        }

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            JOB_COLUMNS
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(&job.title)
            .bind(job.salary)
            .bind(job.equity.map(equity_text))
            .bind(&job.company_handle)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    duplicate_job(&job.title)
                } else {
                    map_sqlx_error(e)
                }
            })?;

        info!(title = %job.title, company_handle = %job.company_handle, "Job created");
        row.into_job()
    }

    async fn get(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        filter.validate()?;

        let clause = job_where_clause(filter);
        let sql = format!(
            "SELECT {} FROM jobs{} ORDER BY title",
            JOB_COLUMNS,
            clause.to_sql(0)
        );

        let rows: Vec<JobRow> = bind_values_as(sqlx::query_as::<_, JobRow>(&sql), &clause.values())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(filter = %clause, rows = rows.len(), "Jobs fetched");

        if rows.is_empty() && !clause.is_empty() {
            return Err(AppError::NotFound(
                "No jobs match the given filters".to_string(),
            ));
        }

        rows.into_iter().map(JobRow::into_job).collect()
    }

    async fn update(&self, title: &str, data: &JobUpdate) -> Result<Job> {
        data.validate()?;

        let update = sql_for_partial_update(&job_changes(data), JOB_UPDATE_COLUMNS)?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE title = ${} RETURNING {}",
            update.set_cols,
            update.next_placeholder(),
            JOB_COLUMNS
        );

        let row = bind_values_as(sqlx::query_as::<_, JobRow>(&sql), &update.values)
            .bind(title.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| job_not_found(title))?;

        info!(title = %title, fields = update.values.len(), "Job updated");
        row.into_job()
    }

    async fn remove(&self, title: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE title = $1")
            .bind(title)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(title));
        }

        info!(title = %title, "Job removed");
        Ok(())
    }
}
