// SQLite CompanyRepository Implementation

use crate::error::{is_unique_violation, map_sqlx_error};
use crate::rows::{CompanyRow, JobRow, COMPANY_COLUMNS, JOB_COLUMNS};
use crate::sql::{
    bind_values_as, company_where_clause, sql_for_partial_update, SqlValue, WhereClause,
};
use async_trait::async_trait;
use jobly_core::domain::{
    Company, CompanyDetail, CompanyFilter, CompanyUpdate, CompanyWithJobs, NewCompany,
};
use jobly_core::error::{AppError, Result};
use jobly_core::port::CompanyRepository;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Updatable company fields and their columns
const COMPANY_UPDATE_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("description", "description"),
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
];

fn duplicate_company(handle: &str) -> AppError {
    AppError::BadRequest(format!("Duplicate company: {}", handle))
}

fn company_not_found(handle: &str) -> AppError {
    AppError::NotFound(format!("No company: {}", handle))
}

/// Present fields of an update, in column order
fn company_changes(data: &CompanyUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut changes = Vec::new();

    if let Some(name) = &data.name {
        changes.push(("name", SqlValue::from(name.as_str())));
    }
    if let Some(description) = &data.description {
        changes.push(("description", SqlValue::from(description.as_str())));
    }
    if let Some(num_employees) = data.num_employees {
        changes.push(("numEmployees", SqlValue::from(num_employees)));
    }
    if let Some(logo_url) = &data.logo_url {
        changes.push(("logoUrl", SqlValue::from(logo_url.clone())));
    }

    changes
}

pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Job titles per handle for every company matching `clause`, each list
    /// ordered by title
    async fn job_titles_for(&self, clause: &WhereClause) -> Result<HashMap<String, Vec<String>>> {
        let sql = format!(
            "SELECT company_handle, title FROM jobs \
             WHERE company_handle IN (SELECT handle FROM companies{}) \
             ORDER BY company_handle, title",
            clause.to_sql(0)
        );

        let pairs: Vec<(String, String)> =
            bind_values_as(sqlx::query_as::<_, (String, String)>(&sql), &clause.values())
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        let mut titles: HashMap<String, Vec<String>> = HashMap::new();
        for (handle, title) in pairs {
            titles.entry(handle).or_default().push(title);
        }

        Ok(titles)
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, company: &NewCompany) -> Result<Company> {
        company.validate()?;

        let existing: Option<String> =
            sqlx::query_scalar("SELECT handle FROM companies WHERE handle = $1")
                .bind(&company.handle)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if existing.is_some() {
            warn!(handle = %company.handle, "Rejected duplicate company");
            return Err(duplicate_company(&company.handle));
        }

        let sql = format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COMPANY_COLUMNS
        );

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(&company.handle)
            .bind(&company.name)
            .bind(&company.description)
            .bind(company.num_employees)
            .bind(&company.logo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                // Lost a race with a concurrent insert, or the name is taken
                if is_unique_violation(&e) {
                    duplicate_company(&company.handle)
                } else {
                    map_sqlx_error(e)
                }
            })?;

        info!(handle = %company.handle, "Company created");
        Ok(row.into_company())
    }

    async fn find_all(&self) -> Result<Vec<Company>> {
        let sql = format!("SELECT {} FROM companies ORDER BY handle", COMPANY_COLUMNS);

        let rows: Vec<CompanyRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(CompanyRow::into_company).collect())
    }

    async fn get(&self, filter: &CompanyFilter) -> Result<Vec<CompanyWithJobs>> {
        filter.validate()?;

        let clause = company_where_clause(filter);
        let sql = format!(
            "SELECT {} FROM companies{} ORDER BY handle",
            COMPANY_COLUMNS,
            clause.to_sql(0)
        );

        let rows: Vec<CompanyRow> =
            bind_values_as(sqlx::query_as::<_, CompanyRow>(&sql), &clause.values())
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        debug!(filter = %clause, rows = rows.len(), "Companies fetched");

        if rows.is_empty() && !clause.is_empty() {
            return Err(AppError::NotFound(
                "No companies match the given filters".to_string(),
            ));
        }

        let mut titles = self.job_titles_for(&clause).await?;

        Ok(rows
            .into_iter()
            .map(CompanyRow::into_company)
            .map(|company| {
                let jobs = titles.remove(&company.handle).unwrap_or_default();
                CompanyWithJobs { company, jobs }
            })
            .collect())
    }

    async fn get_by_handle(&self, handle: &str) -> Result<CompanyDetail> {
        let sql = format!("SELECT {} FROM companies WHERE handle = $1", COMPANY_COLUMNS);

        let company = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| company_not_found(handle))?
            .into_company();

        let sql = format!(
            "SELECT {} FROM jobs WHERE company_handle = $1 ORDER BY title",
            JOB_COLUMNS
        );
        let jobs = sqlx::query_as::<_, JobRow>(&sql)
            .bind(handle)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .into_iter()
            .map(JobRow::into_job)
            .collect::<Result<Vec<_>>>()?;

        Ok(CompanyDetail { company, jobs })
    }

    async fn update(&self, handle: &str, data: &CompanyUpdate) -> Result<Company> {
        data.validate()?;

        let update = sql_for_partial_update(&company_changes(data), COMPANY_UPDATE_COLUMNS)?;
        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} RETURNING {}",
            update.set_cols,
            update.next_placeholder(),
            COMPANY_COLUMNS
        );

        let row = bind_values_as(sqlx::query_as::<_, CompanyRow>(&sql), &update.values)
            .bind(handle.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::BadRequest(format!("Duplicate company name for {}", handle))
                } else {
                    map_sqlx_error(e)
                }
            })?
            .ok_or_else(|| company_not_found(handle))?;

        info!(handle = %handle, fields = update.values.len(), "Company updated");
        Ok(row.into_company())
    }

    async fn remove(&self, handle: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM companies WHERE handle = $1")
            .bind(handle)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(handle));
        }

        info!(handle = %handle, "Company removed");
        Ok(())
    }
}
