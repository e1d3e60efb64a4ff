// SQLite row representations

use jobly_core::domain::{Company, Job};
use jobly_core::error::{AppError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Columns selected for a company row
pub(crate) const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Columns selected for a job row
pub(crate) const JOB_COLUMNS: &str = "title, salary, equity, company_handle";

/// Stored form of an equity value
///
/// Normalized so `0.50` and `0.5` store alike and zero is always `"0"`.
pub(crate) fn equity_text(equity: Decimal) -> String {
    equity.normalize().to_string()
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CompanyRow {
    handle: String,
    name: String,
    description: String,
    num_employees: Option<i64>,
    logo_url: Option<String>,
}

impl CompanyRow {
    pub(crate) fn into_company(self) -> Company {
        Company {
            handle: self.handle,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct JobRow {
    title: String,
    salary: Option<i64>,
    equity: Option<String>,
    company_handle: String,
}

impl JobRow {
    pub(crate) fn into_job(self) -> Result<Job> {
        let equity = self
            .equity
            .as_deref()
            .map(Decimal::from_str)
            .transpose()
            .map_err(|e| {
                AppError::Database(format!(
                    "Invalid equity stored for job {}: {}",
                    self.title, e
                ))
            })?;

        Ok(Job {
            title: self.title,
            salary: self.salary,
            equity,
            company_handle: self.company_handle,
        })
    }
}
