// Job Domain Model

use super::company::Handle;
use super::error::{DomainError, Result};
use super::nullable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Job title (row key for update/remove)
pub type Title = String;

/// Job entity in its external shape
///
/// `equity` serializes as a decimal string (`"0"`, `"0.5"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: Title,
    pub salary: Option<i64>,
    pub equity: Option<Decimal>,
    #[serde(alias = "company_handle")]
    pub company_handle: Handle,
}

/// Input for creating a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: Title,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<Decimal>,
    #[serde(alias = "company_handle")]
    pub company_handle: Handle,
}

fn validate_equity(equity: Decimal) -> Result<()> {
    if equity < Decimal::ZERO || equity > Decimal::ONE {
        return Err(DomainError::ValidationError(format!(
            "equity must be between 0 and 1, got {}",
            equity
        )));
    }
    Ok(())
}

fn validate_salary(salary: i64) -> Result<()> {
    if salary < 0 {
        return Err(DomainError::ValidationError(format!(
            "salary must be non-negative, got {}",
            salary
        )));
    }
    Ok(())
}

impl NewJob {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Job title cannot be empty".to_string(),
            ));
        }

        if self.company_handle.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "companyHandle cannot be empty".to_string(),
            ));
        }

        if let Some(salary) = self.salary {
            validate_salary(salary)?;
        }

        if let Some(equity) = self.equity {
            validate_equity(equity)?;
        }

        Ok(())
    }
}

/// Optional predicates for job listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_salary: Option<i64>,
    /// `Some(true)` keeps only jobs with non-zero equity; `Some(false)` is a no-op
    #[serde(default)]
    pub has_equity: Option<bool>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.min_salary.is_none() && self.has_equity.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.min_salary {
            if min < 0 {
                return Err(DomainError::ValidationError(format!(
                    "minSalary must be non-negative, got {}",
                    min
                )));
            }
        }
        Ok(())
    }
}

/// Partial update for a job
///
/// `title` is the row key and cannot be changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub equity: Option<Option<Decimal>>,
    #[serde(
        default,
        alias = "company_handle",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_handle: Option<Handle>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.salary.is_none() && self.equity.is_none() && self.company_handle.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(Some(salary)) = self.salary {
            validate_salary(salary)?;
        }

        if let Some(Some(equity)) = self.equity {
            validate_equity(equity)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_job_equity_serializes_as_string() {
        let job = Job {
            title: "entrepreneur".to_string(),
            salary: Some(2_000_000),
            equity: Some(Decimal::from_str("0.5").unwrap()),
            company_handle: "c3".to_string(),
        };

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "entrepreneur",
                "salary": 2000000,
                "equity": "0.5",
                "companyHandle": "c3",
            })
        );
    }

    #[test]
    fn test_new_job_accepts_numeric_equity() {
        let job: NewJob = serde_json::from_value(json!({
            "title": "newJob",
            "salary": 30000,
            "equity": 0,
            "companyHandle": "c3",
        }))
        .unwrap();

        assert_eq!(job.equity, Some(Decimal::ZERO));
        assert_ok!(job.validate());
    }

    #[test]
    fn test_new_job_rejects_out_of_range_equity() {
        let job = NewJob {
            title: "greedy".to_string(),
            salary: None,
            equity: Some(Decimal::from_str("1.5").unwrap()),
            company_handle: "c1".to_string(),
        };
        assert_err!(job.validate());
    }

    #[test]
    fn test_update_accepts_snake_case_company_handle() {
        let update: JobUpdate = serde_json::from_value(json!({
            "salary": null,
            "equity": null,
            "company_handle": "c3",
        }))
        .unwrap();

        assert_eq!(update.salary, Some(None));
        assert_eq!(update.equity, Some(None));
        assert_eq!(update.company_handle.as_deref(), Some("c3"));
    }

    #[test]
    fn test_update_rejects_title() {
        let result: std::result::Result<JobUpdate, _> =
            serde_json::from_value(json!({"title": "Renamed"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_has_equity_false_is_not_empty() {
        let filter = JobFilter {
            has_equity: Some(false),
            ..Default::default()
        };
        assert!(!filter.is_empty());
        assert!(JobFilter::default().is_empty());
    }

    #[test]
    fn test_filter_rejects_negative_salary() {
        let filter = JobFilter {
            min_salary: Some(-1),
            ..Default::default()
        };
        assert_err!(filter.validate());
    }
}
