// Company Domain Model

use super::error::{DomainError, Result};
use super::job::Job;
use super::nullable;
use serde::{Deserialize, Serialize};

/// Company handle (primary key, immutable after creation)
pub type Handle = String;

/// Company entity in its external (camelCase) shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: Handle,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i64>,
    pub logo_url: Option<String>,
}

/// Company returned by filtered listings, with the titles of its jobs attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyWithJobs {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<String>,
}

/// Single company with its full job records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// Input for creating a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: Handle,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i64>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl NewCompany {
    pub fn validate(&self) -> Result<()> {
        if self.handle.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Company handle cannot be empty".to_string(),
            ));
        }

        if self.handle != self.handle.to_lowercase() {
            return Err(DomainError::ValidationError(format!(
                "Company handle must be lowercase, got {}",
                self.handle
            )));
        }

        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Company name cannot be empty".to_string(),
            ));
        }

        if let Some(n) = self.num_employees {
            if n < 0 {
                return Err(DomainError::ValidationError(format!(
                    "numEmployees must be non-negative, got {}",
                    n
                )));
            }
        }

        Ok(())
    }
}

/// Optional predicates for company listings
///
/// Unrecognized keys are ignored when deserializing from a query object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_employees: Option<i64>,
    #[serde(default)]
    pub max_employees: Option<i64>,
}

impl CompanyFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min_employees.is_none() && self.max_employees.is_none()
    }

    /// Reject negative bounds and inverted ranges
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("minEmployees", self.min_employees),
            ("maxEmployees", self.max_employees),
        ] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(DomainError::ValidationError(format!(
                        "{} must be non-negative, got {}",
                        field, v
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_employees, self.max_employees) {
            if min > max {
                return Err(DomainError::InvalidRange {
                    min_field: "minEmployees",
                    min,
                    max_field: "maxEmployees",
                    max,
                });
            }
        }

        Ok(())
    }
}

/// Partial update for a company
///
/// `handle` is immutable; unknown keys are rejected. Nullable columns use a
/// tri-state: absent, explicit null, or a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_employees: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.num_employees.is_none()
            && self.logo_url.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "Company name cannot be empty".to_string(),
                ));
            }
        }

        if let Some(Some(n)) = self.num_employees {
            if n < 0 {
                return Err(DomainError::ValidationError(format!(
                    "numEmployees must be non-negative, got {}",
                    n
                )));
            }
        }

        Ok(())
    }
}
