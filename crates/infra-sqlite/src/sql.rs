// SQL Clause Builders
//
// Pure helpers that turn typed update/filter values into SQL fragments with
// positional `$n` placeholders plus the values to bind, in placeholder order.

use jobly_core::domain::{CompanyFilter, JobFilter};
use jobly_core::error::{AppError, Result};
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;
use std::fmt;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl SqlValue {
    /// Literal SQL rendering (quotes doubled), for diagnostics only
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// SET clause plus its values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialUpdate {
    /// e.g. `"first_name"=$1, "age"=$2`
    pub set_cols: String,
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Position of the next placeholder after the SET values
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build a SET clause from `(field, value)` pairs
///
/// `columns` is the allow-list mapping each updatable field to its column.
/// Fields missing from it are rejected rather than passed through as column
/// names.
pub fn sql_for_partial_update(
    data: &[(&str, SqlValue)],
    columns: &[(&str, &str)],
) -> Result<PartialUpdate> {
    if data.is_empty() {
        return Err(AppError::BadRequest("No data".to_string()));
    }

    let mut cols = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());

    for (idx, (field, value)) in data.iter().enumerate() {
        let column = columns
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, column)| *column)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown field: {}", field)))?;

        cols.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value.clone());
    }

    Ok(PartialUpdate {
        set_cols: cols.join(", "),
        values,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    /// Case-insensitive substring match
    Contains { column: &'static str, needle: String },
    AtLeast { column: &'static str, value: i64 },
    AtMost { column: &'static str, value: i64 },
    Positive { column: &'static str },
}

impl Predicate {
    fn render(&self, bind: &mut impl FnMut(SqlValue) -> String) -> String {
        match self {
            Predicate::Contains { column, needle } => format!(
                "UPPER({}) LIKE UPPER({})",
                column,
                bind(SqlValue::Text(format!("%{}%", needle)))
            ),
            Predicate::AtLeast { column, value } => {
                format!("{} >= {}", column, bind(SqlValue::Integer(*value)))
            }
            Predicate::AtMost { column, value } => {
                format!("{} <= {}", column, bind(SqlValue::Integer(*value)))
            }
            Predicate::Positive { column } => format!("{} > 0", column),
        }
    }
}

/// WHERE clause assembled from a filter
///
/// `to_sql` renders placeholders for execution; `Display` renders literals
/// for logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    predicates: Vec<Predicate>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Parameterized fragment; placeholders start at `offset + 1`
    ///
    /// Empty string when there are no predicates, otherwise `" WHERE ..."`.
    pub fn to_sql(&self, offset: usize) -> String {
        let mut position = offset;
        self.render(|_| {
            position += 1;
            format!("${}", position)
        })
    }

    /// Values for the placeholders emitted by `to_sql`, in order
    pub fn values(&self) -> Vec<SqlValue> {
        let mut values = Vec::new();
        self.render(|value| {
            values.push(value);
            String::new()
        });
        values
    }

    fn render(&self, mut bind: impl FnMut(SqlValue) -> String) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }

        let clauses: Vec<String> = self
            .predicates
            .iter()
            .map(|p| p.render(&mut bind))
            .collect();

        format!(" WHERE {}", clauses.join(" AND "))
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|value| value.to_literal()))
    }
}

/// WHERE clause for company listings
pub fn company_where_clause(filter: &CompanyFilter) -> WhereClause {
    let mut predicates = Vec::new();

    if let Some(name) = &filter.name {
        predicates.push(Predicate::Contains {
            column: "name",
            needle: name.clone(),
        });
    }
    if let Some(min) = filter.min_employees {
        predicates.push(Predicate::AtLeast {
            column: "num_employees",
            value: min,
        });
    }
    if let Some(max) = filter.max_employees {
        predicates.push(Predicate::AtMost {
            column: "num_employees",
            value: max,
        });
    }

    WhereClause { predicates }
}

/// WHERE clause for job listings
pub fn job_where_clause(filter: &JobFilter) -> WhereClause {
    let mut predicates = Vec::new();

    if let Some(title) = &filter.title {
        predicates.push(Predicate::Contains {
            column: "title",
            needle: title.clone(),
        });
    }
    if let Some(min) = filter.min_salary {
        predicates.push(Predicate::AtLeast {
            column: "salary",
            value: min,
        });
    }
    if filter.has_equity == Some(true) {
        predicates.push(Predicate::Positive { column: "equity" });
    }

    WhereClause { predicates }
}

/// Bind values to a typed query in placeholder order
pub(crate) fn bind_values_as<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: &[SqlValue],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value.clone() {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(i) => query.bind(i),
            SqlValue::Text(s) => query.bind(s),
        };
    }
    query
}
