//! Company repository against a seeded SQLite database

mod common;

use jobly_core::domain::{Company, CompanyFilter, CompanyUpdate, NewCompany};
use jobly_core::error::AppError;
use jobly_core::port::{CompanyRepository, JobRepository};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

type CompanyRecord = (String, String, String, Option<i64>, Option<String>);

async fn company_record(pool: &sqlx::SqlitePool, handle: &str) -> Vec<CompanyRecord> {
    sqlx::query_as(
        "SELECT handle, name, description, num_employees, logo_url FROM companies WHERE handle = $1",
    )
    .bind(handle)
    .fetch_all(pool)
    .await
    .unwrap()
}

fn seeded(n: i64) -> Company {
    Company {
        handle: format!("c{}", n),
        name: format!("Comp{}", n),
        description: format!("Desc{}", n),
        num_employees: Some(n),
        logo_url: Some(format!("http://c{}.img", n)),
    }
}

fn new_company() -> NewCompany {
    NewCompany {
        handle: "new".to_string(),
        name: "New".to_string(),
        description: "New Description".to_string(),
        num_employees: Some(1),
        logo_url: Some("http://new.img".to_string()),
    }
}

// ---------------------------------------------------------------- create

#[tokio::test]
async fn test_create_works() {
    let fx = common::setup().await;

    let company = assert_ok!(fx.companies.create(&new_company()).await);
    assert_eq!(
        serde_json::to_value(&company).unwrap(),
        json!({
            "handle": "new",
            "name": "New",
            "description": "New Description",
            "numEmployees": 1,
            "logoUrl": "http://new.img",
        })
    );

    assert_eq!(
        company_record(&fx.pool, "new").await,
        vec![(
            "new".to_string(),
            "New".to_string(),
            "New Description".to_string(),
            Some(1),
            Some("http://new.img".to_string()),
        )]
    );
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let fx = common::setup().await;

    assert_ok!(fx.companies.create(&new_company()).await);
    let err = assert_err!(fx.companies.create(&new_company()).await);
    assert!(err.is_bad_request());
    assert_eq!(err.to_string(), "Bad request: Duplicate company: new");
}

#[tokio::test]
async fn test_create_duplicate_name_is_bad_request() {
    let fx = common::setup().await;

    let mut company = new_company();
    company.name = "Comp1".to_string();
    let err = assert_err!(fx.companies.create(&company).await);
    assert!(err.is_bad_request());
}

#[tokio::test]
async fn test_create_mixed_case_handle_is_bad_request() {
    let fx = common::setup().await;

    let mut company = new_company();
    company.handle = "Acme".to_string();
    let err = assert_err!(fx.companies.create(&company).await);
    assert!(matches!(err, AppError::Domain(_)));
    assert_eq!(err.status_code(), 400);
    assert!(company_record(&fx.pool, "Acme").await.is_empty());
}

// ---------------------------------------------------------------- findAll

#[tokio::test]
async fn test_find_all_works() {
    let fx = common::setup().await;

    let companies = assert_ok!(fx.companies.find_all().await);
    assert_eq!(companies, vec![seeded(1), seeded(2), seeded(3)]);
}

// ---------------------------------------------------------------- get

#[tokio::test]
async fn test_get_by_name() {
    let fx = common::setup().await;

    let filter = CompanyFilter {
        name: Some("comp1".to_string()),
        ..Default::default()
    };
    let companies = assert_ok!(fx.companies.get(&filter).await);

    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].company, seeded(1));
    assert_eq!(companies[0].jobs, vec!["Farmer"]);
}

#[tokio::test]
async fn test_get_by_min_employees_attaches_job_titles() {
    let fx = common::setup().await;

    let filter = CompanyFilter {
        min_employees: Some(2),
        ..Default::default()
    };
    let companies = assert_ok!(fx.companies.get(&filter).await);

    assert_eq!(
        serde_json::to_value(&companies).unwrap(),
        json!([
            {
                "handle": "c2",
                "name": "Comp2",
                "description": "Desc2",
                "numEmployees": 2,
                "logoUrl": "http://c2.img",
                "jobs": ["Engineer", "Technician"],
            },
            {
                "handle": "c3",
                "name": "Comp3",
                "description": "Desc3",
                "numEmployees": 3,
                "logoUrl": "http://c3.img",
                "jobs": [],
            },
        ])
    );
}

#[tokio::test]
async fn test_get_by_max_employees() {
    let fx = common::setup().await;

    let filter = CompanyFilter {
        max_employees: Some(2),
        ..Default::default()
    };
    let companies = assert_ok!(fx.companies.get(&filter).await);
    let handles: Vec<&str> = companies.iter().map(|c| c.company.handle.as_str()).collect();
    assert_eq!(handles, vec!["c1", "c2"]);
}

#[tokio::test]
async fn test_get_by_employee_range() {
    let fx = common::setup().await;

    let filter: CompanyFilter =
        serde_json::from_value(json!({"minEmployees": 2, "maxEmployees": 3})).unwrap();
    let companies = assert_ok!(fx.companies.get(&filter).await);
    let handles: Vec<&str> = companies.iter().map(|c| c.company.handle.as_str()).collect();
    assert_eq!(handles, vec!["c2", "c3"]);
}

#[tokio::test]
async fn test_get_without_filter_returns_everything() {
    let fx = common::setup().await;

    let companies = assert_ok!(fx.companies.get(&CompanyFilter::default()).await);
    assert_eq!(companies.len(), 3);
}

#[tokio::test]
async fn test_get_no_match_is_not_found() {
    let fx = common::setup().await;

    let filter = CompanyFilter {
        name: Some("not-a-company".to_string()),
        ..Default::default()
    };
    let err = assert_err!(fx.companies.get(&filter).await);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_inverted_range_is_bad_request() {
    let fx = common::setup().await;

    let filter = CompanyFilter {
        min_employees: Some(3),
        max_employees: Some(2),
        ..Default::default()
    };
    let err = assert_err!(fx.companies.get(&filter).await);
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_get_ignores_unknown_filter_keys() {
    let fx = common::setup().await;

    let filter: CompanyFilter =
        serde_json::from_value(json!({"username": "not-a-company"})).unwrap();
    assert!(filter.is_empty());
    assert_eq!(assert_ok!(fx.companies.get(&filter).await).len(), 3);
}

// ---------------------------------------------------------------- get by handle

#[tokio::test]
async fn test_get_by_handle_includes_jobs() {
    let fx = common::setup().await;

    let detail = assert_ok!(fx.companies.get_by_handle("c2").await);
    assert_eq!(detail.company, seeded(2));
    let titles: Vec<&str> = detail.jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["Engineer", "Technician"]);
}

#[tokio::test]
async fn test_get_by_handle_not_found() {
    let fx = common::setup().await;

    let err = assert_err!(fx.companies.get_by_handle("nope").await);
    assert!(matches!(err, AppError::NotFound(_)));
}

// ---------------------------------------------------------------- update

#[tokio::test]
async fn test_update_works() {
    let fx = common::setup().await;

    let data: CompanyUpdate = serde_json::from_value(json!({
        "name": "New",
        "description": "New Description",
        "numEmployees": 10,
        "logoUrl": "http://new.img",
    }))
    .unwrap();
    let company = assert_ok!(fx.companies.update("c1", &data).await);

    assert_eq!(
        company,
        Company {
            handle: "c1".to_string(),
            name: "New".to_string(),
            description: "New Description".to_string(),
            num_employees: Some(10),
            logo_url: Some("http://new.img".to_string()),
        }
    );
    assert_eq!(
        company_record(&fx.pool, "c1").await,
        vec![(
            "c1".to_string(),
            "New".to_string(),
            "New Description".to_string(),
            Some(10),
            Some("http://new.img".to_string()),
        )]
    );

    // Other rows untouched
    assert_eq!(
        assert_ok!(fx.companies.get_by_handle("c2").await).company,
        seeded(2)
    );
}

#[tokio::test]
async fn test_update_null_fields() {
    let fx = common::setup().await;

    let data: CompanyUpdate = serde_json::from_value(json!({
        "name": "New",
        "description": "New Description",
        "numEmployees": null,
        "logoUrl": null,
    }))
    .unwrap();
    let company = assert_ok!(fx.companies.update("c1", &data).await);

    assert_eq!(company.num_employees, None);
    assert_eq!(company.logo_url, None);
    assert_eq!(
        company_record(&fx.pool, "c1").await,
        vec![(
            "c1".to_string(),
            "New".to_string(),
            "New Description".to_string(),
            None,
            None,
        )]
    );
}

#[tokio::test]
async fn test_update_not_found() {
    let fx = common::setup().await;

    let data = CompanyUpdate {
        name: Some("New".to_string()),
        ..Default::default()
    };
    let err = assert_err!(fx.companies.update("nope", &data).await);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_no_data_is_bad_request() {
    let fx = common::setup().await;

    let err = assert_err!(fx.companies.update("c1", &CompanyUpdate::default()).await);
    assert!(err.is_bad_request());
    assert_eq!(err.to_string(), "Bad request: No data");
}

#[test]
fn test_update_rejects_handle_change() {
    let result: Result<CompanyUpdate, _> = serde_json::from_value(json!({"handle": "c9"}));
    assert!(result.is_err());
}

// ---------------------------------------------------------------- remove

#[tokio::test]
async fn test_remove_works() {
    let fx = common::setup().await;

    assert_ok!(fx.companies.remove("c1").await);
    assert!(company_record(&fx.pool, "c1").await.is_empty());
}

#[tokio::test]
async fn test_remove_cascades_to_jobs() {
    let fx = common::setup().await;

    assert_ok!(fx.companies.remove("c2").await);
    let jobs = assert_ok!(fx.jobs.get(&Default::default()).await);
    let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["Farmer"]);
}

#[tokio::test]
async fn test_remove_not_found() {
    let fx = common::setup().await;

    let err = assert_err!(fx.companies.remove("nope").await);
    assert!(err.is_not_found());
}
