//! Shared fixture: a fresh in-memory database with three companies and three jobs

use jobly_core::domain::{NewCompany, NewJob};
use jobly_core::port::{CompanyRepository, JobRepository};
use jobly_infra_sqlite::{create_pool, run_migrations, SqliteCompanyRepository, SqliteJobRepository};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

pub struct Fixture {
    pub pool: SqlitePool,
    pub companies: SqliteCompanyRepository,
    pub jobs: SqliteJobRepository,
}

pub async fn setup() -> Fixture {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let companies = SqliteCompanyRepository::new(pool.clone());
    let jobs = SqliteJobRepository::new(pool.clone());

    for n in 1..=3 {
        companies
            .create(&NewCompany {
                handle: format!("c{}", n),
                name: format!("Comp{}", n),
                description: format!("Desc{}", n),
                num_employees: Some(n),
                logo_url: Some(format!("http://c{}.img", n)),
            })
            .await
            .unwrap();
    }

    for (title, salary, handle) in [
        ("Farmer", 50000, "c1"),
        ("Engineer", 75000, "c2"),
        ("Technician", 40000, "c2"),
    ] {
        jobs.create(&NewJob {
            title: title.to_string(),
            salary: Some(salary),
            equity: Some(Decimal::ZERO),
            company_handle: handle.to_string(),
        })
        .await
        .unwrap();
    }

    Fixture {
        pool,
        companies,
        jobs,
    }
}
