//! Jobly CLI - admin interface over the company/job data-access layer

mod logging;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::debug;

use jobly_core::domain::{
    CompanyFilter, CompanyUpdate, CompanyWithJobs, Job, JobFilter, JobUpdate, NewCompany, NewJob,
    UserIdentity,
};
use jobly_core::port::time_provider::SystemTimeProvider;
use jobly_core::port::{CompanyRepository, JobRepository, TokenIssuer};
use jobly_infra_auth::{JwtTokenIssuer, TokenConfig};
use jobly_infra_sqlite::{create_pool, run_migrations, SqliteCompanyRepository, SqliteJobRepository};
use settings::Settings;

#[derive(Parser)]
#[command(name = "jobly")]
#[command(about = "Jobly data-access CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// List companies, optionally filtered
    Companies {
        /// Case-insensitive substring of the company name
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        min_employees: Option<i64>,

        #[arg(long)]
        max_employees: Option<i64>,
    },

    /// Show one company and its jobs
    Company {
        handle: String,
    },

    /// Create a company from a JSON object
    AddCompany {
        /// e.g. '{"handle":"c1","name":"Comp1","description":"Desc1"}'
        data: String,
    },

    /// Partially update a company from a JSON object
    UpdateCompany {
        handle: String,
        data: String,
    },

    /// Delete a company and its jobs
    RemoveCompany {
        handle: String,
    },

    /// List jobs, optionally filtered
    Jobs {
        /// Case-insensitive substring of the job title
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        min_salary: Option<i64>,

        /// Only jobs with non-zero equity
        #[arg(long)]
        has_equity: bool,
    },

    /// Create a job from a JSON object
    AddJob {
        /// e.g. '{"title":"Engineer","salary":75000,"equity":0,"companyHandle":"c2"}'
        data: String,
    },

    /// Partially update a job from a JSON object
    UpdateJob {
        title: String,
        data: String,
    },

    /// Delete a job
    RemoveJob {
        title: String,
    },

    /// Issue a signed token
    Token {
        username: String,

        #[arg(long)]
        admin: bool,
    },
}

#[derive(Tabled)]
struct CompanyView {
    handle: String,
    name: String,
    employees: String,
    jobs: String,
}

impl From<&CompanyWithJobs> for CompanyView {
    fn from(c: &CompanyWithJobs) -> Self {
        Self {
            handle: c.company.handle.clone(),
            name: c.company.name.clone(),
            employees: c
                .company
                .num_employees
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            jobs: c.jobs.join(", "),
        }
    }
}

#[derive(Tabled)]
struct JobView {
    title: String,
    salary: String,
    equity: String,
    company: String,
}

impl From<&Job> for JobView {
    fn from(j: &Job) -> Self {
        Self {
            title: j.title.clone(),
            salary: j.salary.map_or_else(|| "-".to_string(), |s| s.to_string()),
            equity: j.equity.map_or_else(|| "-".to_string(), |e| e.to_string()),
            company: j.company_handle.clone(),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_companies(companies: &[CompanyWithJobs], json: bool) -> Result<()> {
    if json {
        return print_json(&companies);
    }
    let rows: Vec<CompanyView> = companies.iter().map(CompanyView::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}

fn print_jobs(jobs: &[Job], json: bool) -> Result<()> {
    if json {
        return print_json(&jobs);
    }
    let rows: Vec<JobView> = jobs.iter().map(JobView::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let settings = Settings::load().context("Failed to load configuration")?;

    // 2. Initialize logging
    logging::init_logging(&settings.log_format)?;

    // 3. Initialize database
    if let Some(path) = settings.database_file() {
        if let Some(parent) = std::path::Path::new(&path).parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let database_url = settings.resolved_database_url();
    debug!(database_url = %database_url, "Opening database");

    let pool = create_pool(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let companies: Arc<dyn CompanyRepository> = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let jobs: Arc<dyn JobRepository> = Arc::new(SqliteJobRepository::new(pool.clone()));

    match cli.command {
        Commands::Migrate => {
            println!("{}", "✓ Schema is up to date".green().bold());
        }

        Commands::Companies {
            name,
            min_employees,
            max_employees,
        } => {
            let filter = CompanyFilter {
                name,
                min_employees,
                max_employees,
            };
            let found = companies.get(&filter).await?;
            print_companies(&found, cli.json)?;
        }

        Commands::Company { handle } => {
            let detail = companies.get_by_handle(&handle).await?;
            if cli.json {
                print_json(&detail)?;
            } else {
                println!("{}", detail.company.name.cyan().bold());
                println!("  {} {}", "Handle:".bold(), detail.company.handle);
                println!("  {} {}", "Description:".bold(), detail.company.description);
                if let Some(n) = detail.company.num_employees {
                    println!("  {} {}", "Employees:".bold(), n);
                }
                if let Some(url) = &detail.company.logo_url {
                    println!("  {} {}", "Logo:".bold(), url);
                }
                println!();
                print_jobs(&detail.jobs, false)?;
            }
        }

        Commands::AddCompany { data } => {
            let new_company: NewCompany =
                serde_json::from_str(&data).context("Invalid company JSON")?;
            let company = companies.create(&new_company).await?;
            println!(
                "{}",
                format!("✓ Company {} created", company.handle).green().bold()
            );
        }

        Commands::UpdateCompany { handle, data } => {
            let update: CompanyUpdate =
                serde_json::from_str(&data).context("Invalid company update JSON")?;
            let company = companies.update(&handle, &update).await?;
            print_json(&company)?;
        }

        Commands::RemoveCompany { handle } => {
            companies.remove(&handle).await?;
            println!("{}", format!("✓ Company {} removed", handle).green().bold());
        }

        Commands::Jobs {
            title,
            min_salary,
            has_equity,
        } => {
            let filter = JobFilter {
                title,
                min_salary,
                has_equity: has_equity.then_some(true),
            };
            let found = jobs.get(&filter).await?;
            print_jobs(&found, cli.json)?;
        }

        Commands::AddJob { data } => {
            let new_job: NewJob = serde_json::from_str(&data).context("Invalid job JSON")?;
            let job = jobs.create(&new_job).await?;
            println!("{}", format!("✓ Job {} created", job.title).green().bold());
        }

        Commands::UpdateJob { title, data } => {
            let update: JobUpdate =
                serde_json::from_str(&data).context("Invalid job update JSON")?;
            let job = jobs.update(&title, &update).await?;
            print_json(&job)?;
        }

        Commands::RemoveJob { title } => {
            jobs.remove(&title).await?;
            println!("{}", format!("✓ Job {} removed", title).green().bold());
        }

        Commands::Token { username, admin } => {
            let config = TokenConfig {
                secret: settings.secret_key.clone(),
                ttl_secs: settings.token_ttl_secs,
            };
            let issuer = JwtTokenIssuer::new(config, Arc::new(SystemTimeProvider));

            let token = issuer.create_token(&UserIdentity::new(username, admin))?;
            println!("{}", token);
        }
    }

    pool.close().await;
    Ok(())
}
