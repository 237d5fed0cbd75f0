use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::fair_lifecycle::FairLifecycleService;
use crate::infra::repositories::{
    postgres_booth_repo::PostgresBoothRepo, postgres_company_repo::PostgresCompanyRepo,
    postgres_enrollment_repo::PostgresEnrollmentRepo, postgres_fair_repo::PostgresFairRepo,
    postgres_job_repo::PostgresJobRepo,
    sqlite_booth_repo::SqliteBoothRepo, sqlite_company_repo::SqliteCompanyRepo,
    sqlite_enrollment_repo::SqliteEnrollmentRepo, sqlite_fair_repo::SqliteFairRepo,
    sqlite_job_repo::SqliteJobRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let fair_repo = Arc::new(PostgresFairRepo::new(pool.clone()));
        let company_repo = Arc::new(PostgresCompanyRepo::new(pool.clone()));
        let enrollment_repo = Arc::new(PostgresEnrollmentRepo::new(pool.clone()));
        let job_repo = Arc::new(PostgresJobRepo::new(pool.clone()));

        let lifecycle = Arc::new(FairLifecycleService::new(
            fair_repo.clone(),
            enrollment_repo.clone(),
            company_repo.clone(),
            job_repo.clone(),
            config.leave_lock_hours,
        ));

        AppState {
            config: config.clone(),
            fair_repo,
            company_repo,
            enrollment_repo,
            booth_repo: Arc::new(PostgresBoothRepo::new(pool.clone())),
            job_repo,
            lifecycle,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let fair_repo = Arc::new(SqliteFairRepo::new(pool.clone()));
        let company_repo = Arc::new(SqliteCompanyRepo::new(pool.clone()));
        let enrollment_repo = Arc::new(SqliteEnrollmentRepo::new(pool.clone()));
        let job_repo = Arc::new(SqliteJobRepo::new(pool.clone()));

        let lifecycle = Arc::new(FairLifecycleService::new(
            fair_repo.clone(),
            enrollment_repo.clone(),
            company_repo.clone(),
            job_repo.clone(),
            config.leave_lock_hours,
        ));

        AppState {
            config: config.clone(),
            fair_repo,
            company_repo,
            enrollment_repo,
            booth_repo: Arc::new(SqliteBoothRepo::new(pool.clone())),
            job_repo,
            lifecycle,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
