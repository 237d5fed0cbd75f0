use fair_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::models::identity::{Claims, Role},
    domain::services::fair_lifecycle::FairLifecycleService,
    infra::repositories::{
        sqlite_booth_repo::SqliteBoothRepo,
        sqlite_company_repo::SqliteCompanyRepo,
        sqlite_enrollment_repo::SqliteEnrollmentRepo,
        sqlite_fair_repo::SqliteFairRepo,
        sqlite_job_repo::SqliteJobRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::Router;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header, Algorithm};

pub const TEST_AUDIENCE: &str = "career-fair-frontend";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let pub_key_pem = include_str!("keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_public_key: pub_key_pem.to_string(),
            auth_audience: TEST_AUDIENCE.to_string(),
            leave_lock_hours: 24,
        };

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

        let state = Arc::new(AppState {
            config: config.clone(),
            fair_repo,
            company_repo,
            enrollment_repo,
            booth_repo: Arc::new(SqliteBoothRepo::new(pool.clone())),
            job_repo,
            lifecycle,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Mints a bearer token the way the external identity provider would.
    /// The service itself only ever verifies.
    pub fn token_for(&self, role: Role, company_id: Option<&str>) -> String {
        let priv_key_pem = include_str!("keys/test_private.pem");
        let encoding_key = EncodingKey::from_ed_pem(priv_key_pem.as_bytes())
            .expect("Invalid test private key");

        let now = Utc::now();
        let claims = Claims {
            iss: "test-issuer".to_string(),
            sub: Uuid::new_v4().to_string(),
            aud: TEST_AUDIENCE.to_string(),
            exp: (now + Duration::minutes(15)).timestamp() as usize,
            iat: now.timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
            role,
            company_id: company_id.map(str::to_string),
        };

        encode(&Header::new(Algorithm::EdDSA), &claims, &encoding_key)
            .expect("Failed to sign test token")
    }

    pub fn admin_token(&self) -> String {
        self.token_for(Role::Administrator, None)
    }

    pub fn owner_token(&self, company_id: &str) -> String {
        self.token_for(Role::CompanyOwner, Some(company_id))
    }

    #[allow(dead_code)]
    pub fn rep_token(&self, company_id: &str) -> String {
        self.token_for(Role::Representative, Some(company_id))
    }

    pub fn student_token(&self) -> String {
        self.token_for(Role::Student, None)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
