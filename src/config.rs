use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_public_key: String, // Ed25519 public key (PEM), verification only
    pub auth_audience: String,
    // Window for the leave rule: a company cannot leave a live fair while it
    // has OPEN applications younger than this many hours.
    pub leave_lock_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            jwt_public_key: env::var("JWT_PUBLIC_KEY").expect("JWT_PUBLIC_KEY must be set (Ed25519 Public Key)"),
            auth_audience: env::var("AUTH_AUDIENCE").unwrap_or_else(|_| "career-fair-frontend".to_string()),
            leave_lock_hours: env::var("LEAVE_LOCK_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("LEAVE_LOCK_HOURS must be a number"),
        }
    }
}
