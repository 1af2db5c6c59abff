use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
}

impl AppConfig {
    /// Every setting has a development default, so a bare `cargo run`
    /// comes up against a local SQLite file.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://users.db".to_string());

        let host = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        AppConfig {
            database_url,
            bind_address: format!("{}:{}", host, port),
        }
    }
}
