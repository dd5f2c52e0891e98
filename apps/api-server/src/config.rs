//! Application configuration loaded from environment variables.

use std::env;

use blogger_infra::database::DatabaseConfig;

/// Which database target the process should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Default,
    /// Integration runs - uses `TEST_DATABASE_URL` so production data is never touched.
    Test,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "test" => Environment::Test,
            _ => Environment::Default,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
    pub test_database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);
        let min_connections = lookup("DB_MIN_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let database_at = |key: &str| {
            lookup(key).map(|url| DatabaseConfig {
                url,
                max_connections,
                min_connections,
            })
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: Environment::parse(lookup("APP_ENV").as_deref()),
            database: database_at("DATABASE_URL"),
            test_database: database_at("TEST_DATABASE_URL"),
        }
    }

    /// Database target for `environment`. `None` means the in-memory store.
    pub fn database_for(&self, environment: Environment) -> Option<&DatabaseConfig> {
        match environment {
            Environment::Default => self.database.as_ref(),
            Environment::Test => self.test_database.as_ref(),
        }
    }

    pub fn active_database(&self) -> Option<&DatabaseConfig> {
        self.database_for(self.environment)
    }
}
