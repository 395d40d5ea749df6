use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Database connection settings assembled from individual env vars
/// (DB_USER, DB_PASSWORD, DB_HOST, DB_PORT, DB_NAME) rather than a
/// single DATABASE_URL, so the password can be redacted independently.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub connect_max_retries: u32,
    pub connect_retry_delay_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Reads the process environment only; `.env` is loaded once in `main`
    /// before tracing init.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Conservative pool defaults for a small single-resource API
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    // Startup wait for the database server
    const DEFAULT_CONNECT_MAX_RETRIES: u32 = 10;
    const DEFAULT_CONNECT_RETRY_DELAY_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, String> {
        let user = env::var("DB_USER").map_err(|_| "DB_USER must be set".to_string())?;
        let password = env::var("DB_PASSWORD").map_err(|_| "DB_PASSWORD must be set".to_string())?;
        let host = env::var("DB_HOST").unwrap_or_else(|_| "db".to_string());
        let port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse::<u16>()
            .map_err(|_| "DB_PORT must be a valid number".to_string())?;
        let name = env::var("DB_NAME").unwrap_or_else(|_| "productos".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        let connect_max_retries = env::var("DB_CONNECT_MAX_RETRIES")
            .unwrap_or_else(|_| Self::DEFAULT_CONNECT_MAX_RETRIES.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_CONNECT_MAX_RETRIES must be a valid number".to_string())?;

        let connect_retry_delay_secs = env::var("DB_CONNECT_RETRY_DELAY_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_CONNECT_RETRY_DELAY_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_CONNECT_RETRY_DELAY_SECS must be a valid number".to_string())?;

        Ok(Self {
            user,
            password,
            host,
            port,
            name,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
            connect_max_retries,
            connect_retry_delay_secs,
        })
    }

    /// Connection URL for the target database.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }

    /// Connection URL for the maintenance database, used to create the
    /// target database before the pool connects to it.
    pub fn admin_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/postgres",
            self.user, self.password, self.host, self.port
        )
    }

    /// Human-readable connection target with the password redacted.
    /// Always use this in logs; never log `url()`.
    pub fn redacted_target(&self) -> String {
        format!(
            "postgres://{}:********@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE")
            .unwrap_or_else(|_| "API de Productos Automotrices".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "1.0.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "CRUD y búsqueda sobre el catálogo de productos automotrices".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db_config() -> DatabaseConfig {
        DatabaseConfig {
            user: "api".to_string(),
            password: "hunter2".to_string(),
            host: "db".to_string(),
            port: 5432,
            name: "productos".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            connect_max_retries: 10,
            connect_retry_delay_secs: 5,
        }
    }

    #[test]
    fn url_targets_configured_database() {
        let config = sample_db_config();
        assert_eq!(config.url(), "postgres://api:hunter2@db:5432/productos");
        assert_eq!(config.admin_url(), "postgres://api:hunter2@db:5432/postgres");
    }

    #[test]
    fn redacted_target_never_contains_password() {
        let config = sample_db_config();
        let redacted = config.redacted_target();
        assert!(!redacted.contains("hunter2"));
        assert!(redacted.contains("productos"));
    }
}
