//! Runtime configuration - environment loading
//!
//! All configuration is read once at startup:
//! - `APP_PORT` / `PORT`: listening port (default: 8080)
//! - `ENVIRONMENT`: environment label echoed in responses (default: dev)
//! - `DEV_MODE`: expose internal error messages (default: off)
//! - `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`: store address
//! - `DB_CONNECTION`: managed-database instance id; when set, connect over
//!   the Unix socket `/cloudsql/<id>` instead of TCP

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port
    pub port: u16,

    /// Environment label (e.g. "dev", "staging", "prod")
    pub environment: String,

    /// Development mode: unexpected-error messages are echoed to callers
    pub dev_mode: bool,

    /// Store connection settings
    pub db: DbConfig,
}

/// Store connection settings
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,

    /// Managed-database socket directory (overrides host/port when set)
    pub socket: Option<String>,
}

impl AppConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("APP_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());

        let dev_mode = std::env::var("DEV_MODE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            port,
            environment,
            dev_mode,
            db: DbConfig::from_env(),
        }
    }
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let socket = std::env::var("DB_CONNECTION")
            .ok()
            .map(|instance| format!("/cloudsql/{}", instance));

        Self {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "appdb".to_string()),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "appuser".to_string()),
            password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            socket,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var reads are not exercised here; process environment is shared
    // across the test binary. Construction paths are covered instead.

    #[test]
    fn socket_path_from_instance_id() {
        let config = DbConfig {
            host: "localhost".into(),
            port: 5432,
            database: "appdb".into(),
            user: "appuser".into(),
            password: "password".into(),
            socket: Some("/cloudsql/project:region:instance".into()),
        };

        assert_eq!(
            config.socket.as_deref(),
            Some("/cloudsql/project:region:instance")
        );
    }
}
