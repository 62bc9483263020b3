//! Application configuration loaded from environment variables.

use std::env;

use secrecy::{ExposeSecret, SecretString};

/// HTTP header carrying the provider's payload signature.
pub const SIGNATURE_HEADER: &str = "Typeform-Signature";

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_SECRET_TOKEN: &str = "dev-secret-token-do-not-use-in-production";
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_MAX_BODY_SIZE: usize = 2_097_152; // 2MB per webhook delivery

    pub const DEV_DB_HOST: &str = "127.0.0.1";
    pub const DEV_DB_USER: &str = "forms";
    pub const DEV_DB_PASSWORD: &str = "forms";
    pub const DEV_DB_NAME: &str = "forms";
    pub const DB_PORT: u16 = 3306;
    pub const DB_MAX_CONNECTIONS: u32 = 5;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Relational database settings.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub user: String,
    pub password: SecretString,
    pub name: String,
    pub port: u16,
    /// Pool ceiling. Each webhook invocation holds one connection at a time.
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// MySQL connection URL with URL-encoded credentials.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(self.password.expose_secret()),
            self.host,
            self.port,
            self.name
        )
    }
}

/// Application configuration.
///
/// Read once at startup and passed explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Shared HMAC secret configured on the form provider
    pub secret_token: SecretString,
    /// Maximum accepted webhook body in bytes
    pub max_body_size: usize,
    /// Database connection settings
    pub database: DatabaseSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `SECRET_TOKEN`: Shared HMAC secret (required in production)
    /// - `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: Database access
    /// - `DB_PORT`: Database port (default: 3306)
    /// - `DB_MAX_CONNECTIONS`: Pool size (default: 5)
    /// - `FORMS_HOST`: Server host (default: 127.0.0.1)
    /// - `FORMS_PORT`: Server port (default: 8080)
    /// - `FORMS_MAX_BODY_SIZE`: Max webhook body in bytes (default: 2MB)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_str = lookup("RUST_ENV").ok_or(ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = lookup("FORMS_HOST").unwrap_or_else(|| defaults::DEV_HOST.to_string());

        let port = lookup("FORMS_PORT")
            .unwrap_or_else(|| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("FORMS_PORT must be a valid port number"))?;

        let max_body_size = lookup("FORMS_MAX_BODY_SIZE")
            .unwrap_or_else(|| defaults::DEV_MAX_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidValue("FORMS_MAX_BODY_SIZE must be a valid number"))?;

        let secret_token = match lookup("SECRET_TOKEN") {
            Some(token) if !token.is_empty() => token,
            _ if environment.is_development() => defaults::DEV_SECRET_TOKEN.to_string(),
            _ => return Err(ConfigError::MissingEnvVar("SECRET_TOKEN")),
        };

        let database = DatabaseSettings {
            host: lookup("DB_HOST").unwrap_or_else(|| defaults::DEV_DB_HOST.to_string()),
            user: lookup("DB_USER").unwrap_or_else(|| defaults::DEV_DB_USER.to_string()),
            password: SecretString::from(
                lookup("DB_PASSWORD").unwrap_or_else(|| defaults::DEV_DB_PASSWORD.to_string()),
            ),
            name: lookup("DB_NAME").unwrap_or_else(|| defaults::DEV_DB_NAME.to_string()),
            port: lookup("DB_PORT")
                .unwrap_or_else(|| defaults::DB_PORT.to_string())
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("DB_PORT must be a valid port number"))?,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| defaults::DB_MAX_CONNECTIONS.to_string())
                .parse::<u32>()
                .map_err(|_| {
                    ConfigError::InvalidValue("DB_MAX_CONNECTIONS must be a valid number")
                })?,
        };

        let config = Config {
            environment,
            host,
            port,
            secret_token: SecretString::from(secret_token),
            max_body_size,
            database,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.secret_token.expose_secret() == defaults::DEV_SECRET_TOKEN {
            errors.push(
                "SECRET_TOKEN is using development default. Set the secret configured on the form provider."
                    .to_string(),
            );
        }

        if self.database.password.expose_secret() == defaults::DEV_DB_PASSWORD {
            errors.push(
                "DB_PASSWORD is using development default. Set production database credentials."
                    .to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
