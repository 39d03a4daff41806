//! Environment-driven settings for Prism services.
//!
//! Every value comes from a named environment variable with a documented
//! default. Absent and empty variables both resolve to the default; integer
//! variables that do not parse fail the load instead of being ignored.

mod app;
mod cache;
mod database;
mod env;
mod error;
mod jwt;
mod server;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use env::{DotenvFile, EnvSource, Layered, ProcessEnv};
pub use error::ConfigError;
pub use jwt::{ACCESS_TOKEN_TTL, JwtConfig, REFRESH_TOKEN_TTL};
pub use server::ServerConfig;

use std::path::Path;
use std::str::FromStr;

/// Placeholder signing secret that must never reach a running service.
pub const DEV_SECRET_PLACEHOLDER: &str = "dev-secret-key";

/// Root settings object, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub jwt: JwtConfig,
}

impl Settings {
    /// Resolve settings from `env`, then validate them.
    ///
    /// Variables:
    /// - `APP_NAME`, `APP_ENV`, `APP_DEBUG`
    /// - `SERVER_HOST`, `SERVER_PORT`
    /// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSLMODE`
    /// - `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    /// - `JWT_SECRET`
    pub fn load(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let settings = Settings {
            app: AppConfig {
                name: string_var(env, "APP_NAME", "prism-service"),
                env: string_var(env, "APP_ENV", "development"),
                debug: string_var(env, "APP_DEBUG", "true") == "true",
            },
            server: ServerConfig {
                host: string_var(env, "SERVER_HOST", "0.0.0.0"),
                port: int_var(env, "SERVER_PORT", 8080)?,
            },
            database: DatabaseConfig {
                host: string_var(env, "DB_HOST", "localhost"),
                port: int_var(env, "DB_PORT", 5432)?,
                user: string_var(env, "DB_USER", "postgres"),
                password: string_var(env, "DB_PASSWORD", "postgres"),
                name: string_var(env, "DB_NAME", "prism"),
                ssl_mode: string_var(env, "DB_SSLMODE", "disable"),
            },
            cache: CacheConfig {
                host: string_var(env, "REDIS_HOST", "localhost"),
                port: int_var(env, "REDIS_PORT", 6379)?,
                password: string_var(env, "REDIS_PASSWORD", ""),
                index: int_var(env, "REDIS_DB", 0)?,
            },
            jwt: JwtConfig {
                secret: string_var(env, "JWT_SECRET", DEV_SECRET_PLACEHOLDER),
                access_token_ttl: ACCESS_TOKEN_TTL,
                refresh_token_ttl: REFRESH_TOKEN_TTL,
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&ProcessEnv)
    }

    /// Load settings from the process environment layered over a `.env` file.
    ///
    /// Process variables take precedence. A missing file is ignored; a file
    /// that cannot be parsed is an error. The process environment is not modified.
    pub fn from_env_with_dotenv(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dotenv = DotenvFile::load_optional(path)?;
        Self::load(&Layered::new(ProcessEnv, dotenv))
    }

    /// Validate the resolved settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() || self.jwt.secret == DEV_SECRET_PLACEHOLDER {
            return Err(ConfigError::MissingProductionSecret);
        }
        Ok(())
    }
}

/// Returns the variable's value, or `default` when it is unset or empty.
fn string_var(env: &impl EnvSource, key: &str, default: &str) -> String {
    match env.get(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parses an integer variable, falling back to `default` when unset or empty.
fn int_var<T>(env: &impl EnvSource, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    match env.get(key) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|source| ConfigError::InvalidConfiguration { key, value, source }),
        _ => Ok(default),
    }
}

/// Masks a secret for `Debug` output. Empty stays empty so "unset" is still visible.
pub(crate) fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "***" }
}

#[cfg(test)]
mod tests;
