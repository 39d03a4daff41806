//! Redis cache configuration.

use super::redact;
use std::fmt;

/// Cache connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    /// Empty when the server has no AUTH configured.
    pub password: String,
    /// Logical database index.
    pub index: u32,
}

impl CacheConfig {
    /// Builds a `redis://` connection URL. The password segment is omitted when empty.
    pub fn url(&self) -> String {
        if self.password.is_empty() {
            format!("redis://{}:{}/{}", self.host, self.port, self.index)
        } else {
            format!(
                "redis://:{}@{}:{}/{}",
                urlencoding::encode(&self.password),
                self.host,
                self.port,
                self.index
            )
        }
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &redact(&self.password))
            .field("index", &self.index)
            .finish()
    }
}
