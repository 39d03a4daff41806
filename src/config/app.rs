//! Application-level configuration.

/// Application identity settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Service name used in logs and metrics.
    pub name: String,
    /// Environment label: "development", "staging", or "production".
    pub env: String,
    /// Enables verbose diagnostics.
    pub debug: bool,
}

impl AppConfig {
    /// Whether the service runs with the development environment label.
    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}
