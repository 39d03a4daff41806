//! Service name normalization.

use super::ScaffoldError;
use std::fmt;

/// Normalized service name: lowercase, underscores replaced by hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Normalizes `raw` and rejects names that are empty or would leave `services/`.
    pub fn parse(raw: &str) -> Result<Self, ScaffoldError> {
        let name = raw.trim().to_lowercase().replace('_', "-");

        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ScaffoldError::InvalidServiceName(raw.to_string()));
        }

        Ok(ServiceName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title: "order-history" becomes "Order History".
    ///
    /// Each hyphen becomes one space, and every letter that follows a
    /// separator (space or ASCII punctuation) is capitalized, so
    /// "api.gateway" becomes "Api.Gateway".
    pub fn title(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut after_separator = true;
        for c in self.0.chars() {
            let c = if c == '-' { ' ' } else { c };
            if after_separator {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            after_separator = is_word_separator(c);
        }
        out
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
