//! Shared tooling for Prism services.
//!
//! - [`config`]: typed settings resolved from environment variables.
//! - [`scaffold`]: generator for new service skeletons, used by the
//!   `create-service` binary.

pub mod config;
pub mod scaffold;
