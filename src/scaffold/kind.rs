//! Service kind label.

/// What sort of service is being scaffolded.
///
/// Recorded in the generated README; the directory layout is the same for all kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    /// gRPC API service.
    #[default]
    Grpc,
    /// HTTP API service.
    Http,
    /// Background worker.
    Worker,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Grpc => "grpc",
            ServiceKind::Http => "http",
            ServiceKind::Worker => "worker",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grpc" => Ok(ServiceKind::Grpc),
            "http" => Ok(ServiceKind::Http),
            "worker" => Ok(ServiceKind::Worker),
            _ => Err(format!("unknown service type: {} (expected grpc, http or worker)", s)),
        }
    }
}
