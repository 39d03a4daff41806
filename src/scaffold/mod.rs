//! New-service scaffolding.
//!
//! Generation is a linear sequence with no rollback:
//!
//! 1. normalize and validate the name (no I/O happens before this passes)
//! 2. create the directory layout under `services/<name>/`
//! 3. write the entry point and README
//! 4. register `services/<name>` in the workspace manifest (best effort)
//!
//! A failure in step 2 or 3 leaves whatever was already created on disk.
//! Running twice with the same name rewrites the template files and leaves
//! the manifest alone the second time.

mod error;
mod kind;
mod manifest;
mod name;
pub mod templates;

pub use error::{ManifestError, ScaffoldError};
pub use kind::ServiceKind;
pub use manifest::{Manifest, Registration};
pub use name::ServiceName;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory that holds all services, relative to the workspace root.
pub const SERVICES_DIR: &str = "services";

/// Default workspace manifest, relative to the workspace root.
pub const DEFAULT_MANIFEST: &str = "go.work";

/// Subdirectories created for every service.
pub const SERVICE_LAYOUT: [&str; 5] = [
    "cmd/server",
    "internal/service",
    "internal/handler",
    "deployments/k8s",
    "config",
];

/// Generates service skeletons inside a workspace.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
    manifest: PathBuf,
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Scaffolder {
    /// Scaffolder for the workspace at `root`, using `root/go.work` as manifest.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let manifest = root.join(DEFAULT_MANIFEST);
        Self { root, manifest }
    }

    /// Use a different manifest file. Relative paths are resolved against the root.
    pub fn with_manifest(mut self, manifest: impl AsRef<Path>) -> Self {
        self.manifest = self.root.join(manifest);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Create the skeleton for `raw_name` and register it in the manifest.
    ///
    /// Only name validation and filesystem errors while building the
    /// skeleton are fatal. Manifest problems are logged and reported in
    /// [`GeneratedService::registration`].
    pub fn generate(
        &self,
        raw_name: &str,
        kind: ServiceKind,
    ) -> Result<GeneratedService, ScaffoldError> {
        let name = ServiceName::parse(raw_name)?;
        let rel_path = format!("{}/{}", SERVICES_DIR, name);
        let service_dir = self.root.join(SERVICES_DIR).join(name.as_str());

        info!(service = %name, kind = %kind, path = %service_dir.display(), "Creating service");

        for dir in SERVICE_LAYOUT {
            let path = service_dir.join(dir);
            fs::create_dir_all(&path).map_err(|e| ScaffoldError::fs(&path, e))?;
            debug!(path = %path.display(), "Directory created");
        }

        let files = vec![
            (
                service_dir.join("cmd/server/main.go"),
                templates::entry_point(&name),
            ),
            (
                service_dir.join("README.md"),
                templates::readme(&name, kind),
            ),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (path, content) in files {
            fs::write(&path, content).map_err(|e| ScaffoldError::fs(&path, e))?;
            debug!(path = %path.display(), "File written");
            written.push(path);
        }

        let registration = manifest::register(&self.manifest, &rel_path);
        match &registration {
            Registration::Registered => {
                info!(manifest = %self.manifest.display(), service = %rel_path, "Service registered")
            }
            Registration::AlreadyRegistered => {}
            Registration::MarkerNotFound => warn!(
                manifest = %self.manifest.display(),
                "No workspace member list found, service not registered"
            ),
            Registration::Failed(e) => warn!(error = %e, "Could not update workspace manifest"),
        }

        Ok(GeneratedService {
            name,
            kind,
            path: rel_path,
            files: written,
            registration,
        })
    }
}

/// Generate a service in the current directory using `go.work` as manifest.
pub fn generate_service(raw_name: &str, kind: ServiceKind) -> Result<GeneratedService, ScaffoldError> {
    Scaffolder::default().generate(raw_name, kind)
}

/// Result of a successful generation.
#[derive(Debug)]
pub struct GeneratedService {
    pub name: ServiceName,
    pub kind: ServiceKind,
    /// Path relative to the workspace root, always with `/` separators.
    pub path: String,
    /// Template files written, in creation order.
    pub files: Vec<PathBuf>,
    pub registration: Registration,
}

impl GeneratedService {
    /// Follow-up commands for the developer.
    pub fn next_steps(&self) -> Vec<String> {
        vec![
            format!("cd {}", self.path),
            format!("go mod init {}/{}", templates::MODULE_PREFIX, self.path),
            "go mod tidy".to_string(),
            "Implement your service logic".to_string(),
        ]
    }
}
