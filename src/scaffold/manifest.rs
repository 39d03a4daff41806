//! Workspace manifest registration.
//!
//! The manifest is edited as a sequence of lines. A new service entry goes
//! directly after the first line that opens a workspace member list:
//!
//! - `use (` in a `go.work` file
//! - `members = [` in a Cargo workspace manifest
//!
//! Markers are compared with whitespace removed, so `use(` and
//! `members=[` match too. Single-line lists are never used as insertion
//! points, but a single-line `use ./path` directive still counts as an
//! existing entry.

use super::ManifestError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Outcome of registering a service in the workspace manifest.
#[derive(Debug)]
pub enum Registration {
    /// Entry inserted and the manifest rewritten.
    Registered,
    /// The service path was already listed; manifest untouched.
    AlreadyRegistered,
    /// No member-list marker found; manifest untouched.
    MarkerNotFound,
    /// The manifest could not be read or written.
    Failed(ManifestError),
}

impl Registration {
    /// Whether the manifest lists the service after this step.
    pub fn is_registered(&self) -> bool {
        matches!(self, Registration::Registered | Registration::AlreadyRegistered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    GoWork,
    CargoMembers,
}

impl Marker {
    fn detect(line: &str) -> Option<Self> {
        let compact: String = line.split_whitespace().collect();
        match compact.as_str() {
            "use(" => Some(Marker::GoWork),
            "members=[" => Some(Marker::CargoMembers),
            _ => None,
        }
    }

    fn entry(&self, indent: &str, service_path: &str) -> String {
        match self {
            Marker::GoWork => format!("{indent}./{service_path}"),
            Marker::CargoMembers => format!("{indent}\"{service_path}\","),
        }
    }
}

/// Manifest text split into lines, remembering how to join them back.
#[derive(Debug, Clone)]
pub struct Manifest {
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl Manifest {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            line_ending: if text.contains("\r\n") { "\r\n" } else { "\n" },
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Whether any line is an entry for `service_path` (e.g. `services/billing`).
    pub fn contains(&self, service_path: &str) -> bool {
        self.lines
            .iter()
            .any(|line| entry_path(line) == service_path)
    }

    /// Inserts `service_path` after the first marker line.
    ///
    /// Returns false when no marker is present. The entry copies the
    /// indentation of the line after the marker, or four spaces if the
    /// list is empty.
    pub fn insert(&mut self, service_path: &str) -> bool {
        let Some((idx, marker)) = self
            .lines
            .iter()
            .enumerate()
            .find_map(|(i, line)| Marker::detect(line).map(|m| (i, m)))
        else {
            return false;
        };

        let indent = self
            .lines
            .get(idx + 1)
            .filter(|next| !entry_path(next).is_empty() && !is_list_close(next))
            .map(|next| leading_whitespace(next))
            .unwrap_or("    ")
            .to_string();

        self.lines
            .insert(idx + 1, marker.entry(&indent, service_path));
        true
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join(self.line_ending);
        if self.trailing_newline {
            out.push_str(self.line_ending);
        }
        out
    }
}

/// Registers `service_path` in the manifest at `path`.
///
/// Never fails: problems are returned as [`Registration::Failed`].
pub fn register(path: &Path, service_path: &str) -> Registration {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            return Registration::Failed(ManifestError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut manifest = Manifest::parse(&text);
    if manifest.contains(service_path) {
        debug!(manifest = %path.display(), service = %service_path, "Service already registered");
        return Registration::AlreadyRegistered;
    }

    if !manifest.insert(service_path) {
        return Registration::MarkerNotFound;
    }

    match fs::write(path, manifest.render()) {
        Ok(()) => Registration::Registered,
        Err(source) => Registration::Failed(ManifestError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Extracts the member path from an entry line, or "" for anything else.
///
/// Handles block entries, single-line `use ./path` directives, and
/// trailing `//` or `#` comments.
fn entry_path(line: &str) -> &str {
    let code = line.split("//").next().unwrap_or(line);
    let code = code.split('#').next().unwrap_or(code).trim();
    let code = code
        .strip_prefix("use")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(code);
    let entry = code.trim_end_matches(',').trim_end().trim_matches('"');
    let entry = entry.strip_prefix("./").unwrap_or(entry);
    entry.trim_end_matches('/')
}

fn is_list_close(line: &str) -> bool {
    matches!(line.trim(), ")" | "]")
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}
