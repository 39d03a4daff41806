//! Key-value sources the settings loader reads from.
//!
//! The loader never touches `std::env` directly; it asks an [`EnvSource`].
//! [`ProcessEnv`] is the production source, plain maps are used in tests,
//! and [`DotenvFile`] exposes a `.env` file without exporting it into the
//! process environment.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::ffi::OsString;
use std::path::Path;

/// Lookup of environment-style string variables.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
///
/// Non-UTF-8 values are decoded lossily rather than dropped, so a garbled
/// integer variable fails parsing instead of falling back to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var_os(key).map(decode_os_value)
    }
}

pub(super) fn decode_os_value(value: OsString) -> String {
    value
        .into_string()
        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Variables parsed from a `.env` file.
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Parses the file at `path`. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Ok(Self { vars })
    }

    /// Like [`DotenvFile::load`], but a missing file yields an empty source.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        match Self::load(path) {
            Err(e) if e.not_found() => Ok(Self::default()),
            other => other,
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for DotenvFile {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Looks a key up in `primary` first, then in `fallback`.
///
/// A key set to an empty string in `primary` still wins, so the loader
/// sees it as empty and applies its default.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.primary.get(key).or_else(|| self.fallback.get(key))
    }
}

