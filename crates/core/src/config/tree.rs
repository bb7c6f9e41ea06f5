//! Directory-scoped configuration records keyed by package path

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, trace};

use super::TypeScriptConfig;

/// Configuration records for every visited directory of a repository.
///
/// Keys are slash-separated paths relative to the repository root, with `""`
/// naming the root itself.
#[derive(Debug, Clone, Default)]
pub struct Configs {
    entries: BTreeMap<String, TypeScriptConfig>,
}

impl Configs {
    /// Create a tree holding only the root record
    pub fn new(repo_root: &Path) -> Self {
        let mut configs = Self::default();
        configs.ensure_root(repo_root);
        configs
    }

    /// Create the root record if it does not exist yet. Later calls keep the
    /// existing root and its repository root.
    pub fn ensure_root(&mut self, repo_root: &Path) -> &mut TypeScriptConfig {
        self.entries.entry(String::new()).or_insert_with(|| {
            debug!("Creating root TypeScript config at {}", repo_root.display());
            TypeScriptConfig::new(repo_root)
        })
    }

    pub fn root(&self) -> Option<&TypeScriptConfig> {
        self.entries.get("")
    }

    pub fn get(&self, rel: &str) -> Option<&TypeScriptConfig> {
        self.entries.get(normalize_rel(rel))
    }

    /// Record of the nearest configured ancestor of `rel`, falling back to the
    /// root when no intermediate directory has one.
    pub fn parent_for_package(&self, rel: &str) -> Result<&TypeScriptConfig> {
        let mut current = normalize_rel(rel);
        while !current.is_empty() {
            current = match current.rfind('/') {
                Some(idx) => &current[..idx],
                None => "",
            };
            trace!("Looking up parent config at {:?}", current);
            if let Some(config) = self.entries.get(current) {
                return Ok(config);
            }
        }
        self.root().ok_or(Error::MissingRoot)
    }

    /// Record for `rel`, created from its nearest ancestor on first visit
    pub fn get_or_create(&mut self, rel: &str) -> Result<&mut TypeScriptConfig> {
        let rel = normalize_rel(rel);
        if !self.entries.contains_key(rel) {
            let child = self.parent_for_package(rel)?.new_child(rel);
            debug!("Creating TypeScript config for {:?}", rel);
            self.entries.insert(rel.to_string(), child);
        }
        self.entries.get_mut(rel).ok_or(Error::MissingRoot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in path order, so every ancestor precedes its descendants
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeScriptConfig)> {
        self.entries.iter().map(|(rel, config)| (rel.as_str(), config))
    }
}

/// Strip `.` and surrounding slashes so `"./a/b/"` and `"a/b"` name the same
/// package
pub fn normalize_rel(rel: &str) -> &str {
    let rel = rel.trim_matches('/');
    let rel = rel.strip_prefix("./").unwrap_or(rel);
    if rel == "." { "" } else { rel }
}
