use crate::error::Result;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::EnvironmentType;

/// Placeholder substituted by the directory name in naming conventions
pub const DIRNAME_PLACEHOLDER: &str = "{dirname}";

pub const DEFAULT_LIBRARY_NAMING_CONVENTION: &str = "{dirname}";
pub const DEFAULT_TESTS_NAMING_CONVENTION: &str = "{dirname}_tests";
pub const DEFAULT_SOURCES_FILE_GLOB: &str = "**/*.{ts,tsx}";
pub const DEFAULT_TESTS_FILE_GLOB: &str = "**/*.{spec,test}.{ts,tsx}";
pub const DEFAULT_NPM_PACKAGE_JSON: &str = "package.json";

/// TypeScript settings in effect for one directory of the repository.
///
/// A record starts as a copy of its nearest configured ancestor (see
/// [`TypeScriptConfig::new_child`]) and is then mutated by the directives of
/// the directory's own build file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeScriptConfig {
    rel: String,
    repo_root: PathBuf,
    generation_enabled: bool,
    excluded_patterns: BTreeSet<String>,
    ignored_imports: BTreeSet<String>,
    validate_imports: bool,
    environment: EnvironmentType,
    library_naming_convention: String,
    tests_naming_convention: String,
    sources_file_glob: String,
    tests_file_glob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    npm_workspace: Option<String>,
    npm_package_json: String,
}

impl TypeScriptConfig {
    /// Create the root record for a repository
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            rel: String::new(),
            repo_root: repo_root.into(),
            generation_enabled: true,
            excluded_patterns: BTreeSet::new(),
            ignored_imports: BTreeSet::new(),
            validate_imports: true,
            environment: EnvironmentType::default(),
            library_naming_convention: DEFAULT_LIBRARY_NAMING_CONVENTION.to_string(),
            tests_naming_convention: DEFAULT_TESTS_NAMING_CONVENTION.to_string(),
            sources_file_glob: DEFAULT_SOURCES_FILE_GLOB.to_string(),
            tests_file_glob: DEFAULT_TESTS_FILE_GLOB.to_string(),
            npm_workspace: None,
            npm_package_json: DEFAULT_NPM_PACKAGE_JSON.to_string(),
        }
    }

    /// Create the record for `rel` from this one.
    ///
    /// Every field is copied by value. The excluded-pattern and ignored-import
    /// sets are copied too, so the child sees the union of what its ancestors
    /// declared and additions to the child stay invisible to this record.
    pub fn new_child(&self, rel: &str) -> Self {
        Self {
            rel: rel.to_string(),
            ..self.clone()
        }
    }

    /// Slash-separated directory of this record, `""` for the root
    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn generation_enabled(&self) -> bool {
        self.generation_enabled
    }

    pub fn set_generation_enabled(&mut self, enabled: bool) {
        self.generation_enabled = enabled;
    }

    pub fn excluded_patterns(&self) -> &BTreeSet<String> {
        &self.excluded_patterns
    }

    /// Record an exclude pattern declared in this record's directory. The
    /// pattern is stored relative to the repository root so descendants keep
    /// matching it against the declaring directory.
    pub fn add_excluded_pattern(&mut self, pattern: &str) {
        let pattern = pattern.trim_start_matches("./");
        if pattern.is_empty() {
            return;
        }
        let pattern = if self.rel.is_empty() {
            pattern.to_string()
        } else {
            format!("{}/{}", self.rel, pattern)
        };
        self.excluded_patterns.insert(pattern);
    }

    pub fn ignored_imports(&self) -> &BTreeSet<String> {
        &self.ignored_imports
    }

    pub fn add_ignored_import(&mut self, import: impl Into<String>) {
        self.ignored_imports.insert(import.into());
    }

    pub fn ignores_import(&self, import: &str) -> bool {
        self.ignored_imports.contains(import)
    }

    pub fn validate_imports(&self) -> bool {
        self.validate_imports
    }

    pub fn set_validate_imports(&mut self, validate: bool) {
        self.validate_imports = validate;
    }

    pub fn environment(&self) -> EnvironmentType {
        self.environment
    }

    pub fn set_environment(&mut self, environment: EnvironmentType) {
        self.environment = environment;
    }

    pub fn library_naming_convention(&self) -> &str {
        &self.library_naming_convention
    }

    pub fn set_library_naming_convention(&mut self, convention: impl Into<String>) {
        self.library_naming_convention = convention.into();
    }

    pub fn tests_naming_convention(&self) -> &str {
        &self.tests_naming_convention
    }

    pub fn set_tests_naming_convention(&mut self, convention: impl Into<String>) {
        self.tests_naming_convention = convention.into();
    }

    pub fn sources_file_glob(&self) -> &str {
        &self.sources_file_glob
    }

    pub fn set_sources_file_glob(&mut self, glob: impl Into<String>) {
        self.sources_file_glob = glob.into();
    }

    pub fn tests_file_glob(&self) -> &str {
        &self.tests_file_glob
    }

    pub fn set_tests_file_glob(&mut self, glob: impl Into<String>) {
        self.tests_file_glob = glob.into();
    }

    pub fn npm_workspace(&self) -> Option<&str> {
        self.npm_workspace.as_deref()
    }

    pub fn set_npm_workspace(&mut self, workspace: impl Into<String>) {
        self.npm_workspace = Some(workspace.into());
    }

    pub fn npm_package_json(&self) -> &str {
        &self.npm_package_json
    }

    pub fn set_npm_package_json(&mut self, path: impl Into<String>) {
        self.npm_package_json = path.into();
    }

    /// Absolute location of the package.json in effect for this directory
    pub fn npm_package_json_path(&self) -> PathBuf {
        self.repo_root.join(&self.npm_package_json)
    }

    /// Library target name for a directory
    pub fn render_library_name(&self, dirname: &str) -> String {
        self.library_naming_convention.replace(DIRNAME_PLACEHOLDER, dirname)
    }

    /// Test target name for a directory
    pub fn render_tests_name(&self, dirname: &str) -> String {
        self.tests_naming_convention.replace(DIRNAME_PLACEHOLDER, dirname)
    }

    /// Whether a repository-relative path matches any excluded pattern
    pub fn is_excluded(&self, path: &str) -> Result<bool> {
        if self.excluded_patterns.is_empty() {
            return Ok(false);
        }
        let matcher = glob_set(self.excluded_patterns.iter().map(String::as_str))?;
        Ok(matcher.is_match(path))
    }

    pub fn is_source_file(&self, path: &str) -> Result<bool> {
        Ok(glob_set([self.sources_file_glob.as_str()])?.is_match(path))
    }

    pub fn is_test_file(&self, path: &str) -> Result<bool> {
        Ok(glob_set([self.tests_file_glob.as_str()])?.is_match(path))
    }
}

fn glob_set<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);
    }
    Ok(builder.build()?)
}
