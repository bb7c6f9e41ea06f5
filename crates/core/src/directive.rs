//! Gazelle directives understood by the TypeScript extension.
//!
//! Directives are comments of the form `# gazelle:<key> <value>` in a build
//! file. They apply to the file's directory and every directory below it
//! until a descendant build file overrides them.

use crate::config::{EnvironmentType, TypeScriptConfig};
use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Host-owned directive; recorded so excluded subtrees can be skipped
pub const EXCLUDE_DIRECTIVE: &str = "exclude";
pub const TYPESCRIPT_GENERATION_DIRECTIVE: &str = "generation";
pub const IGNORE_IMPORTS_DIRECTIVE: &str = "ignore_imports";
pub const VALIDATE_IMPORT_STATEMENTS_DIRECTIVE: &str = "validate_import_statements";
pub const ENVIRONMENT_DIRECTIVE: &str = "environment";
pub const LIBRARY_NAMING_CONVENTION_DIRECTIVE: &str = "library_naming_convention";
pub const TESTS_NAMING_CONVENTION_DIRECTIVE: &str = "tests_naming_convention";
pub const SOURCES_FILE_GLOB_DIRECTIVE: &str = "sources_file_glob";
pub const TESTS_FILE_GLOB_DIRECTIVE: &str = "tests_file_glob";
pub const NPM_WORKSPACE_DIRECTIVE: &str = "npm_workspace";
pub const NPM_PACKAGE_JSON_DIRECTIVE: &str = "npm_package_json";

/// Directive keys claimed by this extension. `exclude` belongs to the host.
pub const KNOWN_DIRECTIVES: &[&str] = &[
    TYPESCRIPT_GENERATION_DIRECTIVE,
    IGNORE_IMPORTS_DIRECTIVE,
    VALIDATE_IMPORT_STATEMENTS_DIRECTIVE,
    ENVIRONMENT_DIRECTIVE,
    LIBRARY_NAMING_CONVENTION_DIRECTIVE,
    TESTS_NAMING_CONVENTION_DIRECTIVE,
    SOURCES_FILE_GLOB_DIRECTIVE,
    TESTS_FILE_GLOB_DIRECTIVE,
    NPM_PACKAGE_JSON_DIRECTIVE,
    NPM_WORKSPACE_DIRECTIVE,
];

static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*gazelle:(\w+)\s*(.*?)\s*$").expect("directive pattern is valid")
});

/// A single `# gazelle:<key> <value>` comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: String,
    pub line: usize,
}

impl Directive {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line: 0,
        }
    }

    /// Parse a comment, returning `None` when it is not a directive
    pub fn parse_comment(comment: &str, line: usize) -> Option<Self> {
        let captures = DIRECTIVE_RE.captures(comment.trim())?;
        Some(Self {
            key: captures[1].to_string(),
            value: captures[2].to_string(),
            line,
        })
    }
}

/// Apply `directives` in source order to `config`.
///
/// Scalar directives replace earlier values and set directives accumulate.
/// The first malformed value aborts with [`Error::InvalidDirective`] naming
/// `file`, the key and the value.
pub fn apply_directives(
    config: &mut TypeScriptConfig,
    directives: &[Directive],
    file: &Path,
) -> Result<()> {
    for directive in directives {
        apply_directive(config, directive, file)?;
    }
    Ok(())
}

fn apply_directive(config: &mut TypeScriptConfig, directive: &Directive, file: &Path) -> Result<()> {
    let invalid = |reason: String| Error::InvalidDirective {
        file: file.to_path_buf(),
        key: directive.key.clone(),
        value: directive.value.clone(),
        reason,
    };
    let value = directive.value.trim();

    match directive.key.as_str() {
        EXCLUDE_DIRECTIVE => config.add_excluded_pattern(value),
        TYPESCRIPT_GENERATION_DIRECTIVE => {
            let enabled = parse_generation(value)
                .ok_or_else(|| invalid("possible values are enabled/disabled".to_string()))?;
            config.set_generation_enabled(enabled);
        }
        IGNORE_IMPORTS_DIRECTIVE => {
            for import in value.split(',').map(str::trim).filter(|i| !i.is_empty()) {
                config.add_ignored_import(import);
            }
        }
        VALIDATE_IMPORT_STATEMENTS_DIRECTIVE => {
            let validate = parse_bool(value)
                .ok_or_else(|| invalid("expected a boolean (true/false/1/0)".to_string()))?;
            config.set_validate_imports(validate);
        }
        ENVIRONMENT_DIRECTIVE => {
            let environment = value
                .parse::<EnvironmentType>()
                .map_err(|e| invalid(e.to_string()))?;
            config.set_environment(environment);
        }
        LIBRARY_NAMING_CONVENTION_DIRECTIVE => config.set_library_naming_convention(value),
        TESTS_NAMING_CONVENTION_DIRECTIVE => config.set_tests_naming_convention(value),
        SOURCES_FILE_GLOB_DIRECTIVE => config.set_sources_file_glob(value),
        TESTS_FILE_GLOB_DIRECTIVE => config.set_tests_file_glob(value),
        NPM_WORKSPACE_DIRECTIVE => config.set_npm_workspace(value),
        NPM_PACKAGE_JSON_DIRECTIVE => config.set_npm_package_json(value),
        other => {
            warn!("Ignoring directive {:?} not owned by the TypeScript extension", other);
            return Ok(());
        }
    }

    debug!(
        "Applied directive {}={:?} to {:?}",
        directive.key,
        value,
        config.rel()
    );
    Ok(())
}

/// `enabled` / `disabled`, nothing else
pub fn parse_generation(value: &str) -> Option<bool> {
    match value {
        "enabled" => Some(true),
        "disabled" => Some(false),
        _ => None,
    }
}

/// Case-insensitive `1`/`t`/`true` or `0`/`f`/`false`
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
