//! BUILD file model: directives, rule calls and load statements

pub mod rule_extractor;
pub mod starlark_parser;

pub use rule_extractor::{
    AttributeValue, GlobPattern, LoadStatement, RuleCall, RuleExtractor, SourceLocation,
};
pub use starlark_parser::{StarlarkAst, StarlarkParser};

use crate::config::normalize_rel;
use crate::directive::Directive;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Build file names the host looks for, in priority order
pub const DEFAULT_BUILD_FILE_NAMES: &[&str] = &["BUILD.bazel", "BUILD"];

/// A parsed build file of one package
#[derive(Debug, Clone)]
pub struct BuildFile {
    /// Location of the file on disk
    pub path: PathBuf,
    /// Slash-separated package path, `""` for the repository root
    pub pkg: String,
    /// Directives in source order
    pub directives: Vec<Directive>,
    /// Calls to the requested rule kinds
    pub rules: Vec<RuleCall>,
    pub loads: Vec<LoadStatement>,
}

impl BuildFile {
    /// Parse build file text, keeping rule calls of `kinds`
    pub fn parse(path: impl Into<PathBuf>, pkg: &str, content: &str, kinds: &[&str]) -> Result<Self> {
        let path = path.into();
        let mut parser = StarlarkParser::new()?;
        let ast = parser.parse(&path, content)?;

        let directives = extract_directives(&ast);
        let rules = RuleExtractor::extract_rules(&ast, kinds);
        let loads = RuleExtractor::extract_loads(&ast);
        debug!(
            "Parsed {}: {} directives, {} rules, {} loads",
            path.display(),
            directives.len(),
            rules.len(),
            loads.len()
        );

        Ok(Self {
            path,
            pkg: normalize_rel(pkg).to_string(),
            directives,
            rules,
            loads,
        })
    }

    /// Read and parse the build file at `path`
    pub fn load(path: &Path, pkg: &str, kinds: &[&str]) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, pkg, &content, kinds)
    }

    /// Find the first existing build file in `dir`
    pub fn find_in_dir(dir: &Path, names: &[impl AsRef<str>]) -> Option<PathBuf> {
        names
            .iter()
            .map(|name| dir.join(name.as_ref()))
            .find(|path| path.is_file())
    }

    /// Build file with directives only, for hosts that parse files themselves
    pub fn from_directives(path: impl Into<PathBuf>, pkg: &str, directives: Vec<Directive>) -> Self {
        Self {
            path: path.into(),
            pkg: normalize_rel(pkg).to_string(),
            directives,
            rules: Vec::new(),
            loads: Vec::new(),
        }
    }

    pub fn rules_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a RuleCall> {
        self.rules.iter().filter(move |rule| rule.kind == kind)
    }

    /// Whether some load statement binds `symbol` from `label`
    pub fn loads_symbol(&self, label: &str, symbol: &str) -> bool {
        self.loads
            .iter()
            .any(|load| load.label == label && load.symbols.iter().any(|s| s == symbol))
    }
}

fn extract_directives(ast: &StarlarkAst) -> Vec<Directive> {
    let mut directives = Vec::new();
    ast.walk_nodes(|node| {
        if node.kind() != "comment" {
            return;
        }
        let line = node.start_position().row + 1;
        if let Some(directive) = Directive::parse_comment(ast.node_text(&node), line) {
            directives.push(directive);
        }
    });
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"
load("@npm//@bazel/typescript:index.bzl", "ts_project")

# gazelle:generation disabled
# gazelle:ignore_imports fs,path
# Not a directive

ts_project(
    name = "lib",
    srcs = ["index.ts"],
)

# gazelle:environment node
"#;

    #[test]
    fn test_parse_collects_directives_in_order() {
        let file = BuildFile::parse("pkg/BUILD.bazel", "pkg", CONTENT, &["ts_project"]).unwrap();

        let keys: Vec<&str> = file.directives.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["generation", "ignore_imports", "environment"]);
        assert_eq!(file.directives[1].value, "fs,path");
        assert_eq!(file.directives[0].line, 4);
        assert_eq!(file.pkg, "pkg");
    }

    #[test]
    fn test_parse_collects_rules_and_loads() {
        let file = BuildFile::parse("BUILD", "", CONTENT, &["ts_project"]).unwrap();

        assert_eq!(file.rules_of_kind("ts_project").count(), 1);
        assert!(file.loads_symbol("@npm//@bazel/typescript:index.bzl", "ts_project"));
        assert!(!file.loads_symbol("//other:defs.bzl", "ts_project"));
    }

    #[test]
    fn test_find_in_dir_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("BUILD"), "").unwrap();
        std::fs::write(dir.path().join("BUILD.bazel"), "").unwrap();

        let found = BuildFile::find_in_dir(dir.path(), DEFAULT_BUILD_FILE_NAMES).unwrap();
        assert_eq!(found, dir.path().join("BUILD.bazel"));
    }

    #[test]
    fn test_find_in_dir_without_build_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BuildFile::find_in_dir(dir.path(), DEFAULT_BUILD_FILE_NAMES).is_none());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = BuildFile::load(&dir.path().join("BUILD"), "", &[]);
        assert!(matches!(result, Err(crate::error::Error::IoError(_))));
    }
}
