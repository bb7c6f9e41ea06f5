//! Depth-first repository walk that configures each directory before its
//! children

use anyhow::{Context, Result};
use gazelle_ts_core::kinds::TS_KINDS;
use gazelle_ts_core::{BuildFile, Config, Configurer, TypeScript};
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// A directory after its configuration has been applied
#[derive(Debug)]
pub struct VisitedDir {
    /// Slash-separated path relative to the repository root
    pub rel: String,
    pub build_file: Option<BuildFile>,
}

/// Walk `root`, calling `configure` for every directory (parents first) and
/// then `visit` with the updated configuration.
///
/// Hidden directories, `node_modules`, `bazel-*` output trees and
/// directories matched by an inherited `exclude` directive are skipped
/// together with everything below them.
pub fn walk_repository(
    root: &Path,
    build_file_names: &[String],
    config: &mut Config,
    mut visit: impl FnMut(&Config, &VisitedDir) -> Result<()>,
) -> Result<()> {
    let ts = TypeScript::new();
    let kinds: Vec<&str> = TS_KINDS.keys().copied().collect();

    let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = entries.next() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let rel = relative_slash_path(root, entry.path())?;
        if entry.depth() > 0 && should_skip(config, &rel, entry.file_name())? {
            debug!("Skipping {}", rel);
            entries.skip_current_dir();
            continue;
        }

        let build_file = match BuildFile::find_in_dir(entry.path(), build_file_names) {
            Some(path) => Some(
                BuildFile::load(&path, &rel, &kinds)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            ),
            None => None,
        };

        ts.configure(config, &rel, build_file.as_ref())?;
        visit(config, &VisitedDir { rel, build_file })?;
    }

    Ok(())
}

fn should_skip(config: &Config, rel: &str, name: &OsStr) -> Result<bool> {
    let name = name.to_string_lossy();
    if name.starts_with('.') || name.starts_with("bazel-") || name == "node_modules" {
        return Ok(true);
    }

    let Some(configs) = TypeScript::configs(config) else {
        return Ok(false);
    };
    Ok(configs.parent_for_package(rel)?.is_excluded(rel)?)
}

fn relative_slash_path(root: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;
    let parts: Vec<String> = rel
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names() -> Vec<String> {
        vec!["BUILD.bazel".to_string(), "BUILD".to_string()]
    }

    fn visited(root: &Path) -> Vec<String> {
        let mut config = Config::new(root);
        let mut rels = Vec::new();
        walk_repository(root, &names(), &mut config, |_, dir| {
            rels.push(dir.rel.clone());
            Ok(())
        })
        .unwrap();
        rels
    }

    #[test]
    fn test_parents_are_visited_before_children() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/index.ts"), "").unwrap();

        assert_eq!(visited(root), vec!["", "a", "b", "b/inner"]);
    }

    #[test]
    fn test_skips_hidden_and_generated_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for dir in [".git/objects", "node_modules/react", "bazel-out/bin", "src"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }

        assert_eq!(visited(root), vec!["", "src"]);
    }

    #[test]
    fn test_excluded_directories_are_not_configured() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("BUILD.bazel"), "# gazelle:exclude vendor\n").unwrap();
        fs::create_dir_all(root.join("vendor/lib")).unwrap();
        fs::write(root.join("vendor/BUILD.bazel"), "# gazelle:generation bogus\n").unwrap();
        fs::create_dir_all(root.join("app")).unwrap();

        assert_eq!(visited(root), vec!["", "app"]);
    }

    #[test]
    fn test_nested_exclude_is_relative_to_its_package() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("app/generated")).unwrap();
        fs::create_dir_all(root.join("generated")).unwrap();
        fs::write(root.join("app/BUILD"), "# gazelle:exclude generated\n").unwrap();

        assert_eq!(visited(root), vec!["", "app", "generated"]);
    }

    #[test]
    fn test_multi_segment_exclude_from_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("BUILD.bazel"), "# gazelle:exclude app/generated\n").unwrap();
        fs::create_dir_all(root.join("app/generated")).unwrap();
        fs::create_dir_all(root.join("app/src")).unwrap();

        assert_eq!(visited(root), vec!["", "app", "app/src"]);
    }

    #[test]
    fn test_root_exclude_does_not_match_deeper_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("BUILD.bazel"), "# gazelle:exclude vendor\n").unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::create_dir_all(root.join("app/vendor")).unwrap();
        fs::create_dir_all(root.join("x/y/vendor")).unwrap();

        assert_eq!(
            visited(root),
            vec!["", "app", "app/vendor", "x", "x/y", "x/y/vendor"]
        );
    }

    #[test]
    fn test_visit_sees_configured_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("web/BUILD.bazel"), "# gazelle:environment browser\n").unwrap();

        let mut config = Config::new(root);
        let mut seen = Vec::new();
        walk_repository(root, &names(), &mut config, |config, dir| {
            let ts_config = TypeScript::config_for(config, &dir.rel).unwrap();
            seen.push((dir.rel.clone(), ts_config.environment().to_string()));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (String::new(), "other".to_string()),
                ("web".to_string(), "browser".to_string()),
            ]
        );
    }
}
