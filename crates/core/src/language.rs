//! The TypeScript language extension

use std::collections::BTreeMap;
use tracing::debug;

use crate::build_file::BuildFile;
use crate::config::{Configs, TypeScriptConfig};
use crate::directive::{KNOWN_DIRECTIVES, apply_directives};
use crate::error::{Error, Result};
use crate::interfaces::{Config, Configurer, KindInfo, Language, LoadInfo};
use crate::kinds::{TS_KINDS, TS_LOADS};

/// Key of the TypeScript configuration tree in [`Config::exts`]
pub const LANGUAGE_NAME: &str = "typescript";

/// Gazelle extension generating `ts_project` rules
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScript;

impl TypeScript {
    pub fn new() -> Self {
        Self
    }

    /// The configuration tree, once any directory has been configured
    pub fn configs(config: &Config) -> Option<&Configs> {
        config.ext::<Configs>(LANGUAGE_NAME)
    }

    /// Effective settings for an already configured directory
    pub fn config_for<'a>(config: &'a Config, rel: &str) -> Option<&'a TypeScriptConfig> {
        Self::configs(config)?.get(rel)
    }

    fn configs_mut(config: &mut Config) -> Result<&mut Configs> {
        let repo_root = config.repo_root.clone();
        config
            .exts
            .entry(LANGUAGE_NAME.to_string())
            .or_insert_with(|| Box::new(Configs::new(&repo_root)))
            .downcast_mut::<Configs>()
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "extension state under {LANGUAGE_NAME:?} is not a TypeScript config tree"
                ))
            })
    }
}

impl Configurer for TypeScript {
    fn register_flags(
        &self,
        cmd: clap::Command,
        _cmd_name: &str,
        _config: &mut Config,
    ) -> clap::Command {
        cmd
    }

    fn check_flags(&self, _matches: &clap::ArgMatches, _config: &mut Config) -> Result<()> {
        Ok(())
    }

    fn known_directives(&self) -> &'static [&'static str] {
        KNOWN_DIRECTIVES
    }

    fn configure(&self, config: &mut Config, rel: &str, file: Option<&BuildFile>) -> Result<()> {
        let configs = Self::configs_mut(config)?;
        let ts_config = configs.get_or_create(rel)?;

        let Some(file) = file else {
            return Ok(());
        };

        debug!(
            "Configuring {:?} from {} ({} directives)",
            ts_config.rel(),
            file.path.display(),
            file.directives.len()
        );
        apply_directives(ts_config, &file.directives, &file.path)
    }
}

impl Language for TypeScript {
    fn name(&self) -> &'static str {
        LANGUAGE_NAME
    }

    fn kinds(&self) -> &'static BTreeMap<&'static str, KindInfo> {
        &TS_KINDS
    }

    fn loads(&self) -> &'static [LoadInfo] {
        &TS_LOADS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Directive;
    use crate::kinds::TS_PROJECT_KIND;
    use std::path::Path;

    fn build_file(pkg: &str, directives: &[(&str, &str)]) -> BuildFile {
        let directives = directives
            .iter()
            .map(|(key, value)| Directive::new(*key, *value))
            .collect();
        BuildFile::from_directives(format!("{pkg}/BUILD.bazel"), pkg, directives)
    }

    #[test]
    fn test_configure_root_without_build_file() {
        let mut config = Config::new("/repo");
        TypeScript.configure(&mut config, "", None).unwrap();

        let configs = TypeScript::configs(&config).unwrap();
        assert_eq!(configs.len(), 1);
        let root = configs.root().unwrap();
        assert_eq!(root.repo_root(), Path::new("/repo"));
        assert_eq!(root, &TypeScriptConfig::new("/repo"));
    }

    #[test]
    fn test_configure_child_leaves_root_unchanged() {
        let mut config = Config::new("/repo");
        TypeScript.configure(&mut config, "", None).unwrap();
        let file = build_file("pkg", &[("generation", "disabled"), ("ignore_imports", "foo,bar")]);
        TypeScript.configure(&mut config, "pkg", Some(&file)).unwrap();

        let pkg = TypeScript::config_for(&config, "pkg").unwrap();
        assert!(!pkg.generation_enabled());
        assert!(pkg.ignores_import("foo"));
        assert!(pkg.ignores_import("bar"));

        let root = TypeScript::config_for(&config, "").unwrap();
        assert_eq!(root, &TypeScriptConfig::new("/repo"));
    }

    #[test]
    fn test_configure_lazily_creates_root_for_nested_first_call() {
        let mut config = Config::new("/repo");
        TypeScript.configure(&mut config, "a/b", None).unwrap();

        let configs = TypeScript::configs(&config).unwrap();
        assert!(configs.root().is_some());
        assert_eq!(configs.get("a/b").unwrap().rel(), "a/b");
    }

    #[test]
    fn test_configure_rejects_bad_value() {
        let mut config = Config::new("/repo");
        let file = build_file("pkg", &[("generation", "nonsense")]);
        let err = TypeScript.configure(&mut config, "pkg", Some(&file)).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("generation"));
        assert!(message.contains("nonsense"));
        assert!(message.contains("pkg/BUILD.bazel"));
    }

    #[test]
    fn test_configure_with_foreign_ext_state() {
        let mut config = Config::new("/repo");
        config.exts.insert(LANGUAGE_NAME.to_string(), Box::new("not a tree"));
        let result = TypeScript.configure(&mut config, "", None);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_known_directives() {
        let directives = TypeScript.known_directives();
        assert_eq!(directives.len(), 10);
        assert!(!directives.contains(&"exclude"));
    }

    #[test]
    fn test_flags_are_noops() {
        let mut config = Config::new("/repo");
        let cmd = TypeScript.register_flags(clap::Command::new("gazelle"), "update", &mut config);
        assert_eq!(cmd.get_arguments().count(), 0);

        let matches = cmd.get_matches_from(["gazelle"]);
        assert!(TypeScript.check_flags(&matches, &mut config).is_ok());
        assert!(config.exts.is_empty());
    }

    #[test]
    fn test_kinds_and_loads_are_consistent() {
        let ts = TypeScript::new();
        let info = &ts.kinds()[TS_PROJECT_KIND];
        assert!(!info.match_any);

        for kind in ts.kinds().keys() {
            assert!(ts.loads().iter().any(|load| load.exports(kind)));
        }
        assert_eq!(ts.name(), LANGUAGE_NAME);
    }
}
