//! Contract between the BUILD file generator host and language extensions
//!
//! The host walks the source tree, parses build files and calls the
//! extension through the traits defined here.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub mod plugin;
pub mod rule_info;

pub use plugin::{Configurer, Language};
pub use rule_info::{KindInfo, LoadInfo};

/// Host configuration for the directory being visited
pub struct Config {
    /// Absolute path of the repository root
    pub repo_root: PathBuf,
    /// Extension-owned state keyed by language name
    pub exts: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Config {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            exts: HashMap::new(),
        }
    }

    /// Borrow the state stored under `lang`, if it has type `T`
    pub fn ext<T: Any>(&self, lang: &str) -> Option<&T> {
        self.exts.get(lang)?.downcast_ref()
    }

    pub fn ext_mut<T: Any>(&mut self, lang: &str) -> Option<&mut T> {
        self.exts.get_mut(lang)?.downcast_mut()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut exts: Vec<&String> = self.exts.keys().collect();
        exts.sort();
        f.debug_struct("Config")
            .field("repo_root", &self.repo_root)
            .field("exts", &exts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ext_downcast() {
        let mut config = Config::new("/repo");
        config.exts.insert("demo".to_string(), Box::new(42u32));

        assert_eq!(config.ext::<u32>("demo"), Some(&42));
        assert_eq!(config.ext::<String>("demo"), None);
        assert_eq!(config.ext::<u32>("missing"), None);

        *config.ext_mut::<u32>("demo").unwrap() += 1;
        assert_eq!(config.ext::<u32>("demo"), Some(&43));
    }

    #[test]
    fn test_debug_lists_extension_names() {
        let mut config = Config::new("/repo");
        config.exts.insert("b".to_string(), Box::new(()));
        config.exts.insert("a".to_string(), Box::new(()));
        let debug = format!("{config:?}");
        assert!(debug.contains(r#"exts: ["a", "b"]"#));
    }
}
