//! Plugin interface for language extensions
//!
//! Defines the capability set the host drives an extension through.

use std::collections::BTreeMap;

use super::{Config, KindInfo, LoadInfo};
use crate::build_file::BuildFile;
use crate::error::Result;

/// Language-specific configuration extension
pub trait Configurer {
    /// Register command-line flags. Called once with the root configuration.
    fn register_flags(&self, cmd: clap::Command, cmd_name: &str, config: &mut Config)
    -> clap::Command;

    /// Validate configuration after flags are parsed
    fn check_flags(&self, matches: &clap::ArgMatches, config: &mut Config) -> Result<()>;

    /// Directive keys this extension interprets
    fn known_directives(&self) -> &'static [&'static str];

    /// Update configuration for the directory `rel` from its build file.
    ///
    /// The host calls this for every directory, ancestors first. `file` is
    /// `None` when the directory has no build file.
    fn configure(&self, config: &mut Config, rel: &str, file: Option<&BuildFile>) -> Result<()>;
}

/// A language extension: configuration plus the rule kinds it generates
pub trait Language: Configurer + Send + Sync {
    /// Key of this extension's state in [`Config::exts`]
    fn name(&self) -> &'static str;

    /// Rule kinds this extension may generate
    fn kinds(&self) -> &'static BTreeMap<&'static str, KindInfo>;

    /// Files every generated rule kind can be loaded from
    fn loads(&self) -> &'static [LoadInfo];
}
