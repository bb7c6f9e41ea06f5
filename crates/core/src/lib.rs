//! gazelle-ts - TypeScript language extension for the Gazelle BUILD file generator
//!
//! This crate provides:
//! - Directory-scoped configuration records that inherit down the source tree
//! - Interpretation of `# gazelle:` directives found in build files
//! - The `ts_project` rule kind metadata and its load source
pub mod build_file;
pub mod check;
pub mod config;
pub mod directive;
pub mod error;
pub mod interfaces;
pub mod kinds;
pub mod language;

// Re-export commonly used types and traits
pub use build_file::BuildFile;
pub use config::{Configs, EnvironmentType, TypeScriptConfig};
pub use directive::{Directive, KNOWN_DIRECTIVES};
pub use error::{Error, Result};
pub use interfaces::{Config, Configurer, KindInfo, Language, LoadInfo};
pub use language::{LANGUAGE_NAME, TypeScript};
