//! Directory-scoped configuration for the TypeScript extension

mod environment;
mod settings;
mod tree;

pub use environment::{EnvironmentType, UnknownEnvironment};
pub use settings::{
    DEFAULT_LIBRARY_NAMING_CONVENTION, DEFAULT_NPM_PACKAGE_JSON, DEFAULT_SOURCES_FILE_GLOB,
    DEFAULT_TESTS_FILE_GLOB, DEFAULT_TESTS_NAMING_CONVENTION, DIRNAME_PLACEHOLDER,
    TypeScriptConfig,
};
pub use tree::{Configs, normalize_rel};
