pub mod check;
pub mod config;
pub mod directives;
pub mod kinds;

pub use check::check_command;
pub use config::config_command;
pub use directives::directives_command;
pub use kinds::kinds_command;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Absolute repository root for a command-line path
fn resolve_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .with_context(|| format!("Repository root not found: {}", root.display()))
}
