use anyhow::Result;
use gazelle_ts_core::{Config, TypeScript, TypeScriptConfig};
use serde::Serialize;
use tracing::debug;

use super::resolve_root;
use crate::cli::WalkArgs;
use crate::display::print_package_config;
use crate::utils::walk_repository;

/// Effective configuration of one package
#[derive(Debug, Serialize)]
pub struct PackageConfig {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_file: Option<String>,
    pub config: TypeScriptConfig,
}

pub fn config_command(walk: &WalkArgs, mut config: Config, json: bool, all: bool) -> Result<()> {
    let root = resolve_root(&walk.root)?;
    debug!("Collecting TypeScript configuration under {}", root.display());
    config.repo_root = root.clone();

    let packages = collect_package_configs(walk, &mut config, all)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
    } else {
        for package in &packages {
            print_package_config(package);
        }
    }

    Ok(())
}

/// Walk the repository and snapshot each package's configuration
pub fn collect_package_configs(
    walk: &WalkArgs,
    config: &mut Config,
    all: bool,
) -> Result<Vec<PackageConfig>> {
    let root = config.repo_root.clone();
    let mut packages = Vec::new();

    walk_repository(&root, &walk.build_file_names, config, |config, dir| {
        if dir.build_file.is_none() && !all {
            return Ok(());
        }
        if let Some(ts_config) = TypeScript::config_for(config, &dir.rel) {
            packages.push(PackageConfig {
                package: dir.rel.clone(),
                build_file: dir.build_file.as_ref().map(|file| {
                    file.path
                        .strip_prefix(&root)
                        .unwrap_or(&file.path)
                        .display()
                        .to_string()
                }),
                config: ts_config.clone(),
            });
        }
        Ok(())
    })?;

    Ok(packages)
}
