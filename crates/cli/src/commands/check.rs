use anyhow::{Result, bail};
use gazelle_ts_core::check::{Finding, check_build_file};
use gazelle_ts_core::{Config, Language, TypeScript};
use tracing::debug;

use super::resolve_root;
use crate::cli::WalkArgs;
use crate::utils::walk_repository;

pub fn check_command(walk: &WalkArgs, mut config: Config) -> Result<()> {
    let root = resolve_root(&walk.root)?;
    config.repo_root = root.clone();

    let findings = collect_findings(walk, &mut config)?;
    for finding in &findings {
        println!("{finding}");
    }

    if !findings.is_empty() {
        bail!("{} problem(s) found in BUILD files", findings.len());
    }
    println!("No problems found");
    Ok(())
}

/// Check the build file of every package with generation enabled
pub fn collect_findings(walk: &WalkArgs, config: &mut Config) -> Result<Vec<Finding>> {
    let root = config.repo_root.clone();
    let ts = TypeScript::new();
    let mut findings = Vec::new();

    walk_repository(&root, &walk.build_file_names, config, |config, dir| {
        let Some(file) = &dir.build_file else {
            return Ok(());
        };
        let enabled = TypeScript::config_for(config, &dir.rel)
            .is_some_and(|ts_config| ts_config.generation_enabled());
        if !enabled {
            debug!("Generation disabled in {:?}, not checking", dir.rel);
            return Ok(());
        }
        findings.extend(check_build_file(file, ts.kinds(), ts.loads()));
        Ok(())
    })?;

    Ok(findings)
}
