use crate::commands::config::PackageConfig;

/// Render a package's configuration as indented `key: value` lines
pub fn format_package_config(package: &PackageConfig) -> String {
    let config = &package.config;
    let label = format!("//{}", package.package);
    let mut out = match &package.build_file {
        Some(file) => format!("{label} ({file})\n"),
        None => format!("{label}\n"),
    };

    let join = |items: &std::collections::BTreeSet<String>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };

    let fields = [
        (
            "generation",
            if config.generation_enabled() { "enabled" } else { "disabled" }.to_string(),
        ),
        ("environment", config.environment().to_string()),
        ("validate_import_statements", config.validate_imports().to_string()),
        ("ignore_imports", join(config.ignored_imports())),
        ("exclude", join(config.excluded_patterns())),
        ("library_naming_convention", config.library_naming_convention().to_string()),
        ("tests_naming_convention", config.tests_naming_convention().to_string()),
        ("sources_file_glob", config.sources_file_glob().to_string()),
        ("tests_file_glob", config.tests_file_glob().to_string()),
        ("npm_workspace", config.npm_workspace().unwrap_or("-").to_string()),
        ("npm_package_json", config.npm_package_json().to_string()),
    ];
    for (key, value) in fields {
        out.push_str(&format!("  {key}: {value}\n"));
    }
    out
}

pub fn print_package_config(package: &PackageConfig) {
    print!("{}", format_package_config(package));
}
