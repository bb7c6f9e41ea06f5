pub mod formatter;

pub use formatter::{format_package_config, print_package_config};
