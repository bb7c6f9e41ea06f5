use anyhow::Result;
use gazelle_ts_core::{Configurer, TypeScript};

pub fn directives_command() -> Result<()> {
    for directive in TypeScript::new().known_directives() {
        println!("{directive}");
    }
    Ok(())
}
