use anyhow::Result;
use gazelle_ts_core::{KindInfo, Language, LoadInfo, TypeScript};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct RuleSchema<'a> {
    kinds: &'a BTreeMap<&'static str, KindInfo>,
    loads: &'a [LoadInfo],
}

pub fn kinds_command() -> Result<()> {
    let ts = TypeScript::new();
    let schema = RuleSchema {
        kinds: ts.kinds(),
        loads: ts.loads(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
