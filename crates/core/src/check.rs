//! Check existing build files against the published rule kinds

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::build_file::{BuildFile, SourceLocation};
use crate::interfaces::{KindInfo, LoadInfo};

/// A problem with a rule of a known kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    /// A non-empty attribute is missing or has no values
    EmptyAttribute {
        file: PathBuf,
        line: usize,
        rule: String,
        attr: String,
    },
    /// The rule kind is used without loading it from its load source
    MissingLoad {
        file: PathBuf,
        line: usize,
        rule: String,
        kind: String,
        load: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::EmptyAttribute {
                file,
                line,
                rule,
                attr,
            } => write!(
                f,
                "{}:{}: rule {:?} has an empty {:?} attribute",
                file.display(),
                line,
                rule,
                attr
            ),
            Finding::MissingLoad {
                file,
                line,
                rule,
                kind,
                load,
            } => write!(
                f,
                "{}:{}: rule {:?} uses {} without load({:?}, {:?})",
                file.display(),
                line,
                rule,
                kind,
                load,
                kind
            ),
        }
    }
}

/// Report every rule in `file` that breaks its kind's contract
pub fn check_build_file(
    file: &BuildFile,
    kinds: &BTreeMap<&'static str, KindInfo>,
    loads: &[LoadInfo],
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for rule in &file.rules {
        let Some(info) = kinds.get(rule.kind.as_str()) else {
            continue;
        };
        let SourceLocation { line, .. } = rule.location;

        for attr in &info.non_empty_attrs {
            if rule.is_attr_empty(attr) {
                findings.push(Finding::EmptyAttribute {
                    file: file.path.clone(),
                    line,
                    rule: rule.name.clone(),
                    attr: attr.to_string(),
                });
            }
        }

        if let Some(load) = loads.iter().find(|load| load.exports(&rule.kind)) {
            if !file.loads_symbol(load.name, &rule.kind) {
                findings.push(Finding::MissingLoad {
                    file: file.path.clone(),
                    line,
                    rule: rule.name.clone(),
                    kind: rule.kind.clone(),
                    load: load.name.to_string(),
                });
            }
        }
    }

    findings
}
