//! Rule kind and load metadata published to the host

use serde::Serialize;
use std::collections::BTreeSet;

/// How the host matches, merges and resolves rules of one kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    /// Any rule of this kind matches, regardless of name
    pub match_any: bool,
    /// Attributes that identify a matching rule besides its name
    pub match_attrs: BTreeSet<&'static str>,
    /// A generated rule is dropped unless one of these has a value
    pub non_empty_attrs: BTreeSet<&'static str>,
    /// Attributes whose labels are rewritten when a rule is renamed
    pub substitute_attrs: BTreeSet<&'static str>,
    /// Attributes overwritten from the generated rule on merge
    pub mergeable_attrs: BTreeSet<&'static str>,
    /// Attributes computed during the resolve phase
    pub resolve_attrs: BTreeSet<&'static str>,
}

/// A `.bzl` file and the symbols it exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadInfo {
    pub name: &'static str,
    pub symbols: Vec<&'static str>,
}

impl LoadInfo {
    pub fn exports(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| *s == symbol)
    }
}
