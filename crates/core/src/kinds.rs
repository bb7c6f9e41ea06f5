//! Rule kinds generated by the TypeScript extension and where they load from

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use crate::interfaces::{KindInfo, LoadInfo};

pub const TS_PROJECT_KIND: &str = "ts_project";

// TODO: take the `@npm` repository name from a flag once one is registered.
pub const TS_PROJECT_LOAD: &str = "@npm//@bazel/typescript:index.bzl";

pub static TS_KINDS: LazyLock<BTreeMap<&'static str, KindInfo>> = LazyLock::new(|| {
    BTreeMap::from([(
        TS_PROJECT_KIND,
        KindInfo {
            match_any: false,
            match_attrs: BTreeSet::new(),
            non_empty_attrs: BTreeSet::from(["deps", "srcs"]),
            substitute_attrs: BTreeSet::new(),
            mergeable_attrs: BTreeSet::from(["srcs"]),
            resolve_attrs: BTreeSet::from(["deps"]),
        },
    )])
});

pub static TS_LOADS: LazyLock<Vec<LoadInfo>> = LazyLock::new(|| {
    vec![LoadInfo {
        name: TS_PROJECT_LOAD,
        symbols: vec![TS_PROJECT_KIND],
    }]
});

/// Load source exporting `kind`, if any
pub fn load_for_kind(kind: &str) -> Option<&'static LoadInfo> {
    TS_LOADS.iter().find(|load| load.exports(kind))
}
