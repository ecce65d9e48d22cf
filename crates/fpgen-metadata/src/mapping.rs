//! Serialized form of the mapping tables.
//!
//! Mirrors the layout of lodash's `fp/_mapping` module so a table exported
//! from there as JSON can be fed to the generator unchanged:
//!
//! ```json
//! {
//!   "aryMethod": { "2": ["map", "filter"] },
//!   "aliasToReal": { "pluck": "map" },
//!   "iterateeAry": { "map": 1, "filter": 1 },
//!   "methodSpread": { "without": { "start": 1 } }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::data;
use crate::store::ReturnShape;

/// Spread metadata for a single function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadInfo {
    /// Index from which trailing arguments collapse into one array argument.
    pub start: usize,
    /// Whether the start index refers to the rearranged argument order.
    #[serde(default)]
    pub after_rearg: bool,
}

/// The raw tables a [`MetadataStore`](crate::MetadataStore) is built from.
///
/// Only `aryMethod` is required. `aliasToReal` and `realToAlias` may both be
/// present; they are merged when the store is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingTables {
    /// Arity (as a decimal string key) to the functions capped to it.
    pub ary_method: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub alias_to_real: IndexMap<String, String>,
    #[serde(default)]
    pub real_to_alias: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub method_spread: IndexMap<String, SpreadInfo>,
    #[serde(default)]
    pub iteratee_ary: IndexMap<String, u8>,
    /// Overrides for the final return shape of iteratee-bearing functions.
    #[serde(default)]
    pub return_shape: IndexMap<String, ReturnShape>,
}

impl MappingTables {
    /// The built-in lodash/fp tables.
    pub fn lodash_fp() -> Self {
        let ary_method = data::ARY_METHOD
            .iter()
            .map(|(arity, names)| {
                (
                    arity.to_string(),
                    names.iter().map(|name| (*name).to_string()).collect(),
                )
            })
            .collect();

        let alias_to_real = data::ALIAS_TO_REAL
            .iter()
            .map(|(alias, real)| ((*alias).to_string(), (*real).to_string()))
            .collect();

        let method_spread = data::METHOD_SPREAD
            .iter()
            .map(|(name, start)| {
                (
                    (*name).to_string(),
                    SpreadInfo {
                        start: *start,
                        after_rearg: false,
                    },
                )
            })
            .collect();

        let iteratee_ary = data::ITERATEE_ARY
            .iter()
            .map(|(name, arity)| ((*name).to_string(), *arity))
            .collect();

        MappingTables {
            ary_method,
            alias_to_real,
            real_to_alias: IndexMap::new(),
            method_spread,
            iteratee_ary,
            return_shape: IndexMap::new(),
        }
    }

    /// Alias lists per real function, combining `realToAlias` with the
    /// inverse of `aliasToReal`. Order follows first appearance.
    pub fn aliases_by_real(&self) -> IndexMap<String, Vec<String>> {
        let mut merged: IndexMap<String, Vec<String>> = self.real_to_alias.clone();
        for (alias, real) in &self.alias_to_real {
            let entry = merged.entry(real.clone()).or_default();
            if !entry.contains(alias) {
                entry.push(alias.clone());
            }
        }
        merged
    }
}
