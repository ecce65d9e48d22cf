//! Immutable function metadata store.
//!
//! The store is built once, validated eagerly, and then only read. Every
//! lookup is total over the declared set; asking for anything else is a
//! configuration error because the generator only processes functions that
//! were enumerated upstream.

use fpgen_common::{Classify, ErrorKind};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::mapping::MappingTables;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("function '{name}' is not declared in the metadata table")]
    UndeclaredFunction { name: String },

    #[error("function '{name}' must accept at least one argument")]
    ZeroArity { name: String },

    #[error("'{key}' is not a valid arity in aryMethod")]
    InvalidArityKey { key: String },

    #[error("function '{name}' is declared with arity {first} and again with arity {second}")]
    DuplicateDeclaration {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("{table} entry '{name}' does not name a declared function")]
    UnknownTableEntry { table: &'static str, name: String },

    #[error("alias '{alias}' of '{target}' shadows a declared function")]
    AliasShadowsFunction { alias: String, target: String },

    #[error("alias '{alias}' is bound to both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("malformed metadata document: {message}")]
    Malformed { message: String },
}

impl Classify for MetadataError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

// =============================================================================
// FunctionMetadata
// =============================================================================

/// How the result variable is wrapped in a function's final return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnShape {
    /// `Z[]`: one result per element (`map`, `flatMap`).
    ArrayOfResult,
    /// `Z`: a single accumulated value (`reduce`, `transform`).
    Result,
}

/// Declared shape of one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMetadata {
    pub name: String,
    pub arity: usize,
    /// Alternate exported names, duplicates removed, declaration order kept.
    pub aliases: Vec<String>,
    pub spread_start: Option<usize>,
    /// 1 = transform-one-value callback, 2 = accumulator callback.
    pub iteratee_arity: Option<u8>,
    pub return_shape: Option<ReturnShape>,
}

impl FunctionMetadata {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionMetadata {
            name: name.into(),
            arity,
            aliases: Vec::new(),
            spread_start: None,
            iteratee_arity: None,
            return_shape: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            let alias = alias.into();
            if !self.aliases.contains(&alias) {
                self.aliases.push(alias);
            }
        }
        self
    }

    pub fn with_spread_start(mut self, start: usize) -> Self {
        self.spread_start = Some(start);
        self
    }

    pub fn with_iteratee_arity(mut self, arity: u8) -> Self {
        self.iteratee_arity = Some(arity);
        self
    }

    pub fn with_return_shape(mut self, shape: ReturnShape) -> Self {
        self.return_shape = Some(shape);
        self
    }

    /// Alias bindings, each pointing back at this function.
    pub fn alias_bindings(&self) -> Vec<AliasBinding> {
        self.aliases
            .iter()
            .map(|alias| AliasBinding {
                alias: alias.clone(),
                target: self.name.clone(),
            })
            .collect()
    }
}

/// An alternate exported name bound to an already-generated signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasBinding {
    pub alias: String,
    pub target: String,
}

// =============================================================================
// MetadataStore
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    functions: FxHashMap<String, FunctionMetadata>,
    /// alias -> real function
    alias_index: FxHashMap<String, String>,
    /// Declared names, sorted.
    names: Vec<String>,
}

impl MetadataStore {
    /// Build a store from fully-formed records.
    pub fn from_functions<I>(functions: I) -> Result<Self, MetadataError>
    where
        I: IntoIterator<Item = FunctionMetadata>,
    {
        let mut map: FxHashMap<String, FunctionMetadata> = FxHashMap::default();
        for function in functions {
            if function.arity == 0 {
                return Err(MetadataError::ZeroArity {
                    name: function.name,
                });
            }
            if let Some(existing) = map.get(&function.name) {
                return Err(MetadataError::DuplicateDeclaration {
                    name: function.name.clone(),
                    first: existing.arity,
                    second: function.arity,
                });
            }
            map.insert(function.name.clone(), function);
        }

        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();

        // Sorted order keeps the reported pair stable across runs.
        let mut alias_index: FxHashMap<String, String> = FxHashMap::default();
        for function in names.iter().filter_map(|name| map.get(name)) {
            for alias in &function.aliases {
                if map.contains_key(alias) {
                    return Err(MetadataError::AliasShadowsFunction {
                        alias: alias.clone(),
                        target: function.name.clone(),
                    });
                }
                if let Some(first) = alias_index.insert(alias.clone(), function.name.clone()) {
                    if first != function.name {
                        return Err(MetadataError::DuplicateAlias {
                            alias: alias.clone(),
                            first,
                            second: function.name.clone(),
                        });
                    }
                }
            }
        }

        debug!(
            functions = names.len(),
            aliases = alias_index.len(),
            "metadata store built"
        );

        Ok(MetadataStore {
            functions: map,
            alias_index,
            names,
        })
    }

    /// Build a store from mapping tables.
    ///
    /// Alias entries pointing at functions the arity table does not cap are
    /// dropped; every other auxiliary entry must name a declared function.
    pub fn from_mapping(tables: &MappingTables) -> Result<Self, MetadataError> {
        let mut functions: Vec<FunctionMetadata> = Vec::new();
        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

        for (key, names) in &tables.ary_method {
            let arity: usize = key
                .trim()
                .parse()
                .map_err(|_| MetadataError::InvalidArityKey { key: key.clone() })?;
            for name in names {
                if let Some(&first) = seen.get(name.as_str()) {
                    return Err(MetadataError::DuplicateDeclaration {
                        name: name.clone(),
                        first,
                        second: arity,
                    });
                }
                seen.insert(name.as_str(), arity);
                functions.push(FunctionMetadata::new(name.clone(), arity));
            }
        }

        let declared: FxHashSet<&str> = seen.keys().copied().collect();
        check_entries(&declared, "methodSpread", tables.method_spread.keys())?;
        check_entries(&declared, "iterateeAry", tables.iteratee_ary.keys())?;
        check_entries(&declared, "returnShape", tables.return_shape.keys())?;

        let aliases = tables.aliases_by_real();
        for (real, names) in &aliases {
            if !declared.contains(real.as_str()) {
                trace!(real = %real, aliases = ?names, "alias target is not capped, skipping");
            }
        }

        for function in &mut functions {
            if let Some(names) = aliases.get(&function.name) {
                for alias in names {
                    if !function.aliases.contains(alias) {
                        function.aliases.push(alias.clone());
                    }
                }
            }
            function.spread_start = tables.method_spread.get(&function.name).map(|s| s.start);
            function.iteratee_arity = tables.iteratee_ary.get(&function.name).copied();
            function.return_shape = tables.return_shape.get(&function.name).copied();
        }

        Self::from_functions(functions)
    }

    /// Parse a JSON mapping document and build a store from it.
    pub fn from_json(text: &str) -> Result<Self, MetadataError> {
        let tables: MappingTables =
            serde_json::from_str(text).map_err(|err| MetadataError::Malformed {
                message: err.to_string(),
            })?;
        Self::from_mapping(&tables)
    }

    /// The store for the built-in lodash/fp tables.
    pub fn lodash_fp() -> Result<Self, MetadataError> {
        Self::from_mapping(&MappingTables::lodash_fp())
    }

    pub fn get(&self, name: &str) -> Result<&FunctionMetadata, MetadataError> {
        self.functions
            .get(name)
            .ok_or_else(|| MetadataError::UndeclaredFunction {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn arity(&self, name: &str) -> Result<usize, MetadataError> {
        Ok(self.get(name)?.arity)
    }

    pub fn aliases(&self, name: &str) -> Result<&[String], MetadataError> {
        Ok(&self.get(name)?.aliases)
    }

    pub fn spread_start(&self, name: &str) -> Result<Option<usize>, MetadataError> {
        Ok(self.get(name)?.spread_start)
    }

    pub fn iteratee_arity(&self, name: &str) -> Result<Option<u8>, MetadataError> {
        Ok(self.get(name)?.iteratee_arity)
    }

    /// The real function an alias re-exports, if `name` is an alias.
    pub fn resolve_alias(&self, name: &str) -> Option<&str> {
        self.alias_index.get(name).map(String::as_str)
    }

    /// All declared names, sorted.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Sorted names of functions that can be curried: everything without a
    /// spread argument.
    pub fn curriable_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|f| f.spread_start.is_none())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Sorted names of functions that take an iteratee.
    pub fn iteratee_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|f| f.iteratee_arity.is_some())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Records in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionMetadata> {
        self.names
            .iter()
            .filter_map(|name| self.functions.get(name))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn check_entries<'a>(
    declared: &FxHashSet<&str>,
    table: &'static str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), MetadataError> {
    for name in names {
        if !declared.contains(name.as_str()) {
            return Err(MetadataError::UnknownTableEntry {
                table,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;
