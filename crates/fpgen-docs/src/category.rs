//! Per-category declaration conversions.
//!
//! Each documented function belongs to one category; the category picks the
//! conversion from parsed parameter tags to a single declaration line. The
//! set of categories is closed, so dispatch is a plain `match`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::DocsError;
use crate::param::{ParamTag, ParsedParam, parse_param};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Util,
    Seq,
    Array,
    Collection,
    Date,
    Function,
    Lang,
    Object,
    Number,
    String,
    Math,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Util,
        Category::Seq,
        Category::Array,
        Category::Collection,
        Category::Date,
        Category::Function,
        Category::Lang,
        Category::Object,
        Category::Number,
        Category::String,
        Category::Math,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Util => "Util",
            Category::Seq => "Seq",
            Category::Array => "Array",
            Category::Collection => "Collection",
            Category::Date => "Date",
            Category::Function => "Function",
            Category::Lang => "Lang",
            Category::Object => "Object",
            Category::Number => "Number",
            Category::String => "String",
            Category::Math => "Math",
        }
    }

    /// Convert one documented function. `Ok(None)` means the category has no
    /// declaration form yet.
    pub fn convert(
        self,
        entry: &DocEntry,
        params: &[ParsedParam],
    ) -> Result<Option<String>, DocsError> {
        match self {
            Category::Array => convert_array(entry, params).map(Some),
            Category::Collection => {
                check_collection(entry, params)?;
                Ok(None)
            }
            Category::Util
            | Category::Seq
            | Category::Date
            | Category::Function
            | Category::Lang
            | Category::Object
            | Category::Number
            | Category::String
            | Category::Math => Ok(None),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

/// One public documented entry, as extracted from the library source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub params: Vec<ParamTag>,
    /// `[type, description]` of the `@returns` tag.
    #[serde(default)]
    pub returns: Option<(String, String)>,
    #[serde(default)]
    pub private: bool,
    #[serde(default = "default_is_function")]
    pub is_function: bool,
}

fn default_is_function() -> bool {
    true
}

impl DocEntry {
    pub fn return_type(&self) -> &str {
        self.returns.as_ref().map_or("void", |(ty, _)| ty.as_str())
    }

    pub fn category(&self) -> Result<Category, DocsError> {
        self.category
            .parse()
            .map_err(|()| DocsError::UnknownCategory {
                function: self.name.clone(),
                category: self.category.clone(),
            })
    }
}

pub fn load_entries(json: &str) -> Result<Vec<DocEntry>, DocsError> {
    serde_json::from_str(json).map_err(|err| DocsError::Malformed {
        message: err.to_string(),
    })
}

/// Render every public function entry that its category can convert, one
/// declaration per line, in input order.
pub fn render_entries(entries: &[DocEntry]) -> Result<String, DocsError> {
    let mut out = String::new();
    for entry in entries.iter().filter(|e| e.is_function && !e.private) {
        let category = entry.category()?;
        let params = entry
            .params
            .iter()
            .map(parse_param)
            .collect::<Result<Vec<_>, _>>()?;

        match category.convert(entry, &params)? {
            Some(line) => {
                trace!(function = %entry.name, %category, "converted");
                out.push_str(&line);
                out.push('\n');
            }
            None => debug!(function = %entry.name, %category, "no declaration form for category"),
        }
    }
    Ok(out)
}

// =============================================================================
// Array
// =============================================================================

fn convert_array(entry: &DocEntry, params: &[ParsedParam]) -> Result<String, DocsError> {
    let first_is_array = params.first().is_some_and(|p| p.has_types(&["Array"]));
    if !first_is_array {
        return Err(DocsError::AssertionFailed {
            function: entry.name.clone(),
            reason: "first parameter of an Array function must be typed Array".to_string(),
        });
    }

    let return_type = match entry.return_type() {
        "Array" => "T[]".to_string(),
        "*" => "T".to_string(),
        other => other.to_string(),
    };

    let last = params.len() - 1;
    let formatted: Vec<String> = params
        .iter()
        .enumerate()
        .map(|(index, param)| format_array_param(param, index == last))
        .collect();

    Ok(format!(
        "{}<T>({}): {}",
        entry.name,
        formatted.join(", "),
        return_type
    ))
}

fn format_array_param(param: &ParsedParam, is_last: bool) -> String {
    // Only the name is consulted for containers, not the declared types.
    let ty = if matches!(param.name.as_str(), "array" | "arrays" | "values") {
        "T[]".to_string()
    } else if param.name == "value" && param.has_types(&["*"]) {
        "T".to_string()
    } else if param.has_types(&["Function"]) {
        match param.name.as_str() {
            "iteratee" => "(value: T) => any",
            "comparator" => "(a: T, b: T) => boolean",
            "predicate" => "(value: T) => boolean",
            _ => "Function",
        }
        .to_string()
    } else if param.has_types(&["*"]) {
        "any".to_string()
    } else {
        param.types.join("|")
    };

    // A rest parameter is only legal in last position; elsewhere the
    // argument keeps its array type but loses the `...`.
    let rest = if param.spread && is_last { "..." } else { "" };
    let optional = if param.optional { "?" } else { "" };
    let ty = if param.spread {
        if ty.contains('|') {
            format!("({ty})[]")
        } else {
            format!("{ty}[]")
        }
    } else {
        ty
    };

    format!("{rest}{}{optional}: {ty}", param.name)
}

// =============================================================================
// Collection
// =============================================================================

fn check_collection(entry: &DocEntry, params: &[ParsedParam]) -> Result<(), DocsError> {
    let accepts_both = params
        .first()
        .is_some_and(|p| p.accepts("Array") && p.accepts("Object"));
    if accepts_both {
        Ok(())
    } else {
        Err(DocsError::AssertionFailed {
            function: entry.name.clone(),
            reason: "first parameter of a Collection function must accept Array and Object"
                .to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod category_tests;
