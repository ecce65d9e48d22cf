//! Parameter tag parser
//!
//! Splits a documented parameter (`[type, name, description]`) into its
//! accepted types, bare name, and optional/spread markers:
//!
//! ```text
//! ["...(Array|Object)", "[values]", "..."]
//!   -> types: ["Array", "Object"], name: "values", optional: true, spread: true
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DocsError;

/// `...(A|B)` or `A|B`; group 2 holds the `|`-separated type list.
static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\.\.\.)?\(?([^)]*)\)?$").expect("valid type pattern"));
/// `[name=default]` or `name`; group 1 holds the bare name.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[?([^=\]]+).*\]?$").expect("valid name pattern"));
static OPTIONAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[.*\]$").expect("valid optional pattern"));
static SPREAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.\.\..*$").expect("valid spread pattern"));

/// A documented parameter as `[type, name, description]`.
pub type ParamTag = (String, String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParam {
    pub types: Vec<String>,
    pub name: String,
    pub optional: bool,
    pub spread: bool,
}

impl ParsedParam {
    /// Whether the accepted types are exactly `expected`, in order.
    pub fn has_types(&self, expected: &[&str]) -> bool {
        self.types.len() == expected.len()
            && self.types.iter().zip(expected).all(|(ty, want)| ty == want)
    }

    pub fn accepts(&self, ty: &str) -> bool {
        self.types.iter().any(|t| t == ty)
    }
}

pub fn parse_param(tag: &ParamTag) -> Result<ParsedParam, DocsError> {
    let (ty, name, _description) = tag;

    let types = capture(&TYPE_RE, ty, 2)?
        .split('|')
        .map(str::to_string)
        .collect();
    let bare_name = capture(&NAME_RE, name, 1)?.to_string();

    Ok(ParsedParam {
        types,
        name: bare_name,
        optional: OPTIONAL_RE.is_match(name),
        spread: SPREAD_RE.is_match(ty),
    })
}

fn capture<'t>(regex: &Regex, text: &'t str, group: usize) -> Result<&'t str, DocsError> {
    regex
        .captures(text)
        .and_then(|captures| captures.get(group))
        .map(|m| m.as_str())
        .ok_or_else(|| DocsError::PatternMismatch {
            input: text.to_string(),
            pattern: regex.as_str().to_string(),
        })
}

#[cfg(test)]
#[path = "tests/param_tests.rs"]
mod param_tests;
