//! Doc-comment driven declarations.
//!
//! The non-curried path: public functions documented with `@param` and
//! `@returns` tags are converted per category into plain generic
//! declarations. Extracting the tags from source comments happens upstream;
//! this crate consumes them as JSON.

pub mod error;
pub use error::DocsError;

pub mod param;
pub use param::{ParamTag, ParsedParam, parse_param};

pub mod category;
pub use category::{Category, DocEntry, load_entries, render_entries};
