//! Type Printer - Convert TypeExpr to TypeScript syntax
//!
//! The only place structured type expressions become text. Continuations
//! and iteratees print as references to the fixed helper types emitted at
//! the top of the module.

use fpgen_solver::{ContinuationType, IterateeArity, IterateeType, TypeExpr, TypeParam};

/// Name of the container alias accepting arrays and keyed objects.
pub const COLLECTION_ALIAS: &str = "CollectionOf";
/// Name of the keyed-object alias `CollectionOf` builds on.
pub const OBJECT_ALIAS: &str = "ObjectOf";
/// Prefix of the continuation interfaces (`Curry1`, `Curry2`, ...).
pub const CONTINUATION_PREFIX: &str = "Curry";
/// Prefix of the callback aliases (`Iteratee1`, `Iteratee2`).
pub const ITERATEE_PREFIX: &str = "Iteratee";

/// Prints types as TypeScript syntax for declaration emit.
///
/// # Examples
///
/// ```
/// use fpgen_emitter::TypePrinter;
/// use fpgen_solver::{TypeExpr, TypeParam};
///
/// let printer = TypePrinter::new();
/// let ty = TypeExpr::array(TypeExpr::param(TypeParam::Z));
/// assert_eq!(printer.print_type(&ty), "Z[]");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TypePrinter;

impl TypePrinter {
    pub fn new() -> Self {
        TypePrinter
    }

    /// Convert a TypeExpr to TypeScript syntax string.
    pub fn print_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Param(param) => param.name().to_string(),
            TypeExpr::Array(element) => format!("{}[]", self.print_type(element)),
            TypeExpr::CollectionOf(element) => {
                format!("{COLLECTION_ALIAS}<{}>", self.print_type(element))
            }
            TypeExpr::Iteratee(iteratee) => self.print_iteratee(iteratee),
            TypeExpr::Continuation(continuation) => self.print_continuation(continuation),
        }
    }

    fn print_iteratee(&self, iteratee: &IterateeType) -> String {
        format!(
            "{}<{}, {}>",
            Self::iteratee_alias(iteratee.arity),
            self.print_type(&iteratee.value),
            self.print_type(&iteratee.result)
        )
    }

    fn print_continuation(&self, continuation: &ContinuationType) -> String {
        let mut args: Vec<String> = continuation
            .remaining
            .iter()
            .map(|ty| self.print_type(ty))
            .collect();
        args.push(self.print_type(&continuation.result));
        format!(
            "{}<{}>",
            Self::continuation_name(continuation.remaining.len()),
            args.join(", ")
        )
    }

    /// `<A, B, Z>` for a generic parameter list; empty for no parameters.
    pub fn print_type_params(&self, params: &[TypeParam]) -> String {
        if params.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = params.iter().map(|param| param.name()).collect();
        format!("<{}>", names.join(", "))
    }

    /// The arrow-function body of an iteratee alias, over the named value
    /// and result variables.
    ///
    /// ```text
    /// Unary:  (value: T) => R
    /// Binary: (accumulator: R, value: T) => R
    /// ```
    pub fn print_callback(&self, arity: IterateeArity, value: &str, result: &str) -> String {
        match arity {
            IterateeArity::Unary => format!("(value: {value}) => {result}"),
            IterateeArity::Binary => {
                format!("(accumulator: {result}, value: {value}) => {result}")
            }
        }
    }

    pub fn continuation_name(remaining: usize) -> String {
        format!("{CONTINUATION_PREFIX}{remaining}")
    }

    pub fn iteratee_alias(arity: IterateeArity) -> String {
        format!("{ITERATEE_PREFIX}{}", arity.count())
    }
}

#[cfg(test)]
#[path = "tests/type_printer_tests.rs"]
mod type_printer_tests;
