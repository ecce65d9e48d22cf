//! Structured type expressions.
//!
//! Signatures are built as data and only turned into text by the emitter's
//! type printer, so the combinatorial logic never concatenates syntax.

use fpgen_common::limits::GENERIC_PARAM_COUNT;

// =============================================================================
// TypeParam - Generic Variable Alphabet
// =============================================================================

/// A generic type variable.
///
/// Parameter slots draw from `A`..`D` in order; `Z` is reserved for the
/// result and never bound to a slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeParam {
    A,
    B,
    C,
    D,
    Z,
}

impl TypeParam {
    /// Variables available to parameter slots, indexable by slot position.
    pub const PARAMS: [TypeParam; GENERIC_PARAM_COUNT] =
        [TypeParam::A, TypeParam::B, TypeParam::C, TypeParam::D];

    /// The reserved result variable.
    pub const RESULT: TypeParam = TypeParam::Z;

    /// Variable bound to the slot at `index`, or `None` once the alphabet is
    /// exhausted.
    pub fn for_slot(index: usize) -> Option<TypeParam> {
        Self::PARAMS.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            TypeParam::A => "A",
            TypeParam::B => "B",
            TypeParam::C => "C",
            TypeParam::D => "D",
            TypeParam::Z => "Z",
        }
    }
}

// =============================================================================
// IterateeArity
// =============================================================================

/// Shape of a caller-supplied callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IterateeArity {
    /// `(value) => result`
    Unary,
    /// `(accumulator, value) => accumulator`
    Binary,
}

impl IterateeArity {
    pub fn from_declared(arity: u8) -> Option<Self> {
        match arity {
            1 => Some(IterateeArity::Unary),
            2 => Some(IterateeArity::Binary),
            _ => None,
        }
    }

    pub const fn count(self) -> usize {
        match self {
            IterateeArity::Unary => 1,
            IterateeArity::Binary => 2,
        }
    }
}

// =============================================================================
// TypeExpr
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A bare generic variable.
    Param(TypeParam),
    /// Sequential container: `T[]`.
    Array(Box<TypeExpr>),
    /// Sequential or keyed container exposing elements of one type.
    CollectionOf(Box<TypeExpr>),
    /// Callback type.
    Iteratee(IterateeType),
    /// The partially-applied function returned while arguments remain.
    Continuation(ContinuationType),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IterateeType {
    pub arity: IterateeArity,
    /// Type of each element the callback receives.
    pub value: Box<TypeExpr>,
    /// Callback result; also the accumulator type for binary iteratees.
    pub result: Box<TypeExpr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuationType {
    /// Types of the parameters still to be supplied, in order.
    pub remaining: Vec<TypeExpr>,
    /// What the function returns once all of them are supplied.
    pub result: Box<TypeExpr>,
}

impl TypeExpr {
    pub fn param(param: TypeParam) -> Self {
        TypeExpr::Param(param)
    }

    pub fn array(element: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(element))
    }

    pub fn collection_of(element: TypeExpr) -> Self {
        TypeExpr::CollectionOf(Box::new(element))
    }

    pub fn iteratee(arity: IterateeArity, value: TypeExpr, result: TypeExpr) -> Self {
        TypeExpr::Iteratee(IterateeType {
            arity,
            value: Box::new(value),
            result: Box::new(result),
        })
    }

    pub fn continuation(remaining: Vec<TypeExpr>, result: TypeExpr) -> Self {
        TypeExpr::Continuation(ContinuationType {
            remaining,
            result: Box::new(result),
        })
    }

    /// Generic variables referenced anywhere in this expression, in first
    /// occurrence order.
    pub fn referenced_params(&self) -> Vec<TypeParam> {
        let mut params = Vec::new();
        self.collect_params(&mut params);
        params
    }

    fn collect_params(&self, out: &mut Vec<TypeParam>) {
        match self {
            TypeExpr::Param(param) => {
                if !out.contains(param) {
                    out.push(*param);
                }
            }
            TypeExpr::Array(element) | TypeExpr::CollectionOf(element) => {
                element.collect_params(out);
            }
            TypeExpr::Iteratee(iteratee) => {
                iteratee.value.collect_params(out);
                iteratee.result.collect_params(out);
            }
            TypeExpr::Continuation(continuation) => {
                for remaining in &continuation.remaining {
                    remaining.collect_params(out);
                }
                continuation.result.collect_params(out);
            }
        }
    }

    pub fn as_continuation(&self) -> Option<&ContinuationType> {
        match self {
            TypeExpr::Continuation(continuation) => Some(continuation),
            _ => None,
        }
    }
}
