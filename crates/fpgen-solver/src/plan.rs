//! Parameter planning.
//!
//! Turns a function's declared shape into an ordered list of logical
//! parameter slots. For an iteratee-bearing function the order is fixed:
//!
//! ```text
//! map(iteratee, collection)            -> [iteratee: A, collection: B]
//! reduce(iteratee, accumulator, coll)  -> [iteratee: A, arg2: B, collection: C]
//! ```
//!
//! Each slot is bound to the next variable of the `A`..`D` alphabet; the
//! result variable `Z` is reserved and appears only in return types and
//! iteratee results.

use fpgen_metadata::{FunctionMetadata, ReturnShape};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::SolverError;
use crate::types::{IterateeArity, TypeExpr, TypeParam};

/// Slot lists never exceed the generic alphabet, so they stay inline.
pub type SlotList = SmallVec<[ParameterSlot; 4]>;

/// Positional role of a parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// The transformation or accumulation callback. Always first.
    Iteratee,
    /// A plain scalar argument between the iteratee and the collection.
    ExtraArg,
    /// The collection or subject the function operates over. Always last.
    Collection,
    /// A parameter of a flat plan or a continuation definition.
    Positional,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterSlot {
    pub name: String,
    pub ty: TypeExpr,
    pub generic: TypeParam,
    pub role: SlotRole,
}

impl ParameterSlot {
    pub fn new(name: impl Into<String>, ty: TypeExpr, generic: TypeParam, role: SlotRole) -> Self {
        ParameterSlot {
            name: name.into(),
            ty,
            generic,
            role,
        }
    }
}

/// Planned signature of one function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionPlan {
    pub name: String,
    pub parameters: SlotList,
    pub return_type: TypeExpr,
    pub result: TypeParam,
}

impl FunctionPlan {
    /// Generic parameter list for the declaration: every slot variable in
    /// slot order, then the result variable, duplicates removed.
    pub fn type_params(&self) -> Vec<TypeParam> {
        let mut params: Vec<TypeParam> = Vec::with_capacity(self.parameters.len() + 1);
        for param in self
            .parameters
            .iter()
            .map(|slot| slot.generic)
            .chain(std::iter::once(self.result))
        {
            if !params.contains(&param) {
                params.push(param);
            }
        }
        params
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Hands out generic variables in slot order.
struct GenericAllocator<'a> {
    function: &'a str,
    arity: usize,
    next: usize,
}

impl<'a> GenericAllocator<'a> {
    fn new(function: &'a str, arity: usize) -> Self {
        GenericAllocator {
            function,
            arity,
            next: 0,
        }
    }

    fn next(&mut self) -> Result<TypeParam, SolverError> {
        let param =
            TypeParam::for_slot(self.next).ok_or_else(|| SolverError::GenericAlphabetExhausted {
                function: self.function.to_string(),
                needed: self.arity.max(self.next + 1),
            })?;
        self.next += 1;
        Ok(param)
    }
}

/// Plan the parameter slots and final return type of `signature`.
pub fn plan(signature: &FunctionMetadata) -> Result<FunctionPlan, SolverError> {
    let _span = tracing::debug_span!("plan", function = %signature.name).entered();

    let plan = match signature.iteratee_arity {
        Some(declared) => plan_iteratee(signature, declared)?,
        None => plan_flat(signature)?,
    };

    if plan.parameters.len() != signature.arity {
        return Err(SolverError::ParameterCountMismatch {
            function: signature.name.clone(),
            arity: signature.arity,
            planned: plan.parameters.len(),
        });
    }

    debug!(
        arity = plan.arity(),
        type_params = plan.type_params().len(),
        "planned parameters"
    );
    Ok(plan)
}

fn plan_iteratee(signature: &FunctionMetadata, declared: u8) -> Result<FunctionPlan, SolverError> {
    if signature.arity < 2 {
        return Err(SolverError::IterateeWithoutData {
            function: signature.name.clone(),
            arity: signature.arity,
        });
    }
    let iteratee_arity =
        IterateeArity::from_declared(declared).ok_or_else(|| SolverError::UnsupportedIterateeArity {
            function: signature.name.clone(),
            arity: declared,
        })?;
    reject_spread(signature)?;

    let result = TypeParam::RESULT;
    let mut generics = GenericAllocator::new(&signature.name, signature.arity);
    let mut parameters = SlotList::new();

    let iteratee_param = generics.next()?;
    parameters.push(ParameterSlot::new(
        "iteratee",
        TypeExpr::iteratee(
            iteratee_arity,
            TypeExpr::param(iteratee_param),
            TypeExpr::param(result),
        ),
        iteratee_param,
        SlotRole::Iteratee,
    ));

    for position in 2..signature.arity {
        let param = generics.next()?;
        trace!(position, generic = param.name(), "extra argument");
        parameters.push(ParameterSlot::new(
            format!("arg{position}"),
            TypeExpr::param(param),
            param,
            SlotRole::ExtraArg,
        ));
    }

    let collection_param = generics.next()?;
    parameters.push(ParameterSlot::new(
        "collection",
        TypeExpr::collection_of(TypeExpr::param(collection_param)),
        collection_param,
        SlotRole::Collection,
    ));

    let shape = signature.return_shape.unwrap_or(match iteratee_arity {
        IterateeArity::Unary => ReturnShape::ArrayOfResult,
        IterateeArity::Binary => ReturnShape::Result,
    });

    Ok(FunctionPlan {
        name: signature.name.clone(),
        parameters,
        return_type: wrap_result(shape, result),
        result,
    })
}

fn plan_flat(signature: &FunctionMetadata) -> Result<FunctionPlan, SolverError> {
    reject_spread(signature)?;

    let result = TypeParam::RESULT;
    let mut generics = GenericAllocator::new(&signature.name, signature.arity);
    let mut parameters = SlotList::new();
    for position in 1..=signature.arity {
        let param = generics.next()?;
        parameters.push(ParameterSlot::new(
            format!("arg{position}"),
            TypeExpr::param(param),
            param,
            SlotRole::Positional,
        ));
    }

    let shape = signature.return_shape.unwrap_or(ReturnShape::Result);
    Ok(FunctionPlan {
        name: signature.name.clone(),
        parameters,
        return_type: wrap_result(shape, result),
        result,
    })
}

fn reject_spread(signature: &FunctionMetadata) -> Result<(), SolverError> {
    match signature.spread_start {
        Some(start) => Err(SolverError::SpreadNotSupported {
            function: signature.name.clone(),
            start,
        }),
        None => Ok(()),
    }
}

fn wrap_result(shape: ReturnShape, result: TypeParam) -> TypeExpr {
    match shape {
        ReturnShape::ArrayOfResult => TypeExpr::array(TypeExpr::param(result)),
        ReturnShape::Result => TypeExpr::param(result),
    }
}

#[cfg(test)]
#[path = "tests/plan_tests.rs"]
mod plan_tests;
