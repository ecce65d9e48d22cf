//! Curry combination generation.
//!
//! A function of N parameters gets N overloads. Overload `i` accepts the
//! first `i` parameters; when parameters remain it returns a continuation
//! over their types and the final result:
//!
//! ```text
//! reduce<A, B, C, Z>(iteratee)                    : Curry2<B, CollectionOf<C>, Z>
//! reduce<A, B, C, Z>(iteratee, arg2)              : Curry1<CollectionOf<C>, Z>
//! reduce<A, B, C, Z>(iteratee, arg2, collection)  : Z
//! ```
//!
//! Overloads are always ordered by increasing number of supplied
//! parameters; type systems that pick the first matching overload depend on
//! it.

use fpgen_common::limits::MAX_CONTINUATION_ARITY;
use fpgen_metadata::{AliasBinding, FunctionMetadata};
use tracing::{debug, trace};

use crate::error::SolverError;
use crate::plan::{FunctionPlan, ParameterSlot, SlotList, SlotRole, plan};
use crate::types::{TypeExpr, TypeParam};

/// One partial-application call shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurryOverload {
    /// Prefix of the planned parameters accepted by this overload.
    pub parameters: SlotList,
    pub return_type: TypeExpr,
}

impl CurryOverload {
    /// Whether this overload takes every parameter.
    pub fn is_complete(&self) -> bool {
        self.return_type.as_continuation().is_none()
    }
}

/// Generate the overloads for calling a function with its first 1..=N
/// parameters.
pub fn curry(
    parameters: &[ParameterSlot],
    final_return: &TypeExpr,
) -> Result<Vec<CurryOverload>, SolverError> {
    if parameters.is_empty() {
        return Err(SolverError::EmptyParameterList);
    }
    // The first overload leaves the most parameters outstanding.
    let widest = parameters.len() - 1;
    if widest > MAX_CONTINUATION_ARITY {
        return Err(SolverError::ContinuationTooWide { remaining: widest });
    }

    let overloads: Vec<CurryOverload> = (1..=parameters.len())
        .map(|included| {
            let (supplied, remaining) = parameters.split_at(included);
            let return_type = if remaining.is_empty() {
                final_return.clone()
            } else {
                TypeExpr::continuation(
                    remaining.iter().map(|slot| slot.ty.clone()).collect(),
                    final_return.clone(),
                )
            };
            trace!(included, remaining = remaining.len(), "overload");
            CurryOverload {
                parameters: supplied.iter().cloned().collect(),
                return_type,
            }
        })
        .collect();

    Ok(overloads)
}

// =============================================================================
// Continuation Definitions
// =============================================================================

/// Call shapes of the continuation type covering `arity` outstanding
/// parameters.
///
/// Built by currying `arity` positional slots over the result variable, so
/// the continuation over `k` parameters refers to the one over `k - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinuationDefinition {
    pub arity: usize,
    pub type_params: Vec<TypeParam>,
    pub signatures: Vec<CurryOverload>,
}

pub fn continuation_definition(arity: usize) -> Result<ContinuationDefinition, SolverError> {
    if arity == 0 {
        return Err(SolverError::EmptyParameterList);
    }
    if arity > MAX_CONTINUATION_ARITY {
        return Err(SolverError::ContinuationTooWide { remaining: arity });
    }

    let mut parameters = SlotList::new();
    for index in 0..arity {
        let generic = TypeParam::for_slot(index).ok_or(SolverError::ContinuationTooWide {
            remaining: arity,
        })?;
        parameters.push(ParameterSlot::new(
            format!("arg{}", index + 1),
            TypeExpr::param(generic),
            generic,
            SlotRole::Positional,
        ));
    }

    let signatures = curry(&parameters, &TypeExpr::param(TypeParam::RESULT))?;
    let type_params = parameters
        .iter()
        .map(|slot| slot.generic)
        .chain(std::iter::once(TypeParam::RESULT))
        .collect();

    Ok(ContinuationDefinition {
        arity,
        type_params,
        signatures,
    })
}

/// Every continuation definition the generated overloads can reference,
/// smallest first.
pub fn continuation_definitions() -> Result<Vec<ContinuationDefinition>, SolverError> {
    (1..=MAX_CONTINUATION_ARITY)
        .map(continuation_definition)
        .collect()
}

// =============================================================================
// Whole-function Pipeline
// =============================================================================

/// A function planned, curried and ready to emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurriedFunction {
    pub plan: FunctionPlan,
    pub overloads: Vec<CurryOverload>,
    pub aliases: Vec<AliasBinding>,
}

impl CurriedFunction {
    pub fn name(&self) -> &str {
        &self.plan.name
    }
}

/// Plan and curry one function.
pub fn curry_function(signature: &FunctionMetadata) -> Result<CurriedFunction, SolverError> {
    let plan = plan(signature)?;
    let overloads = curry(&plan.parameters, &plan.return_type)?;
    debug!(
        function = %plan.name,
        overloads = overloads.len(),
        aliases = signature.aliases.len(),
        "curried"
    );
    Ok(CurriedFunction {
        plan,
        overloads,
        aliases: signature.alias_bindings(),
    })
}

#[cfg(test)]
#[path = "tests/curry_tests.rs"]
mod curry_tests;
