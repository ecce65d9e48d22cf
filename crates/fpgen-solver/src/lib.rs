//! Signature planning and currying for the fpgen typings generator.
//!
//! - `types`: structured type expressions and the generic variable alphabet
//! - `plan`: metadata -> ordered parameter slots and final return type
//! - `curry`: parameter slots -> partial-application overloads, plus the
//!   fixed continuation definitions those overloads reference

pub mod error;
pub use error::SolverError;

pub mod types;
pub use types::{ContinuationType, IterateeArity, IterateeType, TypeExpr, TypeParam};

pub mod plan;
pub use plan::{FunctionPlan, ParameterSlot, SlotList, SlotRole, plan};

pub mod curry;
pub use curry::{
    ContinuationDefinition, CurriedFunction, CurryOverload, continuation_definition,
    continuation_definitions, curry, curry_function,
};
