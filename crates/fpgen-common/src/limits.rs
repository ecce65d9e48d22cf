//! Centralized limits for the curried signature model.
//!
//! The generator works over a closed, enumerable set of shapes rather than an
//! open-ended n-ary system. Every bound the planner, curry generator and
//! emitter check lives here so the three stages cannot drift apart.

// =============================================================================
// Generic Variables
// =============================================================================

/// Number of generic variables available to parameter slots (`A`..`D`).
///
/// A function needing more slots than this cannot be planned and fails with
/// an unsupported-arity error.
pub const GENERIC_PARAM_COUNT: usize = 4;

// =============================================================================
// Continuations
// =============================================================================

/// Largest number of not-yet-supplied parameters a continuation type covers.
///
/// Continuation interfaces `Curry1`, `Curry2` and `Curry3` are emitted as
/// fixed helpers; a `Curry4` reference would point at nothing.
///
/// ```typescript
/// interface Curry3<A, B, C, Z> {
///   (arg1: A): Curry2<B, C, Z>;
///   (arg1: A, arg2: B): Curry1<C, Z>;
///   (arg1: A, arg2: B, arg3: C): Z;
/// }
/// ```
pub const MAX_CONTINUATION_ARITY: usize = 3;

// =============================================================================
// Iteratees
// =============================================================================

/// Largest supported iteratee arity (2 = accumulator-style callback).
pub const MAX_ITERATEE_ARITY: u8 = 2;

// =============================================================================
// Output
// =============================================================================

/// One level of indentation in emitted declarations.
pub const INDENT_UNIT: &str = "  ";

/// Initial capacity of the declaration output buffer.
pub const OUTPUT_BUFFER_CAPACITY: usize = 4096;
