/// Syntax-tier errors.
///
/// Defines every problem the parser can detect: mismatched punctuation, empty
/// `if` conditions, reserved symbols used as leaves, malformed numbers or
/// identifiers, trailing input and excessive nesting. These errors are never
/// raised by [`crate::parse`]; they are embedded in the tree as `PARSE_ERROR`
/// nodes.
pub mod parse_error;
/// Evaluation-tier errors.
///
/// Contains all errors that abort an interpreter run: undeclared identifiers,
/// arithmetic faults, embedded syntax errors reached during evaluation, and
/// trees with a shape the evaluator has no rule for.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ArithmeticFault, FailureKind, RuntimeError};
