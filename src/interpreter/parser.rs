/// Parser state and entry points.
///
/// Declares the [`core::Parser`] type, the program rule, the expression
/// entry point and the nesting guard shared by all rules.
pub mod core;

/// Statement rules.
///
/// Dispatches on lookahead to `if`, assignment, block and expression
/// statements, and turns any mismatch into an embedded `PARSE_ERROR`.
pub mod statement;

/// Statement lists and braced blocks.
///
/// Contains the zero-progress guard that keeps the parser terminating on
/// arbitrary input.
pub mod block;

/// Binary operator chains.
///
/// Parses the three left-associative precedence levels: comparison, additive
/// and multiplicative.
pub mod binary;

/// Operands.
///
/// Parses identifiers, integer literals (including sign normalization) and
/// parenthesised expressions.
pub mod leaf;
