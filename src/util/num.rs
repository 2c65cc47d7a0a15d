use crate::{error::ArithmeticFault, interpreter::evaluator::core::EvalResult};

/// Converts a normalized integer literal into its value.
///
/// ## Errors
/// Returns [`ArithmeticFault::LiteralOutOfRange`] if the literal does not fit
/// in an `i64` (or is not a literal at all).
///
/// ## Example
/// ```
/// use quill::util::num::parse_literal;
///
/// assert_eq!(parse_literal("-42").unwrap(), -42);
/// assert!(parse_literal("99999999999999999999").is_err());
/// ```
pub fn parse_literal(literal: &str) -> Result<i64, ArithmeticFault> {
    literal.parse()
           .map_err(|_| ArithmeticFault::LiteralOutOfRange { literal: literal.to_owned() })
}

/// Turns the result of a checked integer operation into an evaluation
/// result.
///
/// ## Errors
/// Returns [`ArithmeticFault::Overflow`] naming `operator` if `result` is
/// `None`.
pub fn checked(result: Option<i64>, operator: &'static str) -> EvalResult<i64> {
    result.ok_or_else(|| ArithmeticFault::Overflow { operator }.into())
}
