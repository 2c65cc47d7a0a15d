/// The evaluator module executes a parsed program.
///
/// The evaluator walks the tree depth-first, maintains the variable table and
/// the output list, and reports the first runtime failure it meets.
///
/// # Responsibilities
/// - Evaluates every node type the parser produces.
/// - Owns all per-run state; a run is consumed when it executes.
/// - Reports undeclared identifiers, arithmetic faults and embedded syntax
///   errors.
pub mod evaluator;
/// The scanner module provides the character cursor the parser drives.
///
/// There is no separate token stream: the parser matches literal strings at
/// the cursor, backtracking on a miss.
///
/// # Responsibilities
/// - Exposes the current character, single-step advance and whitespace
///   skipping.
/// - Matches ordered candidate literals, with and without side effects.
pub mod scanner;
/// The parser module builds the abstract syntax tree.
///
/// The parser is a hand-written recursive-descent parser with one function
/// per precedence level. It never fails: malformed input is embedded in the
/// tree as `PARSE_ERROR` nodes.
///
/// # Responsibilities
/// - Converts source text into a `PROGRAM` tree.
/// - Recovers from malformed statements and guarantees termination.
/// - Optionally bounds nesting depth.
pub mod parser;
