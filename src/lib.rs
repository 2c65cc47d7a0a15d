//! # quill
//!
//! quill is a small integer statement language written in Rust. Programs
//! consist of assignments (`@x = 1;`), `if` statements, braced blocks and
//! expression statements; every expression statement prints its value.
//!
//! The crate parses source text with an error-tolerant recursive-descent
//! parser and evaluates the tree with a tree-walking interpreter.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Execution, Interpreter},
        parser::core::Parser,
    },
};

/// Structural-change queries over parsed trees.
///
/// This module counts nodes matching a predicate and compares two parses of
/// the same evolving text. It never mutates a tree.
pub mod analysis;
/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum and its closed
/// [`ast::NodeType`] classification. The tree is built by the parser and
/// traversed by the evaluator and by the analysis queries.
///
/// # Responsibilities
/// - Defines one variant per syntactic construct, holding exactly its legal
///   children.
/// - Embeds syntax errors in the tree as `PARSE_ERROR` nodes.
/// - Provides generic read-only traversal and an indented rendering.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines the syntax-tier errors embedded in trees and the
/// evaluation-tier errors that abort a run.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches source offsets to syntax errors.
/// - Classifies runtime errors into the four failure kinds.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the scanner, parser and evaluator.
/// - Exposes the parser and the single-use interpreter.
pub mod interpreter;
/// General helpers for integer conversion and checked arithmetic.
pub mod util;

pub use analysis::is_structurally_changed;

/// Parses source text into a `PROGRAM` tree.
///
/// Parsing never fails. Malformed input is represented inside the tree as
/// `PARSE_ERROR` nodes, and parsing always terminates.
///
/// # Examples
/// ```
/// use quill::{ast::NodeType, parse};
///
/// let program = parse("###");
/// assert_eq!(program.node_type(), NodeType::Program);
/// assert!(program.has_errors());
/// ```
#[must_use]
pub fn parse(source: &str) -> Node {
    Parser::new(source).parse()
}

/// Executes a parsed program and returns every printed value, in order.
///
/// # Errors
/// Returns the first runtime failure. Output produced before the failure is
/// discarded; use [`execute_partial`] to keep it.
pub fn execute(program: &Node) -> Result<Vec<i64>, RuntimeError> {
    Interpreter::new(program)?.execute()
}

/// Executes a parsed program, keeping the output produced before any
/// failure.
#[must_use]
pub fn execute_partial(program: &Node) -> Execution {
    match Interpreter::new(program) {
        Ok(interpreter) => interpreter.execute_partial(),
        Err(error) => Execution { output: Vec::new(),
                                  error:  Some(error), },
    }
}

/// Parses and executes `source` in one step.
///
/// # Errors
/// Returns an error if evaluation fails, including when it reaches a syntax
/// error embedded in the tree.
///
/// # Examples
/// ```
/// use quill::{error::FailureKind, run};
///
/// let source = "@x = 10; @second = 20; if (second - 19) {x + 1;} x*second + second/x*3;";
/// assert_eq!(run(source).unwrap(), vec![11, 206]);
///
/// let error = run("y + 1;").unwrap_err();
/// assert_eq!(error.kind(), FailureKind::UndeclaredIdentifier);
/// ```
pub fn run(source: &str) -> Result<Vec<i64>, RuntimeError> {
    execute(&parse(source))
}
