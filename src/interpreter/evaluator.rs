/// Core evaluation logic and run management.
///
/// Contains the per-run [`core::Context`], the node dispatcher, and the
/// single-use [`core::Interpreter`] with its two output contracts.
pub mod core;

/// Binary operator evaluation.
///
/// Implements comparisons and checked integer arithmetic.
pub mod binary;
