use thiserror::Error;

use crate::ast::NodeType;

/// Represents all errors that abort an interpreter run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("undeclared identifier '{name}'")]
    UndeclaredIdentifier {
        /// The name of the variable.
        name: String,
    },
    /// An arithmetic operation could not produce a value.
    #[error("arithmetic failure: {0}")]
    Arithmetic(#[from] ArithmeticFault),
    /// Evaluation reached a `PARSE_ERROR` node.
    #[error("syntax error: {message}")]
    Syntax {
        /// The diagnostic embedded in the tree.
        message: String,
    },
    /// Evaluation reached a node it has no rule for.
    #[error("malformed tree: no evaluation rule for {node} here")]
    MalformedTree {
        /// The type of the offending node.
        node: NodeType,
    },
}

/// The reason an arithmetic operation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticFault {
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit in a 64-bit signed integer.
    #[error("integer overflow in '{operator}'")]
    Overflow {
        /// The operator symbol that overflowed.
        operator: &'static str,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    #[error("literal {literal} is out of range")]
    LiteralOutOfRange {
        /// The literal text.
        literal: String,
    },
}

/// The four categories of evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// See [`RuntimeError::UndeclaredIdentifier`].
    UndeclaredIdentifier,
    /// See [`RuntimeError::Arithmetic`].
    ArithmeticFailure,
    /// See [`RuntimeError::Syntax`].
    SyntaxFailure,
    /// See [`RuntimeError::MalformedTree`].
    MalformedTree,
}

impl RuntimeError {
    /// Classifies the error into one of the four failure kinds.
    ///
    /// ## Example
    /// ```
    /// use quill::error::{ArithmeticFault, FailureKind, RuntimeError};
    ///
    /// let error = RuntimeError::from(ArithmeticFault::DivisionByZero);
    /// assert_eq!(error.kind(), FailureKind::ArithmeticFailure);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::UndeclaredIdentifier { .. } => FailureKind::UndeclaredIdentifier,
            Self::Arithmetic(_) => FailureKind::ArithmeticFailure,
            Self::Syntax { .. } => FailureKind::SyntaxFailure,
            Self::MalformedTree { .. } => FailureKind::MalformedTree,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UndeclaredIdentifier => "undeclared-identifier",
            Self::ArithmeticFailure => "arithmetic-failure",
            Self::SyntaxFailure => "syntax-failure",
            Self::MalformedTree => "malformed-tree",
        };
        write!(f, "{name}")
    }
}
