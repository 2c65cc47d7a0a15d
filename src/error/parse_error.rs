use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// Every variant carries the character offset at which the problem was
/// detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// None of the expected literals was found at the cursor.
    #[error("expected one of {} at position {offset}", quote_all(.expected))]
    ExpectedOneOf {
        /// The literals that were tried, in order.
        expected: Vec<&'static str>,
        /// Offset of the cursor before the attempt.
        offset:   usize,
    },
    /// An `if` was written with nothing between its parentheses.
    #[error("empty \"if\" condition at position {offset}")]
    EmptyIfCondition {
        /// Offset of the closing parenthesis.
        offset: usize,
    },
    /// A reserved symbol appeared where an identifier or integer was needed.
    #[error("not a proper symbol at position {offset}")]
    NotProperSymbol {
        /// Offset of the reserved symbol.
        offset: usize,
    },
    /// An identifier was required but the cursor is not on a letter.
    #[error("identifier expected at position {offset}")]
    IdentifierExpected {
        /// Offset of the offending character.
        offset: usize,
    },
    /// Neither a digit nor a letter was found where an operand was needed.
    #[error("number or identifier expected at position {offset}")]
    NumberOrIdentifierExpected {
        /// Offset after any sign characters that were read.
        offset: usize,
    },
    /// Input remained after the top-level statement list ended.
    #[error("extra symbol at position {offset}")]
    ExtraSymbol {
        /// Offset of the first unconsumed character.
        offset: usize,
    },
    /// The configured nesting limit was reached.
    #[error("nesting deeper than {limit} levels at position {offset}")]
    NestingTooDeep {
        /// The configured limit.
        limit:  usize,
        /// Offset at which the limit tripped.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the source offset (in characters) the error refers to.
    ///
    /// ## Example
    /// ```
    /// use quill::error::ParseError;
    ///
    /// let error = ParseError::ExtraSymbol { offset: 7 };
    /// assert_eq!(error.offset(), 7);
    /// assert_eq!(error.to_string(), "extra symbol at position 7");
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::ExpectedOneOf { offset, .. }
            | Self::EmptyIfCondition { offset }
            | Self::NotProperSymbol { offset }
            | Self::IdentifierExpected { offset }
            | Self::NumberOrIdentifierExpected { offset }
            | Self::ExtraSymbol { offset }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

fn quote_all(expected: &[&str]) -> String {
    expected.iter()
            .map(|literal| format!("\"{literal}\""))
            .collect::<Vec<_>>()
            .join(", ")
}
