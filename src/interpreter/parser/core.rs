use tracing::debug;

use crate::{ast::Node, error::ParseError, interpreter::scanner::Scanner};

/// Result type used by the rules that can fail part-way.
///
/// Such rules never escape the parser: their errors are converted into
/// `PARSE_ERROR` nodes at the statement or operand boundary.
pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over one source text.
///
/// The parser is total: [`Parser::parse`] always returns a `PROGRAM` node.
/// Malformed input shows up as `PARSE_ERROR` nodes inside the tree.
///
/// ## Usage
///
/// ```
/// use quill::{ast::NodeType, interpreter::parser::core::Parser};
///
/// let program = Parser::new("@x = 1; x + 1;").parse();
/// assert_eq!(program.node_type(), NodeType::Program);
/// assert!(!program.has_errors());
///
/// let nested = "(".repeat(64) + "1" + &")".repeat(64) + ";";
/// let limited = Parser::new(&nested).with_max_depth(16).parse();
/// assert!(limited.has_errors());
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    pub(in crate::interpreter::parser) scanner: Scanner,
    depth: usize,
    max_depth: Option<usize>,
}

impl Parser {
    /// Creates a parser with no nesting limit.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { scanner:   Scanner::new(source),
               depth:     0,
               max_depth: None, }
    }

    /// Limits how deeply statements and expressions may nest.
    ///
    /// Statements, expressions and every operator of a binary chain each
    /// count as one level. A rule entered past the limit yields a
    /// [`ParseError::NestingTooDeep`] node without consuming input, so the
    /// depth of the resulting tree is bounded by the limit.
    #[must_use]
    pub const fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Parses the whole source text into a `PROGRAM` node.
    ///
    /// Grammar: `program := statement_list`
    ///
    /// Leading whitespace is skipped. If the top-level statement list stops
    /// before the end of input (on a stray `}`), a
    /// [`ParseError::ExtraSymbol`] node is appended to that list.
    #[must_use]
    pub fn parse(mut self) -> Node {
        self.scanner.skip_whitespace();

        let mut statements = self.parse_statement_list();
        if !self.scanner.is_end() {
            let offset = self.scanner.position();
            debug!(offset, "unconsumed input after the last statement");
            statements.push(Node::parse_error(ParseError::ExtraSymbol { offset }));
        }

        Node::program(statements)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level and wraps the result in `EXPRESSION`.
    ///
    /// Grammar: `expression := condition`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> Node {
        self.nested(|parser| Node::expression(parser.parse_condition()))
            .unwrap_or_else(Node::parse_error)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] without running `rule` when the
    /// configured limit has been reached.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> T)
                                                    -> ParseResult<T> {
        self.descend()?;
        let result = rule(self);
        self.ascend(1);

        Ok(result)
    }

    /// Enters one nesting level.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`], leaving the depth unchanged,
    /// when the configured limit has been reached.
    pub(in crate::interpreter::parser) fn descend(&mut self) -> ParseResult<()> {
        if let Some(limit) = self.max_depth
           && self.depth >= limit
        {
            let offset = self.scanner.position();
            debug!(limit, offset, "nesting limit reached");
            return Err(ParseError::NestingTooDeep { limit, offset });
        }

        self.depth += 1;
        Ok(())
    }

    /// Leaves `levels` nesting levels entered with [`Parser::descend`].
    pub(in crate::interpreter::parser) const fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }
}
