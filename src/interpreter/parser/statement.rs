use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses a single statement and wraps it in `STATEMENT`.
    ///
    /// A statement may be one of:
    /// - an `if` statement, when the input starts with `if`.
    /// - an assignment, when the input starts with `@`.
    /// - a block, when the input starts with `{`.
    /// - an expression statement otherwise.
    ///
    /// Any expected-token mismatch inside the statement is recovered here: the
    /// statement becomes `STATEMENT` → `PARSE_ERROR` and parsing continues
    /// from wherever the cursor stopped.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Node {
        let inner = match self.nested(Self::parse_statement_body) {
            Ok(Ok(statement)) => statement,
            Ok(Err(error)) | Err(error) => {
                debug!(%error, "recovered from malformed statement");
                Node::parse_error(error)
            },
        };

        Node::statement(inner)
    }

    fn parse_statement_body(&mut self) -> ParseResult<Node> {
        if self.scanner.is_match(&["if"]) {
            self.parse_if()
        } else if self.scanner.is_match(&["@"]) {
            self.parse_assignment()
        } else if self.scanner.is_match(&["{"]) {
            self.parse_block()
        } else {
            self.parse_expression_statement()
        }
    }

    /// Parses `if (condition) statement`.
    ///
    /// An empty condition, `if ()`, is not a mismatch: the condition becomes a
    /// [`ParseError::EmptyIfCondition`] node and the consequent is still
    /// parsed.
    ///
    /// # Errors
    /// Returns a `ParseError` if `if`, `(` or `)` is missing.
    fn parse_if(&mut self) -> ParseResult<Node> {
        self.scanner.expect(&["if"])?;
        self.scanner.expect(&["("])?;

        let condition = if self.scanner.is_match(&[")"]) {
            Node::parse_error(ParseError::EmptyIfCondition { offset: self.scanner.position() })
        } else {
            self.parse_expression()
        };
        self.scanner.expect(&[")"])?;

        let consequent = self.parse_statement();

        Ok(Node::IfStatement { condition:  Box::new(condition),
                               consequent: Box::new(consequent), })
    }

    /// Parses `@identifier = expression;`.
    ///
    /// The target is parsed as a leaf, so a reserved word or a missing name
    /// ends up as a `PARSE_ERROR` target rather than a mismatch.
    ///
    /// # Errors
    /// Returns a `ParseError` if `@`, `=` or `;` is missing.
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        self.scanner.expect(&["@"])?;
        let target = self.parse_identifier();
        self.scanner.expect(&["="])?;
        let value = self.parse_expression();
        self.scanner.expect(&[";"])?;

        Ok(Node::AssignStatement { target: Box::new(target),
                                   value:  Box::new(value), })
    }

    /// Parses `expression;`.
    ///
    /// # Errors
    /// Returns a `ParseError` if the terminating `;` is missing.
    fn parse_expression_statement(&mut self) -> ParseResult<Node> {
        let expression = self.parse_expression();
        self.scanner.expect(&[";"])?;

        Ok(Node::ExpressionStatement { expression: Box::new(expression) })
    }
}
