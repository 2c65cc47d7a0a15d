use tracing::trace;

use crate::{
    ast::Node,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses statements until a `}` or the end of input.
    ///
    /// The closing brace is not consumed. If a statement leaves the cursor
    /// where it was, one character is skipped (plus any whitespace after it)
    /// before the next attempt, so every iteration makes progress.
    ///
    /// Grammar: `statement_list := statement*`
    pub(in crate::interpreter::parser) fn parse_statement_list(&mut self) -> Vec<Node> {
        let mut statements = Vec::new();

        while !self.scanner.is_end() && !self.scanner.is_match(&["}"]) {
            let start = self.scanner.position();
            statements.push(self.parse_statement());

            if self.scanner.position() == start {
                trace!(offset = start, "statement made no progress, skipping a character");
                self.scanner.advance();
                self.scanner.skip_whitespace();
            }
        }

        statements
    }

    /// Parses a block statement delimited by braces.
    ///
    /// Grammar: `block := "{" statement_list "}"`
    ///
    /// # Errors
    /// Returns a `ParseError` if either brace is missing. The statements
    /// parsed so far are dropped with the block.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Node> {
        self.scanner.expect(&["{"])?;
        let statements = self.parse_statement_list();
        self.scanner.expect(&["}"])?;

        Ok(Node::block(statements))
    }
}
