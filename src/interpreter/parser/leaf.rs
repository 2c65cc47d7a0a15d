use crate::{
    ast::Node,
    error::ParseError,
    interpreter::parser::core::{ParseResult, Parser},
};

/// Literals that may never start an identifier or an integer.
///
/// The check is by prefix, so `iffy` is rejected just like `if`. `+`, `-`,
/// `@`, `=` and `;` are not reserved.
pub const RESERVED: &[&str] = &["if", "(", ")", "{", "}", "<", ">", "*", "/"];

impl Parser {
    /// Parses an operand and wraps it in `SIMPLE_EXPRESSION`.
    ///
    /// Grammar: `simple := "(" expression ")" | identifier | integer`
    ///
    /// The alternative is chosen from the character under the cursor: `(`
    /// starts a parenthesised expression, a letter an identifier, and
    /// anything else an integer. A parenthesised expression with a missing
    /// `)` becomes a bare `PARSE_ERROR` in place of the whole operand.
    pub(in crate::interpreter::parser) fn parse_simple(&mut self) -> Node {
        let inner = if self.scanner.is_match(&["("]) {
            match self.parse_parenthesized() {
                Ok(expression) => expression,
                Err(error) => return Node::parse_error(error),
            }
        } else if self.scanner.current().is_ascii_alphabetic() {
            self.parse_identifier()
        } else {
            self.parse_integer()
        };

        Node::simple(inner)
    }

    fn parse_parenthesized(&mut self) -> ParseResult<Node> {
        self.scanner.expect(&["("])?;
        let expression = self.parse_expression();
        self.scanner.expect(&[")"])?;

        Ok(expression)
    }

    /// Parses an identifier: an ASCII letter followed by letters and digits.
    ///
    /// Returns a `PARSE_ERROR` leaf, consuming nothing, if the cursor is on a
    /// reserved literal or not on a letter.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> Node {
        let offset = self.scanner.position();
        if self.scanner.is_match(RESERVED) {
            return Node::parse_error(ParseError::NotProperSymbol { offset });
        }
        if !self.scanner.current().is_ascii_alphabetic() {
            return Node::parse_error(ParseError::IdentifierExpected { offset });
        }

        let mut name = String::new();
        while self.scanner.current().is_ascii_alphanumeric() {
            name.push(self.scanner.current());
            self.scanner.advance();
        }
        self.scanner.skip_whitespace();

        Node::Identifier { name }
    }

    /// Parses an integer literal.
    ///
    /// Any run of `+` and `-` may precede the digits; `+` is dropped and `-`
    /// is kept, then the literal is passed through [`normalize_sign`]. Signs
    /// and digits must be adjacent.
    ///
    /// Returns a `PARSE_ERROR` leaf if the cursor is on a reserved literal or
    /// no digit follows the signs. Signs that were read stay consumed.
    fn parse_integer(&mut self) -> Node {
        if self.scanner.is_match(RESERVED) {
            let offset = self.scanner.position();
            return Node::parse_error(ParseError::NotProperSymbol { offset });
        }

        let mut literal = String::new();
        let mut has_digits = false;
        loop {
            match self.scanner.current() {
                digit @ '0'..='9' => {
                    literal.push(digit);
                    has_digits = true;
                },
                '-' if !has_digits => literal.push('-'),
                '+' if !has_digits => {},
                _ => break,
            }
            self.scanner.advance();
        }

        if !has_digits {
            let offset = self.scanner.position();
            return Node::parse_error(ParseError::NumberOrIdentifierExpected { offset });
        }
        self.scanner.skip_whitespace();

        Node::Integer { literal: normalize_sign(&literal).to_string() }
    }
}

/// Removes leading `--` pairs from an integer literal.
///
/// Double negation cancels at the lexical level, so at most one `-` remains.
///
/// ## Example
/// ```
/// use quill::interpreter::parser::leaf::normalize_sign;
///
/// assert_eq!(normalize_sign("--5"), "5");
/// assert_eq!(normalize_sign("---5"), "-5");
/// assert_eq!(normalize_sign("-5"), "-5");
/// ```
#[must_use]
pub fn normalize_sign(literal: &str) -> &str {
    let mut rest = literal;
    while let Some(stripped) = rest.strip_prefix("--") {
        rest = stripped;
    }
    rest
}
