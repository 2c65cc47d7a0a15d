use std::{borrow::Cow, fmt};

use crate::error::ParseError;

/// The closed set of node categories.
///
/// Every [`Node`] variant maps onto exactly one `NodeType`. Generic tree
/// consumers (the structural-change heuristic, the tree printer) work in terms
/// of node types rather than variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Root of every parse.
    Program,
    /// An ordered run of statements.
    StatementList,
    /// Wrapper around a single statement (or its parse error).
    Statement,
    /// `if (condition) statement`
    IfStatement,
    /// `@name = value;`
    AssignStatement,
    /// `{ statements }`
    BlockStatement,
    /// `expression;`, the language's print.
    ExpressionStatement,
    /// Wrapper around a full expression.
    Expression,
    /// `<` or `>`
    ConditionExpression,
    /// `+` or `-`
    PlusMinusExpression,
    /// `*` or `/`
    MultiplyDivisionExpression,
    /// Wrapper around an identifier, integer or parenthesised expression.
    SimpleExpression,
    /// A variable name.
    Identifier,
    /// An integer literal.
    Integer,
    /// A syntax error embedded in the tree.
    ParseError,
    /// A node with no meaning; never produced by the parser.
    Unknown,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Program => "PROGRAM",
            Self::StatementList => "STATEMENT_LIST",
            Self::Statement => "STATEMENT",
            Self::IfStatement => "IF_STATEMENT",
            Self::AssignStatement => "ASSIGN_STATEMENT",
            Self::BlockStatement => "BLOCK_STATEMENT",
            Self::ExpressionStatement => "EXPRESSION_STATEMENT",
            Self::Expression => "EXPRESSION",
            Self::ConditionExpression => "CONDITION_EXPRESSION",
            Self::PlusMinusExpression => "PLUS_MINUS_EXPRESSION",
            Self::MultiplyDivisionExpression => "MULTIPLY_DIVISION_EXPRESSION",
            Self::SimpleExpression => "SIMPLE_EXPRESSION",
            Self::Identifier => "IDENTIFIER",
            Self::Integer => "INTEGER",
            Self::ParseError => "PARSE_ERROR",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// Operators of one precedence level.
///
/// Each level of the expression grammar has its own operator enum so that a
/// node can never carry an operator belonging to another level. The parser
/// uses [`BinaryOperator::SYMBOLS`] as the candidate list when matching.
pub trait BinaryOperator: Copy + fmt::Display + Sized {
    /// Source symbols of this level, in match order.
    const SYMBOLS: &'static [&'static str];

    /// Maps a matched symbol back to the operator.
    fn from_symbol(symbol: &str) -> Option<Self>;

    /// The source symbol of the operator.
    fn symbol(self) -> &'static str;
}

/// Relational operators (`<`, `>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

/// Additive operators (`+`, `-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditiveOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// Multiplicative operators (`*`, `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiplicativeOperator {
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
}

impl BinaryOperator for ComparisonOperator {
    const SYMBOLS: &'static [&'static str] = &["<", ">"];

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
        }
    }
}

impl BinaryOperator for AdditiveOperator {
    const SYMBOLS: &'static [&'static str] = &["+", "-"];

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

impl BinaryOperator for MultiplicativeOperator {
    const SYMBOLS: &'static [&'static str] = &["*", "/"];

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for AdditiveOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for MultiplicativeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree node.
///
/// Each variant embeds exactly the children and payload it can legally have.
/// Nodes own their children; trees are built bottom-up by the parser and are
/// never mutated afterwards.
///
/// Malformed input does not abort parsing: the offending part of the tree is
/// replaced by [`Node::ParseError`], which the interpreter reports when (and
/// only if) evaluation reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Root node. `body` is always a [`Node::StatementList`].
    Program {
        /// The top-level statement list.
        body: Box<Self>,
    },
    /// An ordered run of statements.
    StatementList {
        /// The statements, in source order.
        statements: Vec<Self>,
    },
    /// Wrapper around one statement or the error it failed with.
    Statement {
        /// The statement proper.
        inner: Box<Self>,
    },
    /// Conditional statement without an `else`.
    IfStatement {
        /// The condition expression.
        condition:  Box<Self>,
        /// The statement executed when the condition is nonzero.
        consequent: Box<Self>,
    },
    /// Assignment `@target = value;`.
    AssignStatement {
        /// The assigned [`Node::Identifier`] (or the error parsing it).
        target: Box<Self>,
        /// The value expression.
        value:  Box<Self>,
    },
    /// Braced block. `body` is always a [`Node::StatementList`].
    BlockStatement {
        /// The statements inside the braces.
        body: Box<Self>,
    },
    /// An expression whose value is appended to the program output.
    ExpressionStatement {
        /// The printed expression.
        expression: Box<Self>,
    },
    /// Wrapper around a full expression.
    Expression {
        /// The expression proper.
        inner: Box<Self>,
    },
    /// Relational comparison yielding 1 or 0.
    Condition {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Addition or subtraction.
    PlusMinus {
        /// The operator.
        op:    AdditiveOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Multiplication or division.
    MultiplyDivision {
        /// The operator.
        op:    MultiplicativeOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Wrapper around an operand.
    SimpleExpression {
        /// The identifier, integer or parenthesised expression.
        inner: Box<Self>,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// Integer literal, already sign-normalized.
    Integer {
        /// The literal text, e.g. `-5`.
        literal: String,
    },
    /// A syntax error in place of the construct that failed to parse.
    ParseError {
        /// What went wrong, and where.
        error: ParseError,
    },
    /// A node with no evaluation rule.
    Unknown,
}

impl Node {
    /// Builds a `PROGRAM` node around a statement list.
    #[must_use]
    pub fn program(statements: Vec<Self>) -> Self {
        Self::Program { body: Box::new(Self::StatementList { statements }) }
    }

    /// Builds a `BLOCK_STATEMENT` node around a statement list.
    #[must_use]
    pub fn block(statements: Vec<Self>) -> Self {
        Self::BlockStatement { body: Box::new(Self::StatementList { statements }) }
    }

    /// Wraps a statement (or the error it failed with) in `STATEMENT`.
    #[must_use]
    pub fn statement(inner: Self) -> Self {
        Self::Statement { inner: Box::new(inner) }
    }

    /// Wraps a condition-level expression in `EXPRESSION`.
    #[must_use]
    pub fn expression(inner: Self) -> Self {
        Self::Expression { inner: Box::new(inner) }
    }

    /// Wraps an operand in `SIMPLE_EXPRESSION`.
    #[must_use]
    pub fn simple(inner: Self) -> Self {
        Self::SimpleExpression { inner: Box::new(inner) }
    }

    /// Builds a `PARSE_ERROR` node.
    #[must_use]
    pub const fn parse_error(error: ParseError) -> Self {
        Self::ParseError { error }
    }

    /// Gets the node type of `self`.
    ///
    /// ## Example
    /// ```
    /// use quill::ast::{Node, NodeType};
    ///
    /// let node = Node::Identifier { name: "x".to_string() };
    /// assert_eq!(node.node_type(), NodeType::Identifier);
    /// ```
    #[must_use]
    pub const fn node_type(&self) -> NodeType {
        match self {
            Self::Program { .. } => NodeType::Program,
            Self::StatementList { .. } => NodeType::StatementList,
            Self::Statement { .. } => NodeType::Statement,
            Self::IfStatement { .. } => NodeType::IfStatement,
            Self::AssignStatement { .. } => NodeType::AssignStatement,
            Self::BlockStatement { .. } => NodeType::BlockStatement,
            Self::ExpressionStatement { .. } => NodeType::ExpressionStatement,
            Self::Expression { .. } => NodeType::Expression,
            Self::Condition { .. } => NodeType::ConditionExpression,
            Self::PlusMinus { .. } => NodeType::PlusMinusExpression,
            Self::MultiplyDivision { .. } => NodeType::MultiplyDivisionExpression,
            Self::SimpleExpression { .. } => NodeType::SimpleExpression,
            Self::Identifier { .. } => NodeType::Identifier,
            Self::Integer { .. } => NodeType::Integer,
            Self::ParseError { .. } => NodeType::ParseError,
            Self::Unknown => NodeType::Unknown,
        }
    }

    /// The text payload: literal, identifier name, operator symbol or
    /// diagnostic. `None` for structural nodes.
    #[must_use]
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Identifier { name } => Some(Cow::Borrowed(name)),
            Self::Integer { literal } => Some(Cow::Borrowed(literal)),
            Self::Condition { op, .. } => Some(Cow::Borrowed(op.symbol())),
            Self::PlusMinus { op, .. } => Some(Cow::Borrowed(op.symbol())),
            Self::MultiplyDivision { op, .. } => Some(Cow::Borrowed(op.symbol())),
            Self::ParseError { error } => Some(Cow::Owned(error.to_string())),
            _ => None,
        }
    }

    /// The children of `self`, in order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Program { body } | Self::BlockStatement { body } => vec![&**body],
            Self::StatementList { statements } => statements.iter().collect(),
            Self::Statement { inner }
            | Self::Expression { inner }
            | Self::SimpleExpression { inner } => vec![&**inner],
            Self::ExpressionStatement { expression } => vec![&**expression],
            Self::IfStatement { condition,
                                consequent, } => vec![&**condition, &**consequent],
            Self::AssignStatement { target, value } => vec![&**target, &**value],
            Self::Condition { left, right, .. }
            | Self::PlusMinus { left, right, .. }
            | Self::MultiplyDivision { left, right, .. } => vec![&**left, &**right],
            Self::Identifier { .. }
            | Self::Integer { .. }
            | Self::ParseError { .. }
            | Self::Unknown => Vec::new(),
        }
    }

    /// Iterates over every node below `self` in pre-order, excluding `self`.
    ///
    /// The walk is iterative, so arbitrarily deep trees do not grow the call
    /// stack.
    ///
    /// ## Example
    /// ```
    /// use quill::{ast::NodeType, parse};
    ///
    /// let program = parse("1;");
    /// let types: Vec<_> = program.descendants().map(|n| n.node_type()).collect();
    /// assert_eq!(types[0], NodeType::StatementList);
    /// assert_eq!(*types.last().unwrap(), NodeType::Integer);
    /// ```
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = self.children();
        stack.reverse();
        Descendants { stack }
    }

    /// Returns `true` if `self` or any descendant is a `PARSE_ERROR`.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        matches!(self, Self::ParseError { .. })
        || self.descendants()
               .any(|node| matches!(node, Self::ParseError { .. }))
    }

    /// Renders `self` as an indented tree, one node per line.
    #[must_use]
    pub const fn tree(&self) -> TreeDisplay<'_> {
        TreeDisplay { root: self }
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

/// Indented rendering returned by [`Node::tree`].
///
/// Each line holds the node type, followed by the text payload in quotes when
/// there is one. Children are indented two spaces deeper than their parent.
pub struct TreeDisplay<'a> {
    root: &'a Node,
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            write!(f, "{:indent$}{}", "", node.node_type(), indent = depth * 2)?;
            if let Some(text) = node.text() {
                write!(f, " \"{text}\"")?;
            }
            writeln!(f)?;
            stack.extend(node.children().into_iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}
