use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{ast::Node, error::RuntimeError, util::num::parse_literal};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one interpreter run.
///
/// This struct holds the variable table and the output list. Both are global
/// to the program: blocks and `if` statements do not open new scopes.
///
/// A `Context` is not reset between programs. Use a fresh one (or, better,
/// [`Interpreter`]) for every run.
#[derive(Debug, Default)]
pub struct Context {
    /// A mapping from variable names to their current values.
    pub variables: HashMap<String, i64>,
    /// Values emitted by expression statements, in execution order.
    pub output:    Vec<i64>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a node and returns its integer value.
    ///
    /// This is the main entry point for evaluation. Wrapper nodes evaluate
    /// their single child; statement lists evaluate every child in order;
    /// expression statements append their value to [`Context::output`].
    /// Nodes whose value has no meaning (statement lists, untaken `if`
    /// statements) yield 0.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    ///
    /// # Returns
    /// The value of the node.
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::evaluator::core::Context, parse};
    ///
    /// let mut context = Context::new();
    /// context.eval(&parse("@x = 6; x * 7;")).unwrap();
    ///
    /// assert_eq!(context.variables["x"], 6);
    /// assert_eq!(context.output, vec![42]);
    /// ```
    pub fn eval(&mut self, node: &Node) -> EvalResult<i64> {
        match node {
            Node::Program { body } | Node::BlockStatement { body } => self.eval(body),
            Node::StatementList { statements } => {
                for statement in statements {
                    self.eval(statement)?;
                }
                Ok(0)
            },
            Node::Statement { inner }
            | Node::Expression { inner }
            | Node::SimpleExpression { inner } => self.eval(inner),
            Node::ExpressionStatement { expression } => {
                let value = self.eval(expression)?;
                trace!(value, "emitting value");
                self.output.push(value);
                Ok(value)
            },
            Node::IfStatement { condition,
                                consequent, } => {
                if self.eval(condition)? == 0 {
                    return Ok(0);
                }
                self.eval(consequent)
            },
            Node::AssignStatement { target, value } => self.eval_assignment(target, value),
            Node::Condition { .. } | Node::PlusMinus { .. } | Node::MultiplyDivision { .. } => {
                self.eval_chain(node)
            },
            Node::Identifier { name } => self.eval_variable(name),
            Node::Integer { literal } => Ok(parse_literal(literal)?),
            Node::ParseError { error } => Err(RuntimeError::Syntax { message: error.to_string() }),
            Node::Unknown => Err(RuntimeError::MalformedTree { node: node.node_type() }),
        }
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndeclaredIdentifier`] if the variable was
    /// never assigned.
    pub fn eval_variable(&self, name: &str) -> EvalResult<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndeclaredIdentifier { name: name.to_owned() })
    }

    /// Evaluates `value` and stores it under the name held by `target`,
    /// replacing any previous value.
    ///
    /// The value is evaluated before the target is inspected, so errors in
    /// the right-hand side are reported first. A `PARSE_ERROR` target is
    /// reported as a syntax failure.
    fn eval_assignment(&mut self, target: &Node, value: &Node) -> EvalResult<i64> {
        let value = self.eval(value)?;

        match target {
            Node::Identifier { name } => {
                trace!(name = name.as_str(), value, "assigning variable");
                self.variables.insert(name.clone(), value);
                Ok(value)
            },
            Node::ParseError { error } => Err(RuntimeError::Syntax { message: error.to_string() }),
            other => Err(RuntimeError::MalformedTree { node: other.node_type() }),
        }
    }
}

/// The outcome of a run that keeps partial output.
///
/// Returned by [`Interpreter::execute_partial`]. `output` holds every value
/// emitted before the run stopped, whether or not it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Values emitted before the run finished or failed.
    pub output: Vec<i64>,
    /// The failure that stopped the run, if any.
    pub error:  Option<RuntimeError>,
}

impl Execution {
    /// Returns `true` if the run completed without a failure.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Collapses the outcome to the discard-on-failure contract.
    ///
    /// # Errors
    /// Returns the failure, dropping the partial output, if the run failed.
    pub fn into_result(self) -> EvalResult<Vec<i64>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.output),
        }
    }
}

/// A single-use interpreter for one parsed program.
///
/// Executing consumes the interpreter, so its variable table and output can
/// never leak into another run.
///
/// ## Usage
///
/// ```
/// use quill::{interpreter::evaluator::core::Interpreter, parse};
///
/// let program = parse("1; 2; 3/0; 4;");
///
/// let partial = Interpreter::new(&program).unwrap().execute_partial();
/// assert_eq!(partial.output, vec![1, 2]);
/// assert!(partial.error.is_some());
///
/// assert!(Interpreter::new(&program).unwrap().execute().is_err());
/// ```
#[derive(Debug)]
pub struct Interpreter<'ast> {
    program: &'ast Node,
    context: Context,
}

impl<'ast> Interpreter<'ast> {
    /// Prepares a run of `program`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MalformedTree`] if `program` is not a
    /// `PROGRAM` node.
    pub fn new(program: &'ast Node) -> EvalResult<Self> {
        if !matches!(program, Node::Program { .. }) {
            return Err(RuntimeError::MalformedTree { node: program.node_type() });
        }

        Ok(Self { program,
                  context: Context::new() })
    }

    /// Runs the program and returns its output.
    ///
    /// # Errors
    /// Returns the first runtime failure; output produced before it is
    /// discarded.
    pub fn execute(self) -> EvalResult<Vec<i64>> {
        self.execute_partial().into_result()
    }

    /// Runs the program, keeping the output produced before any failure.
    #[must_use]
    pub fn execute_partial(mut self) -> Execution {
        debug!("starting run");

        let error = self.context.eval(self.program).err();
        match &error {
            Some(error) => {
                debug!(%error, emitted = self.context.output.len(), "run aborted");
            },
            None => debug!(emitted = self.context.output.len(), "run finished"),
        }

        Execution { output: self.context.output,
                    error }
    }
}
