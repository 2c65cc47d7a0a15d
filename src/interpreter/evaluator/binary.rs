use crate::{
    ast::{AdditiveOperator, BinaryOperator, ComparisonOperator, MultiplicativeOperator, Node},
    error::ArithmeticFault,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::checked,
};

/// One operator application on the left spine of a chain.
enum Step<'ast> {
    Comparison(ComparisonOperator, &'ast Node),
    Additive(AdditiveOperator, &'ast Node),
    Multiplicative(MultiplicativeOperator, &'ast Node),
}

impl Context {
    /// Evaluates a binary expression together with every binary expression
    /// on its left spine.
    ///
    /// `1 + 2 + 3` is stored as `(1 + 2) + 3`, so a long chain is as deep as
    /// it is long. The spine is walked with a loop: the leftmost operand is
    /// evaluated first, then each right operand in source order.
    pub(in crate::interpreter::evaluator) fn eval_chain(&mut self,
                                                        node: &Node)
                                                        -> EvalResult<i64> {
        let mut steps = Vec::new();
        let mut leftmost = node;
        loop {
            let (step, left) = match leftmost {
                Node::Condition { op, left, right } => (Step::Comparison(*op, &**right), left),
                Node::PlusMinus { op, left, right } => (Step::Additive(*op, &**right), left),
                Node::MultiplyDivision { op, left, right } => {
                    (Step::Multiplicative(*op, &**right), left)
                },
                _ => break,
            };
            steps.push(step);
            leftmost = &**left;
        }

        let mut value = self.eval(leftmost)?;
        for step in steps.into_iter().rev() {
            value = match step {
                Step::Comparison(op, right) => Self::eval_comparison(op, value, self.eval(right)?),
                Step::Additive(op, right) => Self::eval_additive(op, value, self.eval(right)?)?,
                Step::Multiplicative(op, right) => {
                    Self::eval_multiplicative(op, value, self.eval(right)?)?
                },
            };
        }

        Ok(value)
    }

    /// Evaluates a relational operator, yielding 1 for true and 0 for false.
    ///
    /// ## Example
    /// ```
    /// use quill::{ast::ComparisonOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_comparison(ComparisonOperator::Less, 1, 2), 1);
    /// assert_eq!(Context::eval_comparison(ComparisonOperator::Greater, 1, 2), 0);
    /// ```
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: i64, right: i64) -> i64 {
        let holds = match op {
            ComparisonOperator::Less => left < right,
            ComparisonOperator::Greater => left > right,
        };
        i64::from(holds)
    }

    /// Evaluates addition or subtraction.
    ///
    /// # Errors
    /// Returns [`ArithmeticFault::Overflow`] if the result does not fit.
    pub fn eval_additive(op: AdditiveOperator, left: i64, right: i64) -> EvalResult<i64> {
        let result = match op {
            AdditiveOperator::Add => left.checked_add(right),
            AdditiveOperator::Sub => left.checked_sub(right),
        };
        checked(result, op.symbol())
    }

    /// Evaluates multiplication or division.
    ///
    /// Division truncates toward zero.
    ///
    /// # Errors
    /// Returns [`ArithmeticFault::DivisionByZero`] for a zero divisor and
    /// [`ArithmeticFault::Overflow`] if the result does not fit.
    ///
    /// ## Example
    /// ```
    /// use quill::{ast::MultiplicativeOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_multiplicative(MultiplicativeOperator::Div, -7, 2).unwrap(), -3);
    /// assert!(Context::eval_multiplicative(MultiplicativeOperator::Div, 1, 0).is_err());
    /// ```
    pub fn eval_multiplicative(op: MultiplicativeOperator,
                               left: i64,
                               right: i64)
                               -> EvalResult<i64> {
        let result = match op {
            MultiplicativeOperator::Mul => left.checked_mul(right),
            MultiplicativeOperator::Div => {
                if right == 0 {
                    return Err(ArithmeticFault::DivisionByZero.into());
                }
                left.checked_div(right)
            },
        };
        checked(result, op.symbol())
    }
}
