use crate::{
    ast::{AdditiveOperator, BinaryOperator, ComparisonOperator, MultiplicativeOperator, Node},
    interpreter::parser::core::Parser,
};

impl Parser {
    /// Parses relational expressions.
    ///
    /// The rule is: `condition := plus_minus (("<" | ">") plus_minus)*`
    pub(in crate::interpreter::parser) fn parse_condition(&mut self) -> Node {
        self.parse_chain(Self::parse_plus_minus, |op: ComparisonOperator, left, right| {
                Node::Condition { op,
                                  left: Box::new(left),
                                  right: Box::new(right) }
            })
    }

    /// Parses addition and subtraction.
    ///
    /// The rule is: `plus_minus := multiply_division (("+" | "-")
    /// multiply_division)*`
    fn parse_plus_minus(&mut self) -> Node {
        self.parse_chain(Self::parse_multiply_division,
                         |op: AdditiveOperator, left, right| Node::PlusMinus { op,
                                                                             left: Box::new(left),
                                                                             right: Box::new(right) })
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `multiply_division := simple (("*" | "/") simple)*`
    fn parse_multiply_division(&mut self) -> Node {
        self.parse_chain(Self::parse_simple, |op: MultiplicativeOperator, left, right| {
                Node::MultiplyDivision { op,
                                         left: Box::new(left),
                                         right: Box::new(right) }
            })
    }

    /// Parses one precedence level: an operand followed by zero or more
    /// `(operator, operand)` pairs, folded to the left.
    ///
    /// `a - b - c` becomes `(a - b) - c`. A level with no operator returns its
    /// single operand unchanged.
    ///
    /// Every operator deepens the tree by one, so each one takes a nesting
    /// level until the chain ends. Once the limit is reached the right
    /// operand becomes a `PARSE_ERROR`.
    fn parse_chain<O: BinaryOperator>(&mut self,
                                      operand: fn(&mut Self) -> Node,
                                      combine: impl Fn(O, Node, Node) -> Node)
                                      -> Node {
        let mut left = operand(self);
        let mut levels = 0;

        while let Some(op) = self.scanner
                                 .try_match(O::SYMBOLS)
                                 .and_then(O::from_symbol)
        {
            let right = match self.descend() {
                Ok(()) => {
                    levels += 1;
                    operand(self)
                },
                Err(error) => Node::parse_error(error),
            };
            left = combine(op, left, right);
        }
        self.ascend(levels);

        left
    }
}
