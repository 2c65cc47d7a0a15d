use quill::{
    ast::Node,
    error::{ArithmeticFault, FailureKind, RuntimeError},
    execute, execute_partial,
    interpreter::{
        evaluator::core::{Context, Interpreter},
        parser::core::Parser,
    },
    parse, run,
};
use rstest::rstest;

#[rstest]
#[case("1 + 2;", 3)]
#[case("2 * 3 + 4;", 10)]
#[case("2 * (3 + 4);", 14)]
#[case("10 - 4 - 3;", 3)]
#[case("100 / 10 / 5;", 2)]
#[case("7 / 2;", 3)]
#[case("-7 / 2;", -3)]
#[case("7 / -2;", -3)]
#[case("3 < 4;", 1)]
#[case("4 < 3;", 0)]
#[case("1 + 1 > 1;", 1)]
#[case("1 < 2 < 3;", 1)]
#[case("3 > 2 > 1;", 0)]
#[case("0 - 5 * 2;", -10)]
#[case("--3;", 3)]
#[case("9223372036854775807;", i64::MAX)]
#[case("-9223372036854775808;", i64::MIN)]
fn evaluates_expressions(#[case] src: &str, #[case] expected: i64) {
    assert_eq!(run(src).unwrap(), vec![expected], "for {src:?}");
}

#[rstest]
#[case("1 / 0;", ArithmeticFault::DivisionByZero)]
#[case("9223372036854775807 + 1;", ArithmeticFault::Overflow { operator: "+" })]
#[case("-9223372036854775808 - 1;", ArithmeticFault::Overflow { operator: "-" })]
#[case("9223372036854775807 * 2;", ArithmeticFault::Overflow { operator: "*" })]
#[case("-9223372036854775808 / -1;", ArithmeticFault::Overflow { operator: "/" })]
#[case("99999999999999999999;",
       ArithmeticFault::LiteralOutOfRange { literal: "99999999999999999999".into() })]
fn reports_arithmetic_faults(#[case] src: &str, #[case] fault: ArithmeticFault) {
    assert_eq!(run(src), Err(RuntimeError::Arithmetic(fault)));
}

#[test]
fn expression_statements_print_in_order() {
    assert_eq!(run("3; 1; 2;").unwrap(), vec![3, 1, 2]);
}

#[test]
fn assignment_value_is_evaluated_before_the_target() {
    let error = run("@ = missing;").unwrap_err();
    assert_eq!(error,
               RuntimeError::UndeclaredIdentifier { name: "missing".into() });

    let error = run("@ = 1;").unwrap_err();
    assert_eq!(error,
               RuntimeError::Syntax { message: "identifier expected at position 1".into() });
}

#[test]
fn undeclared_identifier_names_the_variable() {
    let error = run("@a = 1; a + b;").unwrap_err();
    assert_eq!(error.to_string(), "undeclared identifier 'b'");
    assert_eq!(error.kind(), FailureKind::UndeclaredIdentifier);
}

#[test]
fn syntax_error_carries_the_diagnostic() {
    let error = run("1 +;").unwrap_err();
    assert_eq!(error,
               RuntimeError::Syntax { message: "number or identifier expected at position 3".into() });
}

#[test]
fn syntax_error_after_output_still_fails() {
    let execution = execute_partial(&parse("1; 2; 3 +;"));
    assert_eq!(execution.output, vec![1, 2]);
    assert_eq!(execution.error.map(|e| e.kind()), Some(FailureKind::SyntaxFailure));
}

#[test]
fn syntax_error_in_untaken_branch_is_never_reached() {
    assert_eq!(run("if (0) 1 +; 5;").unwrap(), vec![5]);
}

#[test]
fn empty_if_condition_fails_when_executed() {
    let error = run("if () { 1; }").unwrap_err();
    assert_eq!(error.kind(), FailureKind::SyntaxFailure);
    assert!(error.to_string().contains("empty \"if\" condition"));
}

#[test]
fn partial_execution_keeps_output_before_the_failure() {
    let program = parse("1; 2; 99 / 0; 4;");

    let execution = execute_partial(&program);
    assert!(!execution.is_success());
    assert_eq!(execution.output, vec![1, 2]);
    assert_eq!(execution.error,
               Some(RuntimeError::Arithmetic(ArithmeticFault::DivisionByZero)));

    assert!(execute(&program).is_err());
}

#[test]
fn successful_partial_execution_matches_execute() {
    let program = parse("@x = 2; x * x; x + x;");
    let execution = execute_partial(&program);

    assert!(execution.is_success());
    assert_eq!(execution.clone().into_result(), execute(&program));
    assert_eq!(execution.output, vec![4, 4]);
}

#[test]
fn each_run_starts_with_fresh_state() {
    let first = parse("@x = 1;");
    let second = parse("x;");

    assert_eq!(execute(&first).unwrap(), Vec::<i64>::new());
    assert_eq!(execute(&second).unwrap_err().kind(),
               FailureKind::UndeclaredIdentifier);
}

#[test]
fn context_keeps_variables_across_evaluations() {
    let mut context = Context::new();
    context.eval(&parse("@x = 6;")).unwrap();
    context.eval(&parse("x * 7;")).unwrap();

    assert_eq!(context.variables.get("x"), Some(&6));
    assert_eq!(context.output, vec![42]);
}

#[test]
fn untaken_if_and_statement_lists_evaluate_to_zero() {
    let mut context = Context::new();
    assert_eq!(context.eval(&parse("if (0) 1;")).unwrap(), 0);
    assert_eq!(context.eval(&parse("5; 6;")).unwrap(), 0);
    assert_eq!(context.output, vec![5, 6]);
}

#[test]
fn expression_statement_and_assignment_yield_their_value() {
    let mut context = Context::new();
    let assignment = Node::AssignStatement { target: Box::new(Node::Identifier { name: "v".into() }),
                                             value:  Box::new(Node::Integer { literal: "3".into() }), };
    assert_eq!(context.eval(&assignment).unwrap(), 3);

    let print = Node::ExpressionStatement { expression: Box::new(Node::Identifier { name: "v".into() }) };
    assert_eq!(context.eval(&print).unwrap(), 3);
    assert_eq!(context.output, vec![3]);
}

#[test]
fn interpreter_rejects_a_non_program_root() {
    let node = Node::Integer { literal: "1".into() };
    let error = Interpreter::new(&node).unwrap_err();
    assert_eq!(error.kind(), FailureKind::MalformedTree);
    assert_eq!(execute(&node).unwrap_err(), error);
    assert_eq!(execute_partial(&node).error, Some(error));
}

#[test]
fn unknown_node_is_a_malformed_tree() {
    let program = Node::program(vec![Node::statement(Node::Unknown)]);
    let error = execute(&program).unwrap_err();
    assert_eq!(error.kind(), FailureKind::MalformedTree);
    assert_eq!(error.to_string(), "malformed tree: no evaluation rule for UNKNOWN here");
}

#[test]
fn non_identifier_assignment_target_is_a_malformed_tree() {
    let program = Node::program(vec![Node::AssignStatement {
                                    target: Box::new(Node::Integer { literal: "1".into() }),
                                    value:  Box::new(Node::Integer { literal: "2".into() }),
                                }]);
    assert_eq!(execute(&program).unwrap_err().kind(), FailureKind::MalformedTree);
}

#[test]
fn failure_kinds_have_stable_names() {
    let names: Vec<_> = [FailureKind::UndeclaredIdentifier,
                         FailureKind::ArithmeticFailure,
                         FailureKind::SyntaxFailure,
                         FailureKind::MalformedTree].iter()
                                                    .map(ToString::to_string)
                                                    .collect();
    assert_eq!(names,
               ["undeclared-identifier", "arithmetic-failure", "syntax-failure", "malformed-tree"]);
}

fn tree_depth(program: &Node) -> usize {
    program.tree()
           .to_string()
           .lines()
           .map(|line| (line.len() - line.trim_start().len()) / 2)
           .max()
           .unwrap_or(0)
}

#[test]
fn long_chain_under_a_nesting_limit_stays_shallow() {
    let src = "1+".repeat(50_000) + "1;";
    let program = Parser::new(&src).with_max_depth(16).parse();

    assert!(program.has_errors());
    assert!(tree_depth(&program) < 64, "tree is {} levels deep", tree_depth(&program));
    assert_eq!(execute(&program).unwrap_err().kind(), FailureKind::SyntaxFailure);
}

#[test]
fn long_chain_without_a_limit_evaluates() {
    let terms = 4_000;
    let src = "1+".repeat(terms - 1) + "1;";
    assert_eq!(run(&src).unwrap(), vec![4_000]);

    let src = "2*".repeat(40) + "1 / 1" + &" - 1".repeat(terms) + ";";
    assert_eq!(run(&src).unwrap(), vec![(1i64 << 40) - 4_000]);
}

#[test]
fn chain_operands_are_evaluated_left_to_right() {
    let error = run("a + b;").unwrap_err();
    assert_eq!(error, RuntimeError::UndeclaredIdentifier { name: "a".into() });

    let execution = execute_partial(&parse("1; 1 - 2 > 3 + 4 * x;"));
    assert_eq!(execution.output, vec![1]);
    assert_eq!(execution.error,
               Some(RuntimeError::UndeclaredIdentifier { name: "x".into() }));
}
