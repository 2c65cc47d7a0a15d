use quill::{
    error::ParseError,
    interpreter::scanner::{END, Scanner},
};

#[test]
fn current_is_end_sentinel_past_the_input() {
    let mut scanner = Scanner::new("a");
    assert_eq!(scanner.current(), 'a');
    assert!(!scanner.is_end());

    scanner.advance();
    assert_eq!(scanner.current(), END);
    assert!(scanner.is_end());

    scanner.advance();
    assert_eq!(scanner.position(), 1);
}

#[test]
fn empty_input_is_immediately_at_end() {
    let scanner = Scanner::new("");
    assert!(scanner.is_end());
    assert_eq!(scanner.current(), END);
}

#[test]
fn skip_whitespace_handles_all_separators() {
    let mut scanner = Scanner::new(" \t\r\n x");
    scanner.skip_whitespace();
    assert_eq!(scanner.current(), 'x');
    assert_eq!(scanner.position(), 5);
}

#[test]
fn is_match_does_not_move_the_cursor() {
    let scanner = Scanner::new("if (1)");
    assert!(scanner.is_match(&["@", "if"]));
    assert!(!scanner.is_match(&["("]));
    assert_eq!(scanner.position(), 0);
}

#[test]
fn is_match_checks_prefixes_only() {
    let scanner = Scanner::new("iffy");
    assert!(scanner.is_match(&["if"]));
}

#[test]
fn try_match_prefers_the_first_listed_candidate() {
    let mut scanner = Scanner::new("<<");
    assert_eq!(scanner.try_match(&["<", "<<"]), Some("<"));
    assert_eq!(scanner.position(), 1);
}

#[test]
fn try_match_consumes_trailing_whitespace() {
    let mut scanner = Scanner::new(";   }");
    assert_eq!(scanner.try_match(&[";"]), Some(";"));
    assert_eq!(scanner.current(), '}');
    assert_eq!(scanner.position(), 4);
}

#[test]
fn try_match_miss_leaves_cursor_in_place() {
    let mut scanner = Scanner::new("  x");
    scanner.skip_whitespace();
    assert_eq!(scanner.try_match(&["(", ")"]), None);
    assert_eq!(scanner.position(), 2);
}

#[test]
fn partial_candidate_at_end_does_not_match() {
    let mut scanner = Scanner::new("i");
    assert_eq!(scanner.try_match(&["if"]), None);
    assert!(!scanner.is_end());
}

#[test]
fn expect_reports_every_candidate_and_the_offset() {
    let mut scanner = Scanner::new("1 ]");
    scanner.advance();
    scanner.skip_whitespace();

    let error = scanner.expect(&[";", "}"]).unwrap_err();
    assert_eq!(error,
               ParseError::ExpectedOneOf { expected: vec![";", "}"],
                                           offset:   2, });
    assert_eq!(error.to_string(), "expected one of \";\", \"}\" at position 2");
}

#[test]
fn positions_count_characters_not_bytes() {
    let mut scanner = Scanner::new("é;");
    scanner.advance();
    assert_eq!(scanner.position(), 1);
    assert_eq!(scanner.expect(&[";"]), Ok(";"));
    assert_eq!(scanner.position(), 2);
    assert!(scanner.is_end());
}
