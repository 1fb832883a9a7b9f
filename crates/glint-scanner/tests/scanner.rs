use glint_common::{Interner, Keywords};
use glint_scanner::{Token, tokenize};

fn scan(source: &str) -> (Vec<Token>, Interner) {
    let mut interner = Interner::new();
    let keywords = Keywords::interned(&mut interner);
    let tokens = tokenize(source, &mut interner, &keywords);
    (tokens, interner)
}

#[test]
fn every_token_span_is_within_source_bounds() {
    let source = "fn add(a: i32, b: i32): i32 { a + b }";
    let (tokens, _) = scan(source);
    for token in &tokens {
        let span = token.span();
        assert!(span.begin <= span.end, "span begin must not exceed end");
    }
    assert!(!tokens.is_empty());
}

#[test]
fn keywords_are_classified() {
    let (tokens, _) = scan("fn if else or true false");
    assert!(matches!(tokens[0], Token::Fn { .. }));
    assert!(matches!(tokens[1], Token::If { .. }));
    assert!(matches!(tokens[2], Token::Else { .. }));
    assert!(matches!(tokens[3], Token::Or { .. }));
    assert!(matches!(tokens[4], Token::Bool { value: true, .. }));
    assert!(matches!(tokens[5], Token::Bool { value: false, .. }));
}

#[test]
fn plain_identifier_is_a_symbol() {
    let (tokens, interner) = scan("counter");
    match tokens[0] {
        Token::Symbol { handle, .. } => assert_eq!(interner.lookup(handle), "counter"),
        other => panic!("expected Symbol, got {other:?}"),
    }
}

#[test]
fn integer_literal_has_zero_dots() {
    let (tokens, interner) = scan("42");
    match tokens[0] {
        Token::Int { handle, .. } => assert_eq!(interner.lookup(handle), "42"),
        other => panic!("expected Int, got {other:?}"),
    }
}

#[test]
fn float_literal_has_one_dot() {
    let (tokens, interner) = scan("3.14");
    match tokens[0] {
        Token::Float { handle, .. } => assert_eq!(interner.lookup(handle), "3.14"),
        other => panic!("expected Float, got {other:?}"),
    }
}

#[test]
fn lone_minus_byte_is_the_minus_token() {
    let (tokens, _) = scan("- x");
    assert!(matches!(tokens[0], Token::Minus { .. }));
}

#[test]
fn lone_dot_byte_is_the_dot_token() {
    let (tokens, _) = scan(". x");
    assert!(matches!(tokens[0], Token::Dot { .. }));
}

#[test]
fn trailing_dot_after_digits_is_returned_to_the_stream() {
    // "1." scans as an Int "1" followed by a separate Dot token, rather
    // than as a Float, because a run ending in '.' with digits before it
    // gives the dot back to the next token (member access position).
    let (tokens, interner) = scan("1.foo");
    match tokens[0] {
        Token::Int { handle, .. } => assert_eq!(interner.lookup(handle), "1"),
        other => panic!("expected Int, got {other:?}"),
    }
    assert!(matches!(tokens[1], Token::Dot { .. }));
    match tokens[2] {
        Token::Symbol { handle, .. } => assert_eq!(interner.lookup(handle), "foo"),
        other => panic!("expected Symbol, got {other:?}"),
    }
}

#[test]
fn multiple_dots_in_a_run_are_preserved_verbatim() {
    // Deliberately not "fixed up": the scanner accepts 1.2.3 as a single
    // Float token with two dots and leaves disambiguation to the parser.
    let (tokens, interner) = scan("1.2.3");
    match tokens[0] {
        Token::Float { handle, .. } => assert_eq!(interner.lookup(handle), "1.2.3"),
        other => panic!("expected Float, got {other:?}"),
    }
}

#[test]
fn string_literal_interns_both_quotes() {
    let (tokens, interner) = scan("\"hi\"");
    match tokens[0] {
        Token::String { handle, .. } => assert_eq!(interner.lookup(handle), "\"hi\""),
        other => panic!("expected String, got {other:?}"),
    }
}

#[test]
fn equal_vs_equal_equal_lookahead() {
    let (tokens, _) = scan("= ==");
    assert!(matches!(tokens[0], Token::Equal { .. }));
    assert!(matches!(tokens[1], Token::EqualEqual { .. }));
}

#[test]
fn newline_run_collapses_to_one_token_and_resets_column() {
    let (tokens, _) = scan("x\n\n\ny");
    let newline = tokens
        .iter()
        .find(|t| matches!(t, Token::NewLine { .. }))
        .expect("expected a NewLine token");
    let span = newline.span();
    assert_eq!(span.begin.line, 1);
    assert_eq!(span.end.line, 4);
    assert_eq!(span.end.column, 1);
}

#[test]
fn braces_and_operators_are_single_char_tokens() {
    let (tokens, _) = scan("{}()+*/^%><:,");
    let kinds: Vec<&str> = tokens
        .iter()
        .map(|t| match t {
            Token::LeftBrace { .. } => "{",
            Token::RightBrace { .. } => "}",
            Token::LeftParen { .. } => "(",
            Token::RightParen { .. } => ")",
            Token::Plus { .. } => "+",
            Token::Times { .. } => "*",
            Token::Slash { .. } => "/",
            Token::Caret { .. } => "^",
            Token::Percent { .. } => "%",
            Token::Greater { .. } => ">",
            Token::Less { .. } => "<",
            Token::Colon { .. } => ":",
            Token::Comma { .. } => ",",
            other => panic!("unexpected token {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["{", "}", "(", ")", "+", "*", "/", "^", "%", ">", "<", ":", ","]
    );
}

#[test]
fn tabs_and_spaces_only_advance_column() {
    let (tokens, _) = scan("  \tx");
    match tokens[0] {
        Token::Symbol { span, .. } => {
            assert_eq!(span.begin.line, 1);
            assert_eq!(span.begin.column, 4);
        }
        ref other => panic!("expected Symbol, got {other:?}"),
    }
}
