//! Tests for the filter parser.

use super::*;

// ==================== Leaf Tests ====================

#[test]
fn test_parse_author() {
    let expr = parse("@alice").unwrap();
    assert_eq!(expr, Expression::Author("alice".to_string()));
    assert_eq!(expr.render(), "Author(alice)");
}

#[test]
fn test_parse_tag() {
    let expr = parse("#dog").unwrap();
    assert_eq!(expr, Expression::Tag("dog".to_string()));
    assert_eq!(expr.render(), "Tag(dog)");
}

#[test]
fn test_parse_names_with_digits_and_underscores() {
    assert_eq!(parse("@user_42").unwrap(), Expression::author("user_42"));
    assert_eq!(parse("#2022").unwrap(), Expression::tag("2022"));
    assert_eq!(parse("#_").unwrap(), Expression::tag("_"));
}

#[test]
fn test_parse_names_are_case_sensitive() {
    assert_eq!(parse("@Alice").unwrap(), Expression::author("Alice"));
    assert_ne!(parse("@Alice").unwrap(), parse("@alice").unwrap());
}

// ==================== Operator Tests ====================

#[test]
fn test_parse_not() {
    let expr = parse("!(#dog)").unwrap();
    assert_eq!(expr, Expression::negate(Expression::tag("dog")));
    assert_eq!(expr.render(), "Not(Tag(dog))");
}

#[test]
fn test_parse_and() {
    let expr = parse("&(@alice,#dog)").unwrap();
    assert_eq!(
        expr,
        Expression::and(Expression::author("alice"), Expression::tag("dog"))
    );
    assert_eq!(expr.render(), "And(Author(alice),Tag(dog))");
}

#[test]
fn test_parse_or() {
    let expr = parse("|(@alice,@bob)").unwrap();
    assert_eq!(
        expr,
        Expression::or(Expression::author("alice"), Expression::author("bob"))
    );
    assert_eq!(expr.render(), "Or(Author(alice),Author(bob))");
}

#[test]
fn test_parse_double_negation() {
    let expr = parse("!(!(#dog))").unwrap();
    assert_eq!(expr.render(), "Not(Not(Tag(dog)))");
}

#[test]
fn test_parse_deeply_nested() {
    let expr = parse("|(&(@alice,!(#cat)),&(#dog,|(@bob,@carol)))").unwrap();
    assert_eq!(
        expr.render(),
        "Or(And(Author(alice),Not(Tag(cat))),And(Tag(dog),Or(Author(bob),Author(carol))))"
    );
}

#[test]
fn test_parse_to_filter_string_reparses() {
    for input in [
        "@alice",
        "#dog",
        "!(#dog)",
        "&(@alice,#dog)",
        "|(@alice,!(&(#a,#b)))",
    ] {
        let expr = parse(input).unwrap();
        assert_eq!(expr.to_filter_string(), input);
        assert_eq!(parse(&expr.to_filter_string()).unwrap(), expr);
    }
}

// ==================== Error Tests ====================

#[test]
fn test_parse_empty() {
    assert_eq!(parse(""), Err(SyntaxError::EmptyExpression));
}

#[test]
fn test_parse_invalid_character() {
    assert_eq!(
        parse("$(@a)"),
        Err(SyntaxError::InvalidCharacter {
            character: '$',
            position: 0
        })
    );
}

#[test]
fn test_parse_whitespace_rejected() {
    assert!(matches!(
        parse("&(@a, @b)"),
        Err(SyntaxError::InvalidCharacter {
            character: ' ',
            position: 5
        })
    ));
    assert!(matches!(
        parse(" @a"),
        Err(SyntaxError::InvalidCharacter { position: 0, .. })
    ));
}

#[test]
fn test_parse_missing_right_operand() {
    let err = parse("&(@a)").unwrap_err();
    assert_eq!(err, SyntaxError::unexpected_token(4, "','", ")"));
    assert_eq!(err.token_index(), Some(4));
}

#[test]
fn test_parse_trailing_token() {
    let err = parse("@alice)").unwrap_err();
    assert_eq!(err, SyntaxError::TrailingTokens { index: 2 });
}

#[test]
fn test_parse_trailing_expression() {
    assert_eq!(
        parse("|(@a,@b),#c"),
        Err(SyntaxError::TrailingTokens { index: 8 })
    );
    assert_eq!(
        parse("@a@b"),
        Err(SyntaxError::TrailingTokens { index: 2 })
    );
}

#[test]
fn test_parse_missing_closing_paren() {
    assert_eq!(
        parse("&(@a,@b"),
        Err(SyntaxError::UnexpectedEnd { index: 7 })
    );
    assert_eq!(parse("!(#dog"), Err(SyntaxError::UnexpectedEnd { index: 4 }));
}

#[test]
fn test_parse_leading_token_not_operator() {
    assert_eq!(
        parse("alice"),
        Err(SyntaxError::unexpected_token(
            0,
            "one of '|', '&', '!', '@', '#'",
            "alice"
        ))
    );
    assert!(matches!(
        parse("()"),
        Err(SyntaxError::UnexpectedToken { index: 0, .. })
    ));
    assert!(matches!(
        parse(",@a"),
        Err(SyntaxError::UnexpectedToken { index: 0, .. })
    ));
}

#[test]
fn test_parse_operator_without_open_paren() {
    assert_eq!(
        parse("!#dog"),
        Err(SyntaxError::unexpected_token(1, "'('", "#"))
    );
    assert_eq!(
        parse("&@a"),
        Err(SyntaxError::unexpected_token(1, "'('", "@"))
    );
    assert_eq!(parse("|"), Err(SyntaxError::UnexpectedEnd { index: 1 }));
}

#[test]
fn test_parse_not_with_two_operands() {
    assert_eq!(
        parse("!(@a,@b)"),
        Err(SyntaxError::unexpected_token(4, "')'", ","))
    );
}

#[test]
fn test_parse_missing_left_operand() {
    assert!(matches!(
        parse("&(,@b)"),
        Err(SyntaxError::UnexpectedToken { index: 2, .. })
    ));
}

#[test]
fn test_parse_prefix_without_name() {
    assert_eq!(parse("@"), Err(SyntaxError::UnexpectedEnd { index: 1 }));
    assert_eq!(
        parse("#("),
        Err(SyntaxError::unexpected_token(1, "a name", "("))
    );
    assert_eq!(
        parse("@#dog"),
        Err(SyntaxError::unexpected_token(1, "a name", "#"))
    );
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        parse("&(@a)").unwrap_err().to_string(),
        "expected ',' at token 4, found ')'"
    );
    assert_eq!(
        parse("@alice)").unwrap_err().to_string(),
        "unexpected trailing input at token 2"
    );
}

// ==================== Nesting Limit Tests ====================

fn nested_not(levels: usize) -> String {
    format!("{}#a{}", "!(".repeat(levels), ")".repeat(levels))
}

fn nested_and(levels: usize) -> String {
    let mut input = "#a".to_string();
    for _ in 0..levels {
        input = format!("&(@b,{input})");
    }
    input
}

#[test]
fn test_parse_nesting_at_limit() {
    let expr = parse(&nested_not(MAX_DEPTH)).unwrap();
    assert_eq!(expr.to_filter_string(), nested_not(MAX_DEPTH));

    assert!(parse(&nested_and(MAX_DEPTH)).is_ok());
}

#[test]
fn test_parse_nesting_past_limit() {
    // each "!(" is two tokens
    assert_eq!(
        parse(&nested_not(MAX_DEPTH + 1)),
        Err(SyntaxError::TooDeep {
            index: 2 * MAX_DEPTH
        })
    );

    // each "&(@b," is five tokens
    assert_eq!(
        parse(&nested_and(MAX_DEPTH + 1)),
        Err(SyntaxError::TooDeep {
            index: 5 * MAX_DEPTH
        })
    );
}

#[test]
fn test_parse_far_past_limit_is_an_error() {
    let err = parse(&nested_not(10_000)).unwrap_err();
    assert_eq!(err.token_index(), Some(2 * MAX_DEPTH));
}

#[test]
fn test_parse_wide_tree_within_limit() {
    // width does not count toward the limit, only depth
    let mut input = "#t0".to_string();
    for i in 1..MAX_DEPTH {
        input = format!("|({input},#t{i})");
    }
    let wide = format!("&({input},{input})");
    assert!(parse(&wide).is_ok());
}
