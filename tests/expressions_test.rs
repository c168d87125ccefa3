// Expression grammar: precedence, associativity, literals, assignment

use serde_json::{json, Value};
use sprig::{parse, to_json};

/// Parses `source` as a single expression statement and returns its expression.
fn expr(source: &str) -> Value {
    let program = parse(source).unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
    to_json(&program)["body"][0]["expression"].clone()
}

fn num(value: u64) -> Value {
    json!({ "type": "NumericLiteral", "value": value })
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn binary(operator: &str, left: Value, right: Value) -> Value {
    json!({ "type": "BinaryExpression", "operator": operator, "left": left, "right": right })
}

fn logical(operator: &str, left: Value, right: Value) -> Value {
    json!({ "type": "LogicalExpression", "operator": operator, "left": left, "right": right })
}

fn unary(operator: &str, argument: Value) -> Value {
    json!({ "type": "UnaryExpression", "operator": operator, "argument": argument })
}

fn assign(operator: &str, left: &str, right: Value) -> Value {
    json!({
        "type": "AssignmentExpression",
        "operator": operator,
        "left": ident(left),
        "right": right
    })
}

#[test]
fn test_literals() {
    assert_eq!(expr("42;"), num(42));
    assert_eq!(expr(r#""hi";"#), json!({ "type": "StringLiteral", "value": "hi" }));
    assert_eq!(expr(r#""";"#), json!({ "type": "StringLiteral", "value": "" }));
    assert_eq!(expr("true;"), json!({ "type": "BooleanLiteral", "value": true }));
    assert_eq!(expr("false;"), json!({ "type": "BooleanLiteral", "value": false }));
    assert_eq!(expr("null;"), json!({ "type": "NullLiteral" }));
    assert_eq!(expr("foo;"), ident("foo"));
}

#[test]
fn test_strings_are_not_unescaped() {
    assert_eq!(
        expr(r#""a\n b";"#),
        json!({ "type": "StringLiteral", "value": "a\\n b" })
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr("2 + 3 * 4;"),
        binary("+", num(2), binary("*", num(3), num(4)))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        expr("(2 + 3) * 4;"),
        binary("*", binary("+", num(2), num(3)), num(4))
    );
}

#[test]
fn test_parentheses_leave_no_node() {
    assert_eq!(expr("((x));"), ident("x"));
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        expr("8 - 4 - 2;"),
        binary("-", binary("-", num(8), num(4)), num(2))
    );
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(
        expr("8 / 4 * 2;"),
        binary("*", binary("/", num(8), num(4)), num(2))
    );
}

#[test]
fn test_relational_and_equality_levels() {
    assert_eq!(
        expr("a + 1 <= b == c > 2;"),
        binary(
            "==",
            binary("<=", binary("+", ident("a"), num(1)), ident("b")),
            binary(">", ident("c"), num(2))
        )
    );
    assert_eq!(expr("x != y;"), binary("!=", ident("x"), ident("y")));
    assert_eq!(expr("x >= y;"), binary(">=", ident("x"), ident("y")));
    assert_eq!(expr("x < y;"), binary("<", ident("x"), ident("y")));
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        expr("a || b && c;"),
        logical("||", ident("a"), logical("&&", ident("b"), ident("c")))
    );
}

#[test]
fn test_logical_operators_are_left_associative() {
    assert_eq!(
        expr("a && b && c;"),
        logical("&&", logical("&&", ident("a"), ident("b")), ident("c"))
    );
}

#[test]
fn test_logical_operands_are_equality_expressions() {
    assert_eq!(
        expr("x > 0 && y == 1;"),
        logical(
            "&&",
            binary(">", ident("x"), num(0)),
            binary("==", ident("y"), num(1))
        )
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(expr("-x;"), unary("-", ident("x")));
    assert_eq!(expr("+x;"), unary("+", ident("x")));
    assert_eq!(expr("!x;"), unary("!", ident("x")));
}

#[test]
fn test_chained_unary_operators() {
    assert_eq!(expr("--x;"), unary("-", unary("-", ident("x"))));
    assert_eq!(expr("!!x;"), unary("!", unary("!", ident("x"))));
    assert_eq!(expr("++x;"), unary("+", unary("+", ident("x"))));
    assert_eq!(expr("!!!x;"), unary("!", unary("!", unary("!", ident("x")))));
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(
        expr("-x * 2;"),
        binary("*", unary("-", ident("x")), num(2))
    );
    assert_eq!(
        expr("1 - -2;"),
        binary("-", num(1), unary("-", num(2)))
    );
}

#[test]
fn test_simple_assignment() {
    assert_eq!(expr("x = 42;"), assign("=", "x", num(42)));
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        expr("a = b = 1;"),
        assign("=", "a", assign("=", "b", num(1)))
    );
}

#[test]
fn test_complex_assignment_operators() {
    assert_eq!(expr("x += 1;"), assign("+=", "x", num(1)));
    assert_eq!(expr("x -= 1;"), assign("-=", "x", num(1)));
    assert_eq!(expr("x *= 2;"), assign("*=", "x", num(2)));
    assert_eq!(expr("x /= 2;"), assign("/=", "x", num(2)));
}

#[test]
fn test_assignment_value_is_a_full_expression() {
    assert_eq!(
        expr("x = y + 2 * z || w;"),
        assign(
            "=",
            "x",
            logical(
                "||",
                binary("+", ident("y"), binary("*", num(2), ident("z"))),
                ident("w")
            )
        )
    );
}

#[test]
fn test_parenthesized_identifier_is_a_valid_target() {
    assert_eq!(expr("(x) = 1;"), assign("=", "x", num(1)));
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    assert_eq!(expr("letter;"), ident("letter"));
    assert_eq!(expr("iffy = nullish;"), assign("=", "iffy", ident("nullish")));
}
