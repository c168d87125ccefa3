// Statement-level grammar: blocks, variables, control flow, functions

use serde_json::{json, Value};
use sprig::{parse, to_json};

fn ast(source: &str) -> Value {
    let program = parse(source).unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
    to_json(&program)
}

fn body(source: &str) -> Value {
    ast(source)["body"].clone()
}

#[test]
fn test_statement_list_with_comments() {
    let source = r#"
        /**
         *
         *  Multi line comment
         */
        "Hello";

        //Comment
        30;
    "#;

    assert_eq!(
        ast(source),
        json!({
            "type": "Program",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "StringLiteral", "value": "Hello" }
                },
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "NumericLiteral", "value": 30 }
                }
            ]
        })
    );
}

#[test]
fn test_block_with_statements() {
    let source = r#"
        {
            30;

            "Hello";
        }
    "#;

    assert_eq!(
        body(source),
        json!([{
            "type": "BlockStatement",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "NumericLiteral", "value": 30 }
                },
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "StringLiteral", "value": "Hello" }
                }
            ]
        }])
    );
}

#[test]
fn test_empty_block() {
    assert_eq!(body("\n\n    {\n\n    }\n    \n"), json!([{ "type": "BlockStatement", "body": [] }]));
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        body(r#"{ 30; { "Hello"; } }"#),
        json!([{
            "type": "BlockStatement",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "NumericLiteral", "value": 30 }
                },
                {
                    "type": "BlockStatement",
                    "body": [{
                        "type": "ExpressionStatement",
                        "expression": { "type": "StringLiteral", "value": "Hello" }
                    }]
                }
            ]
        }])
    );
}

#[test]
fn test_empty_statement() {
    assert_eq!(body(";"), json!([{ "type": "EmptyStatement" }]));
}

#[test]
fn test_single_quoted_string() {
    assert_eq!(
        body("'hello world';"),
        json!([{
            "type": "ExpressionStatement",
            "expression": { "type": "StringLiteral", "value": "hello world" }
        }])
    );
}

#[test]
fn test_variable_declaration_with_initializer() {
    assert_eq!(
        body("let x = 42;"),
        json!([{
            "type": "VariableStatement",
            "declarations": [{
                "type": "VariableDeclaration",
                "id": { "type": "Identifier", "name": "x" },
                "init": { "type": "NumericLiteral", "value": 42 }
            }]
        }])
    );
}

#[test]
fn test_variable_declaration_list() {
    assert_eq!(
        body("let a = 1, b, c = 3;"),
        json!([{
            "type": "VariableStatement",
            "declarations": [
                {
                    "type": "VariableDeclaration",
                    "id": { "type": "Identifier", "name": "a" },
                    "init": { "type": "NumericLiteral", "value": 1 }
                },
                {
                    "type": "VariableDeclaration",
                    "id": { "type": "Identifier", "name": "b" },
                    "init": null
                },
                {
                    "type": "VariableDeclaration",
                    "id": { "type": "Identifier", "name": "c" },
                    "init": { "type": "NumericLiteral", "value": 3 }
                }
            ]
        }])
    );
}

#[test]
fn test_chained_initializer() {
    assert_eq!(
        body("let y = x = 5;")[0]["declarations"][0]["init"],
        json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": { "type": "Identifier", "name": "x" },
            "right": { "type": "NumericLiteral", "value": 5 }
        })
    );
}

#[test]
fn test_if_without_else_has_null_alternate() {
    assert_eq!(
        body("if (x) { x = 1; }"),
        json!([{
            "type": "IfStatement",
            "test": { "type": "Identifier", "name": "x" },
            "consequent": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "NumericLiteral", "value": 1 }
                    }
                }]
            },
            "alternate": null
        }])
    );
}

#[test]
fn test_if_else_with_statement_bodies() {
    assert_eq!(
        body("if (x) y; else z;"),
        json!([{
            "type": "IfStatement",
            "test": { "type": "Identifier", "name": "x" },
            "consequent": {
                "type": "ExpressionStatement",
                "expression": { "type": "Identifier", "name": "y" }
            },
            "alternate": {
                "type": "ExpressionStatement",
                "expression": { "type": "Identifier", "name": "z" }
            }
        }])
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let tree = body("if (a) if (b) c; else d;");
    assert_eq!(tree[0]["alternate"], Value::Null);
    assert_eq!(tree[0]["consequent"]["type"], "IfStatement");
    assert_eq!(
        tree[0]["consequent"]["alternate"]["expression"]["name"],
        "d"
    );
}

#[test]
fn test_while_statement() {
    assert_eq!(
        body("while (x > 10) { x -= 1; }"),
        json!([{
            "type": "WhileStatement",
            "test": {
                "type": "BinaryExpression",
                "operator": ">",
                "left": { "type": "Identifier", "name": "x" },
                "right": { "type": "NumericLiteral", "value": 10 }
            },
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "-=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "NumericLiteral", "value": 1 }
                    }
                }]
            }
        }])
    );
}

#[test]
fn test_do_while_statement() {
    assert_eq!(
        body("do { x -= 1; } while (x > 10);"),
        json!([{
            "type": "DoWhileStatement",
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "-=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "NumericLiteral", "value": 1 }
                    }
                }]
            },
            "test": {
                "type": "BinaryExpression",
                "operator": ">",
                "left": { "type": "Identifier", "name": "x" },
                "right": { "type": "NumericLiteral", "value": 10 }
            }
        }])
    );
}

#[test]
fn test_for_statement_with_all_clauses() {
    assert_eq!(
        body("for (let i = 0; i < 10; i += 1) { x += i; }"),
        json!([{
            "type": "ForStatement",
            "init": {
                "type": "VariableStatement",
                "declarations": [{
                    "type": "VariableDeclaration",
                    "id": { "type": "Identifier", "name": "i" },
                    "init": { "type": "NumericLiteral", "value": 0 }
                }]
            },
            "test": {
                "type": "BinaryExpression",
                "operator": "<",
                "left": { "type": "Identifier", "name": "i" },
                "right": { "type": "NumericLiteral", "value": 10 }
            },
            "update": {
                "type": "AssignmentExpression",
                "operator": "+=",
                "left": { "type": "Identifier", "name": "i" },
                "right": { "type": "NumericLiteral", "value": 1 }
            },
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "+=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "Identifier", "name": "i" }
                    }
                }]
            }
        }])
    );
}

#[test]
fn test_for_statement_with_no_clauses() {
    assert_eq!(
        body("for (;;) { }"),
        json!([{
            "type": "ForStatement",
            "init": null,
            "test": null,
            "update": null,
            "body": { "type": "BlockStatement", "body": [] }
        }])
    );
}

#[test]
fn test_for_statement_with_expression_init() {
    let tree = body("for (i = 0; ; ) ;");
    assert_eq!(
        tree[0]["init"],
        json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": { "type": "Identifier", "name": "i" },
            "right": { "type": "NumericLiteral", "value": 0 }
        })
    );
    assert_eq!(tree[0]["test"], Value::Null);
    assert_eq!(tree[0]["update"], Value::Null);
    assert_eq!(tree[0]["body"], json!({ "type": "EmptyStatement" }));
}

#[test]
fn test_for_init_with_several_declarations() {
    let tree = body("for (let i = 0, j; i < j; ) ;");
    assert_eq!(tree[0]["init"]["declarations"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_function_declaration() {
    assert_eq!(
        body("def square(x) { return x * x; }"),
        json!([{
            "type": "FunctionDeclaration",
            "name": { "type": "Identifier", "name": "square" },
            "params": [{ "type": "Identifier", "name": "x" }],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ReturnStatement",
                    "argument": {
                        "type": "BinaryExpression",
                        "operator": "*",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "Identifier", "name": "x" }
                    }
                }]
            }
        }])
    );
}

#[test]
fn test_function_without_params_and_bare_return() {
    assert_eq!(
        body("def empty() { return; }"),
        json!([{
            "type": "FunctionDeclaration",
            "name": { "type": "Identifier", "name": "empty" },
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [{ "type": "ReturnStatement", "argument": null }]
            }
        }])
    );
}

#[test]
fn test_function_with_several_params() {
    let tree = body("def add(a, b, c) { }");
    assert_eq!(
        tree[0]["params"],
        json!([
            { "type": "Identifier", "name": "a" },
            { "type": "Identifier", "name": "b" },
            { "type": "Identifier", "name": "c" }
        ])
    );
    assert_eq!(tree[0]["body"]["body"], json!([]));
}

#[test]
fn test_top_level_return_is_accepted() {
    assert_eq!(
        body("return 1;"),
        json!([{
            "type": "ReturnStatement",
            "argument": { "type": "NumericLiteral", "value": 1 }
        }])
    );
}
