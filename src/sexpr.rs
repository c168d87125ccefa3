/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      sexpr.rs
 * Purpose:   Alternate S-expression view of a parsed program.
 * 
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the SPRIG scripting language project.
 * 
 * SPRIG is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

//! Lowers the tree into nested lists:
//!
//! ```text
//! let x = 10;              (begin
//! if (x > 5) { x -= 1; }     (var x 10)
//!                            (if (> x 5) (begin (-= x 1))))
//! ```

use std::fmt;

use crate::ast::{
    AssignmentOperator, Expression, ForInit, Program, Statement, VariableDeclaration,
    VariableStatement,
};

/// A node of the S-expression form.
#[derive(Debug, Clone, PartialEq)]
pub enum SExpr {
    /// A bare symbol: names, operators, keywords, `true`, `false`, `null`.
    Atom(String),
    Number(f64),
    Str(String),
    List(Vec<SExpr>),
}

impl SExpr {
    fn atom(text: impl Into<String>) -> Self {
        SExpr::Atom(text.into())
    }

    fn null() -> Self {
        SExpr::atom("null")
    }

    fn list(items: Vec<SExpr>) -> Self {
        SExpr::List(items)
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpr::Atom(text) => f.write_str(text),
            SExpr::Number(n) => write!(f, "{}", n),
            SExpr::Str(s) => write!(f, "\"{}\"", s),
            SExpr::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Lowers a whole program into `(begin ...)`.
pub fn to_sexpr(program: &Program) -> SExpr {
    begin(&program.body)
}

/// `(begin s1 s2 ...)`, dropping empty statements.
fn begin(statements: &[Statement]) -> SExpr {
    let mut items = vec![SExpr::atom("begin")];
    items.extend(statements.iter().filter_map(statement));
    SExpr::list(items)
}

/// Empty statements have no S-expression form.
fn statement(node: &Statement) -> Option<SExpr> {
    let lowered = match node {
        Statement::Empty(_) => return None,
        Statement::Block(block) => begin(&block.body),
        Statement::Expression(stmt) => expression(&stmt.expression),
        Statement::Variable(stmt) => variables(stmt),
        Statement::If(stmt) => {
            let mut items = vec![
                SExpr::atom("if"),
                expression(&stmt.test),
                nested(&stmt.consequent),
            ];
            if let Some(alternate) = &stmt.alternate {
                items.push(nested(alternate));
            }
            SExpr::list(items)
        }
        Statement::While(stmt) => SExpr::list(vec![
            SExpr::atom("while"),
            expression(&stmt.test),
            nested(&stmt.body),
        ]),
        Statement::DoWhile(stmt) => SExpr::list(vec![
            SExpr::atom("do-while"),
            nested(&stmt.body),
            expression(&stmt.test),
        ]),
        Statement::For(stmt) => SExpr::list(vec![
            SExpr::atom("for"),
            match &stmt.init {
                Some(ForInit::Variable(vars)) => variables(vars),
                Some(ForInit::Expression(expr)) => expression(expr),
                None => SExpr::null(),
            },
            optional(stmt.test.as_ref()),
            optional(stmt.update.as_ref()),
            nested(&stmt.body),
        ]),
        Statement::Function(decl) => SExpr::list(vec![
            SExpr::atom("def"),
            SExpr::atom(decl.name.name.as_str()),
            SExpr::list(
                decl.params
                    .iter()
                    .map(|param| SExpr::atom(param.name.as_str()))
                    .collect(),
            ),
            begin(&decl.body.body),
        ]),
        Statement::Return(stmt) => {
            let mut items = vec![SExpr::atom("return")];
            if let Some(argument) = &stmt.argument {
                items.push(expression(argument));
            }
            SExpr::list(items)
        }
    };

    Some(lowered)
}

/// A statement in a single-statement slot; `;` there becomes `(begin)`.
fn nested(stmt: &Statement) -> SExpr {
    statement(stmt).unwrap_or_else(|| SExpr::list(vec![SExpr::atom("begin")]))
}

fn variables(stmt: &VariableStatement) -> SExpr {
    match stmt.declarations.as_slice() {
        [single] => variable(single),
        declarations => {
            let mut items = vec![SExpr::atom("begin")];
            items.extend(declarations.iter().map(variable));
            SExpr::list(items)
        }
    }
}

fn variable(declaration: &VariableDeclaration) -> SExpr {
    SExpr::list(vec![
        SExpr::atom("var"),
        SExpr::atom(declaration.id.name.as_str()),
        optional(declaration.init.as_ref()),
    ])
}

fn optional(expr: Option<&Expression>) -> SExpr {
    expr.map(expression).unwrap_or_else(SExpr::null)
}

fn expression(expr: &Expression) -> SExpr {
    match expr {
        Expression::Assignment(assign) => {
            let head = match assign.operator {
                AssignmentOperator::Assign => "set",
                other => other.as_str(),
            };
            SExpr::list(vec![
                SExpr::atom(head),
                SExpr::atom(assign.left.name.as_str()),
                expression(&assign.right),
            ])
        }
        Expression::Logical(logical) => SExpr::list(vec![
            SExpr::atom(logical.operator.as_str()),
            expression(&logical.left),
            expression(&logical.right),
        ]),
        Expression::Binary(binary) => SExpr::list(vec![
            SExpr::atom(binary.operator.as_str()),
            expression(&binary.left),
            expression(&binary.right),
        ]),
        Expression::Unary(unary) => SExpr::list(vec![
            SExpr::atom(unary.operator.as_str()),
            expression(&unary.argument),
        ]),
        Expression::Identifier(id) => SExpr::atom(id.name.as_str()),
        Expression::NumericLiteral(lit) => SExpr::Number(lit.value),
        Expression::StringLiteral(lit) => SExpr::Str(lit.value.clone()),
        Expression::BooleanLiteral(lit) => SExpr::atom(if lit.value { "true" } else { "false" }),
        Expression::NullLiteral(_) => SExpr::null(),
    }
}
