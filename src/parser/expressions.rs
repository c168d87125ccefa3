/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      parser/expressions.rs
 * Purpose:   Expression grammar and operator precedence.
 * 
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Parsing order, lowest to highest binding:
 * 
 *   assignment → logical_or → logical_and → equality → relational
 *              → additive → multiplicative → unary → left_hand_side
 *              → primary
 * 
 * Assignment is right-associative; every binary level is iterative and
 * left-associative.
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

use crate::ast::{
    AssignmentExpression, AssignmentOperator, BinaryExpression, BinaryOperator, BooleanLiteral,
    Expression, Identifier, LogicalExpression, LogicalOperator, NullLiteral, NumericLiteral,
    StringLiteral, UnaryExpression, UnaryOperator,
};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::span::Span;

/// A production that yields the operands of the next-lower binding level.
type Operand = fn(&mut Parser) -> Result<Expression, ParseError>;

impl Parser {
    /// expression → assignment_expression
    pub(crate) fn expression(&mut self) -> Result<Expression, ParseError> {
        self.assignment_expression()
    }

    /// assignment_expression → logical_or_expression
    ///                       | identifier assignment_operator assignment_expression
    pub(crate) fn assignment_expression(&mut self) -> Result<Expression, ParseError> {
        let target_span = self.lookahead_span();
        let left = self.logical_or_expression()?;

        let kind = match self.lookahead_kind() {
            Some(kind) if kind.is_assignment_operator() => kind,
            _ => return Ok(left),
        };

        let operator = self.operator(kind, AssignmentOperator::from_lexeme)?;
        let left = Self::check_valid_assignment_target(left, target_span)?;
        let right = self.assignment_expression()?;

        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left,
            right: Box::new(right),
        }))
    }

    /// Only a bare identifier can be assigned to.
    fn check_valid_assignment_target(
        target: Expression,
        span: Span,
    ) -> Result<Identifier, ParseError> {
        match target {
            Expression::Identifier(identifier) => Ok(identifier),
            _ => Err(ParseError::InvalidAssignmentTarget { span }),
        }
    }

    /// logical_or_expression → logical_and_expression ( "||" logical_and_expression )*
    fn logical_or_expression(&mut self) -> Result<Expression, ParseError> {
        self.logical_expression(TokenKind::LogicalOr, Self::logical_and_expression)
    }

    /// logical_and_expression → equality_expression ( "&&" equality_expression )*
    fn logical_and_expression(&mut self) -> Result<Expression, ParseError> {
        self.logical_expression(TokenKind::LogicalAnd, Self::equality_expression)
    }

    /// equality_expression → relational_expression ( ( "==" | "!=" ) relational_expression )*
    fn equality_expression(&mut self) -> Result<Expression, ParseError> {
        self.binary_expression(TokenKind::EqualityOperator, Self::relational_expression)
    }

    /// relational_expression → additive_expression ( ( "<" | "<=" | ">" | ">=" ) additive_expression )*
    fn relational_expression(&mut self) -> Result<Expression, ParseError> {
        self.binary_expression(TokenKind::RelationalOperator, Self::additive_expression)
    }

    /// additive_expression → multiplicative_expression ( ( "+" | "-" ) multiplicative_expression )*
    fn additive_expression(&mut self) -> Result<Expression, ParseError> {
        self.binary_expression(TokenKind::AdditiveOperator, Self::multiplicative_expression)
    }

    /// multiplicative_expression → unary_expression ( ( "*" | "/" ) unary_expression )*
    fn multiplicative_expression(&mut self) -> Result<Expression, ParseError> {
        self.binary_expression(TokenKind::MultiplicativeOperator, Self::unary_expression)
    }

    /// Folds `left op right` into a left-leaning tree while the lookahead
    /// is an operator of `operator_kind`.
    fn binary_expression(
        &mut self,
        operator_kind: TokenKind,
        operand: Operand,
    ) -> Result<Expression, ParseError> {
        let mut left = operand(self)?;

        while self.check(operator_kind) {
            let operator = self.operator(operator_kind, BinaryOperator::from_lexeme)?;
            let right = operand(self)?;

            left = Expression::Binary(BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Same fold as `binary_expression`, producing logical nodes.
    fn logical_expression(
        &mut self,
        operator_kind: TokenKind,
        operand: Operand,
    ) -> Result<Expression, ParseError> {
        let mut left = operand(self)?;

        while self.check(operator_kind) {
            let operator = self.operator(operator_kind, LogicalOperator::from_lexeme)?;
            let right = operand(self)?;

            left = Expression::Logical(LogicalExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// unary_expression → ( "+" | "-" | "!" ) unary_expression
    ///                  | left_hand_side_expression
    fn unary_expression(&mut self) -> Result<Expression, ParseError> {
        let operator = match self.lookahead_kind() {
            Some(TokenKind::AdditiveOperator) => {
                Some(self.operator(TokenKind::AdditiveOperator, UnaryOperator::from_lexeme)?)
            }
            Some(TokenKind::LogicalNot) => {
                Some(self.operator(TokenKind::LogicalNot, UnaryOperator::from_lexeme)?)
            }
            _ => None,
        };

        match operator {
            Some(operator) => Ok(Expression::Unary(UnaryExpression {
                operator,
                argument: Box::new(self.unary_expression()?),
            })),
            None => self.left_hand_side_expression(),
        }
    }

    /// left_hand_side_expression → primary_expression
    fn left_hand_side_expression(&mut self) -> Result<Expression, ParseError> {
        self.primary_expression()
    }

    /// primary_expression → literal | parenthesized_expression | identifier
    ///
    /// Anything that is neither a literal nor `(` must be an identifier;
    /// otherwise the error names `IDENTIFIER` as the expected token.
    fn primary_expression(&mut self) -> Result<Expression, ParseError> {
        match self.lookahead_kind() {
            Some(kind) if kind.is_literal() => self.literal(),
            Some(TokenKind::LeftParen) => self.parenthesized_expression(),
            _ => self.identifier().map(Expression::Identifier),
        }
    }

    /// parenthesized_expression → "(" expression ")"
    ///
    /// Parentheses only group; the inner node is returned as is.
    fn parenthesized_expression(&mut self) -> Result<Expression, ParseError> {
        self.eat(TokenKind::LeftParen)?;
        let expression = self.expression()?;
        self.eat(TokenKind::RightParen)?;
        Ok(expression)
    }

    /// identifier → IDENTIFIER
    pub(crate) fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(Identifier { name: token.value })
    }

    /* ----------------------------- */
    /* LITERALS                      */
    /* ----------------------------- */

    /// literal → NUMBER | STRING | "true" | "false" | "null"
    fn literal(&mut self) -> Result<Expression, ParseError> {
        match self.lookahead_kind() {
            Some(TokenKind::String) => self.string_literal(),
            Some(TokenKind::True) => self.boolean_literal(TokenKind::True),
            Some(TokenKind::False) => self.boolean_literal(TokenKind::False),
            Some(TokenKind::Null) => self.null_literal(),
            _ => self.numeric_literal(),
        }
    }

    fn numeric_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.eat(TokenKind::Number)?;

        let value = token
            .value
            .parse::<f64>()
            .map_err(|_| ParseError::UnexpectedToken {
                found: token.value.clone(),
                expected: TokenKind::Number,
                span: token.span,
            })?;

        Ok(Expression::NumericLiteral(NumericLiteral { value }))
    }

    /// The token keeps its quotes; they are stripped here.
    fn string_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.eat(TokenKind::String)?;

        let end = token.value.len().saturating_sub(1);
        let value = token.value.get(1..end).unwrap_or_default().to_string();

        Ok(Expression::StringLiteral(StringLiteral { value }))
    }

    fn boolean_literal(&mut self, kind: TokenKind) -> Result<Expression, ParseError> {
        self.eat(kind)?;
        Ok(Expression::BooleanLiteral(BooleanLiteral {
            value: kind == TokenKind::True,
        }))
    }

    fn null_literal(&mut self) -> Result<Expression, ParseError> {
        self.eat(TokenKind::Null)?;
        Ok(Expression::NullLiteral(NullLiteral {}))
    }
}
