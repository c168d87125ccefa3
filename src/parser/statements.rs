/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      parser/statements.rs
 * Purpose:   Statement-level grammar: programs, statement lists, blocks,
 *            variables, control flow, functions and `return`.
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
    BlockStatement, DoWhileStatement, EmptyStatement, ExpressionStatement, ForInit,
    ForStatement, FunctionDeclaration, Identifier, IfStatement, Program, ReturnStatement,
    Statement, VariableDeclaration, VariableStatement, WhileStatement,
};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// program → statement_list
    pub(crate) fn program(&mut self) -> Result<Program, ParseError> {
        Ok(Program {
            body: self.statement_list(None)?,
        })
    }

    /// statement_list → statement+
    ///
    /// Stops at end of input or, when `stop` is given, in front of that
    /// token without consuming it. At least one statement is always parsed.
    fn statement_list(&mut self, stop: Option<TokenKind>) -> Result<Vec<Statement>, ParseError> {
        let mut statements = vec![self.statement()?];

        while let Some(kind) = self.lookahead_kind() {
            if Some(kind) == stop {
                break;
            }
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Selects a statement production from the lookahead kind.
    ///
    /// Anything that does not open a dedicated statement form is parsed
    /// as an expression statement.
    fn statement(&mut self) -> Result<Statement, ParseError> {
        match self.lookahead_kind() {
            Some(TokenKind::Semicolon) => self.empty_statement().map(Statement::Empty),
            Some(TokenKind::LeftBrace) => self.block_statement().map(Statement::Block),
            Some(TokenKind::If) => self.if_statement().map(Statement::If),
            Some(TokenKind::Let) => self.variable_statement().map(Statement::Variable),
            Some(TokenKind::Def) => self.function_declaration().map(Statement::Function),
            Some(TokenKind::Return) => self.return_statement().map(Statement::Return),
            Some(TokenKind::While) | Some(TokenKind::Do) | Some(TokenKind::For) => {
                self.iteration_statement()
            }
            _ => self.expression_statement().map(Statement::Expression),
        }
    }

    /* ----------------------------- */
    /* SIMPLE STATEMENTS             */
    /* ----------------------------- */

    /// empty_statement → ";"
    fn empty_statement(&mut self) -> Result<EmptyStatement, ParseError> {
        self.eat(TokenKind::Semicolon)?;
        Ok(EmptyStatement {})
    }

    /// block_statement → "{" statement_list? "}"
    ///
    /// The closing brace is checked before entering the list, which is what
    /// lets `{ }` have an empty body.
    fn block_statement(&mut self) -> Result<BlockStatement, ParseError> {
        self.eat(TokenKind::LeftBrace)?;

        let body = if self.check(TokenKind::RightBrace) {
            Vec::new()
        } else {
            self.statement_list(Some(TokenKind::RightBrace))?
        };

        self.eat(TokenKind::RightBrace)?;

        Ok(BlockStatement { body })
    }

    /// expression_statement → expression ";"
    fn expression_statement(&mut self) -> Result<ExpressionStatement, ParseError> {
        let expression = self.expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(ExpressionStatement { expression })
    }

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    /// variable_statement → variable_statement_init ";"
    fn variable_statement(&mut self) -> Result<VariableStatement, ParseError> {
        let statement = self.variable_statement_init()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(statement)
    }

    /// variable_statement_init → "let" variable_declaration_list
    ///
    /// Shared with `for` headers, which supply their own `;`.
    fn variable_statement_init(&mut self) -> Result<VariableStatement, ParseError> {
        self.eat(TokenKind::Let)?;
        let declarations = self.variable_declaration_list()?;
        Ok(VariableStatement { declarations })
    }

    /// variable_declaration_list → variable_declaration ( "," variable_declaration )*
    fn variable_declaration_list(&mut self) -> Result<Vec<VariableDeclaration>, ParseError> {
        let mut declarations = vec![self.variable_declaration()?];

        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            declarations.push(self.variable_declaration()?);
        }

        Ok(declarations)
    }

    /// variable_declaration → identifier ( "=" assignment_expression )?
    fn variable_declaration(&mut self) -> Result<VariableDeclaration, ParseError> {
        let id = self.identifier()?;

        let init = if self.check(TokenKind::SimpleAssign) {
            self.eat(TokenKind::SimpleAssign)?;
            Some(self.assignment_expression()?)
        } else {
            None
        };

        Ok(VariableDeclaration { id, init })
    }

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    /// if_statement → "if" "(" expression ")" statement ( "else" statement )?
    fn if_statement(&mut self) -> Result<IfStatement, ParseError> {
        self.eat(TokenKind::If)?;

        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;

        let consequent = Box::new(self.statement()?);

        let alternate = if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else)?;
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(IfStatement {
            test,
            consequent,
            alternate,
        })
    }

    /// iteration_statement → while_statement | do_while_statement | for_statement
    fn iteration_statement(&mut self) -> Result<Statement, ParseError> {
        match self.lookahead_kind() {
            Some(TokenKind::While) => self.while_statement().map(Statement::While),
            Some(TokenKind::Do) => self.do_while_statement().map(Statement::DoWhile),
            _ => self.for_statement().map(Statement::For),
        }
    }

    /// while_statement → "while" "(" expression ")" statement
    fn while_statement(&mut self) -> Result<WhileStatement, ParseError> {
        self.eat(TokenKind::While)?;

        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;

        let body = Box::new(self.statement()?);

        Ok(WhileStatement { test, body })
    }

    /// do_while_statement → "do" statement "while" "(" expression ")" ";"
    fn do_while_statement(&mut self) -> Result<DoWhileStatement, ParseError> {
        self.eat(TokenKind::Do)?;

        let body = Box::new(self.statement()?);

        self.eat(TokenKind::While)?;

        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;

        self.eat(TokenKind::Semicolon)?;

        Ok(DoWhileStatement { body, test })
    }

    /// for_statement → "for" "(" for_init? ";" expression? ";" expression? ")" statement
    ///
    /// Each clause is absent when its terminator is already the lookahead.
    fn for_statement(&mut self) -> Result<ForStatement, ParseError> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LeftParen)?;

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.for_statement_init()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let update = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::RightParen)?;

        let body = Box::new(self.statement()?);

        Ok(ForStatement {
            init,
            test,
            update,
            body,
        })
    }

    /// for_init → variable_statement_init | expression
    fn for_statement_init(&mut self) -> Result<ForInit, ParseError> {
        if self.check(TokenKind::Let) {
            return self.variable_statement_init().map(ForInit::Variable);
        }
        self.expression().map(ForInit::Expression)
    }

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    /// function_declaration → "def" identifier "(" formal_parameter_list? ")" block_statement
    fn function_declaration(&mut self) -> Result<FunctionDeclaration, ParseError> {
        self.eat(TokenKind::Def)?;
        let name = self.identifier()?;

        self.eat(TokenKind::LeftParen)?;
        let params = if self.check(TokenKind::RightParen) {
            Vec::new()
        } else {
            self.formal_parameter_list()?
        };
        self.eat(TokenKind::RightParen)?;

        let body = self.block_statement()?;

        Ok(FunctionDeclaration { name, params, body })
    }

    /// formal_parameter_list → identifier ( "," identifier )*
    fn formal_parameter_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut params = vec![self.identifier()?];

        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            params.push(self.identifier()?);
        }

        Ok(params)
    }

    /// return_statement → "return" expression? ";"
    fn return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        self.eat(TokenKind::Return)?;

        let argument = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };

        self.eat(TokenKind::Semicolon)?;

        Ok(ReturnStatement { argument })
    }
}
