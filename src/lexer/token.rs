/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the SPRIG tokenizer
 *            and consumed by the parser.
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

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in the SPRIG language.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Tokenizer → TokenKind → Parser → AST
/// ```
///
/// The set is closed. Operator kinds group lexemes of the same precedence
/// level (`+` and `-` are both `AdditiveOperator`); the exact operator is
/// kept in [`Token::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /* ----------------------------- */
    /* PUNCTUATION                   */
    /* ----------------------------- */
    Semicolon,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Comma,

    /* ----------------------------- */
    /* KEYWORDS                      */
    /* ----------------------------- */
    Let,
    If,
    Else,
    True,
    False,
    Null,
    Def,
    Return,
    While,
    Do,
    For,

    /* ----------------------------- */
    /* LITERALS & NAMES              */
    /* ----------------------------- */
    /// An unsigned digit run: `42`
    Number,

    /// A quoted string, quotes included: `"hello"`, `'world'`
    String,

    /// A user-defined name.
    Identifier,

    /* ----------------------------- */
    /* OPERATORS                     */
    /* ----------------------------- */
    /// `==`, `!=`
    EqualityOperator,

    /// `=`
    SimpleAssign,

    /// `+=`, `-=`, `*=`, `/=`
    ComplexAssign,

    /// `+`, `-`
    AdditiveOperator,

    /// `*`, `/`
    MultiplicativeOperator,

    /// `<`, `<=`, `>`, `>=`
    RelationalOperator,

    /// `&&`
    LogicalAnd,

    /// `||`
    LogicalOr,

    /// `!`
    LogicalNot,
}

impl TokenKind {
    /// The name used for this kind in error messages.
    ///
    /// Punctuation and keywords are shown as the text they stand for,
    /// every other kind as an upper-case category name.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Semicolon => ";",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::SimpleAssign => "SIMPLE_ASSIGN",
            TokenKind::ComplexAssign => "COMPLEX_ASSIGN",
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
        }
    }

    /// Kinds that start a literal expression.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Kinds that can follow the target of an assignment.
    pub fn is_assignment_operator(self) -> bool {
        matches!(self, TokenKind::SimpleAssign | TokenKind::ComplexAssign)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** produced by the SPRIG tokenizer.
///
/// # Example Tokens
/// ```text
/// let   →  { kind: Let,        value: "let",     span: 1:1 }
/// age   →  { kind: Identifier, value: "age",     span: 1:5 }
/// "hi"  →  { kind: String,     value: "\"hi\"",  span: 1:11 }
/// ```
///
/// Tokens are produced lazily, one per `get_next_token` call, and the
/// parser only ever holds the current lookahead.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// String tokens keep their quotes; the parser strips them when it
    /// builds a `StringLiteral`.
    pub value: String,

    /// Where the token starts.
    pub span: Span,
}

impl fmt::Display for Token {
    /// Prints only the token's source text. Error messages show what the
    /// user wrote, not the token's internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
