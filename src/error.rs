/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      error.rs
 * Purpose:   Structured errors raised by the tokenizer and the parser.
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

use crate::lexer::token::TokenKind;
use crate::span::Span;
use thiserror::Error;

/// Raised by the tokenizer when no rule matches at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected token: \"{character}\"")]
    UnexpectedCharacter { character: char, span: Span },
}

impl LexError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        "E_LEX"
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }
}

/// Raised by the parser on the first malformed construct.
///
/// There is no recovery: the first error aborts the parse and no partial
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer could not classify the input.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Input ended while a specific terminal was required.
    #[error("Unexpected end of input, expected: \"{expected}\"")]
    UnexpectedEndOfInput { expected: TokenKind },

    /// The lookahead does not match the terminal required here.
    #[error("Unexpected token: \"{found}\", expected: \"{expected}\"")]
    UnexpectedToken {
        found: String,
        expected: TokenKind,
        span: Span,
    },

    /// The left side of an assignment is not an identifier.
    #[error("Invalid left-hand side in assignment expression")]
    InvalidAssignmentTarget { span: Span },
}

impl ParseError {
    /// Stable error code (E_LEX, E_UNEXPECTED_EOF, …)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedEndOfInput { .. } => "E_UNEXPECTED_EOF",
            ParseError::UnexpectedToken { .. } => "E_UNEXPECTED_TOKEN",
            ParseError::InvalidAssignmentTarget { .. } => "E_ASSIGN_TARGET",
        }
    }

    /// Primary source location, when the error points at a token.
    ///
    /// End-of-input errors have no token to point at.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(err) => Some(err.span()),
            ParseError::UnexpectedEndOfInput { .. } => None,
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::InvalidAssignmentTarget { span } => Some(*span),
        }
    }

    /// Optional follow-up hint shown under a rendered diagnostic.
    pub fn help(&self) -> Option<String> {
        match self {
            ParseError::UnexpectedEndOfInput { expected } => {
                Some(format!("the source ended before a `{}` was found", expected))
            }
            ParseError::InvalidAssignmentTarget { .. } => {
                Some("only a plain variable name can be assigned to".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_expected_and_found() {
        let err = ParseError::UnexpectedToken {
            found: ")".to_string(),
            expected: TokenKind::Semicolon,
            span: Span::new(1, 4),
        };
        assert_eq!(err.to_string(), "Unexpected token: \")\", expected: \";\"");
        assert_eq!(err.code(), "E_UNEXPECTED_TOKEN");
    }

    #[test]
    fn lex_errors_pass_through_unchanged() {
        let lex = LexError::UnexpectedCharacter {
            character: '@',
            span: Span::new(2, 0),
        };
        let err = ParseError::from(lex.clone());
        assert_eq!(err.to_string(), lex.to_string());
        assert_eq!(err.span(), Some(Span::new(2, 0)));
        assert_eq!(err.code(), "E_LEX");
    }
}
