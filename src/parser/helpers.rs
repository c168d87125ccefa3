/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      parser/helpers.rs
 * Purpose:   Token consumption and lookahead helpers shared by every
 *            grammar production.
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

use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::Span;

impl Parser {
    /// Consumes the lookahead if it is of the `expected` kind.
    ///
    /// Every terminal in the grammar goes through here. On success the
    /// tokenizer is advanced and the lookahead refreshed, and the consumed
    /// token is returned.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` when there is no lookahead
    /// - `UnexpectedToken` when the lookahead has another kind
    /// - `Lex` when refreshing the lookahead fails
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        match &self.lookahead {
            None => return Err(ParseError::UnexpectedEndOfInput { expected }),
            Some(token) if token.kind != expected => {
                return Err(ParseError::UnexpectedToken {
                    found: token.value.clone(),
                    expected,
                    span: token.span,
                });
            }
            Some(_) => {}
        }

        let next = self.tokenizer.get_next_token()?;

        std::mem::replace(&mut self.lookahead, next)
            .ok_or(ParseError::UnexpectedEndOfInput { expected })
    }

    /// Consumes an operator token and converts its text.
    pub(crate) fn operator<T>(
        &mut self,
        kind: TokenKind,
        convert: fn(&str) -> Option<T>,
    ) -> Result<T, ParseError> {
        let token = self.eat(kind)?;

        convert(&token.value).ok_or_else(|| ParseError::UnexpectedToken {
            found: token.value,
            expected: kind,
            span: token.span,
        })
    }

    /// Kind of the current lookahead, `None` at end of input.
    pub(crate) fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Checks the lookahead kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead_kind() == Some(kind)
    }

    /// Where the lookahead starts. Defaults to the start of the source once
    /// input is exhausted.
    pub(crate) fn lookahead_span(&self) -> Span {
        self.lookahead
            .as_ref()
            .map(|token| token.span)
            .unwrap_or_default()
    }
}
