/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      lexer.rs
 * Purpose:   Pull-based tokenizer driven by an ordered table of anchored
 *            regular-expression rules.
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

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::LexError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// One entry of the tokenizer's rule table.
///
/// A `kind` of `None` marks input that is consumed but never reported
/// (whitespace and comments).
struct Rule {
    pattern: Regex,
    kind: Option<TokenKind>,
}

impl Rule {
    fn new(pattern: &str, kind: Option<TokenKind>) -> Self {
        let pattern = Regex::new(pattern).expect("tokenizer rule must be a valid regex");
        Self { pattern, kind }
    }
}

lazy_static! {
    /// The ordered rule table, compiled once per process.
    static ref RULES: Vec<Rule> = rules();
}

/// Builds the ordered rule table.
///
/// Order resolves ambiguity:
/// - numbers before words
/// - two-character operators (`==`, `!=`, `<=`, `>=`, `+=`, `&&`, `||`)
///   before their one-character prefixes
/// - comments before the `/` operator
///
/// Every pattern is anchored with `^` so it only matches at the cursor.
/// Keywords have no rule of their own: the word rule matches them and
/// `keyword_kind` reclassifies the word.
fn rules() -> Vec<Rule> {
    vec![
        // Whitespace & comments
        Rule::new(r"^\s+", None),
        Rule::new(r"^//.*", None),
        Rule::new(r"^/\*[\s\S]*?\*/", None),
        // Punctuation
        Rule::new(r"^;", Some(TokenKind::Semicolon)),
        Rule::new(r"^\{", Some(TokenKind::LeftBrace)),
        Rule::new(r"^\}", Some(TokenKind::RightBrace)),
        Rule::new(r"^\(", Some(TokenKind::LeftParen)),
        Rule::new(r"^\)", Some(TokenKind::RightParen)),
        Rule::new(r"^,", Some(TokenKind::Comma)),
        // Literals, names & keywords
        Rule::new(r"^[0-9]+", Some(TokenKind::Number)),
        Rule::new(r"^\w+", Some(TokenKind::Identifier)),
        // Equality before assignment
        Rule::new(r"^[=!]=", Some(TokenKind::EqualityOperator)),
        Rule::new(r"^=", Some(TokenKind::SimpleAssign)),
        Rule::new(r"^[*/+\-]=", Some(TokenKind::ComplexAssign)),
        // Math
        Rule::new(r"^[+\-]", Some(TokenKind::AdditiveOperator)),
        Rule::new(r"^[*/]", Some(TokenKind::MultiplicativeOperator)),
        Rule::new(r"^[<>]=?", Some(TokenKind::RelationalOperator)),
        // Logic
        Rule::new(r"^&&", Some(TokenKind::LogicalAnd)),
        Rule::new(r"^\|\|", Some(TokenKind::LogicalOr)),
        Rule::new(r"^!", Some(TokenKind::LogicalNot)),
        // Strings
        Rule::new(r#"^"[^"]*""#, Some(TokenKind::String)),
        Rule::new(r"^'[^']*'", Some(TokenKind::String)),
    ]
}

/// Lazily splits source text into tokens.
///
/// The tokenizer owns a copy of the current source and a byte cursor into
/// it. Each call to [`Tokenizer::get_next_token`] advances past exactly one
/// reported lexeme, silently skipping any whitespace and comments in front
/// of it.
///
/// # Example
/// ```rust
/// use sprig::lexer::{Tokenizer, TokenKind};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.init("let x;");
///
/// let token = tokenizer.get_next_token().unwrap().unwrap();
/// assert_eq!(token.kind, TokenKind::Let);
/// ```
pub struct Tokenizer {
    source: String,
    cursor: usize,
    position: Span,
}

impl Tokenizer {
    /// Creates a tokenizer over an empty source.
    pub fn new() -> Self {
        Self {
            source: String::new(),
            cursor: 0,
            position: Span::default(),
        }
    }

    /// Resets the tokenizer to the start of `source`.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
        self.position = Span::default();
    }

    /// Returns `true` once the cursor has reached the end of the source.
    pub fn is_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Returns `true` while unscanned input remains.
    ///
    /// Remaining input may still be whitespace or comments only, in which
    /// case the next call to `get_next_token` yields `None`.
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Scans and returns the next token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` for the next lexeme
    /// - `Ok(None)` once the end of input is reached
    /// - `Err(LexError)` when no rule matches at the cursor
    pub fn get_next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if !self.has_more_tokens() {
                return Ok(None);
            }

            let start = self.position;

            let (kind, len) = match self.match_rule() {
                Some(found) => found,
                None => return Err(self.unexpected_character()),
            };

            let value = self.consume(len);

            if let Some(kind) = kind {
                let kind = match kind {
                    TokenKind::Identifier => keyword_kind(&value).unwrap_or(kind),
                    _ => kind,
                };

                return Ok(Some(Token {
                    kind,
                    value,
                    span: start,
                }));
            }
        }
    }

    /// Tries every rule at the cursor and returns the first non-empty match.
    fn match_rule(&self) -> Option<(Option<TokenKind>, usize)> {
        let rest = &self.source[self.cursor..];

        RULES.iter().find_map(|rule| {
            rule.pattern
                .find(rest)
                .filter(|m| m.end() > m.start())
                .map(|m| (rule.kind, m.end()))
        })
    }

    /// Moves the cursor over `len` bytes and returns the text passed.
    fn consume(&mut self, len: usize) -> String {
        let text = self.source[self.cursor..self.cursor + len].to_string();
        self.cursor += len;
        self.position = self.position.advanced_by(&text);
        text
    }

    fn unexpected_character(&self) -> LexError {
        LexError::UnexpectedCharacter {
            character: self.source[self.cursor..].chars().next().unwrap_or_default(),
            span: self.position,
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes a whole source string at once.
///
/// Convenience wrapper used by the `--format tokens` mode of the CLI and by
/// tests; the parser itself pulls tokens one at a time.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.init(source);

    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.get_next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
