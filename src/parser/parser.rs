/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      parser/parser.rs
 * Purpose:   Core recursive-descent parser state and the public `parse()`
 *            entry point.
 * 
 * The grammar itself is split across sibling modules:
 * - `statements.rs`   → statement-level grammar (`if`, `for`, `def`, …)
 * - `expressions.rs`  → expression grammar & operator precedence
 * - `helpers.rs`      → `eat` and lookahead inspection
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

use crate::ast::Program;
use crate::error::ParseError;
use crate::lexer::token::Token;
use crate::lexer::Tokenizer;

/// The core SPRIG recursive-descent parser.
///
/// This structure maintains:
/// - The tokenizer, which yields tokens on demand
/// - Exactly one token of lookahead (`None` at end of input)
///
/// The grammar is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks. No production ever looks further ahead than `lookahead`.
pub struct Parser {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) lookahead: Option<Token>,
}

/// Public entry point for the SPRIG parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Tokenizer → Tokens → Parser → AST
/// ```
///
/// # Example
/// ```rust
/// let program = sprig::parse("let x = 1 + 2;").unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new().parse(source)
}

impl Parser {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lookahead: None,
        }
    }

    /// Parses `source` into a `Program`.
    ///
    /// The tokenizer is re-initialized on every call, so one parser can be
    /// reused for any number of sources.
    ///
    /// # Behavior
    /// - Statements are parsed in strict left-to-right order.
    /// - The first lexical or grammatical error aborts the parse.
    pub fn parse(&mut self, source: &str) -> Result<Program, ParseError> {
        self.tokenizer.init(source);
        self.lookahead = None;

        // Prime the lookahead
        self.lookahead = self.tokenizer.get_next_token()?;

        self.program()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
