/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      lib.rs
 * Purpose:   Library root: tokenizer, parser, AST and output forms.
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

//! SPRIG front end.
//!
//! ```text
//! Source → Tokenizer → Tokens → Parser → AST → JSON / S-expression
//! ```
//!
//! Parsing is a pure in-memory transformation: no I/O, no logging, and the
//! first error aborts with a structured [`ParseError`].

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod sexpr;
pub mod span;

pub use ast::{to_json, Expression, Program, Statement};
pub use error::{LexError, ParseError};
pub use lexer::{tokenize, Token, TokenKind, Tokenizer};
pub use parser::{parse, Parser};
pub use span::Span;
