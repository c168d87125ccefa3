/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      span.rs
 * Purpose:   Source positions attached to tokens and diagnostics.
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

use std::fmt;

/// A position inside the source text.
///
/// - `line` is 1-based
/// - `column` is 0-based and counted in characters, not bytes
///
/// Spans are attached to tokens and errors only. The AST never carries
/// them, so two parses of differently formatted but equivalent sources
/// produce identical trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the span reached after walking over `text` starting at `self`.
    pub fn advanced_by(self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        Self { line, column }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}
