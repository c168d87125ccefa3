/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      diagnostics.rs
 * Purpose:   Compiler-style rendering of parse errors.
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
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for SPRIG parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The errors themselves only carry structured data; all presentation
/// lives here.
pub struct DiagnosticPrinter {
    /// Full source code of the file being parsed.
    source: String,

    /// Name of the source file (e.g. `main.sp`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders `error` into a multi-line diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_UNEXPECTED_TOKEN]: Unexpected token: ")", expected: ";"
    ///   --> example.sp:2:7
    ///    |
    ///  2 | x = 1 )
    ///    |       ^
    /// ```
    ///
    /// Errors without a span (unexpected end of input) point just past the
    /// last character of the source.
    pub fn render(&self, error: &ParseError) -> String {
        let span = error.span().unwrap_or_else(|| self.end_of_source());
        let Span { line, column } = span;

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}\n   |\n{:>3} | {}\n   | {}^\n",
            error.code(),
            error,
            self.file_name,
            span,
            line,
            src_line,
            " ".repeat(column)
        );

        if let Some(help) = error.help() {
            out.push_str(&format!("\nhelp: {}\n", help));
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }

    fn end_of_source(&self) -> Span {
        Span::default().advanced_by(&self.source)
    }
}
