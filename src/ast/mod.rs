/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      ast/mod.rs
 * Purpose:   Root module for the SPRIG abstract syntax tree.
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

//! The tree is a pure output value: built bottom-up by the parser, never
//! mutated afterwards, with no spans and no references back into the
//! tokenizer or the source text.

pub mod expr;
pub mod stmt;

pub use expr::*;
pub use stmt::*;

/// Converts a program into a `serde_json::Value` for structural comparison.
///
/// `Value` objects do not keep key order. Serialize the `Program` directly
/// (`serde_json::to_string_pretty`) to get text where every node starts with
/// its `"type"` key followed by its fields in declaration order.
pub fn to_json(program: &Program) -> serde_json::Value {
    serde_json::to_value(program).unwrap_or(serde_json::Value::Null)
}
