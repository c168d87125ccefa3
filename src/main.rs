/*
 * ==========================================================================
 * SPRIG - Parse from Scratch!
 * ==========================================================================
 * 
 * File:      main.rs
 * Purpose:   Command-line driver: reads a source file and prints its AST.
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

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use sprig::diagnostics::DiagnosticPrinter;
use sprig::sexpr::to_sexpr;
use sprig::ParseError;

/// What to print for a successfully scanned/parsed source.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Json,
    SExpr,
    Tokens,
}

struct Options {
    format: Format,
    compact: bool,
    input_path: Option<String>,
}

fn parse_args() -> Result<Options> {
    let mut args = std::env::args().skip(1);
    let mut options = Options {
        format: Format::Json,
        compact: false,
        input_path: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let name = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("Missing format name after {arg}"))?;
                options.format = match name.as_str() {
                    "json" => Format::Json,
                    "sexpr" => Format::SExpr,
                    "tokens" => Format::Tokens,
                    other => bail!("Unknown format '{other}' (expected json, sexpr or tokens)"),
                };
            }
            "--compact" => options.compact = true,
            flag if flag.starts_with('-') && flag != "-" => bail!("Unknown flag '{flag}'"),
            _ => {
                if options.input_path.is_some() {
                    bail!("Only one input file is supported");
                }
                options.input_path = Some(arg);
            }
        }
    }

    Ok(options)
}

fn read_source(path: Option<&str>) -> Result<(String, String)> {
    match path {
        Some(path) if path != "-" => {
            let source = fs::read_to_string(path).with_context(|| format!("Reading {path}"))?;
            Ok((path.to_string(), source))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Reading stdin")?;
            Ok(("<stdin>".to_string(), buffer))
        }
    }
}

fn main() -> Result<ExitCode> {
    let options = parse_args()?;
    let (file_name, source) = read_source(options.input_path.as_deref())?;
    let printer = DiagnosticPrinter::new(file_name, source.as_str());

    if options.format == Format::Tokens {
        match sprig::tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{} {}", token.kind, token.value);
                }
                return Ok(ExitCode::SUCCESS);
            }
            Err(err) => {
                printer.print(&ParseError::from(err));
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let program = match sprig::parse(&source) {
        Ok(program) => program,
        Err(err) => {
            printer.print(&err);
            return Ok(ExitCode::FAILURE);
        }
    };

    match options.format {
        Format::SExpr => println!("{}", to_sexpr(&program)),
        _ if options.compact => {
            println!("{}", serde_json::to_string(&program).context("Serializing AST")?)
        }
        _ => println!(
            "{}",
            serde_json::to_string_pretty(&program).context("Serializing AST")?
        ),
    }

    Ok(ExitCode::SUCCESS)
}
