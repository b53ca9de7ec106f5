//! # pyrite
//!
//! pyrite is a rudimentary, indentation-structured scripting language in the
//! spirit of Python, interpreted in Rust. Programs are sequences of
//! statements grouped into blocks by four-space indentation, with `while`
//! loops, `if` conditionals, compound assignments, and a handful of built-in
//! functions operating on a single global namespace.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::Context,
        folder::fold,
        grouper::group_lines,
        lexer::tokenize_source,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser, simplified by the constant folder, and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source line numbers to nodes for error reporting.
/// - Classifies operators into assignment and value-producing forms.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, grouping,
/// parsing, folding, or running code. It standardizes error reporting and
/// carries the offending character, token, or name together with the source
/// line for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, indentation grouping, parsing, constant
/// folding, evaluation, value representations, and error handling to provide
/// a complete runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, grouper, parser, folder, and
///   evaluator.
/// - Provides entry points for parsing and running user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the value
/// promotion rules and the built-in functions, avoiding silent data loss
/// when moving between integer and floating-point types.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Parses source text into a folded program, ready to run.
///
/// The text passes through the whole front half of the pipeline: per-line
/// lexing, indentation grouping, statement and expression parsing, and the
/// constant-folding post-pass.
///
/// # Errors
/// Returns the first lexical, indentation, or syntax error the source
/// contains, or, from the folding pass, a host-semantics failure between
/// two literals such as `1 / 0`.
///
/// # Examples
/// ```
/// use pyrite::parse_source;
///
/// let program = parse_source("x = 0\nwhile x < 3:\n    x += 1\n").unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse_source("x = $\n").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Expr>, Box<dyn std::error::Error>> {
    let lines = tokenize_source(source)?;
    let grouped = group_lines(&lines);

    let mut program = Vec::new();
    for statement in parse_program(&grouped)? {
        program.push(fold(statement)?);
    }

    Ok(program)
}

/// Parses and runs a whole program against a fresh environment.
///
/// The environment starts with the built-ins (`print`, `int`, `input`,
/// `chr`) and the boolean constants bound, and is discarded when the run
/// ends; all observable output happens through `print`. The first error of
/// any stage aborts the run.
///
/// # Errors
/// Returns an error if parsing fails or if any statement fails to evaluate.
///
/// # Examples
/// ```
/// use pyrite::run_source;
///
/// // Simple program: runs to completion without errors.
/// assert!(run_source("x = 2 + 2\n").is_ok());
///
/// // 'y' is never bound, so the run aborts.
/// assert!(run_source("x = y + 1\n").is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_source(source)?;

    let mut context = Context::new();
    context.run(&program)?;

    Ok(())
}
