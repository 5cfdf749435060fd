//! # Introduction
//!
//! cparen parses a single C expression and shows how C groups it, by
//! re-rendering the expression with parentheses: *full* parenthesization puts
//! a pair around every compound subexpression, *minimal* keeps only the pairs
//! the grouping depends on.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Block generator → blocks → rendering
//! ```
//!
//! 1. [`parser`]: tokenises the source (with cast lookahead) and builds an
//!    [`parser::ast::AstNode`] tree by precedence climbing.
//! 2. [`blocks`]: flattens the tree into annotated [`blocks::Block`]s and
//!    renders them with [`blocks::Parens::Full`] or [`blocks::Parens::Minimal`].
//! 3. [`report`]: text and JSON output of the `cparen` binary.
//! 4. [`ui`]: ratatui-based expression inspector; not part of the stable
//!    library API.
//!
//! ## Supported C subset
//!
//! Integer and floating constants, identifiers, the C operator set including
//! `sizeof` and casts to built-in types. Statements, declarations and the
//! preprocessor are out of scope.
//!
//! ```
//! use cparen::blocks::Parens;
//!
//! let full = cparen::render_expression("a = b + c * d", Parens::Full).unwrap();
//! assert_eq!(full, "a = (b + (c * d))");
//! ```

pub mod blocks;
pub mod parser;
pub mod report;
pub mod ui;

use blocks::{GenerateError, Parens};
use parser::lexer::tokenize;
use parser::parse::ParseError;
use thiserror::Error;

pub use blocks::{generate_blocks, render, Block};
pub use parser::ast::AstNode;
pub use parser::parse::parse;

/// Any failure of the source-to-blocks pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Lex, parse and generate blocks for `source`.
pub fn parenthesize(source: &str) -> Result<Vec<Block>, Error> {
    let tree = parse(tokenize(source))?;
    Ok(generate_blocks(&tree)?)
}

/// Render `source` with the chosen parenthesization.
pub fn render_expression(source: &str, parens: Parens) -> Result<String, Error> {
    Ok(render(&parenthesize(source)?, parens))
}
