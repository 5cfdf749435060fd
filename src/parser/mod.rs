//! C expression parser
//!
//! This module transforms the text of one C expression into an Abstract
//! Syntax Tree (AST):
//! - [`syntax`]: Operator, precedence and type tables shared by every lexer
//! - [`lexer`]: Tokenization (source text → tokens), including cast lookahead
//! - [`parse`]: Pratt parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported C Subset
//!
//! - Constants: decimal, octal and hex integers, floating constants, with suffixes
//! - Every C operator, with C's precedence and associativity
//! - Casts and `sizeof (type)` for built-in types only; without declarations
//!   there is no way to recognise `struct`, `union`, `enum` or typedef names
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser over a closed token enum. No external parser
//! generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod syntax;
