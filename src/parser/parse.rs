//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct: the precedence-climbing loop,
//! error types, and helper methods shared by the per-token parse functions.
//!
//! # Parser Architecture
//!
//! The parser is a Pratt machine. It holds the lexer and a single current
//! token. [`Parser::parse_expression`] takes a token, lets it *start* an
//! expression (its prefix parse), then keeps letting following tokens
//! *extend* that expression (their infix parse) for as long as they bind
//! tighter than the caller allows.
//!
//! The prefix and infix parse functions live in `expressions`, which extends
//! [`Parser`] with another `impl` block.

use crate::parser::ast::AstNode;
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::syntax::{BindingPower, SyntaxTable};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Operator missing operand?")]
    MissingOperand,
    #[error("Unmatched left parenthesis")]
    UnmatchedParen,
    #[error("Unmatched left bracket")]
    UnmatchedBracket,
    #[error("Empty parentheses expression")]
    EmptyParens,
    #[error("Empty subscript")]
    EmptySubscript,
    #[error("Unmatched : for ?")]
    UnmatchedConditional,
    #[error("Cannot use type in expression: {0}")]
    TypeInExpression(String),
    #[error("Unexpected (nud) encounter of token type: '{0}'")]
    UnexpectedPrefix(String),
    #[error("Unexpected (led) encounter of token type: '{0}'")]
    UnexpectedInfix(String),
    #[error("Trailing token: '{0}'")]
    TrailingToken(String),
    #[error("Expression nested too deeply (limit {0})")]
    TooDeep(usize),
    #[error("Expression too large (limit {0} terms)")]
    TooLarge(usize),
}

/// Deepest chain of nested subexpressions the parser will recurse into.
pub const MAX_NESTING: usize = 256;

/// Most prefix and infix parses one expression may take. Also bounds the
/// height of the tree, which later passes walk recursively.
pub const MAX_TERMS: usize = 4096;

/// Pratt parser for one C expression
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) current: Token,
    depth: usize,
    terms: usize,
}

/// Parse the single expression produced by `lexer`.
pub fn parse(lexer: Lexer<'_>) -> Result<AstNode, ParseError> {
    Parser::new(lexer)?.parse()
}

impl<'a> Parser<'a> {
    /// Create a parser positioned on the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
            terms: 0,
        })
    }

    /// Parse one complete expression and require the input to end there.
    pub fn parse(mut self) -> Result<AstNode, ParseError> {
        let tree = self.parse_expression(BindingPower::EXPRESSION)?;
        if !self.is_at_end() {
            return Err(ParseError::TrailingToken(self.current.to_string()));
        }
        log::debug!("parsed {:?}", tree);
        tree.ok_or(ParseError::MissingOperand)
    }

    /// Precedence-climbing loop.
    ///
    /// Returns `None` only when the input is already exhausted; callers that
    /// need an operand go through [`Parser::parse_operand`].
    pub(crate) fn parse_expression(
        &mut self,
        min: BindingPower,
    ) -> Result<Option<AstNode>, ParseError> {
        if self.is_at_end() {
            return Ok(None);
        }
        if self.depth == MAX_NESTING {
            return Err(ParseError::TooDeep(MAX_NESTING));
        }

        self.depth += 1;
        let result = self.climb(min);
        self.depth -= 1;
        result.map(Some)
    }

    fn climb(&mut self, min: BindingPower) -> Result<AstNode, ParseError> {
        self.count_term()?;
        let token = self.advance()?;
        let mut left = self.parse_prefix(token)?;

        while min > self.current.left_binding_power() {
            self.count_term()?;
            let token = self.advance()?;
            left = self.parse_infix(token, left)?;
        }

        Ok(left)
    }

    fn count_term(&mut self) -> Result<(), ParseError> {
        if self.terms == MAX_TERMS {
            return Err(ParseError::TooLarge(MAX_TERMS));
        }
        self.terms += 1;
        Ok(())
    }

    /// Like [`Parser::parse_expression`], but the operand must exist.
    pub(crate) fn parse_operand(&mut self, min: BindingPower) -> Result<AstNode, ParseError> {
        self.parse_expression(min)?
            .ok_or(ParseError::MissingOperand)
    }

    // ===== Helper methods =====

    pub(crate) fn table(&self) -> &'a SyntaxTable {
        self.lexer.table()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current == Token::End
    }

    /// Move to the next token, returning the one advanced over.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        log::trace!("advance past {:?}", self.current);
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current) == std::mem::discriminant(token)
    }

    /// Consume `token` or fail with `error`.
    pub(crate) fn expect_token(&mut self, token: &Token, error: ParseError) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance()?;
            Ok(())
        } else {
            Err(error)
        }
    }
}
