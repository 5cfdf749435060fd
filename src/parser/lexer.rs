//! Lexer (tokenizer) for C expressions
//!
//! Produces one [`Token`] at a time from a borrowed source string. Numbers are
//! tried before identifiers and both before the symbol table, so `.5` is a
//! float and not member access followed by `5`.
//!
//! The only non-trivial token is `(`. The lexer looks past it, and when the
//! next word names a type it scans the whole parenthesized type name and
//! returns a single [`Token::Cast`]. The parser never sees the pieces, which
//! is what lets `sizeof (int)` and `(int)x` parse without a symbol table.

use super::syntax::{Operator, Symbol, SyntaxTable, MAX_SYMBOL_LEN, SYNTAX};
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal, spelled exactly as in the source (suffix included)
    Number { text: String, is_float: bool },
    Identifier(String),
    Operator(Operator),
    /// Parenthesized type name, e.g. `(unsigned int *)` with text `unsigned int *`
    Cast(String),
    LParen,
    RParen,
    LBracket,
    RBracket,
    Question,
    Colon,
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { text, .. } => f.write_str(text),
            Token::Identifier(name) => f.write_str(name),
            Token::Operator(op) => f.write_str(op.symbol()),
            Token::Cast(type_name) => write!(f, "({})", type_name),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::Question => f.write_str("?"),
            Token::Colon => f.write_str(":"),
            Token::End => f.write_str("end of input"),
        }
    }
}

/// Malformed contents of a cast parenthesis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("* in typecast before any type")]
    StarBeforeType,
    #[error("Typecast qualifier after a type")]
    QualifierAfterType,
    #[error("Typecast qualifier after a *")]
    QualifierAfterStar,
    #[error("Typecast type after another type")]
    SecondType,
    #[error("Typecast type after a *")]
    TypeAfterStar,
    #[error("Unexpected non-typey symbol in typecast: {0}")]
    Unexpected(String),
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Failed in lexing input: {remaining}")]
    NoMatch { remaining: String },
    #[error(transparent)]
    MalformedCast(#[from] CastError),
}

/// Result of scanning one lexeme; whitespace is matched and then dropped.
enum Lexeme {
    Skip,
    Token(Token),
}

/// Lexer for a single C expression
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    table: &'a SyntaxTable,
}

/// Start lexing `source` with the built-in C table.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_table(source, &SYNTAX)
    }

    pub fn with_table(source: &'a str, table: &'a SyntaxTable) -> Self {
        Self {
            source,
            position: 0,
            table,
        }
    }

    pub fn table(&self) -> &'a SyntaxTable {
        self.table
    }

    /// Next significant token, or [`Token::End`] once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        Ok(self.next_significant()?.unwrap_or(Token::End))
    }

    /// Lex the remaining input into a vector, without the trailing `End`.
    pub fn collect_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_significant()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_significant(&mut self) -> Result<Option<Token>, LexError> {
        while !self.is_at_end() {
            if let Lexeme::Token(token) = self.scan()? {
                log::trace!("token {:?} ending at {}", token, self.position);
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    /// Look at the next significant token without consuming it.
    fn peek_token(&mut self) -> Result<Option<Token>, LexError> {
        let saved = self.position;
        let result = self.next_significant();
        self.position = saved;
        result
    }

    /// Scan exactly one lexeme at the cursor.
    fn scan(&mut self) -> Result<Lexeme, LexError> {
        let rest = self.rest();
        if rest.is_empty() {
            return Err(LexError::UnexpectedEnd);
        }

        for pattern in self.table.numbers() {
            if let Some(body) = pattern.body.find(rest) {
                let mut len = body.end();
                if let Some(suffix) = pattern.suffix.find(&rest[len..]) {
                    len += suffix.end();
                }
                self.position += len;
                return Ok(Lexeme::Token(Token::Number {
                    text: rest[..len].to_string(),
                    is_float: pattern.is_float,
                }));
            }
        }

        if let Some(word) = self.table.identifier().find(rest) {
            self.position += word.end();
            let word = word.as_str();
            let token = match self.table.keyword(word) {
                Some(op) => Token::Operator(op),
                None => Token::Identifier(word.to_string()),
            };
            return Ok(Lexeme::Token(token));
        }

        for width in (1..=MAX_SYMBOL_LEN).rev() {
            let Some(text) = rest.get(..width) else {
                continue;
            };
            if let Some(symbol) = self.table.symbol(text) {
                self.position += width;
                return self.symbol(symbol);
            }
        }

        Err(LexError::NoMatch {
            remaining: rest.to_string(),
        })
    }

    fn symbol(&mut self, symbol: Symbol) -> Result<Lexeme, LexError> {
        let token = match symbol {
            Symbol::Whitespace => return Ok(Lexeme::Skip),
            Symbol::Operator(op) => Token::Operator(op),
            Symbol::LParen => self.open_paren()?,
            Symbol::RParen => Token::RParen,
            Symbol::LBracket => Token::LBracket,
            Symbol::RBracket => Token::RBracket,
            Symbol::Question => Token::Question,
            Symbol::Colon => Token::Colon,
        };
        Ok(Lexeme::Token(token))
    }

    /// Decide between a grouping/call parenthesis and a cast.
    fn open_paren(&mut self) -> Result<Token, LexError> {
        match self.peek_token()? {
            Some(Token::Identifier(word)) if self.table.is_type_word(&word) => {
                log::debug!("'(' at {} opens a cast starting with '{}'", self.position - 1, word);
                self.scan_cast()
            }
            _ => Ok(Token::LParen),
        }
    }

    /// Consume a type name up to its closing `)`.
    ///
    /// Callers enter only after peeking a type word, but the scan still
    /// checks the order of every word it consumes.
    fn scan_cast(&mut self) -> Result<Token, LexError> {
        let mut words: Vec<String> = Vec::new();
        let mut seen_qualifier = false;
        let mut seen_type = false;
        let mut seen_star = false;

        loop {
            let token = match self.scan()? {
                Lexeme::Skip => continue,
                Lexeme::Token(token) => token,
            };

            match token {
                Token::RParen => break,
                Token::Operator(Operator::Star) => {
                    if !seen_qualifier && !seen_type {
                        return Err(CastError::StarBeforeType.into());
                    }
                    seen_star = true;
                    words.push(Operator::Star.symbol().to_string());
                }
                Token::Identifier(word) if self.table.is_qualifier(&word) => {
                    if seen_type {
                        return Err(CastError::QualifierAfterType.into());
                    }
                    if seen_star {
                        return Err(CastError::QualifierAfterStar.into());
                    }
                    seen_qualifier = true;
                    words.push(word);
                }
                Token::Identifier(word) if self.table.is_base_type(&word) => {
                    if seen_type {
                        return Err(CastError::SecondType.into());
                    }
                    if seen_star {
                        return Err(CastError::TypeAfterStar.into());
                    }
                    seen_type = true;
                    words.push(word);
                }
                other => return Err(CastError::Unexpected(other.to_string()).into()),
            }
        }

        Ok(Token::Cast(words.join(" ")))
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}
