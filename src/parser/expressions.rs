//! Expression parsing implementation
//!
//! Every token has up to two parse functions: a *prefix* parse, used when the
//! token starts an expression, and an *infix* parse, used when it follows a
//! complete left operand. [`Token::left_binding_power`] decides how far the
//! infix parse may reach.
//!
//! # Supported Expressions
//!
//! - Literals: integer and floating constants, with suffixes
//! - Identifiers
//! - Binary operators: arithmetic, shift, comparison, bitwise, logical,
//!   assignment (simple and compound) and comma
//! - Prefix: `++ -- + - ! ~ * & sizeof` and casts `(type)expr`
//! - Postfix: `++ --`, `.`, `->`, calls `f(...)`, subscripts `a[i]`
//! - Ternary: `? :`
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::AstNode;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::syntax::{BindingPower, Operator, Precedence};

impl Token {
    /// How strongly the token binds to an expression on its left.
    pub(crate) fn left_binding_power(&self) -> BindingPower {
        match self {
            Token::Operator(op) => op
                .infix()
                .map_or(BindingPower::NONE, Precedence::left_binding_power),
            Token::LParen | Token::LBracket => Precedence::POSTFIX.left_binding_power(),
            Token::Question => Precedence::CONDITIONAL.left_binding_power(),
            _ => BindingPower::NONE,
        }
    }
}

impl Parser<'_> {
    /// Parse a token that starts an expression (null denotation).
    pub(crate) fn parse_prefix(&mut self, token: Token) -> Result<AstNode, ParseError> {
        match token {
            Token::Number { text, is_float } => Ok(AstNode::Number { text, is_float }),
            Token::Identifier(name) => {
                if self.table().is_type_word(&name) {
                    return Err(ParseError::TypeInExpression(name));
                }
                Ok(AstNode::Identifier(name))
            }
            Token::LParen => self.parse_group(),
            Token::Cast(type_name) => {
                let operand = self.parse_operand(Precedence::UNARY.right_binding_power())?;
                Ok(AstNode::TypeCast {
                    type_name,
                    operand: Box::new(operand),
                })
            }
            Token::Operator(Operator::Sizeof) => self.parse_sizeof(),
            Token::Operator(op) if op.is_prefix() => {
                let operand = self.parse_operand(Precedence::UNARY.right_binding_power())?;
                Ok(AstNode::prefix(op, operand))
            }
            other => Err(ParseError::UnexpectedPrefix(other.to_string())),
        }
    }

    /// Parse a token that follows a complete expression (left denotation).
    ///
    /// The climbing loop only hands over tokens with a left binding power,
    /// which all have an arm here; anything else is reported, not assumed.
    pub(crate) fn parse_infix(&mut self, token: Token, left: AstNode) -> Result<AstNode, ParseError> {
        match token {
            Token::LParen => self.parse_call(left),
            Token::LBracket => self.parse_subscript(left),
            Token::Question => self.parse_ternary(left),
            Token::Operator(op) if op.is_postfix() => Ok(AstNode::postfix(op, left)),
            Token::Operator(op) => match op.infix() {
                Some(precedence) => {
                    let right = self.parse_operand(precedence.right_binding_power())?;
                    Ok(AstNode::binary(op, left, right))
                }
                None => Err(ParseError::UnexpectedInfix(op.to_string())),
            },
            other => Err(ParseError::UnexpectedInfix(other.to_string())),
        }
    }

    /// `( expr )`: grouping only, the parentheses leave no node behind.
    fn parse_group(&mut self) -> Result<AstNode, ParseError> {
        if self.check(&Token::RParen) {
            return Err(ParseError::EmptyParens);
        }
        let inner = self.parse_expression(BindingPower::EXPRESSION)?;
        self.expect_token(&Token::RParen, ParseError::UnmatchedParen)?;
        inner.ok_or(ParseError::MissingOperand)
    }

    /// `sizeof (type)` or `sizeof expr`.
    fn parse_sizeof(&mut self) -> Result<AstNode, ParseError> {
        let operand = if let Token::Cast(type_name) = &self.current {
            let operand = AstNode::TypeSpec(type_name.clone());
            self.advance()?;
            operand
        } else {
            self.parse_operand(Precedence::UNARY.right_binding_power())?
        };
        Ok(AstNode::prefix(Operator::Sizeof, operand))
    }

    /// Argument list after `callee(`. Each argument stops short of the comma
    /// operator, which separates arguments here.
    fn parse_call(&mut self, callee: AstNode) -> Result<AstNode, ParseError> {
        let mut arguments = Vec::new();

        if self.check(&Token::RParen) {
            self.advance()?;
        } else {
            loop {
                let argument = self.parse_expression(BindingPower::ARGUMENT)?;
                if self.check(&Token::Operator(Operator::Comma)) {
                    self.advance()?;
                    arguments.push(argument.ok_or(ParseError::MissingOperand)?);
                } else if self.check(&Token::RParen) {
                    self.advance()?;
                    arguments.push(argument.ok_or(ParseError::MissingOperand)?);
                    break;
                } else {
                    return Err(ParseError::UnmatchedParen);
                }
            }
        }

        Ok(AstNode::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn parse_subscript(&mut self, base: AstNode) -> Result<AstNode, ParseError> {
        if self.check(&Token::RBracket) {
            return Err(ParseError::EmptySubscript);
        }
        let index = self.parse_expression(BindingPower::EXPRESSION)?;
        self.expect_token(&Token::RBracket, ParseError::UnmatchedBracket)?;

        Ok(AstNode::Subscript {
            base: Box::new(base),
            index: Box::new(index.ok_or(ParseError::MissingOperand)?),
        })
    }

    /// `cond ? then : else`. The middle is bracketed by `?` and `:` and takes
    /// a full expression; the else branch associates to the right.
    fn parse_ternary(&mut self, condition: AstNode) -> Result<AstNode, ParseError> {
        let then_branch = self.parse_expression(BindingPower::EXPRESSION)?;
        self.expect_token(&Token::Colon, ParseError::UnmatchedConditional)?;
        let then_branch = then_branch.ok_or(ParseError::MissingOperand)?;
        let else_branch = self.parse_operand(Precedence::CONDITIONAL.right_binding_power())?;

        Ok(AstNode::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::AstNode;
    use crate::parser::lexer::{Lexer, Token};
    use crate::parser::parse::{ParseError, Parser};
    use crate::parser::syntax::{BindingPower, Operator, Precedence};

    #[test]
    fn test_tokens_without_infix_parse_are_rejected() {
        let mut parser = Parser::new(Lexer::new("b")).unwrap();
        let left = AstNode::identifier("a");
        assert_eq!(
            parser.parse_infix(Token::RParen, left.clone()).unwrap_err(),
            ParseError::UnexpectedInfix(")".to_string())
        );
        assert_eq!(
            parser
                .parse_infix(Token::Operator(Operator::Not), left.clone())
                .unwrap_err()
                .to_string(),
            "Unexpected (led) encounter of token type: '!'"
        );
        assert_eq!(
            parser.parse_infix(Token::Identifier("c".to_string()), left).unwrap_err(),
            ParseError::UnexpectedInfix("c".to_string())
        );
    }

    #[test]
    fn test_left_binding_powers() {
        assert_eq!(
            Token::Operator(Operator::Plus).left_binding_power(),
            Precedence::ADDITIVE.left_binding_power()
        );
        assert_eq!(
            Token::LBracket.left_binding_power(),
            Token::Operator(Operator::Arrow).left_binding_power()
        );
        assert_eq!(Token::Operator(Operator::Not).left_binding_power(), BindingPower::NONE);
        assert_eq!(Token::RParen.left_binding_power(), BindingPower::NONE);
        assert_eq!(Token::Identifier("x".into()).left_binding_power(), BindingPower::NONE);
    }
}
