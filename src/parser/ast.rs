// AST (Abstract Syntax Tree) definitions for C expressions

use super::syntax::{Operator, Precedence};

/// Whether a unary operator is written before or after its operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Postfix,
}

/// AST nodes for one expression.
///
/// Interior nodes own their children; a missing operand is rejected by the
/// parser, so every `Box` here points at a real subexpression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// Literal spelled exactly as written, suffix included
    Number { text: String, is_float: bool },
    Identifier(String),
    /// Type name operand of `sizeof (type)`; not valid anywhere else
    TypeSpec(String),
    UnaryOp {
        op: Operator,
        fixity: Fixity,
        operand: Box<AstNode>,
    },
    BinaryOp {
        op: Operator,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Subscript {
        base: Box<AstNode>,
        index: Box<AstNode>,
    },
    /// Function call; `arguments` is empty for `f()`
    Call {
        callee: Box<AstNode>,
        arguments: Vec<AstNode>,
    },
    TypeCast {
        type_name: String,
        operand: Box<AstNode>,
    },
    Ternary {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Box<AstNode>,
    },
}

impl AstNode {
    pub fn number(text: &str, is_float: bool) -> Self {
        AstNode::Number {
            text: text.to_string(),
            is_float,
        }
    }

    pub fn identifier(name: &str) -> Self {
        AstNode::Identifier(name.to_string())
    }

    pub fn binary(op: Operator, left: AstNode, right: AstNode) -> Self {
        AstNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn prefix(op: Operator, operand: AstNode) -> Self {
        AstNode::UnaryOp {
            op,
            fixity: Fixity::Prefix,
            operand: Box::new(operand),
        }
    }

    pub fn postfix(op: Operator, operand: AstNode) -> Self {
        AstNode::UnaryOp {
            op,
            fixity: Fixity::Postfix,
            operand: Box::new(operand),
        }
    }

    /// Grouping strength of the node, `None` for leaves.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            AstNode::Number { .. } | AstNode::Identifier(_) | AstNode::TypeSpec(_) => None,
            AstNode::UnaryOp {
                fixity: Fixity::Prefix,
                ..
            }
            | AstNode::TypeCast { .. } => Some(Precedence::UNARY),
            AstNode::UnaryOp {
                fixity: Fixity::Postfix,
                ..
            }
            | AstNode::Subscript { .. }
            | AstNode::Call { .. } => Some(Precedence::POSTFIX),
            AstNode::BinaryOp { op, .. } => op.infix(),
            AstNode::Ternary { .. } => Some(Precedence::CONDITIONAL),
        }
    }

    pub fn is_comma(&self) -> bool {
        matches!(
            self,
            AstNode::BinaryOp {
                op: Operator::Comma,
                ..
            }
        )
    }

    pub fn is_sizeof(&self) -> bool {
        matches!(
            self,
            AstNode::UnaryOp {
                op: Operator::Sizeof,
                fixity: Fixity::Prefix,
                ..
            }
        )
    }
}
