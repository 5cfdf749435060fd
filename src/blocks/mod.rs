//! Block generator
//!
//! Turns an [`AstNode`] tree into a flat sequence of annotated text fragments
//! ("blocks"). Concatenating the texts gives back the expression with every
//! possible pair of parentheses; [`render`] filters the sequence down to the
//! minimal or full rendering.
//!
//! Each parenthesis becomes a [`Block::Delimiter`] flagged with whether it can
//! be dropped (see [`policy`]). Operator blocks record the block ranges of
//! their operands so a consumer can highlight what an operator applies to.

pub mod policy;
pub mod render;

use crate::parser::ast::{AstNode, Fixity};
use crate::parser::syntax::{Assoc, Operator};
use policy::{Necessity, Slot};
use serde::Serialize;
use std::ops::Range;
use thiserror::Error;

pub use render::{render, Parens};

/// Block generation error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Cannot use type in expression: {0}")]
    TypeInExpression(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandKind {
    Integer,
    Float,
    Identifier,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Binary(Assoc),
    Prefix,
    Postfix,
    Ternary,
    Call,
    Subscript,
    Cast,
}

/// One annotated text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Grouping parenthesis; `optional` ones are left out of the minimal form
    Delimiter { text: &'static str, optional: bool },
    Operand { kind: OperandKind, text: String },
    /// Operator text. Multi-part operators (`? :`, `( , )`, `[ ]`) emit one
    /// block per part, all carrying the same operand ranges.
    Operator {
        kind: OperatorKind,
        text: String,
        description: String,
        operands: Vec<Range<usize>>,
    },
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Block::Delimiter { text, .. } => *text,
            Block::Operand { text, .. } | Block::Operator { text, .. } => text.as_str(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Block::Delimiter { optional: true, .. } => "optional parenthesis",
            Block::Delimiter { optional: false, .. } => "required parenthesis",
            Block::Operand { kind, .. } => match kind {
                OperandKind::Integer => "integer number",
                OperandKind::Float => "floating point number",
                OperandKind::Identifier => "identifier",
                OperandKind::Type => "type name",
            },
            Block::Operator { description, .. } => description.as_str(),
        }
    }

    /// Operand ranges of an operator block, empty for anything else.
    pub fn operands(&self) -> &[Range<usize>] {
        match self {
            Block::Operator { operands, .. } => operands,
            _ => &[],
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Block::Operator { .. })
    }

    /// Whether the block appears in the given rendering.
    pub fn is_visible(&self, parens: Parens) -> bool {
        match self {
            Block::Delimiter { optional, .. } => !optional || parens == Parens::Full,
            _ => true,
        }
    }
}

/// Generate the annotated block sequence for `tree`.
pub fn generate_blocks(tree: &AstNode) -> Result<Vec<Block>, GenerateError> {
    let mut generator = Generator::default();
    generator.visit(tree, None, Slot::Root)?;
    log::debug!("generated {} blocks", generator.blocks.len());
    Ok(generator.blocks)
}

#[derive(Default)]
struct Generator {
    blocks: Vec<Block>,
}

impl Generator {
    fn visit(
        &mut self,
        node: &AstNode,
        parent: Option<&AstNode>,
        slot: Slot,
    ) -> Result<(), GenerateError> {
        let necessity = policy::necessity(node, parent, slot);
        self.delimiter("(", necessity);

        match node {
            AstNode::Number { text, is_float } => {
                let kind = if *is_float {
                    OperandKind::Float
                } else {
                    OperandKind::Integer
                };
                self.push(Block::Operand {
                    kind,
                    text: text.clone(),
                });
            }
            AstNode::Identifier(name) => self.push(Block::Operand {
                kind: OperandKind::Identifier,
                text: name.clone(),
            }),
            AstNode::TypeSpec(type_name) => {
                if !parent.is_some_and(AstNode::is_sizeof) {
                    return Err(GenerateError::TypeInExpression(type_name.clone()));
                }
                self.push(Block::Operand {
                    kind: OperandKind::Type,
                    text: format!("({})", type_name),
                });
            }
            AstNode::UnaryOp {
                op,
                fixity: Fixity::Prefix,
                operand,
            } => {
                let text = match op {
                    Operator::Sizeof => "sizeof ",
                    _ => op.symbol(),
                };
                let description = unary_description(*op, Fixity::Prefix);
                let at = self.operator(OperatorKind::Prefix, text, description);
                let range = self.child(operand, node, Slot::Right)?;
                self.fill(&[at], vec![range]);
            }
            AstNode::UnaryOp {
                op,
                fixity: Fixity::Postfix,
                operand,
            } => {
                let range = self.child(operand, node, Slot::Left)?;
                let description = unary_description(*op, Fixity::Postfix);
                let at = self.operator(OperatorKind::Postfix, op.symbol(), description);
                self.fill(&[at], vec![range]);
            }
            AstNode::BinaryOp { op, left, right } => {
                let assoc = op.infix().map_or(Assoc::Left, |p| p.assoc);
                let left = self.child(left, node, Slot::Left)?;
                let at = self.operator(
                    OperatorKind::Binary(assoc),
                    binary_text(*op),
                    format!("{} associative binary operator {}", assoc, op),
                );
                let right = self.child(right, node, Slot::Right)?;
                self.fill(&[at], vec![left, right]);
            }
            AstNode::Subscript { base, index } => {
                let description = "binary operator subscript";
                let base = self.child(base, node, Slot::Left)?;
                let open = self.operator(OperatorKind::Subscript, "[", description);
                let index = self.child(index, node, Slot::Index)?;
                let close = self.operator(OperatorKind::Subscript, "]", description);
                self.fill(&[open, close], vec![base, index]);
            }
            AstNode::Call { callee, arguments } => {
                let description = "binary operator function call";
                let mut ranges = vec![self.child(callee, node, Slot::Left)?];
                let mut parts = vec![self.operator(OperatorKind::Call, "(", description)];
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        parts.push(self.operator(OperatorKind::Call, ", ", description));
                    }
                    ranges.push(self.child(argument, node, Slot::Argument)?);
                }
                parts.push(self.operator(OperatorKind::Call, ")", description));
                self.fill(&parts, ranges);
            }
            AstNode::TypeCast { type_name, operand } => {
                let at = self.operator(
                    OperatorKind::Cast,
                    format!("({})", type_name),
                    "binary operator typecast",
                );
                let range = self.child(operand, node, Slot::Right)?;
                self.fill(&[at], vec![range]);
            }
            AstNode::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                let description = "right associative ternary operator ?:";
                let condition = self.child(condition, node, Slot::Left)?;
                let question = self.operator(OperatorKind::Ternary, " ? ", description);
                let then_branch = self.child(then_branch, node, Slot::Middle)?;
                let colon = self.operator(OperatorKind::Ternary, " : ", description);
                let else_branch = self.child(else_branch, node, Slot::Right)?;
                self.fill(&[question, colon], vec![condition, then_branch, else_branch]);
            }
        }

        self.delimiter(")", necessity);
        Ok(())
    }

    /// Visit a child and return the block range it produced.
    fn child(
        &mut self,
        node: &AstNode,
        parent: &AstNode,
        slot: Slot,
    ) -> Result<Range<usize>, GenerateError> {
        let start = self.blocks.len();
        self.visit(node, Some(parent), slot)?;
        Ok(start..self.blocks.len())
    }

    fn push(&mut self, block: Block) {
        log::trace!("block {}: {:?}", self.blocks.len(), block);
        self.blocks.push(block);
    }

    fn delimiter(&mut self, text: &'static str, necessity: Necessity) {
        match necessity {
            Necessity::Suppressed => {}
            Necessity::Optional => self.push(Block::Delimiter { text, optional: true }),
            Necessity::Required => self.push(Block::Delimiter { text, optional: false }),
        }
    }

    /// Push an operator block whose operand ranges are filled in later.
    fn operator(
        &mut self,
        kind: OperatorKind,
        text: impl Into<String>,
        description: impl Into<String>,
    ) -> usize {
        let at = self.blocks.len();
        self.push(Block::Operator {
            kind,
            text: text.into(),
            description: description.into(),
            operands: Vec::new(),
        });
        at
    }

    fn fill(&mut self, parts: &[usize], ranges: Vec<Range<usize>>) {
        for &at in parts {
            if let Some(Block::Operator { operands, .. }) = self.blocks.get_mut(at) {
                *operands = ranges.clone();
            }
        }
    }
}

fn binary_text(op: Operator) -> String {
    match op {
        Operator::Dot | Operator::Arrow => op.symbol().to_string(),
        Operator::Comma => ", ".to_string(),
        _ => format!(" {} ", op),
    }
}

fn unary_description(op: Operator, fixity: Fixity) -> String {
    match fixity {
        Fixity::Prefix => format!("right prefix associative unary operator {}", op),
        Fixity::Postfix => format!("left postfix associative unary operator {}", op),
    }
}
