//! Parenthesis policy
//!
//! Decides, for one node in one position of its parent, whether the pair of
//! parentheses around it must be printed, may be printed, or never exists.

use crate::parser::ast::AstNode;
use crate::parser::syntax::Assoc;
use serde::Serialize;

/// How necessary the parentheses around a subexpression are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Necessity {
    /// No parentheses are emitted at all
    Suppressed,
    /// Emitted, but dropped from the minimal rendering
    Optional,
    /// Removing them would change how the expression parses
    Required,
}

/// Position of a child relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Root,
    /// Left operand, postfix operand, callee, subscript base, ternary condition
    Left,
    /// Right operand, prefix or cast operand, ternary else branch
    Right,
    /// Ternary then branch, delimited by `?` and `:`
    Middle,
    /// Subscript index, delimited by `[` and `]`
    Index,
    /// One call argument
    Argument,
}

/// Necessity of parentheses around `child` sitting in `slot` of `parent`.
pub fn necessity(child: &AstNode, parent: Option<&AstNode>, slot: Slot) -> Necessity {
    let Some(inner) = child.precedence() else {
        return Necessity::Suppressed;
    };
    let outer = match (slot, parent.and_then(AstNode::precedence)) {
        (Slot::Root, _) | (_, None) => return Necessity::Suppressed,
        // A comma argument has to be grouped or it splits into two arguments.
        (Slot::Argument, _) if child.is_comma() => return Necessity::Required,
        (Slot::Argument, _) => return Necessity::Suppressed,
        (Slot::Middle | Slot::Index, _) => return Necessity::Optional,
        (_, Some(outer)) => outer,
    };

    if parent.is_some_and(AstNode::is_comma) {
        return Necessity::Optional;
    }
    // `sizeof (int)x` would read as `sizeof (int)` followed by `x`.
    if matches!(child, AstNode::TypeCast { .. }) && parent.is_some_and(AstNode::is_sizeof) {
        return Necessity::Required;
    }
    if inner.level > outer.level {
        return Necessity::Required;
    }
    let against_assoc = matches!(
        (slot, outer.assoc),
        (Slot::Left, Assoc::Right) | (Slot::Right, Assoc::Left)
    );
    if inner.level == outer.level && against_assoc {
        Necessity::Required
    } else {
        Necessity::Optional
    }
}
