//! Joining blocks back into text

use super::Block;
use serde::Serialize;

/// Which parentheses a rendering keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Parens {
    /// Every parenthesis the generator emitted
    Full,
    /// Only the parentheses the grouping depends on
    Minimal,
}

impl Parens {
    pub fn toggled(self) -> Self {
        match self {
            Parens::Full => Parens::Minimal,
            Parens::Minimal => Parens::Full,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parens::Full => "Full Parentheses",
            Parens::Minimal => "Minimal Parentheses",
        }
    }
}

/// A visible block and the text it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece<'a> {
    pub index: usize,
    /// Set when a space has to be inserted before `text`
    pub spaced: bool,
    pub text: &'a str,
}

/// The visible blocks of a rendering, in order.
///
/// Dropping parentheses can glue two operators into a longer one (`- -a`
/// turning into `--a`); such pieces are marked `spaced`.
pub fn pieces(blocks: &[Block], parens: Parens) -> Vec<Piece<'_>> {
    let mut pieces: Vec<Piece<'_>> = Vec::with_capacity(blocks.len());
    let mut last = None;

    for (index, block) in blocks.iter().enumerate() {
        if !block.is_visible(parens) {
            continue;
        }
        let text = block.text();
        let spaced = matches!(
            (last, text.chars().next()),
            (Some(a), Some(b)) if a == b && matches!(a, '+' | '-' | '&')
        );
        last = text.chars().last().or(last);
        pieces.push(Piece {
            index,
            spaced,
            text,
        });
    }

    pieces
}

/// Render `blocks` keeping the parentheses selected by `parens`.
pub fn render(blocks: &[Block], parens: Parens) -> String {
    let mut out = String::new();
    for piece in pieces(blocks, parens) {
        if piece.spaced {
            out.push(' ');
        }
        out.push_str(piece.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::generate_blocks;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::parse;

    fn both(source: &str) -> (String, String) {
        let blocks = generate_blocks(&parse(Lexer::new(source)).unwrap()).unwrap();
        (render(&blocks, Parens::Full), render(&blocks, Parens::Minimal))
    }

    #[test]
    fn test_left_assoc_chain() {
        assert_eq!(
            both("a - b - c"),
            ("(a - b) - c".to_string(), "a - b - c".to_string())
        );
    }

    #[test]
    fn test_right_assoc_chain() {
        assert_eq!(
            both("a = b = c"),
            ("a = (b = c)".to_string(), "a = b = c".to_string())
        );
    }

    #[test]
    fn test_explicit_grouping_against_assoc_is_kept() {
        assert_eq!(both("a - (b - c)").1, "a - (b - c)");
        assert_eq!(both("(a = b) = c").1, "(a = b) = c");
    }

    #[test]
    fn test_redundant_parens_are_dropped() {
        assert_eq!(both("((a)) + (b * c)").1, "a + b * c");
    }

    #[test]
    fn test_operators_do_not_merge() {
        assert_eq!(both("- -a"), ("-(-a)".to_string(), "- -a".to_string()));
        assert_eq!(both("+ ++a").1, "+ ++a");
        assert_eq!(both("& &a").1, "& &a");
        assert_eq!(both("a++ + b").1, "a++ + b");
        assert_eq!(both("-a--").1, "-a--");
    }

    #[test]
    fn test_pieces_skip_hidden_delimiters() {
        let blocks = generate_blocks(&parse(Lexer::new("a + b * c")).unwrap()).unwrap();
        let indices: Vec<usize> = pieces(&blocks, Parens::Minimal)
            .iter()
            .map(|p| p.index)
            .collect();

        assert_eq!(indices, vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Parens::Full.toggled(), Parens::Minimal);
        assert_eq!(Parens::Minimal.label(), "Minimal Parentheses");
    }
}
