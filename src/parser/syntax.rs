//! Operator and type tables for the supported C expression subset
//!
//! [`Operator`] is the closed set of operator symbols. Each one knows its
//! spelling, whether it can start an expression, and the [`Precedence`] it
//! has when it extends one. [`SyntaxTable`] bundles the lookup structures the
//! lexer needs: the fixed-width symbol table, the number/identifier patterns
//! and the cast whitelist. The default table is built once into [`SYNTAX`]
//! and shared by reference.
//!
//! # Precedence and binding power
//!
//! Both scales follow the C standard's table where a *lower* number binds
//! *tighter*. [`Precedence`] is what a finished node reports to the block
//! generator. [`BindingPower`] is the parse-time value derived from it: the
//! level is doubled, and right-associative operators parse their right operand
//! one step looser so that a following operator of the same level is absorbed
//! into the right-hand side.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::fmt;

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Assoc {
    Left,
    Right,
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assoc::Left => write!(f, "left"),
            Assoc::Right => write!(f, "right"),
        }
    }
}

/// Display precedence of an operator or finished node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    pub level: u8,
    pub assoc: Assoc,
}

impl Precedence {
    /// Postfix `++ --`, member access, calls and subscripts
    pub const POSTFIX: Precedence = Precedence::left(2);
    /// Prefix unary operators, `sizeof` and casts
    pub const UNARY: Precedence = Precedence::right(3);
    pub const MULTIPLICATIVE: Precedence = Precedence::left(5);
    pub const ADDITIVE: Precedence = Precedence::left(6);
    pub const SHIFT: Precedence = Precedence::left(7);
    pub const RELATIONAL: Precedence = Precedence::left(8);
    pub const EQUALITY: Precedence = Precedence::left(9);
    pub const BIT_AND: Precedence = Precedence::left(10);
    pub const BIT_XOR: Precedence = Precedence::left(11);
    pub const BIT_OR: Precedence = Precedence::left(12);
    pub const LOGICAL_AND: Precedence = Precedence::left(13);
    pub const LOGICAL_OR: Precedence = Precedence::left(14);
    pub const CONDITIONAL: Precedence = Precedence::right(15);
    pub const ASSIGNMENT: Precedence = Precedence::right(16);
    pub const COMMA: Precedence = Precedence::left(18);

    pub const fn left(level: u8) -> Self {
        Precedence {
            level,
            assoc: Assoc::Left,
        }
    }

    pub const fn right(level: u8) -> Self {
        Precedence {
            level,
            assoc: Assoc::Right,
        }
    }

    /// Binding power this operator presents to the expression on its left.
    pub const fn left_binding_power(self) -> BindingPower {
        BindingPower(self.level * 2)
    }

    /// Minimum binding power used to parse the operand on the right.
    pub const fn right_binding_power(self) -> BindingPower {
        match self.assoc {
            Assoc::Left => BindingPower(self.level * 2),
            Assoc::Right => BindingPower(self.level * 2 + 1),
        }
    }
}

/// Parse-time binding power; a token extends the current expression only
/// while the caller's minimum is strictly greater than the token's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BindingPower(u8);

impl BindingPower {
    /// A complete expression, comma operator included.
    pub const EXPRESSION: BindingPower = BindingPower(Precedence::COMMA.level * 2 + 2);
    /// One call argument: everything up to, but excluding, the comma operator.
    pub const ARGUMENT: BindingPower = Precedence::COMMA.left_binding_power();
    /// Tokens that never extend an expression.
    pub const NONE: BindingPower = BindingPower(u8::MAX);
}

/// Operator symbols of the supported subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Increment,
    Decrement,
    Dot,
    Arrow,
    Not,
    Complement,
    Star,
    Slash,
    Percent,
    Plus,
    Minus,
    ShiftLeft,
    ShiftRight,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    Ampersand,
    Caret,
    Pipe,
    LogicalAnd,
    LogicalOr,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    XorAssign,
    OrAssign,
    Comma,
    Sizeof,
}

impl Operator {
    pub const ALL: [Operator; 37] = [
        Operator::Increment,
        Operator::Decrement,
        Operator::Dot,
        Operator::Arrow,
        Operator::Not,
        Operator::Complement,
        Operator::Star,
        Operator::Slash,
        Operator::Percent,
        Operator::Plus,
        Operator::Minus,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Ampersand,
        Operator::Caret,
        Operator::Pipe,
        Operator::LogicalAnd,
        Operator::LogicalOr,
        Operator::Assign,
        Operator::AddAssign,
        Operator::SubAssign,
        Operator::MulAssign,
        Operator::DivAssign,
        Operator::ModAssign,
        Operator::ShlAssign,
        Operator::ShrAssign,
        Operator::AndAssign,
        Operator::XorAssign,
        Operator::OrAssign,
        Operator::Comma,
        Operator::Sizeof,
    ];

    /// Source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::Dot => ".",
            Operator::Arrow => "->",
            Operator::Not => "!",
            Operator::Complement => "~",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Ampersand => "&",
            Operator::Caret => "^",
            Operator::Pipe => "|",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
            Operator::Assign => "=",
            Operator::AddAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::MulAssign => "*=",
            Operator::DivAssign => "/=",
            Operator::ModAssign => "%=",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::AndAssign => "&=",
            Operator::XorAssign => "^=",
            Operator::OrAssign => "|=",
            Operator::Comma => ",",
            Operator::Sizeof => "sizeof",
        }
    }

    /// Precedence when the operator follows an expression, `None` for
    /// operators that only appear in prefix position.
    pub fn infix(self) -> Option<Precedence> {
        let precedence = match self {
            Operator::Increment | Operator::Decrement | Operator::Dot | Operator::Arrow => {
                Precedence::POSTFIX
            }
            Operator::Star | Operator::Slash | Operator::Percent => Precedence::MULTIPLICATIVE,
            Operator::Plus | Operator::Minus => Precedence::ADDITIVE,
            Operator::ShiftLeft | Operator::ShiftRight => Precedence::SHIFT,
            Operator::Less
            | Operator::LessEqual
            | Operator::Greater
            | Operator::GreaterEqual => Precedence::RELATIONAL,
            Operator::Equal | Operator::NotEqual => Precedence::EQUALITY,
            Operator::Ampersand => Precedence::BIT_AND,
            Operator::Caret => Precedence::BIT_XOR,
            Operator::Pipe => Precedence::BIT_OR,
            Operator::LogicalAnd => Precedence::LOGICAL_AND,
            Operator::LogicalOr => Precedence::LOGICAL_OR,
            Operator::Assign
            | Operator::AddAssign
            | Operator::SubAssign
            | Operator::MulAssign
            | Operator::DivAssign
            | Operator::ModAssign
            | Operator::ShlAssign
            | Operator::ShrAssign
            | Operator::AndAssign
            | Operator::XorAssign
            | Operator::OrAssign => Precedence::ASSIGNMENT,
            Operator::Comma => Precedence::COMMA,
            Operator::Not | Operator::Complement | Operator::Sizeof => return None,
        };
        Some(precedence)
    }

    /// Whether the operator can start an expression.
    pub fn is_prefix(self) -> bool {
        matches!(
            self,
            Operator::Increment
                | Operator::Decrement
                | Operator::Plus
                | Operator::Minus
                | Operator::Not
                | Operator::Complement
                | Operator::Star
                | Operator::Ampersand
                | Operator::Sizeof
        )
    }

    /// Whether the infix form takes no right operand (`a++`).
    pub fn is_postfix(self) -> bool {
        matches!(self, Operator::Increment | Operator::Decrement)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Entry of the fixed-width symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Whitespace,
    Operator(Operator),
    LParen,
    RParen,
    LBracket,
    RBracket,
    Question,
    Colon,
}

/// Anchored pattern for one family of numeric literals.
#[derive(Debug)]
pub struct NumberPattern {
    pub body: Regex,
    pub suffix: Regex,
    pub is_float: bool,
}

/// Widest entry in the symbol table.
pub const MAX_SYMBOL_LEN: usize = 3;

/// Lookup tables shared by every lexer instance.
#[derive(Debug)]
pub struct SyntaxTable {
    symbols: FxHashMap<&'static str, Symbol>,
    keywords: FxHashMap<&'static str, Operator>,
    qualifiers: FxHashSet<&'static str>,
    base_types: FxHashSet<&'static str>,
    numbers: Vec<NumberPattern>,
    identifier: Regex,
}

// Cast whitelist. Without a symbol table there is no way to know typedef,
// struct, union or enum names, so only these words start a cast.
const TYPE_QUALIFIERS: [&str; 4] = ["signed", "unsigned", "short", "long"];
const BASE_TYPES: [&str; 25] = [
    "bool", "char", "int", "float", "double", "void", "wchar_t", "char16_t", "char32_t",
    "_Bool", "float_t", "double_t", "int8_t", "uint8_t", "int16_t", "uint16_t", "int32_t",
    "uint32_t", "int64_t", "uint64_t", "intptr_t", "uintptr_t", "size_t", "ssize_t",
    "ptrdiff_t",
];

const INT_SUFFIX: &str = r"^(?:[uU](?:ll|LL)|[uU][lL]?|(?:ll|LL)[uU]?|[lL][uU]?)";

impl SyntaxTable {
    /// The table for C expressions.
    pub fn c_expressions() -> Result<Self, regex::Error> {
        let mut symbols = FxHashMap::default();
        for ws in [" ", "\t", "\r", "\n"] {
            symbols.insert(ws, Symbol::Whitespace);
        }
        for op in Operator::ALL {
            if op != Operator::Sizeof {
                symbols.insert(op.symbol(), Symbol::Operator(op));
            }
        }
        symbols.insert("(", Symbol::LParen);
        symbols.insert(")", Symbol::RParen);
        symbols.insert("[", Symbol::LBracket);
        symbols.insert("]", Symbol::RBracket);
        symbols.insert("?", Symbol::Question);
        symbols.insert(":", Symbol::Colon);

        let mut keywords = FxHashMap::default();
        keywords.insert(Operator::Sizeof.symbol(), Operator::Sizeof);

        // Floats come first so that `.5` is not read as member access.
        let numbers = vec![
            NumberPattern {
                body: Regex::new(
                    r"^(?:(?:[0-9]*\.[0-9]+|[0-9]+\.)(?:[eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+)",
                )?,
                suffix: Regex::new(r"^[fFlL]")?,
                is_float: true,
            },
            NumberPattern {
                body: Regex::new(r"^0[xX][0-9a-fA-F]+")?,
                suffix: Regex::new(INT_SUFFIX)?,
                is_float: false,
            },
            NumberPattern {
                body: Regex::new(r"^0[0-7]*")?,
                suffix: Regex::new(INT_SUFFIX)?,
                is_float: false,
            },
            NumberPattern {
                body: Regex::new(r"^[1-9][0-9]*")?,
                suffix: Regex::new(INT_SUFFIX)?,
                is_float: false,
            },
        ];

        Ok(SyntaxTable {
            symbols,
            keywords,
            qualifiers: TYPE_QUALIFIERS.into_iter().collect(),
            base_types: BASE_TYPES.into_iter().collect(),
            numbers,
            identifier: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*")?,
        })
    }

    pub fn symbol(&self, text: &str) -> Option<Symbol> {
        self.symbols.get(text).copied()
    }

    pub fn keyword(&self, word: &str) -> Option<Operator> {
        self.keywords.get(word).copied()
    }

    pub fn is_qualifier(&self, word: &str) -> bool {
        self.qualifiers.contains(word)
    }

    pub fn is_base_type(&self, word: &str) -> bool {
        self.base_types.contains(word)
    }

    /// Whether the word can only name a type.
    pub fn is_type_word(&self, word: &str) -> bool {
        self.is_qualifier(word) || self.is_base_type(word)
    }

    pub fn numbers(&self) -> &[NumberPattern] {
        &self.numbers
    }

    pub fn identifier(&self) -> &Regex {
        &self.identifier
    }
}

/// The default C expression table.
pub static SYNTAX: Lazy<SyntaxTable> =
    Lazy::new(|| SyntaxTable::c_expressions().expect("built-in patterns are valid"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_power_ordering() {
        // Same level, left assoc: the right operand stops at the next operator.
        let add = Precedence::ADDITIVE;
        assert!(add.right_binding_power() <= add.left_binding_power());

        // Same level, right assoc: the right operand absorbs the next operator.
        let assign = Precedence::ASSIGNMENT;
        assert!(assign.right_binding_power() > assign.left_binding_power());

        assert!(BindingPower::EXPRESSION > Precedence::COMMA.left_binding_power());
        assert!(BindingPower::ARGUMENT <= Precedence::COMMA.left_binding_power());
        assert!(BindingPower::ARGUMENT > Precedence::ASSIGNMENT.left_binding_power());
    }

    #[test]
    fn test_symbol_table_covers_operators() {
        for op in Operator::ALL {
            if op == Operator::Sizeof {
                assert_eq!(SYNTAX.keyword("sizeof"), Some(Operator::Sizeof));
            } else {
                assert_eq!(SYNTAX.symbol(op.symbol()), Some(Symbol::Operator(op)));
            }
        }
        assert_eq!(SYNTAX.symbol("\t"), Some(Symbol::Whitespace));
        assert_eq!(SYNTAX.symbol("?"), Some(Symbol::Question));
    }

    #[test]
    fn test_symbols_fit_max_width() {
        assert!(Operator::ALL
            .iter()
            .filter(|op| **op != Operator::Sizeof)
            .all(|op| op.symbol().len() <= MAX_SYMBOL_LEN));
    }

    #[test]
    fn test_type_whitelist() {
        assert!(SYNTAX.is_qualifier("unsigned"));
        assert!(SYNTAX.is_base_type("uint8_t"));
        assert!(SYNTAX.is_type_word("long"));
        assert!(!SYNTAX.is_type_word("struct"));
        assert!(!SYNTAX.is_type_word("my_typedef_t"));
    }

    #[test]
    fn test_prefix_only_operators_do_not_extend() {
        assert_eq!(Operator::Not.infix(), None);
        assert_eq!(Operator::Sizeof.infix(), None);
        assert!(Operator::Sizeof.is_prefix());
        assert!(!Operator::Slash.is_prefix());
    }
}
