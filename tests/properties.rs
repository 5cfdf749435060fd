//! Property-based tests for the renderings
//!
//! Expressions are generated fully parenthesized, so every generated string
//! is valid and its parse tree is known to match the parentheses.

use cparen::blocks::Parens;
use cparen::render_expression;
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-e]",
        "[1-9][0-9]{0,2}",
        Just("2.5".to_string()),
        Just("0x1f".to_string()),
    ]
}

fn binary_op() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "*", "/", "%", "+", "-", "<<", ">>", "<", "<=", ">", ">=", "==", "!=", "&", "^", "|",
        "&&", "||", "=", "+=", "-=", "*=", "<<=", "|=",
    ])
}

fn prefix_op() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["++", "--", "+", "-", "!", "~", "*", "&", "sizeof"])
}

fn cast_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["int", "unsigned long", "char *", "double * *", "size_t"])
}

/// Fully parenthesized expressions without the comma operator.
fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), binary_op(), inner.clone())
                .prop_map(|(l, op, r)| format!("({}) {} ({})", l, op, r)),
            (prefix_op(), inner.clone()).prop_map(|(op, e)| format!("{} ({})", op, e)),
            (inner.clone(), prop::sample::select(vec!["++", "--"]))
                .prop_map(|(e, op)| format!("({}){}", e, op)),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| format!("({}) ? ({}) : ({})", c, t, e)),
            (inner.clone(), inner.clone()).prop_map(|(b, i)| format!("({})[{}]", b, i)),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3)).prop_map(|(f, args)| {
                let args: Vec<String> = args.iter().map(|a| format!("({})", a)).collect();
                format!("({})({})", f, args.join(", "))
            }),
            (cast_type(), inner.clone()).prop_map(|(t, e)| format!("({}) ({})", t, e)),
            // A number directly before `.` would lex as a float.
            (inner.clone(), prop::sample::select(vec![".", "->"]), "[a-e]")
                .prop_filter("numeric base", |(base, _, _)| {
                    !base.starts_with(|c: char| c.is_ascii_digit())
                })
                .prop_map(|(base, op, member)| format!("({}){}{}", base, op, member)),
        ]
    })
}

fn render(source: &str, parens: Parens) -> String {
    render_expression(source, parens).unwrap_or_else(|e| panic!("{:?} failed: {}", source, e))
}

fn strip(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')' | ' ')).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Re-parsing the full rendering reproduces it byte for byte.
    #[test]
    fn full_rendering_is_idempotent(source in expression()) {
        let full = render(&source, Parens::Full);
        prop_assert_eq!(render(&full, Parens::Full), full);
    }

    /// The minimal rendering only removes parentheses (and never adds any text).
    #[test]
    fn minimal_is_full_without_some_parens(source in expression()) {
        let full = render(&source, Parens::Full);
        let minimal = render(&source, Parens::Minimal);
        prop_assert_eq!(strip(&full), strip(&minimal));
        prop_assert!(minimal.len() <= full.len());
    }

    /// Dropping optional parentheses never changes the grouping.
    #[test]
    fn minimal_rendering_parses_to_the_same_tree(source in expression()) {
        let full = render(&source, Parens::Full);
        let minimal = render(&source, Parens::Minimal);
        prop_assert_eq!(render(&minimal, Parens::Full), full);
    }

    /// The minimal rendering is a fixed point.
    #[test]
    fn minimal_rendering_is_idempotent(source in expression()) {
        let minimal = render(&source, Parens::Minimal);
        prop_assert_eq!(render(&minimal, Parens::Minimal), minimal);
    }
}
