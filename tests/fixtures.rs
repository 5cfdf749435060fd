//! Fixture table: expected full and minimal renderings, and exact error text.

use cparen::blocks::Parens;
use cparen::render_expression;
use rstest::rstest;

fn renderings(source: &str) -> (String, String) {
    let full = render_expression(source, Parens::Full)
        .unwrap_or_else(|e| panic!("{:?} failed: {}", source, e));
    let minimal = render_expression(source, Parens::Minimal)
        .unwrap_or_else(|e| panic!("{:?} failed: {}", source, e));
    (full, minimal)
}

fn error_message(source: &str) -> String {
    match render_expression(source, Parens::Full) {
        Ok(text) => panic!("{:?} rendered as {:?}, expected an error", source, text),
        Err(e) => e.to_string(),
    }
}

#[rstest]
#[case::basic(
    "1 + 2 / 3 + (3 + 4) / 5 * 6e-2 + 0xf",
    "((1 + (2 / 3)) + (((3 + 4) / 5) * 6e-2)) + 0xf",
    "1 + 2 / 3 + (3 + 4) / 5 * 6e-2 + 0xf"
)]
#[case::left_assoc("a - b - c", "(a - b) - c", "a - b - c")]
#[case::right_assoc("a = b = c", "a = (b = c)", "a = b = c")]
#[case::compound_assign("a <<= b |= c ^ d", "a <<= (b |= (c ^ d))", "a <<= b |= c ^ d")]
#[case::relational("a < b == c >= d", "(a < b) == (c >= d)", "a < b == c >= d")]
#[case::logical("a || b && !c", "a || (b && (!c))", "a || b && !c")]
#[case::literal_spelling("0x1FuLL + 017 + 1.5e+3f", "(0x1FuLL + 017) + 1.5e+3f", "0x1FuLL + 017 + 1.5e+3f")]
fn test_binary_operators(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::else_chain("a ? b : c ? d : e", "a ? b : (c ? d : e)", "a ? b : c ? d : e")]
#[case::grouped_condition("(a ? b : c) ? d : e", "(a ? b : c) ? d : e", "(a ? b : c) ? d : e")]
#[case::nested_middle("a ? b ? c : d : e", "a ? (b ? c : d) : e", "a ? b ? c : d : e")]
#[case::argument("f(a ? b : c, d)", "f(a ? b : c, d)", "f(a ? b : c, d)")]
#[case::assigned("f(a ? b : c = d)", "f((a ? b : c) = d)", "f(a ? b : c = d)")]
#[case::comma_middle("a ? b++, c : d", "a ? ((b++), c) : d", "a ? b++, c : d")]
#[case::assignment_branch("x = a ? b : (c = d)", "x = (a ? b : (c = d))", "x = a ? b : (c = d)")]
fn test_ternary(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::member_chain("a.b->c.d()", "(((a.b)->c).d)()", "a.b->c.d()")]
#[case::member_chain_args(
    "a.b->c.d(1, 2, 3, e())",
    "(((a.b)->c).d)(1, 2, 3, e())",
    "a.b->c.d(1, 2, 3, e())"
)]
#[case::no_args("a()", "a()", "a()")]
#[case::two_args("a(1, 2)", "a(1, 2)", "a(1, 2)")]
#[case::expression_args("a(1+2, 2+3)", "a(1 + 2, 2 + 3)", "a(1 + 2, 2 + 3)")]
#[case::comma_arg("a((1,2))", "a((1, 2))", "a((1, 2))")]
#[case::grouped_callee("(*f)(x)", "(*f)(x)", "(*f)(x)")]
#[case::postfix_member("a.b++", "(a.b)++", "a.b++")]
fn test_calls_and_members(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::leaf_index("a[1]", "a[1]", "a[1]")]
#[case::sum_index("a[1+2]", "a[(1 + 2)]", "a[1 + 2]")]
#[case::nested("a[1 + 2 + b[c()]]", "a[((1 + 2) + (b[(c())]))]", "a[1 + 2 + b[c()]]")]
#[case::pointer_index("(*p)[i]", "(*p)[i]", "(*p)[i]")]
fn test_subscript(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::word_prefix("sizeof sizeofnot", "sizeof sizeofnot", "sizeof sizeofnot")]
#[case::call_like("sizeof(a) + 2", "(sizeof a) + 2", "sizeof a + 2")]
#[case::type_operand("sizeof (int)", "sizeof (int)", "sizeof (int)")]
#[case::pointer_type("sizeof (int*)", "sizeof (int *)", "sizeof (int *)")]
#[case::double_pointer("sizeof (int**)", "sizeof (int * *)", "sizeof (int * *)")]
#[case::deref("sizeof *a + 2", "(sizeof (*a)) + 2", "sizeof *a + 2")]
#[case::address("sizeof &a + 2", "(sizeof (&a)) + 2", "sizeof &a + 2")]
#[case::redundant_parens("sizeof((a))", "sizeof a", "sizeof a")]
#[case::cast_operand("sizeof ((char)x)", "sizeof ((char)x)", "sizeof ((char)x)")]
fn test_sizeof(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::simple("(int)(a) + 2", "((int)a) + 2", "(int)a + 2")]
#[case::pointer("(int*)(a) + 2", "((int *)a) + 2", "(int *)a + 2")]
#[case::qualified("(unsigned long)x * 2", "((unsigned long)x) * 2", "(unsigned long)x * 2")]
#[case::cast_of_sum("(char)(a + b)", "(char)(a + b)", "(char)(a + b)")]
#[case::cast_of_postfix("(int)p++", "(int)(p++)", "(int)p++")]
fn test_typecast(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::assignments("a = 1, b = 2", "(a = 1), (b = 2)", "a = 1, b = 2")]
#[case::as_argument("c((a = 1, b = 2))", "c(((a = 1), (b = 2)))", "c((a = 1, b = 2))")]
#[case::left_fold("c = (1, 2, 3)", "c = ((1, 2), 3)", "c = (1, 2, 3)")]
fn test_comma(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::negate_negation("- -a", "-(-a)", "- -a")]
#[case::plus_increment("+ ++a", "+(++a)", "+ ++a")]
#[case::address_of_address("& &a", "&(&a)", "& &a")]
#[case::deref_chain("**p", "*(*p)", "**p")]
fn test_adjacent_prefix_operators(#[case] input: &str, #[case] full: &str, #[case] minimal: &str) {
    assert_eq!(renderings(input), (full.to_string(), minimal.to_string()));
}

#[rstest]
#[case::unmatched_conditional("a ?", "Unmatched : for ?")]
#[case::missing_else("a ? b :", "Operator missing operand?")]
#[case::missing_middle("a ? : c", "Unexpected (nud) encounter of token type: ':'")]
#[case::leading_question(" ? b : c", "Unexpected (nud) encounter of token type: '?'")]
#[case::unmatched_call("c(", "Unmatched left parenthesis")]
#[case::trailing_comma("c(1,)", "Unexpected (nud) encounter of token type: ')'")]
#[case::unmatched_group("(a + b", "Unmatched left parenthesis")]
#[case::empty_group("()", "Empty parentheses expression")]
#[case::unmatched_bracket("a[", "Unmatched left bracket")]
#[case::empty_subscript("a[]", "Empty subscript")]
#[case::type_operand("a + int", "Cannot use type in expression: int")]
#[case::sizeof_bare_type("sizeof int", "Cannot use type in expression: int")]
#[case::sizeof_double_parens("sizeof((int))", "Unexpected (nud) encounter of token type: ')'")]
#[case::bare_type("int", "Cannot use type in expression: int")]
#[case::missing_operand("a *", "Operator missing operand?")]
#[case::empty_input("   ", "Operator missing operand?")]
#[case::trailing("a b", "Trailing token: 'b'")]
#[case::binary_only_prefix("/ a", "Unexpected (nud) encounter of token type: '/'")]
#[case::lex_failure("a $ b", "Failed in lexing input: $ b")]
#[case::unterminated_cast("(int", "Unexpected end of input")]
#[case::qualifier_after_type("(int unsigned)x", "Typecast qualifier after a type")]
#[case::qualifier_after_star("(long * short)x", "Typecast qualifier after a *")]
#[case::second_type("(int char)x", "Typecast type after another type")]
#[case::type_after_star("(short * int)x", "Typecast type after a *")]
#[case::non_type_in_cast("(int + 1)", "Unexpected non-typey symbol in typecast: +")]
fn test_errors(#[case] input: &str, #[case] message: &str) {
    assert_eq!(error_message(input), message);
}

#[rstest]
#[case::negations("!", "", "Expression nested too deeply (limit 256)")]
#[case::groups("(", ")", "Expression nested too deeply (limit 256)")]
#[case::casts("(int)", "", "Expression nested too deeply (limit 256)")]
fn test_deep_nesting_is_an_error(#[case] open: &str, #[case] close: &str, #[case] message: &str) {
    let source = format!("{}x{}", open.repeat(20_000), close.repeat(20_000));
    assert_eq!(error_message(&source), message);
}

#[test]
fn test_long_chain_is_an_error() {
    let source = vec!["x"; 100_000].join(" + ");
    assert_eq!(error_message(&source), "Expression too large (limit 4096 terms)");
}
