use rstest::rstest;
use svexpr::{ExprError, LexKind, tokenize};

fn kinds(source: &str) -> Vec<LexKind> {
    tokenize(source)
        .unwrap_or_default()
        .iter()
        .map(|(k, _)| *k)
        .collect()
}

#[rstest]
#[case("8'hFF", LexKind::SizedLiteral)]
#[case("4'sb10_1x", LexKind::SizedLiteral)]
#[case("12'd42", LexKind::SizedLiteral)]
#[case("'hAB", LexKind::BasedLiteral)]
#[case("'sd7", LexKind::BasedLiteral)]
#[case("'0", LexKind::FillLiteral)]
#[case("'z", LexKind::FillLiteral)]
#[case("3.14", LexKind::RealLiteral)]
#[case("1.5e-3", LexKind::RealLiteral)]
#[case("42", LexKind::DecLiteral)]
#[case("4_000", LexKind::DecLiteral)]
#[case("foo_bar", LexKind::Ident)]
#[case("$signed", LexKind::Ident)]
#[case("\"str with \\\" escape\"", LexKind::String)]
#[case("inside", LexKind::Inside)]
#[case("dist", LexKind::Dist)]
fn single_tokens(#[case] source: &str, #[case] expected: LexKind) {
    assert_eq!(kinds(source), vec![expected]);
}

#[rstest]
#[case("<<<=")]
#[case(">>>")]
#[case("==?")]
#[case("!==")]
#[case("~^")]
#[case("::")]
#[case(":/")]
fn compound_operators_lex_as_one_token(#[case] source: &str) {
    let tokens = tokenize(source).unwrap_or_default();
    assert_eq!(tokens.len(), 1, "{source}");
    let first = tokens
        .first()
        .cloned()
        .unwrap_or_else(|| panic!("no token for {source}"));
    assert_eq!(first.0, LexKind::Operator);
    assert_eq!(first.1, 0..source.len());
}

#[rstest]
fn shift_assign_is_not_split() {
    // `a <<= b` must not lex as `a << = b`.
    assert_eq!(
        kinds("a <<= b"),
        vec![LexKind::Ident, LexKind::Operator, LexKind::Ident]
    );
}

#[rstest]
fn select_chain() {
    assert_eq!(
        kinds("pkt.hdr[3:0]"),
        vec![
            LexKind::Ident,
            LexKind::Operator,
            LexKind::Ident,
            LexKind::LBracket,
            LexKind::DecLiteral,
            LexKind::Colon,
            LexKind::DecLiteral,
            LexKind::RBracket,
        ]
    );
}

#[rstest]
#[case("a /* block */ + b")]
#[case("a + // trailing\n b")]
#[case("  a\t+\nb ")]
fn trivia_is_dropped(#[case] source: &str) {
    assert_eq!(
        kinds(source),
        vec![LexKind::Ident, LexKind::Operator, LexKind::Ident]
    );
}

#[rstest]
fn keyword_prefix_is_still_an_identifier() {
    assert_eq!(kinds("inside_out"), vec![LexKind::Ident]);
    assert_eq!(kinds("distance"), vec![LexKind::Ident]);
}

#[rstest]
fn sized_literal_span_covers_base_and_digits() {
    let tokens = tokenize("x + 8'hFF").unwrap_or_default();
    let last = tokens
        .last()
        .cloned()
        .unwrap_or_else(|| panic!("no tokens"));
    assert_eq!(last.0, LexKind::SizedLiteral);
    assert_eq!(last.1, 4..9);
}

#[rstest]
#[case("a @ b", 2)]
#[case("`MACRO + 1", 0)]
#[case("a + #5", 4)]
fn unrecognised_character_reports_offset(#[case] source: &str, #[case] offset: usize) {
    assert_eq!(tokenize(source), Err(ExprError::InvalidToken { offset }));
}
