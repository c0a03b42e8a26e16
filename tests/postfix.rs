use rstest::rstest;
use svexpr::{parse_expression, postfix_to_string};

fn to_postfix(source: &str) -> String {
    parse_expression(source)
        .map(|tokens| postfix_to_string(&tokens))
        .unwrap_or_else(|err| panic!("{source}: {err}"))
}

#[rstest]
#[case("a + b * c", "a b c * +")]
#[case("a * b + c", "a b * c +")]
#[case("(a + b) * c", "a b + c *")]
#[case("( b * ( a - 1))", "b a 1 - *")]
#[case("a ** b ** c", "a b c ** **")]
#[case("a - b - c", "a b - c -")]
#[case("a << 2 + 1", "a 2 1 + <<")]
#[case("a == b && c != d", "a b == c d != &&")]
#[case("a & b | c ^ d", "a b & c d ^ |")]
fn binary_precedence(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("-a + b", "a NEG b +")]
#[case("a + -b", "a b NEG +")]
#[case("- -a", "a NEG NEG")]
#[case("!valid && ready", "valid ! ready &&")]
#[case("~mask | flags", "mask ~ flags |")]
#[case("&req", "req &u")]
#[case("|bus ^ ^bus", "bus |u bus ^u ^")]
#[case("~&sel", "sel ~&")]
#[case("-a ** b", "a NEG b **")]
fn unary_forms(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("data[3]", "data 3 INDEX")]
#[case("data[msb:lsb]", "data msb lsb INDEX_RANGE")]
#[case("data[DW-1:0]", "data DW 1 - 0 INDEX_RANGE")]
#[case("multi_dim [3-1][2]", "multi_dim 3 1 - INDEX 2 INDEX")]
#[case("mem[i][j][k]", "mem i INDEX j INDEX k INDEX")]
#[case("data[{addr, offset}]", "data addr offset CONCAT2 INDEX")]
#[case("(a + b)[0]", "a b + 0 INDEX")]
fn selects(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("{a,b,c}", "a b c CONCAT3")]
#[case("{a}", "a CONCAT1")]
#[case("{a + b, c}", "a b + c CONCAT2")]
#[case("{{a, b}, {c, d}}", "a b CONCAT2 c d CONCAT2 CONCAT2")]
#[case("!a & {b, c} | d", "a ! b c CONCAT2 & d |")]
fn concatenation(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("{4{1'b0}}", "4 1'b0 REPL1")]
#[case("{DW{1'b1}} & mask", "DW 1'b1 REPL1 mask &")]
#[case("{W-1{a}}", "W 1 - a REPL1")]
#[case("{2{a, b}}", "2 a b REPL2")]
#[case("{{2{a}}, b}", "2 a REPL1 b CONCAT2")]
#[case("{c ? 2 : 3{a}}", "c 2 3 COND a REPL1")]
#[case("{(c ? 2 : 3){a}}", "c 2 3 COND a REPL1")]
fn replication(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("c ? a : b", "c a b COND")]
#[case("c1 ? a : c2 ? b : d", "c1 a c2 b d COND COND")]
#[case("c1 ? c2 ? a : b : d", "c1 c2 a b COND d COND")]
#[case("x > 0 ? x : -x", "x 0 > x x NEG COND")]
#[case("(c ? a : b) + 1", "c a b COND 1 +")]
#[case("data[DW-1: AXI? 3+1:0]", "data DW 1 - AXI 3 1 + 0 COND INDEX_RANGE")]
fn conditionals(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("e inside { 1, 2, 3 }", "e 1 2 3 SET3 SETMEMBER")]
#[case("e inside { [3:7] }", "e 3 7 RANGE SET1 SETMEMBER")]
#[case("v inside { a, [lo:hi] } && ok", "v a lo hi RANGE SET2 SETMEMBER ok &&")]
#[case("addr dist { 2 := 5, [10:12] := 8 }", "addr 2 5 := 10 12 RANGE 8 := SET2 DIST")]
#[case("addr dist { 1 :/ 3 }", "addr 1 3 :/ SET1 DIST")]
#[case("v dist { 9 : 1 }", "v 9 1 : SET1 DIST")]
fn set_membership(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("pkt.hdr.len", "pkt hdr . len .")]
#[case("pkg::WIDTH - 1", "pkg WIDTH :: 1 -")]
#[case("pkt.data[3:0]", "pkt data . 3 0 INDEX_RANGE")]
fn member_selects(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("a = b + c", "a b c + =")]
#[case("a += b << 1", "a b 1 << +=")]
#[case("a = b = c", "a b c = =")]
fn assignments(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}

#[rstest]
#[case("8'hFF & mask", "8'hFF mask &")]
#[case("'0", "'0")]
#[case("\"abc\"", "\"abc\"")]
fn literal_operands_keep_their_text(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_postfix(source), expected, "{source}");
}
