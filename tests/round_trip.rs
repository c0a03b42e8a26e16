use rstest::rstest;
use svexpr::{normalize_expression, parenthesize_expression, parse_expression};

const CORPUS: [&str; 24] = [
    "a + b * c",
    "(a + b) * c",
    "a - (b - c)",
    "a ** b ** c",
    "-a + b",
    "!valid && ready || error",
    "~&sel ^ |bus",
    "^(~x)",
    "&(&a)",
    "|(|a)",
    "data[3]",
    "data[DW-1:0]",
    "multi_dim[3-1][2]",
    "{a, b, c}",
    "{4{1'b0}}",
    "{{2{a}}, b[7:0]}",
    "{(c ? 2 : 3){a}}",
    "c1 ? a : c2 ? b : d",
    "(c1 ? a : b) ? c : d",
    "data[DW-1: AXI? 3+1:0]",
    "e inside { 1, [3:7] }",
    "addr dist { 2 := 5, [10:12] :/ 8 }",
    "pkt.hdr.len - pkg::WIDTH",
    "a = b ? 8'hFF & mask : '0",
];

/// Reprinting with minimal parentheses must preserve the postfix sequence.
#[rstest]
fn minimal_rebuild_preserves_postfix() {
    for source in CORPUS {
        let before = parse_expression(source)
            .unwrap_or_else(|err| panic!("{source}: {err}"));
        let rebuilt = normalize_expression(source)
            .unwrap_or_else(|err| panic!("{source}: {err}"));
        let after = parse_expression(&rebuilt)
            .unwrap_or_else(|err| panic!("{rebuilt}: {err}"));
        assert_eq!(before, after, "{source} => {rebuilt}");
    }
}

/// Explicit parenthesisation must also re-parse to the same sequence.
#[rstest]
fn explicit_rebuild_preserves_postfix() {
    for source in CORPUS {
        let before = parse_expression(source)
            .unwrap_or_else(|err| panic!("{source}: {err}"));
        let wrapped = parenthesize_expression(source)
            .unwrap_or_else(|err| panic!("{source}: {err}"));
        let after = parse_expression(&wrapped)
            .unwrap_or_else(|err| panic!("{wrapped}: {err}"));
        assert_eq!(before, after, "{source} => {wrapped}");
    }
}

/// Normalisation is a fixed point after one pass.
#[rstest]
fn normalisation_is_idempotent() {
    for source in CORPUS {
        let once = normalize_expression(source)
            .unwrap_or_else(|err| panic!("{source}: {err}"));
        let twice = normalize_expression(&once)
            .unwrap_or_else(|err| panic!("{once}: {err}"));
        assert_eq!(once, twice, "{source}");
    }
}
