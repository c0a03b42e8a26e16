//! Postfix (RPN) tokens emitted by the converter.

use std::fmt;

/// One element of a postfix sequence.
///
/// Operand and operator tokens carry their lexeme; the structural reductions
/// record how many operands they consume from the value stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnToken {
    /// Identifier, literal or string, as written.
    Operand(String),
    /// Prefix operator; pops one value.
    Unary(String),
    /// Infix operator; pops two values.
    Binary(String),
    /// `base[index]`; pops base and index.
    Index,
    /// `base[msb:lsb]`; pops base, msb and lsb.
    IndexRange,
    /// Baseless `[lo:hi]` set element; pops both bounds.
    Range,
    /// `{e0,e1,...}` concatenation of `n` elements.
    Concat(usize),
    /// `{count{e0,...}}` replication; pops the count plus `elems` body
    /// elements.
    Repl { elems: usize },
    /// `{e0, e1, ...}` set body under `inside`/`dist`; pops `n` elements.
    Set(usize),
    /// `cond ? t : f`; pops all three.
    Cond,
    /// `expr inside {set}`; pops the expression and the set.
    SetMember,
    /// `expr dist {set}`; pops the expression and the set.
    DistApply,
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(text) | Self::Binary(text) => f.write_str(text),
            // Unary forms of the shared symbols print with the `u` suffix so
            // a dumped sequence stays unambiguous; `-`/`+` keep the readable
            // NEG/POS names.
            Self::Unary(symbol) => match symbol.as_str() {
                "-" => f.write_str("NEG"),
                "+" => f.write_str("POS"),
                s @ ("&" | "|" | "^" | "~^" | "^~") => write!(f, "{s}u"),
                s => f.write_str(s),
            },
            Self::Index => f.write_str("INDEX"),
            Self::IndexRange => f.write_str("INDEX_RANGE"),
            Self::Range => f.write_str("RANGE"),
            Self::Concat(n) => write!(f, "CONCAT{n}"),
            Self::Repl { elems } => write!(f, "REPL{elems}"),
            Self::Set(n) => write!(f, "SET{n}"),
            Self::Cond => f.write_str("COND"),
            Self::SetMember => f.write_str("SETMEMBER"),
            Self::DistApply => f.write_str("DIST"),
        }
    }
}

/// Render a postfix sequence as a space-separated string, mainly for tests
/// and diagnostics.
#[must_use]
pub fn postfix_to_string(tokens: &[RpnToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
