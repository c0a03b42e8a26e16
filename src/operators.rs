//! Operator precedence and associativity metadata for SystemVerilog
//! expressions.
//!
//! This module centralises binding data for every operator form so the
//! converter and the rebuilder agree on one canonical table, validated
//! against IEEE 1800-2017 §11.3. Unary and binary forms of the overlapping
//! symbols (`+ - & | ^ ~^ ^~`) are distinct entries; a static `phf` map per
//! arity avoids a long match statement and allows O(1) lookups.

use phf::phf_map;

/// Operator associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Operator arity as resolved by the disambiguator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Binding data for one operator form. Higher precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorEntry {
    pub precedence: u8,
    pub assoc: Assoc,
    pub arity: Arity,
}

/// Precedence assigned to operands and self-delimiting forms (index,
/// concatenation, set bodies) by the rebuilder; nothing binds tighter.
pub const PREC_ATOM: u8 = u8::MAX;

const SELECT: u8 = 28;
const UNARY: u8 = 26;
const POWER: u8 = 24;
const MULTIPLICATIVE: u8 = 22;
const ADDITIVE: u8 = 20;
const SHIFT: u8 = 18;
const RELATIONAL: u8 = 16;
const EQUALITY: u8 = 14;
const BITWISE_AND: u8 = 12;
const BITWISE_XOR: u8 = 10;
const BITWISE_OR: u8 = 8;
const LOGICAL_AND: u8 = 6;
const LOGICAL_OR: u8 = 4;
const CONDITIONAL: u8 = 3;
const ASSIGNMENT: u8 = 2;

const fn left(precedence: u8) -> OperatorEntry {
    OperatorEntry {
        precedence,
        assoc: Assoc::Left,
        arity: Arity::Binary,
    }
}

const fn right(precedence: u8) -> OperatorEntry {
    OperatorEntry {
        precedence,
        assoc: Assoc::Right,
        arity: Arity::Binary,
    }
}

const fn prefix(precedence: u8) -> OperatorEntry {
    OperatorEntry {
        precedence,
        assoc: Assoc::Right,
        arity: Arity::Unary,
    }
}

/// Entry applied by the converter when it resolves a `?`/`:` pair.
pub const TERNARY: OperatorEntry = right(CONDITIONAL);

/// Entry for the bare `:` weight separator inside a `dist` body. `:=` and
/// `:/` are ordinary binary lexemes and live in the binary table.
pub const DIST_WEIGHT: OperatorEntry = left(EQUALITY);

static UNARY_OPS: phf::Map<&'static str, OperatorEntry> = phf_map! {
    "+" => prefix(UNARY),
    "-" => prefix(UNARY),
    "!" => prefix(UNARY),
    "~" => prefix(UNARY),
    "&" => prefix(UNARY),
    "~&" => prefix(UNARY),
    "|" => prefix(UNARY),
    "~|" => prefix(UNARY),
    "^" => prefix(UNARY),
    "~^" => prefix(UNARY),
    "^~" => prefix(UNARY),
};

static BINARY_OPS: phf::Map<&'static str, OperatorEntry> = phf_map! {
    "." => left(SELECT),
    "::" => left(SELECT),
    "**" => right(POWER),
    "*" => left(MULTIPLICATIVE),
    "/" => left(MULTIPLICATIVE),
    "%" => left(MULTIPLICATIVE),
    "+" => left(ADDITIVE),
    "-" => left(ADDITIVE),
    "<<" => left(SHIFT),
    ">>" => left(SHIFT),
    "<<<" => left(SHIFT),
    ">>>" => left(SHIFT),
    "<" => left(RELATIONAL),
    "<=" => left(RELATIONAL),
    ">" => left(RELATIONAL),
    ">=" => left(RELATIONAL),
    "inside" => left(RELATIONAL),
    "dist" => left(RELATIONAL),
    "==" => left(EQUALITY),
    "!=" => left(EQUALITY),
    "===" => left(EQUALITY),
    "!==" => left(EQUALITY),
    "==?" => left(EQUALITY),
    "!=?" => left(EQUALITY),
    ":=" => left(EQUALITY),
    ":/" => left(EQUALITY),
    ":" => left(EQUALITY),
    "&" => left(BITWISE_AND),
    "^" => left(BITWISE_XOR),
    "~^" => left(BITWISE_XOR),
    "^~" => left(BITWISE_XOR),
    "|" => left(BITWISE_OR),
    "&&" => left(LOGICAL_AND),
    "||" => left(LOGICAL_OR),
    "?:" => right(CONDITIONAL),
    "=" => right(ASSIGNMENT),
    "+=" => right(ASSIGNMENT),
    "-=" => right(ASSIGNMENT),
    "*=" => right(ASSIGNMENT),
    "/=" => right(ASSIGNMENT),
    "%=" => right(ASSIGNMENT),
    "&=" => right(ASSIGNMENT),
    "|=" => right(ASSIGNMENT),
    "^=" => right(ASSIGNMENT),
    "<<=" => right(ASSIGNMENT),
    ">>=" => right(ASSIGNMENT),
    "<<<=" => right(ASSIGNMENT),
    ">>>=" => right(ASSIGNMENT),
};

/// Look up the table entry for `symbol` in the given arity.
///
/// Returns `None` when the form does not exist, e.g. `~&` in binary
/// position; callers surface that as `ExprError::UnknownOperator`.
#[must_use]
pub fn lookup(symbol: &str, arity: Arity) -> Option<OperatorEntry> {
    let table = match arity {
        Arity::Unary => &UNARY_OPS,
        Arity::Binary => &BINARY_OPS,
    };
    table.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_symbols_have_distinct_forms() {
        let unary = lookup("-", Arity::Unary);
        let binary = lookup("-", Arity::Binary);
        assert!(unary.is_some_and(|e| e.arity == Arity::Unary));
        assert!(binary.is_some_and(|e| e.arity == Arity::Binary));
        assert_ne!(unary, binary);
    }

    #[test]
    fn reduction_only_operators_have_no_binary_form() {
        assert!(lookup("~&", Arity::Unary).is_some());
        assert!(lookup("~&", Arity::Binary).is_none());
        assert!(lookup("!", Arity::Binary).is_none());
        assert!(lookup("~|", Arity::Binary).is_none());
    }

    #[test]
    fn power_is_right_associative() {
        let entry = lookup("**", Arity::Binary);
        assert!(entry.is_some_and(|e| e.assoc == Assoc::Right));
    }

    #[test]
    fn bands_are_ordered_per_lrm() {
        let prec = |sym: &str| lookup(sym, Arity::Binary).map_or(0, |e| e.precedence);
        let bands = [
            prec("."),
            prec("**"),
            prec("*"),
            prec("+"),
            prec("<<"),
            prec("<"),
            prec("=="),
            prec("&"),
            prec("^"),
            prec("|"),
            prec("&&"),
            prec("||"),
            prec("?:"),
            prec("="),
        ];
        assert!(bands.windows(2).all(|pair| match pair {
            [hi, lo] => hi > lo,
            _ => false,
        }));
        let unary = lookup("~", Arity::Unary).map_or(0, |e| e.precedence);
        assert!(unary > prec("**"));
        assert!(unary < prec("."));
    }

    #[test]
    fn unknown_symbol_is_absent() {
        assert!(lookup("<=>", Arity::Binary).is_none());
        assert!(lookup("**", Arity::Unary).is_none());
    }
}
