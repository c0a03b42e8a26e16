//! Typed tokens produced by the disambiguator.
//!
//! Each token is classified exactly once and consumed immutably downstream;
//! the converter never relabels anything.

use crate::operators::Arity;

/// Which set construct opened a brace body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    /// `inside { ... }` membership set.
    Inside,
    /// `dist { ... }` distribution set.
    Dist,
}

/// A fully classified token with its source byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Token role as resolved by the disambiguator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier, literal or string, as written.
    Operand(String),
    /// Operator lexeme with its positionally resolved arity.
    Operator { symbol: String, arity: Arity },
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    /// `{`, tagged with the set construct that opened it, if any.
    OpenBrace(Option<SetKind>),
    CloseBrace,
    Comma,
    /// `?` opening a conditional.
    Question,
    /// `:` separating the bounds of a part-select.
    RangeColon,
    /// `:` closing the true branch of a conditional.
    TernaryColon,
    /// Bare `:` weight separator inside a `dist` body.
    DistColon,
    /// The `inside` keyword.
    Inside,
    /// The `dist` keyword.
    Dist,
}
