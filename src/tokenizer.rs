//! Lexical analysis for SystemVerilog expression text.
//!
//! This module exposes [`tokenize`], which converts one right-hand-side
//! expression substring into a sequence of `(LexKind, Span)` pairs. It uses
//! the `logos` crate so multi-character operators are matched longest-first
//! (`<<<=` before `<<=` before `<<`). Callers hand in comment-stripped text,
//! but comments and whitespace are tolerated and skipped as trivia.

use logos::Logos;
use phf::phf_map;

use crate::error::ExprError;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"/\*([^*]|\*[^/])*\*/", priority = 2)]
    #[regex(r"//[^\n]*")]
    Comment,
    // Width digits, optional sign marker and base letter travel as one
    // lexeme: 8'hFF, 4'sb10_1x, 12'd42.
    #[regex(r"[0-9][0-9_]*'[sS]?[bBoOdDhH][0-9a-fA-FxzXZ_?]+")]
    SizedLiteral,
    #[regex(r"'[sS]?[bBoOdDhH][0-9a-fA-FxzXZ_?]+")]
    BasedLiteral,
    #[regex(r"'[01xzXZ]")]
    FillLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    RealLiteral,
    #[regex(r"[0-9][0-9_]*")]
    DecLiteral,
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("<<<=")]
    #[token(">>>=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("<<<")]
    #[token(">>>")]
    #[token("<<")]
    #[token(">>")]
    #[token("<=")]
    #[token(">=")]
    #[token("===")]
    #[token("!==")]
    #[token("==?")]
    #[token("!=?")]
    #[token("==")]
    #[token("!=")]
    #[token("**")]
    #[token("&&")]
    #[token("||")]
    #[token("~&")]
    #[token("~|")]
    #[token("~^")]
    #[token("^~")]
    #[token("::")]
    #[token(":=")]
    #[token(":/")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("!")]
    #[token("~")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("<")]
    #[token(">")]
    #[token("=")]
    #[token(".")]
    Operator,
}

/// Token classes significant to the expression pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexKind {
    /// Sized based literal, e.g. `8'hFF`.
    SizedLiteral,
    /// Based literal without a width, e.g. `'hAB`.
    BasedLiteral,
    /// Fill literal: `'0 '1 'x 'z`.
    FillLiteral,
    /// Real literal, e.g. `3.14`.
    RealLiteral,
    /// Unsized decimal literal.
    DecLiteral,
    /// Identifier, including `$`-prefixed system names.
    Ident,
    /// Quoted string literal including escapes.
    String,
    /// The `inside` set-membership keyword.
    Inside,
    /// The `dist` distribution keyword.
    Dist,
    /// Operator lexeme; the disambiguator resolves its arity positionally.
    Operator,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Question,
    Colon,
}

impl LexKind {
    /// Whether tokens of this kind land on the value stack.
    #[must_use]
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            Self::SizedLiteral
                | Self::BasedLiteral
                | Self::FillLiteral
                | Self::RealLiteral
                | Self::DecLiteral
                | Self::Ident
                | Self::String
        )
    }
}

/// Identifiers that are expression keywords rather than operands.
static KEYWORDS: phf::Map<&'static str, LexKind> = phf_map! {
    "inside" => LexKind::Inside,
    "dist" => LexKind::Dist,
};

/// Tokenise one expression substring.
///
/// Whitespace and comments are dropped; everything else is classified.
///
/// # Examples
///
/// ```rust
/// use svexpr::{LexKind, tokenize};
///
/// let tokens = tokenize("data[3:0]").unwrap();
/// let kinds: Vec<LexKind> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         LexKind::Ident,
///         LexKind::LBracket,
///         LexKind::DecLiteral,
///         LexKind::Colon,
///         LexKind::DecLiteral,
///         LexKind::RBracket,
///     ]
/// );
/// ```
///
/// # Errors
/// Returns [`ExprError::InvalidToken`] with the byte offset of the first
/// unrecognised character run.
pub fn tokenize(src: &str) -> Result<Vec<(LexKind, Span)>, ExprError> {
    let mut lexer = RawToken::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            return Err(ExprError::InvalidToken { offset: span.start });
        };
        let kind = match token {
            RawToken::Whitespace | RawToken::Comment => continue,
            RawToken::SizedLiteral => LexKind::SizedLiteral,
            RawToken::BasedLiteral => LexKind::BasedLiteral,
            RawToken::FillLiteral => LexKind::FillLiteral,
            RawToken::RealLiteral => LexKind::RealLiteral,
            RawToken::DecLiteral => LexKind::DecLiteral,
            RawToken::Ident => {
                let text = src.get(span.clone()).unwrap_or("");
                KEYWORDS.get(text).copied().unwrap_or(LexKind::Ident)
            }
            RawToken::String => LexKind::String,
            RawToken::LParen => LexKind::LParen,
            RawToken::RParen => LexKind::RParen,
            RawToken::LBracket => LexKind::LBracket,
            RawToken::RBracket => LexKind::RBracket,
            RawToken::LBrace => LexKind::LBrace,
            RawToken::RBrace => LexKind::RBrace,
            RawToken::Comma => LexKind::Comma,
            RawToken::Question => LexKind::Question,
            RawToken::Colon => LexKind::Colon,
            RawToken::Operator => LexKind::Operator,
        };
        out.push((kind, span));
    }
    Ok(out)
}
