//! Positional disambiguation of raw lexemes.
//!
//! A two-state automaton resolves the three context-dependent puzzles the
//! lexer cannot: whether `+ - & | ^ ~^ ^~ ! ~ ~& ~|` are prefix or infix,
//! which construct each `:` belongs to, and whether a `{` opens a
//! concatenation or an `inside`/`dist` set body. Delimiter pairing is
//! checked here as well so the converter can trust its scope markers.

use crate::error::ExprError;
use crate::operators::{self, Arity};
use crate::parser::token::{SetKind, Token, TokenKind};
use crate::tokenizer::{LexKind, Span};

/// Symbols with both a prefix and an infix reading, plus the reduction
/// operators that only exist in prefix form.
const AMBIGUOUS: [&str; 11] = [
    "+", "-", "&", "|", "^", "~^", "^~", "!", "~", "~&", "~|",
];

/// What the automaton expects to see next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectOperand,
    ExpectOperator,
}

/// Bracketing construct currently open, innermost last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Paren,
    Index,
    Brace(Option<SetKind>),
    Ternary,
}

fn text(src: &str, span: &Span) -> String {
    src.get(span.clone()).unwrap_or_default().to_string()
}

/// Classify a lexed token stream into [`Token`]s.
///
/// # Errors
/// - [`ExprError::AmbiguousColon`] when a `:` has no enclosing bracket,
///   ternary or `dist` body to attach to.
/// - [`ExprError::UnbalancedBrackets`] when a closer does not match the
///   innermost open construct. An opener left unclosed at the end of the
///   input is reported by the converter, which owns end-of-input checks.
/// - [`ExprError::UnknownOperator`] when an operator lexeme has no table
///   entry for the arity its position demands.
pub fn disambiguate(src: &str, lexed: &[(LexKind, Span)]) -> Result<Vec<Token>, ExprError> {
    let mut out = Vec::with_capacity(lexed.len());
    let mut state = State::ExpectOperand;
    let mut scopes: Vec<Scope> = Vec::new();
    let mut prev_kind: Option<LexKind> = None;

    for (kind, span) in lexed {
        let offset = span.start;
        let kind = *kind;
        let token_kind = match kind {
            LexKind::SizedLiteral
            | LexKind::BasedLiteral
            | LexKind::FillLiteral
            | LexKind::RealLiteral
            | LexKind::DecLiteral
            | LexKind::Ident
            | LexKind::String => {
                state = State::ExpectOperator;
                TokenKind::Operand(text(src, span))
            }
            LexKind::Inside => {
                state = State::ExpectOperand;
                TokenKind::Inside
            }
            LexKind::Dist => {
                state = State::ExpectOperand;
                TokenKind::Dist
            }
            LexKind::Operator => {
                let symbol = text(src, span);
                let arity = if state == State::ExpectOperand
                    && AMBIGUOUS.contains(&symbol.as_str())
                {
                    Arity::Unary
                } else {
                    Arity::Binary
                };
                if operators::lookup(&symbol, arity).is_none() {
                    return Err(ExprError::UnknownOperator { symbol, offset });
                }
                state = State::ExpectOperand;
                TokenKind::Operator { symbol, arity }
            }
            LexKind::LParen => {
                scopes.push(Scope::Paren);
                state = State::ExpectOperand;
                TokenKind::OpenParen
            }
            LexKind::RParen => {
                if scopes.pop() != Some(Scope::Paren) {
                    return Err(ExprError::UnbalancedBrackets { offset });
                }
                state = State::ExpectOperator;
                TokenKind::CloseParen
            }
            LexKind::LBracket => {
                scopes.push(Scope::Index);
                state = State::ExpectOperand;
                TokenKind::OpenBracket
            }
            LexKind::RBracket => {
                if scopes.pop() != Some(Scope::Index) {
                    return Err(ExprError::UnbalancedBrackets { offset });
                }
                state = State::ExpectOperator;
                TokenKind::CloseBracket
            }
            LexKind::LBrace => {
                let set = match prev_kind {
                    Some(LexKind::Inside) => Some(SetKind::Inside),
                    Some(LexKind::Dist) => Some(SetKind::Dist),
                    _ => None,
                };
                scopes.push(Scope::Brace(set));
                state = State::ExpectOperand;
                TokenKind::OpenBrace(set)
            }
            LexKind::RBrace => {
                if !matches!(scopes.pop(), Some(Scope::Brace(_))) {
                    return Err(ExprError::UnbalancedBrackets { offset });
                }
                state = State::ExpectOperator;
                TokenKind::CloseBrace
            }
            LexKind::Comma => {
                state = State::ExpectOperand;
                TokenKind::Comma
            }
            LexKind::Question => {
                scopes.push(Scope::Ternary);
                state = State::ExpectOperand;
                TokenKind::Question
            }
            LexKind::Colon => {
                state = State::ExpectOperand;
                match scopes.last() {
                    Some(Scope::Index) => TokenKind::RangeColon,
                    Some(Scope::Ternary) => {
                        scopes.pop();
                        TokenKind::TernaryColon
                    }
                    Some(Scope::Brace(Some(SetKind::Dist))) => TokenKind::DistColon,
                    _ => return Err(ExprError::AmbiguousColon { offset }),
                }
            }
        };
        prev_kind = Some(kind);
        out.push(Token {
            kind: token_kind,
            offset,
        });
    }
    Ok(out)
}
