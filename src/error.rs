//! Error taxonomy for expression parsing.
//!
//! Every variant is a synchronous, per-expression parse failure carrying the
//! byte offset at which it was detected. Callers are expected to record the
//! error for their diagnostics report and continue with the next expression;
//! no partial postfix or infix output is produced on failure.

use thiserror::Error;

/// Failures reported by the tokenizer, disambiguator, converter and rebuilder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// The lexer hit a character run it does not recognise.
    #[error("invalid token at byte {offset}")]
    InvalidToken {
        /// Byte offset of the offending character.
        offset: usize,
    },
    /// An operator lexeme has no table entry for its resolved arity,
    /// e.g. `~&` used in binary position.
    #[error("unknown operator `{symbol}` at byte {offset}")]
    UnknownOperator {
        /// The operator lexeme as written.
        symbol: String,
        /// Byte offset of the lexeme.
        offset: usize,
    },
    /// A `:` could not be matched to an open bracket, ternary or `dist` body.
    #[error("ambiguous `:` at byte {offset}")]
    AmbiguousColon {
        /// Byte offset of the colon.
        offset: usize,
    },
    /// A closing delimiter had no matching opener, or an opener was still
    /// unmatched when the input ended. The offset names the unmatched token.
    #[error("unbalanced bracket at byte {offset}")]
    UnbalancedBrackets {
        /// Byte offset of the unmatched delimiter.
        offset: usize,
    },
    /// A reduction ran out of operands, or operators were left over once the
    /// input was exhausted. The rebuilder reports offset zero here because
    /// postfix tokens no longer carry source spans.
    #[error("operator missing operands at byte {offset}")]
    TrailingOperators {
        /// Byte offset of the operator that could not be reduced.
        offset: usize,
    },
    /// The expression contained no significant tokens.
    #[error("empty expression")]
    EmptyExpression,
}
