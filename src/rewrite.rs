//! Whole-expression rewriting helpers.
//!
//! Thin wrappers that chain parsing and reconstruction so callers can
//! normalise or fully parenthesise an expression string in one call.

use crate::error::ExprError;
use crate::parser::parse_expression;
use crate::rebuild::{parenthesize, reconstruct};

/// Reprint `src` with minimal parentheses and canonical spacing.
///
/// # Errors
/// Propagates any [`ExprError`] from parsing or reconstruction.
pub fn normalize_expression(src: &str) -> Result<String, ExprError> {
    let postfix = parse_expression(src)?;
    let rebuilt = reconstruct(&postfix)?;
    if rebuilt != src.trim() {
        log::debug!("normalised {:?} to {:?}", src.trim(), rebuilt);
    }
    Ok(rebuilt)
}

/// Reprint `src` with every operator reduction parenthesised.
///
/// # Errors
/// Propagates any [`ExprError`] from parsing or reconstruction.
pub fn parenthesize_expression(src: &str) -> Result<String, ExprError> {
    let postfix = parse_expression(src)?;
    parenthesize(&postfix)
}
