//! Expression parsing pipeline.
//!
//! Three passes take an expression substring to postfix: [`tokenize`] lexes
//! it, [`disambiguate`] resolves arity, colon roles and brace roles from
//! position, and [`convert`] runs shunting-yard over the classified stream.
//! [`parse_expression`] chains all three.

mod convert;
mod disambiguate;
pub mod postfix;
pub mod token;

pub use convert::convert;
pub use disambiguate::disambiguate;
pub use postfix::{RpnToken, postfix_to_string};
pub use token::{SetKind, Token, TokenKind};

use crate::error::ExprError;
use crate::tokenizer::tokenize;

/// Parse one expression substring to a postfix sequence.
///
/// # Errors
/// Propagates any [`ExprError`] from the three passes; see [`convert`] for
/// the conversion-stage variants.
pub fn parse_expression(src: &str) -> Result<Vec<RpnToken>, ExprError> {
    let lexed = tokenize(src)?;
    let tokens = disambiguate(src, &lexed)?;
    convert(&tokens)
}
