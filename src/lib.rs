//! Precedence-aware SystemVerilog expression handling.
//!
//! The crate parses one right-hand-side expression substring at a time:
//! [`tokenize`] lexes it, [`parse_expression`] resolves operator arity and
//! colon roles before running shunting-yard to a postfix sequence, and
//! [`reconstruct`]/[`parenthesize`] print the sequence back as infix with
//! minimal or fully explicit grouping. Operator binding follows the IEEE
//! 1800-2017 precedence table, including the select, concatenation,
//! replication, conditional and `inside`/`dist` forms.
//!
//! ```rust
//! use svexpr::{normalize_expression, parse_expression, postfix_to_string};
//!
//! let postfix = parse_expression("a + b * c")?;
//! assert_eq!(postfix_to_string(&postfix), "a b c * +");
//! assert_eq!(normalize_expression("(a) + ((b * c))")?, "a + b * c");
//! # Ok::<(), svexpr::ExprError>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod operators;
pub mod parser;
pub mod rebuild;
pub mod rewrite;
pub mod tokenizer;

pub use error::ExprError;
pub use operators::{Arity, Assoc, OperatorEntry};
pub use parser::{
    RpnToken, SetKind, Token, TokenKind, convert, disambiguate, parse_expression,
    postfix_to_string,
};
pub use rebuild::{parenthesize, reconstruct};
pub use rewrite::{normalize_expression, parenthesize_expression};
pub use tokenizer::{LexKind, Span, tokenize};
