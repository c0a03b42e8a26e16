//! Infix reconstruction from postfix.
//!
//! Two renderings of the same evaluation walk: [`reconstruct`] emits the
//! minimal parenthesisation that preserves the postfix order, and
//! [`parenthesize`] wraps every operator reduction so grouping is explicit.
//! Both guarantee that re-parsing their output yields the input postfix
//! sequence.

use crate::error::ExprError;
use crate::operators::{self, Arity, Assoc, OperatorEntry, PREC_ATOM};
use crate::parser::postfix::RpnToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Minimal,
    Explicit,
}

/// A rendered subexpression with the binding strength of its top operator.
struct Rendered {
    text: String,
    precedence: u8,
    /// Whether the text is a braced set body, which `inside`/`dist` take
    /// bare.
    is_set: bool,
}

impl Rendered {
    fn atom(text: String) -> Self {
        Self {
            text,
            precedence: PREC_ATOM,
            is_set: false,
        }
    }
}

struct Builder {
    stack: Vec<Rendered>,
    mode: Mode,
}

impl Builder {
    fn pop(&mut self) -> Result<Rendered, ExprError> {
        // Postfix tokens carry no spans, so underflow reports offset zero.
        self.stack.pop().ok_or(ExprError::TrailingOperators { offset: 0 })
    }

    fn push(&mut self, rendered: Rendered) {
        if self.mode == Mode::Explicit && rendered.precedence < PREC_ATOM {
            self.stack.push(Rendered::atom(format!("({})", rendered.text)));
        } else {
            self.stack.push(rendered);
        }
    }

    /// Wrap `child` when its top operator binds looser than the parent, or
    /// equally when associativity would regroup it.
    fn operand(child: &Rendered, parent: OperatorEntry, wrap_equal: bool) -> String {
        let needs = child.precedence < parent.precedence
            || (child.precedence == parent.precedence && wrap_equal);
        if needs {
            format!("({})", child.text)
        } else {
            child.text.clone()
        }
    }

    fn entry(symbol: &str, arity: Arity) -> Result<OperatorEntry, ExprError> {
        operators::lookup(symbol, arity).ok_or_else(|| ExprError::UnknownOperator {
            symbol: symbol.to_string(),
            offset: 0,
        })
    }

    fn unary(&mut self, symbol: &str) -> Result<(), ExprError> {
        let entry = Self::entry(symbol, Arity::Unary)?;
        let operand = self.pop()?;
        // An operand at the unary band also wraps: printed bare, the two
        // prefix symbols would re-lex as one compound operator (`^~x`,
        // `&&a`).
        let text = if operand.precedence <= entry.precedence {
            format!("{symbol}({})", operand.text)
        } else {
            format!("{symbol}{}", operand.text)
        };
        self.push(Rendered {
            text,
            precedence: entry.precedence,
            is_set: false,
        });
        Ok(())
    }

    fn binary(&mut self, symbol: &str) -> Result<(), ExprError> {
        let entry = Self::entry(symbol, Arity::Binary)?;
        let rhs = self.pop()?;
        let lhs = self.pop()?;
        let left = Self::operand(&lhs, entry, entry.assoc == Assoc::Right);
        let right = Self::operand(&rhs, entry, entry.assoc == Assoc::Left);
        // Member selects read as one name; everything else gets spaces.
        let text = if matches!(symbol, "." | "::") {
            format!("{left}{symbol}{right}")
        } else {
            format!("{left} {symbol} {right}")
        };
        self.push(Rendered {
            text,
            precedence: entry.precedence,
            is_set: false,
        });
        Ok(())
    }

    fn cond(&mut self) -> Result<(), ExprError> {
        let prec = operators::TERNARY.precedence;
        let false_branch = self.pop()?;
        let true_branch = self.pop()?;
        let cond = self.pop()?;
        // The condition wraps even at equal precedence so a nested
        // conditional stays on the right; the true branch is already
        // delimited by `?` and `:`.
        let cond_text = if cond.precedence <= prec {
            format!("({})", cond.text)
        } else {
            cond.text
        };
        let false_text = if false_branch.precedence < prec {
            format!("({})", false_branch.text)
        } else {
            false_branch.text
        };
        self.push(Rendered {
            text: format!("{cond_text} ? {} : {false_text}", true_branch.text),
            precedence: prec,
            is_set: false,
        });
        Ok(())
    }

    fn select(&mut self, with_range: bool) -> Result<(), ExprError> {
        let (msb, lsb) = if with_range {
            let lsb = self.pop()?;
            let msb = self.pop()?;
            (msb, Some(lsb))
        } else {
            (self.pop()?, None)
        };
        let base = self.pop()?;
        let base_text = if base.precedence < PREC_ATOM {
            format!("({})", base.text)
        } else {
            base.text
        };
        let text = match lsb {
            Some(lsb) => format!("{base_text}[{}:{}]", msb.text, lsb.text),
            None => format!("{base_text}[{}]", msb.text),
        };
        self.stack.push(Rendered::atom(text));
        Ok(())
    }

    fn range(&mut self) -> Result<(), ExprError> {
        let hi = self.pop()?;
        let lo = self.pop()?;
        self.stack
            .push(Rendered::atom(format!("[{}:{}]", lo.text, hi.text)));
        Ok(())
    }

    fn pop_elems(&mut self, count: usize) -> Result<Vec<String>, ExprError> {
        let mut parts = Vec::with_capacity(count);
        for _ in 0..count {
            parts.push(self.pop()?.text);
        }
        parts.reverse();
        Ok(parts)
    }

    fn concat(&mut self, count: usize) -> Result<(), ExprError> {
        let parts = self.pop_elems(count)?;
        self.stack
            .push(Rendered::atom(format!("{{{}}}", parts.join(","))));
        Ok(())
    }

    fn repl(&mut self, elems: usize) -> Result<(), ExprError> {
        let parts = self.pop_elems(elems)?;
        let count = self.pop()?;
        self.stack.push(Rendered::atom(format!(
            "{{{}{{{}}}}}",
            count.text,
            parts.join(",")
        )));
        Ok(())
    }

    fn set(&mut self, count: usize) -> Result<(), ExprError> {
        let parts = self.pop_elems(count)?;
        self.stack.push(Rendered {
            text: format!("{{{}}}", parts.join(", ")),
            precedence: PREC_ATOM,
            is_set: true,
        });
        Ok(())
    }

    fn membership(&mut self, symbol: &str) -> Result<(), ExprError> {
        let entry = Self::entry(symbol, Arity::Binary)?;
        let rhs = self.pop()?;
        let lhs = self.pop()?;
        let left = Self::operand(&lhs, entry, false);
        // A bare brace after `inside`/`dist` reads as the set body; any
        // other right-hand side needs parentheses to re-parse the same way.
        let right = if rhs.is_set {
            rhs.text
        } else {
            format!("({})", rhs.text)
        };
        self.push(Rendered {
            text: format!("{left} {symbol} {right}"),
            precedence: entry.precedence,
            is_set: false,
        });
        Ok(())
    }

    fn step(&mut self, token: &RpnToken) -> Result<(), ExprError> {
        match token {
            RpnToken::Operand(text) => {
                self.stack.push(Rendered::atom(text.clone()));
                Ok(())
            }
            RpnToken::Unary(symbol) => self.unary(symbol),
            RpnToken::Binary(symbol) => self.binary(symbol),
            RpnToken::Index => self.select(false),
            RpnToken::IndexRange => self.select(true),
            RpnToken::Range => self.range(),
            RpnToken::Concat(count) => self.concat(*count),
            RpnToken::Repl { elems } => self.repl(*elems),
            RpnToken::Set(count) => self.set(*count),
            RpnToken::Cond => self.cond(),
            RpnToken::SetMember => self.membership("inside"),
            RpnToken::DistApply => self.membership("dist"),
        }
    }
}

fn build(tokens: &[RpnToken], mode: Mode) -> Result<String, ExprError> {
    let mut builder = Builder {
        stack: Vec::new(),
        mode,
    };
    for token in tokens {
        builder.step(token)?;
    }
    let result = builder.pop()?;
    if !builder.stack.is_empty() {
        return Err(ExprError::TrailingOperators { offset: 0 });
    }
    Ok(result.text)
}

/// Rebuild infix text with the minimal parentheses that preserve the
/// postfix grouping.
///
/// # Errors
/// [`ExprError::TrailingOperators`] when the sequence underflows or leaves
/// more than one value; [`ExprError::UnknownOperator`] for an operator
/// lexeme without a table entry.
pub fn reconstruct(tokens: &[RpnToken]) -> Result<String, ExprError> {
    build(tokens, Mode::Minimal)
}

/// Rebuild infix text with every operator reduction parenthesised.
///
/// # Errors
/// Same conditions as [`reconstruct`].
pub fn parenthesize(tokens: &[RpnToken]) -> Result<String, ExprError> {
    build(tokens, Mode::Explicit)
}
