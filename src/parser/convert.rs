//! Infix to postfix conversion.
//!
//! A shunting-yard loop over the classified token stream. The operator stack
//! interleaves pending operators with group markers for parentheses,
//! brackets, braces and open conditionals; each marker records enough state
//! to pick its reduction when the group closes. A running value count
//! detects operand underflow at the moment an operator reduces rather than
//! at the end of the input.

use crate::error::ExprError;
use crate::operators::{self, Arity, Assoc, OperatorEntry};
use crate::parser::postfix::RpnToken;
use crate::parser::token::{SetKind, Token, TokenKind};

/// One slot on the conversion stack.
#[derive(Debug)]
enum StackEntry {
    /// A pending unary or binary operator.
    Op {
        symbol: String,
        entry: OperatorEntry,
        offset: usize,
    },
    Paren {
        offset: usize,
    },
    Bracket {
        offset: usize,
        /// Whether a base value preceded the `[`.
        based: bool,
        saw_colon: bool,
    },
    Brace {
        offset: usize,
        set: Option<SetKind>,
        commas: usize,
        /// Element count handed up by an inner replication body.
        repl_elems: Option<usize>,
        /// Whether this brace is itself a replication body.
        repl_body: bool,
    },
    Ternary {
        offset: usize,
        colon_seen: bool,
    },
}

struct Converter {
    output: Vec<RpnToken>,
    stack: Vec<StackEntry>,
    /// Number of values currently reduced and available as operands.
    depth: usize,
    /// Whether the previous significant token produced a value.
    last_was_value: bool,
}

impl Converter {
    fn new() -> Self {
        Self {
            output: Vec::new(),
            stack: Vec::new(),
            depth: 0,
            last_was_value: false,
        }
    }

    /// Emit `token`, consuming `operands` values from the virtual stack.
    fn emit(
        &mut self,
        token: RpnToken,
        operands: usize,
        offset: usize,
    ) -> Result<(), ExprError> {
        if self.depth < operands {
            return Err(ExprError::TrailingOperators { offset });
        }
        self.depth = self.depth - operands + 1;
        self.output.push(token);
        Ok(())
    }

    fn reduce_op(
        &mut self,
        symbol: String,
        entry: OperatorEntry,
        offset: usize,
    ) -> Result<(), ExprError> {
        match entry.arity {
            Arity::Unary => self.emit(RpnToken::Unary(symbol), 1, offset),
            Arity::Binary => match symbol.as_str() {
                "inside" => self.emit(RpnToken::SetMember, 2, offset),
                "dist" => self.emit(RpnToken::DistApply, 2, offset),
                _ => self.emit(RpnToken::Binary(symbol), 2, offset),
            },
        }
    }

    /// Shunting-yard push for a binary operator: reduce everything that
    /// binds at least as tightly, then stack the newcomer.
    fn push_binary(
        &mut self,
        symbol: String,
        entry: OperatorEntry,
        offset: usize,
    ) -> Result<(), ExprError> {
        while let Some(StackEntry::Op { entry: top, .. }) = self.stack.last() {
            let reduce = top.precedence > entry.precedence
                || (top.precedence == entry.precedence && entry.assoc == Assoc::Left);
            if !reduce {
                break;
            }
            let Some(StackEntry::Op {
                symbol: top_symbol,
                entry: top_entry,
                offset: top_offset,
            }) = self.stack.pop()
            else {
                break;
            };
            self.reduce_op(top_symbol, top_entry, top_offset)?;
        }
        self.stack.push(StackEntry::Op {
            symbol,
            entry,
            offset,
        });
        Ok(())
    }

    /// Reduce pending operators and resolved conditionals down to the
    /// nearest group marker. Used before `, : ] } )` boundaries.
    fn flush_group(&mut self) -> Result<(), ExprError> {
        loop {
            match self.stack.last() {
                Some(StackEntry::Op { .. }) => {
                    let Some(StackEntry::Op {
                        symbol,
                        entry,
                        offset,
                    }) = self.stack.pop()
                    else {
                        break;
                    };
                    self.reduce_op(symbol, entry, offset)?;
                }
                Some(StackEntry::Ternary {
                    colon_seen: true, ..
                }) => {
                    let Some(StackEntry::Ternary { offset, .. }) = self.stack.pop() else {
                        break;
                    };
                    self.emit(RpnToken::Cond, 3, offset)?;
                }
                Some(StackEntry::Ternary {
                    colon_seen: false,
                    offset,
                }) => {
                    return Err(ExprError::TrailingOperators { offset: *offset });
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn push_ternary(&mut self, offset: usize) -> Result<(), ExprError> {
        let prec = operators::TERNARY.precedence;
        while let Some(StackEntry::Op { entry: top, .. }) = self.stack.last() {
            if top.precedence <= prec {
                break;
            }
            let Some(StackEntry::Op {
                symbol,
                entry,
                offset: top_offset,
            }) = self.stack.pop()
            else {
                break;
            };
            self.reduce_op(symbol, entry, top_offset)?;
        }
        self.stack.push(StackEntry::Ternary {
            offset,
            colon_seen: false,
        });
        Ok(())
    }

    /// Close the true branch of the innermost open conditional.
    fn resolve_ternary_colon(&mut self, offset: usize) -> Result<(), ExprError> {
        loop {
            match self.stack.last_mut() {
                Some(StackEntry::Op { .. }) => {
                    let Some(StackEntry::Op {
                        symbol,
                        entry,
                        offset: top_offset,
                    }) = self.stack.pop()
                    else {
                        break;
                    };
                    self.reduce_op(symbol, entry, top_offset)?;
                }
                Some(StackEntry::Ternary { colon_seen, .. }) => {
                    if *colon_seen {
                        // A nested conditional already closed by this colon's
                        // position; reduce it and keep looking.
                        let Some(StackEntry::Ternary {
                            offset: top_offset, ..
                        }) = self.stack.pop()
                        else {
                            break;
                        };
                        self.emit(RpnToken::Cond, 3, top_offset)?;
                    } else {
                        *colon_seen = true;
                        return Ok(());
                    }
                }
                _ => break,
            }
        }
        Err(ExprError::AmbiguousColon { offset })
    }

    /// Whether the innermost group marker is a plain `{` that has not yet
    /// seen a comma or an inner replication body. Only then can a nested
    /// `{` that follows a value be a replication body. Pending operators
    /// and resolved conditionals are not markers; `flush_group` reduces
    /// both before the body opens.
    fn plain_brace_is_innermost(&self) -> bool {
        for slot in self.stack.iter().rev() {
            match slot {
                StackEntry::Op { .. }
                | StackEntry::Ternary {
                    colon_seen: true, ..
                } => {}
                StackEntry::Brace {
                    set: None,
                    commas: 0,
                    repl_elems: None,
                    repl_body: false,
                    ..
                } => return true,
                _ => return false,
            }
        }
        false
    }

    fn open_brace(&mut self, set: Option<SetKind>, offset: usize) -> Result<(), ExprError> {
        let repl_body =
            self.last_was_value && set.is_none() && self.plain_brace_is_innermost();
        if repl_body {
            // The count expression is complete; reduce it before the body
            // opens so it sits alone under the outer brace.
            self.flush_group()?;
        }
        self.stack.push(StackEntry::Brace {
            offset,
            set,
            commas: 0,
            repl_elems: None,
            repl_body,
        });
        self.last_was_value = false;
        Ok(())
    }

    fn close_brace(&mut self, offset: usize) -> Result<(), ExprError> {
        self.flush_group()?;
        let Some(StackEntry::Brace {
            offset: open_offset,
            set,
            commas,
            repl_elems,
            repl_body,
        }) = self.stack.pop()
        else {
            return Err(ExprError::UnbalancedBrackets { offset });
        };
        if repl_body {
            // Hand the element count up to the enclosing brace; the outer
            // `}` performs the replication reduction.
            let Some(StackEntry::Brace {
                set: None,
                repl_elems: outer_elems,
                ..
            }) = self.stack.last_mut()
            else {
                return Err(ExprError::UnbalancedBrackets { offset: open_offset });
            };
            *outer_elems = Some(commas + 1);
            return Ok(());
        }
        if let Some(elems) = repl_elems {
            // `{count{body}}`: nothing else may share the outer brace.
            if commas > 0 {
                return Err(ExprError::UnbalancedBrackets { offset: open_offset });
            }
            return self.emit(RpnToken::Repl { elems }, elems + 1, open_offset);
        }
        let count = commas + 1;
        match set {
            Some(_) => self.emit(RpnToken::Set(count), count, open_offset),
            None => self.emit(RpnToken::Concat(count), count, open_offset),
        }
    }

    fn close_bracket(&mut self, offset: usize) -> Result<(), ExprError> {
        self.flush_group()?;
        let Some(StackEntry::Bracket {
            offset: open_offset,
            based,
            saw_colon,
        }) = self.stack.pop()
        else {
            return Err(ExprError::UnbalancedBrackets { offset });
        };
        match (based, saw_colon) {
            (true, true) => self.emit(RpnToken::IndexRange, 3, open_offset),
            (true, false) => self.emit(RpnToken::Index, 2, open_offset),
            (false, true) => self.emit(RpnToken::Range, 2, open_offset),
            // A baseless `[expr]` is neither a select nor a range.
            (false, false) => Err(ExprError::UnbalancedBrackets { offset: open_offset }),
        }
    }

    fn close_paren(&mut self, offset: usize) -> Result<(), ExprError> {
        self.flush_group()?;
        let Some(StackEntry::Paren { .. }) = self.stack.pop() else {
            return Err(ExprError::UnbalancedBrackets { offset });
        };
        Ok(())
    }

    fn step(&mut self, token: &Token) -> Result<(), ExprError> {
        let offset = token.offset;
        let produces_value = matches!(
            token.kind,
            TokenKind::Operand(_)
                | TokenKind::CloseParen
                | TokenKind::CloseBracket
                | TokenKind::CloseBrace
        );
        match &token.kind {
            TokenKind::Operand(text) => {
                self.emit(RpnToken::Operand(text.clone()), 0, offset)?;
            }
            TokenKind::Operator { symbol, arity } => {
                let Some(entry) = operators::lookup(symbol, *arity) else {
                    return Err(ExprError::UnknownOperator {
                        symbol: symbol.clone(),
                        offset,
                    });
                };
                match arity {
                    // Prefix operators stack unconditionally; nothing to
                    // their left can bind tighter than an operand.
                    Arity::Unary => self.stack.push(StackEntry::Op {
                        symbol: symbol.clone(),
                        entry,
                        offset,
                    }),
                    Arity::Binary => self.push_binary(symbol.clone(), entry, offset)?,
                }
            }
            TokenKind::Inside | TokenKind::Dist => {
                let symbol = if token.kind == TokenKind::Inside {
                    "inside"
                } else {
                    "dist"
                };
                let Some(entry) = operators::lookup(symbol, Arity::Binary) else {
                    return Err(ExprError::UnknownOperator {
                        symbol: symbol.to_string(),
                        offset,
                    });
                };
                self.push_binary(symbol.to_string(), entry, offset)?;
            }
            TokenKind::OpenParen => self.stack.push(StackEntry::Paren { offset }),
            TokenKind::CloseParen => self.close_paren(offset)?,
            TokenKind::OpenBracket => self.stack.push(StackEntry::Bracket {
                offset,
                based: self.last_was_value,
                saw_colon: false,
            }),
            TokenKind::CloseBracket => self.close_bracket(offset)?,
            TokenKind::OpenBrace(set) => self.open_brace(*set, offset)?,
            TokenKind::CloseBrace => self.close_brace(offset)?,
            TokenKind::Comma => {
                self.flush_group()?;
                let Some(StackEntry::Brace { commas, .. }) = self.stack.last_mut() else {
                    return Err(ExprError::UnbalancedBrackets { offset });
                };
                *commas += 1;
            }
            TokenKind::RangeColon => {
                self.flush_group()?;
                let Some(StackEntry::Bracket { saw_colon, .. }) = self.stack.last_mut()
                else {
                    return Err(ExprError::AmbiguousColon { offset });
                };
                if *saw_colon {
                    return Err(ExprError::AmbiguousColon { offset });
                }
                *saw_colon = true;
            }
            TokenKind::Question => self.push_ternary(offset)?,
            TokenKind::TernaryColon => self.resolve_ternary_colon(offset)?,
            TokenKind::DistColon => {
                self.push_binary(":".to_string(), operators::DIST_WEIGHT, offset)?;
            }
        }
        self.last_was_value = produces_value;
        Ok(())
    }

    fn finish(mut self, end_offset: usize) -> Result<Vec<RpnToken>, ExprError> {
        while let Some(slot) = self.stack.pop() {
            match slot {
                StackEntry::Op {
                    symbol,
                    entry,
                    offset,
                } => self.reduce_op(symbol, entry, offset)?,
                StackEntry::Ternary {
                    colon_seen: true,
                    offset,
                } => self.emit(RpnToken::Cond, 3, offset)?,
                StackEntry::Ternary {
                    colon_seen: false,
                    offset,
                } => return Err(ExprError::TrailingOperators { offset }),
                StackEntry::Paren { offset }
                | StackEntry::Bracket { offset, .. }
                | StackEntry::Brace { offset, .. } => {
                    return Err(ExprError::UnbalancedBrackets { offset });
                }
            }
        }
        if self.depth != 1 {
            return Err(ExprError::TrailingOperators { offset: end_offset });
        }
        Ok(self.output)
    }
}

/// Convert a classified token stream to postfix.
///
/// # Errors
/// - [`ExprError::EmptyExpression`] when `tokens` is empty.
/// - [`ExprError::TrailingOperators`] when an operator or conditional lacks
///   operands, or values remain unconsumed at the end.
/// - [`ExprError::UnbalancedBrackets`] when a group is still open at the end
///   of the input, or a comma falls outside a brace body.
/// - [`ExprError::AmbiguousColon`] on a second `:` within one bracket pair.
pub fn convert(tokens: &[Token]) -> Result<Vec<RpnToken>, ExprError> {
    let Some(last) = tokens.last() else {
        return Err(ExprError::EmptyExpression);
    };
    let mut converter = Converter::new();
    for token in tokens {
        converter.step(token)?;
    }
    converter.finish(last.offset)
}
