//! Expression parsing.
//!
//! Expressions are flat: an operand followed by any number of
//! `op operand` continuations, each its own `EXPRESSION` node in source
//! order. There is no operator precedence. A parenthesized group may also
//! open with an operator: `(-1)`, `(- a * 2)`.

use crate::ast::NodeKind;
use crate::lexer::TokenKind;

use super::super::{Parser, RuleResult};

/// Where a plain operand token goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Placement {
    /// Attach to the focused node itself.
    Inline,
    /// Wrap in a `TERMINAL` child.
    Terminal,
}

impl Parser<'_> {
    /// Parse a literal, a variable, or a parenthesized group.
    pub(super) fn operand(&mut self, placement: Placement) -> RuleResult {
        match self.current() {
            TokenKind::Literal | TokenKind::Variable => {
                self.bump();
                match placement {
                    Placement::Inline => self.add_tokens(),
                    Placement::Terminal => self.term()?,
                }
                Ok(())
            }
            TokenKind::OpenParen => self.paren_expression(),
            _ => self.unexpected(&[
                TokenKind::Literal,
                TokenKind::Variable,
                TokenKind::OpenParen,
            ]),
        }
    }

    fn term(&mut self) -> RuleResult {
        self.add_node(NodeKind::Terminal);
        self.add_tokens();
        self.walk_up()?;
        Ok(())
    }

    /// Parse `(op operand)*`.
    pub(super) fn continuations(&mut self) -> RuleResult {
        while self.current().is_arithmetic_op() {
            self.bump();
            self.expression()?;
        }
        Ok(())
    }

    /// Parse one `op operand` with the operator already pending.
    fn expression(&mut self) -> RuleResult {
        self.add_node(NodeKind::Expression);
        self.add_tokens();
        self.operand(Placement::Terminal)?;
        self.walk_up()?;
        Ok(())
    }

    /// Parse `( [op] operand continuation* )`.
    ///
    /// The operator-led form `(- x)` is tried speculatively first. When it
    /// does not fit, the group is parsed as a plain operand with its
    /// continuations, and errors are reported against that form.
    fn paren_expression(&mut self) -> RuleResult {
        self.expect(&[TokenKind::OpenParen])?;
        self.add_node(NodeKind::Expression);
        self.add_tokens();
        if !self.peek(Self::signed_group)? {
            self.operand(Placement::Terminal)?;
            self.continuations()?;
        }
        self.expect(&[TokenKind::CloseParen])?;
        self.add_tokens();
        self.walk_up()?;
        Ok(())
    }

    /// Parse `op operand continuation*` inside a group.
    fn signed_group(&mut self) -> RuleResult {
        if !self.current().is_arithmetic_op() {
            return self.unexpected(&[
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
            ]);
        }
        self.bump();
        self.expression()?;
        self.continuations()
    }
}
