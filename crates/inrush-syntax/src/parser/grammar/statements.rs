//! Statement parsing.
//!
//! Supported statements:
//! - Assignment: `x := operand [op operand]*;`
//! - Call: `f(operand [op operand]*);` or `f();`
//! - IF/THEN/ELSE/END_IF

use crate::ast::NodeKind;
use crate::lexer::TokenKind;

use super::super::{Parser, RuleResult};
use super::expressions::Placement;
use super::Block;

impl Parser<'_> {
    /// Dispatch on the token after a leading name.
    pub(crate) fn assignment_or_call(&mut self) -> RuleResult {
        match self.current() {
            TokenKind::Assign => self.assignment(),
            TokenKind::OpenParen => self.call(),
            _ => self.unexpected(&[TokenKind::Assign, TokenKind::OpenParen]),
        }
    }

    /// Parse `name := operand continuation* ;`.
    fn assignment(&mut self) -> RuleResult {
        self.add_node(NodeKind::Assignment);
        self.add_tokens();
        self.expect(&[TokenKind::Assign])?;
        self.add_tokens();
        self.operand(Placement::Inline)?;
        self.continuations()?;
        self.expect(&[TokenKind::Semicolon])?;
        self.skip_token()?;
        self.walk_up()?;
        Ok(())
    }

    /// Parse `name ( [operand continuation*] ) ;`.
    fn call(&mut self) -> RuleResult {
        self.add_node(NodeKind::Call);
        self.add_tokens();
        self.expect(&[TokenKind::OpenParen])?;
        self.skip_token()?;
        if !self.at(TokenKind::CloseParen) {
            self.operand(Placement::Terminal)?;
            self.continuations()?;
        }
        self.expect(&[TokenKind::CloseParen])?;
        self.skip_token()?;
        self.expect(&[TokenKind::Semicolon])?;
        self.skip_token()?;
        self.walk_up()?;
        Ok(())
    }

    /// Parse `IF condition THEN ... [ELSE ...] END_IF`.
    ///
    /// A bad header is reported once and the branches still parse.
    pub(crate) fn if_statement(&mut self) -> RuleResult {
        self.skip_token()?;
        self.add_node(NodeKind::IfStatement);
        let depth = self.builder.depth();

        let header = self.if_header();
        self.settle(header, depth)?;

        self.branch(NodeKind::ThenStatement, Block::Then)?;
        if self.at(TokenKind::KwElse) {
            self.bump();
            self.skip_token()?;
            self.builder.narrow_closers(&[TokenKind::KwEndIf]);
            self.branch(NodeKind::ElseStatement, Block::Else)?;
        }
        self.expect(&[TokenKind::KwEndIf])?;
        self.skip_token()?;
        self.walk_up()?;
        Ok(())
    }

    fn if_header(&mut self) -> RuleResult {
        self.condition()?;
        self.expect(&[TokenKind::KwThen])?;
        self.skip_token()?;
        Ok(())
    }

    /// `name`, or `name relop operand` when relational conditions are on.
    /// The tokens attach directly to the IF node.
    fn condition(&mut self) -> RuleResult {
        self.expect(&[TokenKind::Variable])?;
        if self.config.relational_conditions && self.current().is_comparison_op() {
            self.bump();
            self.expect(&[TokenKind::Literal, TokenKind::Variable])?;
        }
        self.add_tokens();
        Ok(())
    }

    fn branch(&mut self, kind: NodeKind, block: Block) -> RuleResult {
        if !self.config.branch_nodes {
            self.block_body(block)?;
            return Ok(());
        }
        self.add_node(kind);
        self.block_body(block)?;
        self.walk_up()?;
        Ok(())
    }
}
