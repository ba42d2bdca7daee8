//! Variable declaration parsing.
//!
//! ```text
//! VAR
//!     name : BOOL;
//! END_VAR
//! ```

use crate::ast::NodeKind;
use crate::lexer::TokenKind;

use super::super::{Parser, RuleResult};
use super::Block;

const TYPE_KEYWORDS: &[TokenKind] = &[
    TokenKind::KwBool,
    TokenKind::KwInt,
    TokenKind::KwReal,
    TokenKind::KwString,
];

impl Parser<'_> {
    /// Parse `VAR ... END_VAR`.
    pub(crate) fn var_block(&mut self) -> RuleResult {
        self.skip_token()?;
        self.add_node(NodeKind::VarBlock);
        self.block_body(Block::Vars)?;
        self.expect(&[TokenKind::KwEndVar])?;
        self.skip_token()?;
        self.walk_up()?;
        Ok(())
    }

    /// Parse `name : TYPE;`. The node keeps the name and the type keyword.
    pub(crate) fn var(&mut self) -> RuleResult {
        self.add_node(NodeKind::Var);
        self.expect(&[TokenKind::Colon])?;
        self.skip_token()?;
        self.expect(TYPE_KEYWORDS)?;
        self.expect(&[TokenKind::Semicolon])?;
        self.skip_token()?;
        self.add_tokens();
        self.walk_up()?;
        Ok(())
    }
}
