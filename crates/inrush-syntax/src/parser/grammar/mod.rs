//! Grammar rules for the inrush structured-text dialect.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `program.rs` - Source file, PROGRAM blocks and comments
//! - `declarations.rs` - VAR blocks and variable declarations
//! - `statements.rs` - Assignments, calls and IF statements
//! - `expressions.rs` - Operands, arithmetic continuations and parentheses
//!
//! Every rule is entered with its first token already consumed into the
//! pending list, so the caller's dispatch decides which rule runs.

mod declarations;
mod expressions;
mod program;
mod statements;

use crate::lexer::TokenKind;
use crate::parser::InternalError;

use super::Parser;

/// A statement list and the tokens that may start an item in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    /// Body of a `PROGRAM`.
    Program,
    /// Body of a `VAR` block.
    Vars,
    /// Statements after `THEN`.
    Then,
    /// Statements after `ELSE`.
    Else,
}

impl Block {
    fn expected(self) -> &'static [TokenKind] {
        match self {
            Self::Program => &[
                TokenKind::Nl,
                TokenKind::Comment,
                TokenKind::KwVar,
                TokenKind::Variable,
                TokenKind::KwIf,
                TokenKind::KwEndProgram,
            ],
            Self::Vars => &[
                TokenKind::Nl,
                TokenKind::Comment,
                TokenKind::Variable,
                TokenKind::KwEndVar,
            ],
            Self::Then => &[
                TokenKind::Nl,
                TokenKind::Comment,
                TokenKind::Variable,
                TokenKind::KwIf,
                TokenKind::KwElse,
                TokenKind::KwEndIf,
            ],
            Self::Else => &[
                TokenKind::Nl,
                TokenKind::Comment,
                TokenKind::Variable,
                TokenKind::KwIf,
                TokenKind::KwEndIf,
            ],
        }
    }
}

impl Parser<'_> {
    /// Parses list items until a closer some open node awaits, or EOF.
    ///
    /// A failed item is closed off and the loop carries on with the next
    /// token; each iteration consumes input or exits.
    fn block_body(&mut self, block: Block) -> Result<(), InternalError> {
        let depth = self.builder.depth();
        loop {
            let item = match (block, self.current()) {
                (_, TokenKind::Nl) => {
                    self.bump();
                    self.skip_token()?;
                    continue;
                }
                (_, TokenKind::Eof) => break,
                (_, TokenKind::Comment) => {
                    self.bump();
                    self.comment()
                }
                (Block::Vars, TokenKind::Variable) => {
                    self.bump();
                    self.var()
                }
                (Block::Program, TokenKind::KwVar) => {
                    self.bump();
                    self.var_block()
                }
                (Block::Program | Block::Then | Block::Else, TokenKind::Variable) => {
                    self.bump();
                    self.assignment_or_call()
                }
                (Block::Program | Block::Then | Block::Else, TokenKind::KwIf) => {
                    self.bump();
                    self.if_statement()
                }
                (_, kind) if self.builder.awaits(kind) => break,
                _ => self.unexpected(block.expected()),
            };
            self.settle(item, depth)?;
        }
        Ok(())
    }
}
