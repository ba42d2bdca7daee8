//! Source file and PROGRAM block parsing.

use crate::ast::NodeKind;
use crate::lexer::TokenKind;
use crate::parser::InternalError;

use super::super::{Parser, RuleResult};
use super::Block;

impl Parser<'_> {
    /// Parse a whole source file into the root node.
    ///
    /// At least one `PROGRAM` is required; stray tokens between programs are
    /// reported and their lines skipped.
    pub(crate) fn source_file(&mut self) -> Result<(), InternalError> {
        let mut programs = 0_usize;
        loop {
            let item = match self.current() {
                TokenKind::Nl => {
                    self.bump();
                    self.skip_token()?;
                    continue;
                }
                TokenKind::Eof => break,
                TokenKind::Comment => {
                    self.bump();
                    self.comment()
                }
                TokenKind::KwProgram => {
                    programs += 1;
                    self.bump();
                    self.program()
                }
                _ if programs == 0 => {
                    self.unexpected(&[TokenKind::Nl, TokenKind::Comment, TokenKind::KwProgram])
                }
                _ => self.unexpected(&[
                    TokenKind::Nl,
                    TokenKind::Comment,
                    TokenKind::KwProgram,
                    TokenKind::Eof,
                ]),
            };
            self.settle(item, 0)?;
        }

        if programs == 0 {
            let missing = self.unexpected(&[TokenKind::KwProgram]);
            self.settle(missing, 0)?;
        }
        Ok(())
    }

    /// Parse `PROGRAM name ... END_PROGRAM`.
    fn program(&mut self) -> RuleResult {
        self.skip_token()?;
        self.add_node(NodeKind::Program);
        let depth = self.builder.depth();

        let header = self.program_header();
        self.settle(header, depth)?;

        self.block_body(Block::Program)?;
        self.expect(&[TokenKind::KwEndProgram])?;
        self.skip_token()?;
        self.walk_up()?;
        Ok(())
    }

    fn program_header(&mut self) -> RuleResult {
        self.expect(&[TokenKind::Variable])?;
        self.add_tokens();
        Ok(())
    }

    /// Parse a line comment into its own node.
    pub(crate) fn comment(&mut self) -> RuleResult {
        self.add_node(NodeKind::Comment);
        self.add_tokens();
        self.walk_up()?;
        Ok(())
    }
}
