//! Token source for the parser.
//!
//! This module provides the `Source` struct that wraps the scanner and
//! holds the single token of lookahead. Tokens are scanned only when the
//! grammar asks for one, so the scan mode in effect at that moment decides
//! how the input is classified.

use crate::lexer::{LexFault, ScanMode, ScanState, Scanner, Token, TokenKind};

#[derive(Debug, Clone)]
struct Lookahead {
    token: Token,
    fault: Option<LexFault>,
}

/// A pull-based token source.
pub(crate) struct Source<'src> {
    scanner: Scanner<'src>,
    lookahead: Option<Lookahead>,
}

/// Source position captured by a parser checkpoint.
#[derive(Debug, Clone)]
pub(crate) struct SourceMark {
    scan: ScanState,
    lookahead: Option<Lookahead>,
}

impl<'src> Source<'src> {
    /// Creates a new source over the given text.
    pub fn new(text: &'src str) -> Self {
        Self {
            scanner: Scanner::new(text),
            lookahead: None,
        }
    }

    fn fill(&mut self, mode: ScanMode) -> &Lookahead {
        let scanner = &mut self.scanner;
        self.lookahead.get_or_insert_with(|| scan(scanner, mode))
    }

    /// Returns the lookahead token, scanning it if needed.
    pub fn current(&mut self, mode: ScanMode) -> &Token {
        &self.fill(mode).token
    }

    /// Returns the lookahead token kind, scanning it if needed.
    pub fn current_kind(&mut self, mode: ScanMode) -> TokenKind {
        self.fill(mode).token.kind
    }

    /// The scanner fault behind the lookahead, if it is one.
    pub fn current_fault(&mut self, mode: ScanMode) -> Option<LexFault> {
        self.fill(mode).fault
    }

    /// Removes and returns the lookahead token.
    pub fn bump(&mut self, mode: ScanMode) -> Token {
        match self.lookahead.take() {
            Some(lookahead) => lookahead.token,
            None => scan(&mut self.scanner, mode).token,
        }
    }

    /// Drops the lookahead without consuming anything after it.
    pub fn discard(&mut self) {
        self.lookahead = None;
    }

    pub fn mark(&self) -> SourceMark {
        SourceMark {
            scan: self.scanner.state(),
            lookahead: self.lookahead.clone(),
        }
    }

    pub fn rewind(&mut self, mark: SourceMark) {
        self.scanner.restore(mark.scan);
        self.lookahead = mark.lookahead;
    }
}

fn scan(scanner: &mut Scanner<'_>, mode: ScanMode) -> Lookahead {
    match scanner.next_token(mode) {
        Ok(token) => Lookahead { token, fault: None },
        Err(err) => Lookahead {
            fault: Some(err.fault),
            token: err.token,
        },
    }
}
