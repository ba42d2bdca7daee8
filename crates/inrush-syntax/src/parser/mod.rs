//! Parser for the inrush structured-text dialect.
//!
//! A hand-written recursive descent parser that pulls tokens from the
//! scanner on demand and builds an [`ast::Node`](crate::ast::Node) tree.
//!
//! # Design
//!
//! - **Error-tolerant**: a syntax error is recorded as a [`Diagnostic`] and
//!   the rest of the offending line is skipped; parsing resumes on the next
//!   line.
//! - **Speculative**: rules can be tried without committing (`peek`); a
//!   failed attempt restores the scanner, the pending tokens and the tree.
//!
//! # Architecture
//!
//! 1. **Scanning**: the token source asks the scanner for one token at a time
//!    (see `lexer` module)
//! 2. **Parsing**: grammar rules emit a flat stream of events (open node,
//!    attach token, close node) through the tree builder
//! 3. **Tree Building**: the sink folds the events into a [`Node`](crate::ast::Node)

#![allow(clippy::module_inception)]

mod builder;
mod event;
mod grammar;
mod parser;
mod sink;
mod source;

pub use parser::{parse, parse_with};
pub(crate) use parser::{Parser, RuleResult};

use text_size::TextRange;

use crate::ast::Node;

/// Result of parsing source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    root: Node,
    diagnostics: Vec<Diagnostic>,
}

impl Parse {
    /// Returns the root node (kind `ROOT`).
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the diagnostics in the order they were encountered.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if parsing produced no diagnostics.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A positioned syntax error or scanner fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[error("{line}:{column}: {message}")]
pub struct Diagnostic {
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column of the offending token.
    pub column: u32,
    /// Byte range of the offending token.
    #[serde(skip)]
    pub range: TextRange,
    /// What was expected and what was found, or the scanner fault.
    pub message: String,
}

/// A bug in the parser itself, as opposed to a problem with the input.
///
/// These abort the parse; diagnostics collected so far are discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    /// The grammar closed more nodes than it opened.
    #[error("internal parser error: walked up past the root node")]
    WalkUpPastRoot,
    /// The grammar left nodes open at the end of input.
    #[error("internal parser error: {open} node(s) left open")]
    Unbalanced {
        /// Number of nodes still open below the root.
        open: usize,
    },
    /// The grammar skipped a token it never consumed.
    #[error("internal parser error: no pending token to skip")]
    NothingToSkip,
}
