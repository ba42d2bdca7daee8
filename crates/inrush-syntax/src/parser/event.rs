//! Parser events.
//!
//! The tree builder records a flat stream of events that the sink later folds
//! into a tree. Rolling back a speculative parse is a truncation of this
//! stream.

use crate::ast::NodeKind;
use crate::lexer::Token;

/// An event produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open a new node as the last child of the current one.
    Open(NodeKind),
    /// Attach a token to the current node.
    Token(Token),
    /// Close the current node.
    Close,
}
