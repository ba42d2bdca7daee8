//! Tree builder used by the grammar.
//!
//! The builder keeps the focus (the node new children and tokens attach to)
//! as the top of a stack of open nodes. Each open node carries the keywords
//! still able to close it. The root is opened on creation and can never be
//! closed by the grammar.

use crate::ast::{Node, NodeKind};
use crate::lexer::{Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::sink::Sink;
use crate::parser::InternalError;

/// Records open/attach/close operations as events.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    events: Vec<Event>,
    /// Keywords that may close each open node, root first.
    open: Vec<&'static [TokenKind]>,
}

/// Builder state captured by a parser checkpoint.
#[derive(Debug, Clone)]
pub(crate) struct BuilderMark {
    events: usize,
    open: Vec<&'static [TokenKind]>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a builder focused on a fresh `ROOT` node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: vec![Event::Open(NodeKind::Root)],
            open: vec![NodeKind::Root.closers()],
        }
    }

    /// Opens a node under the focus and focuses it.
    pub fn open(&mut self, kind: NodeKind) {
        self.events.push(Event::Open(kind));
        self.open.push(kind.closers());
    }

    /// Attaches a token to the focus.
    pub fn attach(&mut self, token: Token) {
        self.events.push(Event::Token(token));
    }

    /// Closes the focus and refocuses its parent.
    ///
    /// # Errors
    ///
    /// Fails when the focus is the root.
    pub fn close(&mut self) -> Result<(), InternalError> {
        if self.open.len() <= 1 {
            return Err(InternalError::WalkUpPastRoot);
        }
        self.open.pop();
        self.events.push(Event::Close);
        Ok(())
    }

    /// Closes nodes until `depth` nodes are open below the root.
    pub fn close_to(&mut self, depth: usize) {
        while self.depth() > depth {
            self.open.pop();
            self.events.push(Event::Close);
        }
    }

    /// Number of nodes open below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len() - 1
    }

    /// Returns `true` if an open node is waiting for `kind` to close it.
    #[must_use]
    pub fn awaits(&self, kind: TokenKind) -> bool {
        self.open.iter().any(|closers| closers.contains(&kind))
    }

    /// Limits the keywords that may still close the focus.
    pub(crate) fn narrow_closers(&mut self, closers: &'static [TokenKind]) {
        if let Some(focus) = self.open.last_mut() {
            *focus = closers;
        }
    }

    pub(crate) fn mark(&self) -> BuilderMark {
        BuilderMark {
            events: self.events.len(),
            open: self.open.clone(),
        }
    }

    pub(crate) fn rewind(&mut self, mark: BuilderMark) {
        self.events.truncate(mark.events);
        self.open = mark.open;
    }

    /// Closes the root and folds the events into a tree.
    ///
    /// # Errors
    ///
    /// Fails when nodes other than the root are still open.
    pub fn finish(mut self) -> Result<Node, InternalError> {
        if self.depth() != 0 {
            return Err(InternalError::Unbalanced { open: self.depth() });
        }
        self.events.push(Event::Close);
        Sink::new(self.events).finish()
    }
}
