//! Sink for converting parser events into a tree.

use crate::ast::Node;
use crate::parser::event::Event;
use crate::parser::InternalError;

/// Builds a [`Node`] tree from parser events.
pub struct Sink {
    events: Vec<Event>,
    stack: Vec<Node>,
}

impl Sink {
    /// Creates a new sink.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            stack: Vec::new(),
        }
    }

    /// Consumes the sink and returns the root node.
    ///
    /// The event stream must open and close exactly one outermost node.
    pub fn finish(mut self) -> Result<Node, InternalError> {
        let mut root = None;

        for event in std::mem::take(&mut self.events) {
            match event {
                Event::Open(kind) => self.stack.push(Node::new(kind)),
                Event::Token(token) => {
                    let focus = self
                        .stack
                        .last_mut()
                        .ok_or(InternalError::WalkUpPastRoot)?;
                    focus.tokens.push(token);
                }
                Event::Close => {
                    let node = self.stack.pop().ok_or(InternalError::WalkUpPastRoot)?;
                    match self.stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
            }
        }

        if !self.stack.is_empty() {
            return Err(InternalError::Unbalanced {
                open: self.stack.len(),
            });
        }
        root.ok_or(InternalError::Unbalanced { open: 0 })
    }
}
