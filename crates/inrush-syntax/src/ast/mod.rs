//! Abstract syntax tree produced by the parser.
//!
//! Every [`Node`] owns its children. Keywords and punctuation that carry no
//! payload are not kept in the tree; a node's `tokens` are the lexemes the
//! grammar attached to it directly, in source order.

use std::fmt::{self, Write as _};

use crate::lexer::{Token, TokenKind};

/// All node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// Synthetic document root.
    Root,
    /// `PROGRAM name ... END_PROGRAM`
    Program,
    /// `VAR ... END_VAR`
    VarBlock,
    /// `name : TYPE;`
    Var,
    /// `name := operand ...;`
    Assignment,
    /// `name(arguments);`
    Call,
    /// An arithmetic continuation (`+ 1`) or a parenthesized group.
    Expression,
    /// A single literal or variable operand.
    Terminal,
    /// `IF condition THEN ... [ELSE ...] END_IF`
    IfStatement,
    /// THEN body, only when branch nodes are enabled.
    ThenStatement,
    /// ELSE body, only when branch nodes are enabled.
    ElseStatement,
    /// A line comment.
    Comment,
}

impl NodeKind {
    /// The upper-case name used in tree dumps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::Program => "PROGRAM",
            Self::VarBlock => "VAR_BLOCK",
            Self::Var => "VAR",
            Self::Assignment => "ASSIGNMENT",
            Self::Call => "CALL",
            Self::Expression => "EXPRESSION",
            Self::Terminal => "TERMINAL",
            Self::IfStatement => "IF_STATEMENT",
            Self::ThenStatement => "THEN_STATEMENT",
            Self::ElseStatement => "ELSE_STATEMENT",
            Self::Comment => "COMMENT",
        }
    }

    /// Keywords that close a node of this kind.
    pub(crate) fn closers(self) -> &'static [TokenKind] {
        match self {
            Self::Program => &[TokenKind::KwEndProgram],
            Self::VarBlock => &[TokenKind::KwEndVar],
            Self::IfStatement => &[TokenKind::KwElse, TokenKind::KwEndIf],
            _ => &[],
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl serde::Serialize for NodeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A labeled tree element.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Node {
    /// The kind of node.
    pub kind: NodeKind,
    /// Tokens attached directly to this node.
    pub tokens: Vec<Token>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty node.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            tokens: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the first attached token of the given kind.
    #[must_use]
    pub fn token(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens.iter().find(|t| t.kind == kind)
    }

    /// Returns the texts of the attached tokens.
    #[must_use]
    pub fn token_texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Iterates over the direct children of the given kind.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Pre-order traversal of this node and all descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Renders the tree as indented text, one node or token per line.
    #[must_use]
    pub fn render(&self, positions: Positions) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0, positions);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize, positions: Positions) {
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{}", self.kind);
        for token in &self.tokens {
            let _ = write!(out, "{indent}  {} {:?}", token.kind, token.text.as_str());
            if positions == Positions::Include {
                let _ = write!(out, " @{}:{}", token.line, token.column);
            }
            out.push('\n');
        }
        for child in &self.children {
            child.render_into(out, depth + 1, positions);
        }
    }
}

/// Whether [`Node::render`] prints token positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positions {
    /// `VARIABLE "a" @3:5`
    Include,
    /// `VARIABLE "a"`
    Omit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextRange;

    fn token(kind: TokenKind, text: &str, line: u32, column: u32) -> Token {
        Token::new(kind, text, line, column, TextRange::default())
    }

    fn sample() -> Node {
        let mut terminal = Node::new(NodeKind::Terminal);
        terminal.tokens.push(token(TokenKind::Literal, "1", 1, 10));
        let mut expression = Node::new(NodeKind::Expression);
        expression.tokens.push(token(TokenKind::Plus, "+", 1, 8));
        expression.children.push(terminal);
        let mut assignment = Node::new(NodeKind::Assignment);
        assignment.tokens.push(token(TokenKind::Variable, "b", 1, 1));
        assignment.tokens.push(token(TokenKind::Assign, ":=", 1, 3));
        assignment.tokens.push(token(TokenKind::Variable, "b", 1, 6));
        assignment.children.push(expression);
        assignment
    }

    #[test]
    fn test_render_with_positions() {
        expect_test::expect![[r#"
            ASSIGNMENT
              VARIABLE "b" @1:1
              ASSIGN ":=" @1:3
              VARIABLE "b" @1:6
              EXPRESSION
                PLUS "+" @1:8
                TERMINAL
                  LITERAL "1" @1:10
        "#]]
        .assert_eq(&sample().render(Positions::Include));
    }

    #[test]
    fn test_descendants_preorder() {
        let kinds: Vec<_> = sample().descendants().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Assignment, NodeKind::Expression, NodeKind::Terminal]
        );
    }

    #[test]
    fn test_token_lookup() {
        let node = sample();
        assert_eq!(node.token(TokenKind::Assign).map(|t| t.column), Some(3));
        assert_eq!(node.token_texts(), vec!["b", ":=", "b"]);
        assert_eq!(node.children_of(NodeKind::Expression).count(), 1);
    }
}
