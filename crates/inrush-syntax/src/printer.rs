//! Source text reconstruction from a syntax tree.
//!
//! The output reparses to a tree with the same node kinds, token kinds and
//! token texts. Layout is normalized: one statement per line, four spaces of
//! indentation per block, single spaces around operators. Comments are
//! kept; blank lines are not.
//!
//! Without branch nodes an IF's ELSE statements are indistinguishable from
//! its THEN statements and print as one body.

use crate::ast::{Node, NodeKind};
use crate::lexer::{Token, TokenKind};

const INDENT: &str = "    ";

/// Prints a tree (usually the root of a parse) back to source text.
#[must_use]
pub fn print(node: &Node) -> String {
    let mut printer = Printer::default();
    printer.node(node);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn nested(&mut self, children: &[Node]) {
        self.depth += 1;
        for child in children {
            self.node(child);
        }
        self.depth -= 1;
    }

    fn node(&mut self, node: &Node) {
        match node.kind {
            NodeKind::Root => {
                for child in &node.children {
                    self.node(child);
                }
            }
            NodeKind::Program => {
                let header = match node.token(TokenKind::Variable) {
                    Some(name) => format!("PROGRAM {}", name.text),
                    None => String::from("PROGRAM"),
                };
                self.line(&header);
                self.nested(&node.children);
                self.line("END_PROGRAM");
            }
            NodeKind::VarBlock => {
                self.line("VAR");
                self.nested(&node.children);
                self.line("END_VAR");
            }
            NodeKind::Var => {
                let text = format!("{};", join(&node.tokens, " : "));
                self.line(&text);
            }
            NodeKind::Assignment => {
                let mut text = join(&node.tokens, " ");
                for child in &node.children {
                    text.push(' ');
                    text.push_str(&expression(child));
                }
                text.push(';');
                self.line(&text);
            }
            NodeKind::Call => {
                let name = node
                    .token(TokenKind::Variable)
                    .map_or("", |token| token.text.as_str());
                let text = format!("{name}({});", arguments(&node.children));
                self.line(&text);
            }
            NodeKind::IfStatement => {
                self.line(&format!("IF {} THEN", join(&node.tokens, " ")));
                let mut plain = Vec::new();
                for child in &node.children {
                    match child.kind {
                        NodeKind::ThenStatement => self.nested(&child.children),
                        NodeKind::ElseStatement => {
                            self.line("ELSE");
                            self.nested(&child.children);
                        }
                        _ => plain.push(child.clone()),
                    }
                }
                self.nested(&plain);
                self.line("END_IF");
            }
            NodeKind::ThenStatement | NodeKind::ElseStatement => self.nested(&node.children),
            NodeKind::Comment => {
                let text = node
                    .tokens
                    .first()
                    .map_or(String::from("'"), |token| format!("'{}", token.text));
                self.line(&text);
            }
            NodeKind::Expression | NodeKind::Terminal => {
                let text = expression(node);
                self.line(&text);
            }
        }
    }
}

/// Joins token texts with `sep`, re-quoting string literals.
fn join(tokens: &[Token], sep: &str) -> String {
    tokens
        .iter()
        .map(token_text)
        .collect::<Vec<_>>()
        .join(sep)
}

fn token_text(token: &Token) -> String {
    if is_string_literal(token) {
        return format!("\"{}\"", token.text);
    }
    token.text.to_string()
}

/// String literal text lost its quotes; the lexeme range still covers them.
fn is_string_literal(token: &Token) -> bool {
    token.kind == TokenKind::Literal && usize::from(token.range.len()) == token.text.len() + 2
}

/// Prints the first operand and its continuations: `a + 1 * (b - c)`.
fn arguments(children: &[Node]) -> String {
    children
        .iter()
        .map(expression)
        .collect::<Vec<_>>()
        .join(" ")
}

fn expression(node: &Node) -> String {
    match node.kind {
        NodeKind::Terminal => join(&node.tokens, " "),
        NodeKind::Expression
            if node.tokens.first().is_some_and(|t| t.is(TokenKind::OpenParen)) =>
        {
            format!("({})", arguments(&node.children))
        }
        NodeKind::Expression => {
            let op = node.tokens.first().map_or("", |token| token.text.as_str());
            format!("{op} {}", arguments(&node.children))
        }
        _ => String::new(),
    }
}
