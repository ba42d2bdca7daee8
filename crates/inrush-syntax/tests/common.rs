//! Shared helpers for parser snapshot tests.
#![allow(dead_code, unused_imports)]

pub use inrush_syntax::{parse, parse_with, NodeKind, ParseConfig, Positions, TokenKind};

/// Formats a parse result for snapshot testing: the tree with token
/// positions, then the diagnostics if there are any.
pub fn snapshot_parse(source: &str) -> String {
    snapshot_parse_with(source, &ParseConfig::default())
}

pub fn snapshot_parse_with(source: &str, config: &ParseConfig) -> String {
    let parsed = parse_with(source, config).expect("internal parser error");
    let mut output = parsed.root().render(Positions::Include);

    if !parsed.ok() {
        output.push_str("---\nErrors:\n");
        for err in parsed.diagnostics() {
            output.push_str(&format!("  - {err}\n"));
        }
    }

    output
}

/// The tree without positions.
pub fn shape(source: &str) -> String {
    shape_with(source, &ParseConfig::default())
}

pub fn shape_with(source: &str, config: &ParseConfig) -> String {
    let parsed = parse_with(source, config).expect("internal parser error");
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.diagnostics());
    parsed.root().render(Positions::Omit)
}

/// Diagnostics rendered as `line:column: message`.
pub fn errors(source: &str) -> Vec<String> {
    let parsed = parse(source).expect("internal parser error");
    parsed.diagnostics().iter().map(ToString::to_string).collect()
}

/// Number of nodes of `kind` anywhere in the tree.
pub fn count(source: &str, kind: NodeKind) -> usize {
    let parsed = parse(source).expect("internal parser error");
    parsed
        .root()
        .descendants()
        .filter(|node| node.kind == kind)
        .count()
}
