//! `inrush-syntax` - Scanner, parser and syntax tree for the inrush
//! structured-text dialect.
//!
//! This crate turns source text of a small control language (IEC 61131-3
//! style `PROGRAM` blocks, `VAR` declarations, assignments, calls,
//! arithmetic and `IF/THEN/ELSE`) into a tree:
//!
//! - **Lexer**: Pull-based scanner producing positioned tokens
//! - **Parser**: Error-tolerant recursive descent with speculative lookahead
//! - **AST**: Owned tree of nodes holding the tokens they consumed
//! - **Printer**: Source text reconstruction from a tree
//!
//! # Design Principles
//!
//! - **Error-tolerant**: a syntax error is recorded and the rest of its line
//!   skipped; a parse always yields a tree
//! - **Self-contained**: every parse owns its state, nothing is global
//!
//! # Example
//!
//! ```
//! use inrush_syntax::{parse, NodeKind};
//!
//! let parse = parse("PROGRAM Main\n  x := 1 + y;\nEND_PROGRAM\n").unwrap();
//! assert!(parse.ok());
//!
//! let program = &parse.root().children[0];
//! assert_eq!(program.kind, NodeKind::Program);
//! assert_eq!(program.token_texts(), vec!["Main"]);
//! assert_eq!(program.children[0].kind, NodeKind::Assignment);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::{Node, NodeKind, Positions};
pub use config::{ConfigError, ParseConfig};
pub use lexer::{tokenize, LexError, LexFault, ScanMode, Scanner, Token, TokenKind};
pub use parser::{parse, parse_with, Diagnostic, InternalError, Parse};
pub use printer::print;
