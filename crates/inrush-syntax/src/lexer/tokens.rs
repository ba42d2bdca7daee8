//! Token definitions for the inrush structured-text dialect.
//!
//! The token kinds double as the `logos` lexer definition. Kinds that the
//! lexer never produces directly (`Nl` aside, `Unknown` and `Eof`) are
//! synthesized by the [`Scanner`](super::Scanner).

use std::fmt;

use logos::Logos;

/// Extends a digit run with an optional fraction.
///
/// A `.` must be followed by at least one digit. `12.` is consumed as a
/// whole and rejected so the scanner can report a malformed fraction.
fn lex_number(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let rest = lex.remainder().as_bytes();
    if rest.first() != Some(&b'.') {
        return true;
    }
    let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    lex.bump(1 + digits);
    digits > 0
}

/// Consumes a string literal body through the closing quote.
///
/// Without a closing quote the rest of the line is consumed and rejected.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let rest = lex.remainder();
    if let Some(end) = rest.find('"') {
        lex.bump(end + 1);
        return true;
    }
    let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
    lex.bump(end);
    false
}

/// All token kinds of the dialect.
///
/// Matching is longest-match: `:=` wins over `:`, `<=` over `<`, and an
/// identifier that merely starts with a keyword (`IFX`) is a `Variable`.
/// Keywords are case-sensitive.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r]+")]
#[repr(u16)]
pub enum TokenKind {
    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    /// Numeric, string, or boolean literal.
    #[regex(r"[0-9]+", lex_number)]
    #[token("\"", lex_string)]
    #[token("TRUE")]
    #[token("FALSE")]
    Literal,

    /// Identifier that is not a keyword.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Variable,

    /// Line comment: `' ...` up to the line break.
    #[regex(r"'[^\n]*", allow_greedy = true)]
    Comment,

    // =========================================================================
    // PUNCTUATION AND OPERATORS
    // =========================================================================
    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Multiply,

    /// `/`
    #[token("/")]
    Divide,

    /// `(`
    #[token("(")]
    OpenParen,

    /// `)`
    #[token(")")]
    CloseParen,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `:=`
    #[token(":=")]
    Assign,

    /// `>`
    #[token(">")]
    Gt,

    /// `<`
    #[token("<")]
    Lt,

    /// `>=`
    #[token(">=")]
    Ge,

    /// `<=`
    #[token("<=")]
    Le,

    /// `=`
    #[token("=")]
    Eq,

    /// `<>`
    #[token("<>")]
    Ne,

    /// Line break. Significant: statements and recovery are line based.
    #[token("\n")]
    Nl,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `PROGRAM`
    #[token("PROGRAM")]
    KwProgram,

    /// `END_PROGRAM`
    #[token("END_PROGRAM")]
    KwEndProgram,

    /// `VAR`
    #[token("VAR")]
    KwVar,

    /// `END_VAR`
    #[token("END_VAR")]
    KwEndVar,

    /// `BOOL`
    #[token("BOOL")]
    KwBool,

    /// `INT`
    #[token("INT")]
    KwInt,

    /// `REAL`
    #[token("REAL")]
    KwReal,

    /// `STRING`
    #[token("STRING")]
    KwString,

    /// `IF`
    #[token("IF")]
    KwIf,

    /// `THEN`
    #[token("THEN")]
    KwThen,

    /// `ELSE`
    #[token("ELSE")]
    KwElse,

    /// `END_IF`
    #[token("END_IF")]
    KwEndIf,

    /// `AND`
    #[token("AND")]
    KwAnd,

    /// `OR`
    #[token("OR")]
    KwOr,

    /// `NOT`
    #[token("NOT")]
    KwNot,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Input no rule accepts, or a line skipped during error recovery.
    Unknown,

    /// End of input (not produced by logos, synthesized by the scanner)
    Eof,
}

impl TokenKind {
    /// The upper-case name used in diagnostics and tree dumps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Literal => "LITERAL",
            Self::Variable => "VARIABLE",
            Self::Comment => "COMMENT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::Assign => "ASSIGN",
            Self::Gt => "GT",
            Self::Lt => "LT",
            Self::Ge => "GE",
            Self::Le => "LE",
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Nl => "NL",
            Self::KwProgram => "PROGRAM",
            Self::KwEndProgram => "END_PROGRAM",
            Self::KwVar => "VAR",
            Self::KwEndVar => "END_VAR",
            Self::KwBool => "BOOL",
            Self::KwInt => "INT",
            Self::KwReal => "REAL",
            Self::KwString => "STRING",
            Self::KwIf => "IF",
            Self::KwThen => "THEN",
            Self::KwElse => "ELSE",
            Self::KwEndIf => "END_IF",
            Self::KwAnd => "AND",
            Self::KwOr => "OR",
            Self::KwNot => "NOT",
            Self::Unknown => "UNKNOWN",
            Self::Eof => "EOF",
        }
    }

    /// Returns `true` for `+ - * /`.
    pub fn is_arithmetic_op(self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide
        )
    }

    /// Returns `true` for `> < >= <= = <>`.
    pub fn is_comparison_op(self) -> bool {
        matches!(
            self,
            Self::Gt | Self::Lt | Self::Ge | Self::Le | Self::Eq | Self::Ne
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
