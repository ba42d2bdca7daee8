//! Scanner for the inrush structured-text dialect.
//!
//! The scanner is pull-based: every call to [`Scanner::next_token`] classifies
//! the next run of input and returns exactly one [`Token`]. Positions are
//! 1-based lines and columns over the raw text, columns counted in characters.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// A classified, positioned lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched text. Quotes of string literals and the leading `'` of
    /// comments are not part of it.
    pub text: SmolStr,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    /// Byte range of the whole lexeme in the source.
    #[serde(skip)]
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        text: impl Into<SmolStr>,
        line: u32,
        column: u32,
        range: TextRange,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
            range,
        }
    }

    /// Returns `true` if the token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Why a run of input could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexFault {
    /// No rule starts with this character.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// A `.` in a number is not followed by a digit.
    #[error("malformed number: expected digit after '.'")]
    MalformedFraction,
    /// A `"` without a matching `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl LexFault {
    fn classify(slice: &str) -> Self {
        match slice.as_bytes().first() {
            Some(b'"') => Self::UnterminatedString,
            Some(b) if b.is_ascii_digit() => Self::MalformedFraction,
            _ => Self::UnexpectedCharacter,
        }
    }
}

/// A scanner fault.
///
/// The fault never stops the token stream: the error carries the `UNKNOWN`
/// token standing in for the rejected input, and scanning continues after it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}:{}: {fault} `{}`", token.line, token.column, token.text)]
pub struct LexError {
    /// What went wrong.
    pub fault: LexFault,
    /// The `UNKNOWN` token covering the rejected input.
    pub token: Token,
}

impl LexError {
    /// Unwraps the `UNKNOWN` token.
    #[must_use]
    pub fn into_token(self) -> Token {
        self.token
    }
}

/// How the next token is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Full classification.
    #[default]
    Normal,
    /// Error recovery: everything up to the next line break is one
    /// `UNKNOWN` token.
    SkipLine,
}

/// Resumable scanner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    offset: usize,
    line: u32,
    column: u32,
}

impl ScanState {
    const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Byte offset of the next unread character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Scanner over structured-text source code.
///
/// Besides [`Scanner::next_token`] the scanner is an iterator over
/// normal-mode tokens. The iterator yields the final `EOF` token once and
/// then ends.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    state: ScanState,
    done: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            state: ScanState::START,
            done: false,
        }
    }

    /// Returns the source text being scanned.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the current position.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Rewinds (or fast-forwards) to a position obtained from [`Scanner::state`].
    pub fn restore(&mut self, state: ScanState) {
        self.state = state;
        self.done = false;
    }

    /// Scans one token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] when the input at the cursor matches no rule.
    /// The cursor still advances past the rejected run.
    pub fn next_token(&mut self, mode: ScanMode) -> Result<Token, LexError> {
        match mode {
            ScanMode::Normal => self.scan_normal(),
            ScanMode::SkipLine => Ok(self.scan_line()),
        }
    }

    fn scan_normal(&mut self) -> Result<Token, LexError> {
        let rest = &self.source[self.state.offset..];
        let mut lexer = TokenKind::lexer(rest);

        let Some(result) = lexer.next() else {
            self.advance(rest.len());
            return Ok(self.eof());
        };

        let span = lexer.span();
        let mut end = span.end;
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        self.advance(span.start);
        let slice = &rest[span.start..end];
        let (line, column, start) = (self.state.line, self.state.column, self.state.offset);
        self.advance(slice.len());
        let range = text_range(start, self.state.offset);

        match result {
            Ok(kind) => Ok(Token::new(kind, lexeme_text(kind, slice), line, column, range)),
            Err(()) => Err(LexError {
                fault: LexFault::classify(slice),
                token: Token::new(TokenKind::Unknown, slice, line, column, range),
            }),
        }
    }

    fn scan_line(&mut self) -> Token {
        let rest = &self.source[self.state.offset..];
        let blank = rest.len() - rest.trim_start_matches([' ', '\t', '\r']).len();
        self.advance(blank);

        let rest = &self.source[self.state.offset..];
        let len = rest.find('\n').unwrap_or(rest.len());
        let (line, column, start) = (self.state.line, self.state.column, self.state.offset);
        self.advance(len);
        Token::new(
            TokenKind::Unknown,
            strip_cr(&rest[..len]),
            line,
            column,
            text_range(start, self.state.offset),
        )
    }

    fn eof(&self) -> Token {
        let at = text_range(self.state.offset, self.state.offset);
        Token::new(TokenKind::Eof, "", self.state.line, self.state.column, at)
    }

    fn advance(&mut self, len: usize) {
        let end = self.state.offset + len;
        for ch in self.source[self.state.offset..end].chars() {
            if ch == '\n' {
                self.state.line += 1;
                self.state.column = 1;
            } else {
                self.state.column += 1;
            }
        }
        self.state.offset = end;
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_token(ScanMode::Normal);
        if matches!(&next, Ok(token) if token.kind == TokenKind::Eof) {
            self.done = true;
        }
        Some(next)
    }
}

fn lexeme_text(kind: TokenKind, slice: &str) -> &str {
    match kind {
        TokenKind::Literal if slice.starts_with('"') => &slice[1..slice.len() - 1],
        TokenKind::Comment => strip_cr(&slice[1..]),
        _ => slice,
    }
}

/// Drops the `\r` of a CRLF line ending.
fn strip_cr(text: &str) -> &str {
    text.strip_suffix('\r').unwrap_or(text)
}

#[allow(clippy::cast_possible_truncation)]
fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

/// Scan the entire source and return all tokens, ending with `EOF`.
///
/// Scanner faults appear as `UNKNOWN` tokens.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source)
        .map(|next| next.unwrap_or_else(LexError::into_token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_scanner_basic() {
        assert_eq!(
            kinds("x := 42;"),
            vec![
                TokenKind::Variable,
                TokenKind::Assign,
                TokenKind::Literal,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_scanner_positions() {
        let tokens = tokenize("abc := 123\n  d");
        let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (1, 8), (1, 11), (2, 3), (2, 4)]);
        assert_eq!(tokens[1].range, TextRange::new(4.into(), 6.into()));
    }

    #[test]
    fn test_eof_follows_last_character() {
        let tokens = tokenize("a  ");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.text, "");
        assert_eq!((eof.line, eof.column), (1, 4));

        let empty = tokenize("");
        assert_eq!(empty.len(), 1);
        assert_eq!((empty[0].line, empty[0].column), (1, 1));
    }

    #[test]
    fn test_eof_repeats_on_next_token() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token(ScanMode::Normal).unwrap().kind, TokenKind::Variable);
        assert_eq!(scanner.next_token(ScanMode::Normal).unwrap().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token(ScanMode::Normal).unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_literal_text_strips_delimiters() {
        let tokens = tokenize("\"hello world\" 'remark");
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[0].text, "hello world");
        assert_eq!(tokens[0].range, TextRange::new(0.into(), 13.into()));
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].text, "remark");
    }

    #[test]
    fn test_scanner_faults() {
        let mut scanner = Scanner::new("@ 3. \"open");
        let faults: Vec<_> = scanner
            .by_ref()
            .filter_map(Result::err)
            .map(|err| (err.fault, err.token.text.to_string()))
            .collect();
        assert_eq!(
            faults,
            vec![
                (LexFault::UnexpectedCharacter, "@".to_string()),
                (LexFault::MalformedFraction, "3.".to_string()),
                (LexFault::UnterminatedString, "\"open".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_ascii_outside_strings_is_unknown() {
        let tokens = tokenize("å := \"ünïcode\"");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "å");
        assert_eq!(tokens[1].column, 3);
        assert_eq!(tokens[2].text, "ünïcode");
    }

    #[test]
    fn test_skip_line_mode() {
        let mut scanner = Scanner::new("x  junk @ here\ny");
        scanner.next_token(ScanMode::Normal).unwrap();
        let skipped = scanner.next_token(ScanMode::SkipLine).unwrap();
        assert_eq!(skipped.kind, TokenKind::Unknown);
        assert_eq!(skipped.text, "junk @ here");
        assert_eq!((skipped.line, skipped.column), (1, 4));
        assert_eq!(scanner.next_token(ScanMode::Normal).unwrap().kind, TokenKind::Nl);

        let at_end = Scanner::new("").next_token(ScanMode::SkipLine).unwrap();
        assert_eq!(at_end.kind, TokenKind::Unknown);
        assert_eq!(at_end.text, "");
    }

    #[test]
    fn test_comment_runs_to_line_feed() {
        let tokens = tokenize("' a\rb c\r\nx");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, " a\rb c");
        assert_eq!(tokens[0].range, TextRange::new(0.into(), 8.into()));
        assert_eq!(tokens[1].kind, TokenKind::Nl);
        assert_eq!(tokens[2].text, "x");
    }

    #[test]
    fn test_skip_line_mode_drops_carriage_return() {
        let mut scanner = Scanner::new("x junk\r\ny");
        scanner.next_token(ScanMode::Normal).unwrap();
        let skipped = scanner.next_token(ScanMode::SkipLine).unwrap();
        assert_eq!(skipped.text, "junk");
        assert_eq!(skipped.range, TextRange::new(2.into(), 7.into()));
        assert_eq!(scanner.next_token(ScanMode::Normal).unwrap().kind, TokenKind::Nl);
    }

    #[test]
    fn test_restore_rescans() {
        let mut scanner = Scanner::new("a b");
        let mark = scanner.state();
        let first = scanner.next_token(ScanMode::Normal).unwrap();
        scanner.restore(mark);
        assert_eq!(scanner.next_token(ScanMode::Normal).unwrap(), first);
    }
}
