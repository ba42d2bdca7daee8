//! Main parser implementation.

use drop_bomb::DropBomb;
use tracing::{debug, trace};

use crate::ast::{Node, NodeKind};
use crate::config::ParseConfig;
use crate::lexer::{ScanMode, Token, TokenKind};
use crate::parser::builder::{BuilderMark, TreeBuilder};
use crate::parser::source::{Source, SourceMark};
use crate::parser::{Diagnostic, InternalError, Parse};

/// Parses source text with the default configuration.
///
/// Always returns a best-effort tree; check [`Parse::ok`] before trusting it.
///
/// # Errors
///
/// Returns an [`InternalError`] only when the parser itself misbehaves.
pub fn parse(source: &str) -> Result<Parse, InternalError> {
    parse_with(source, &ParseConfig::default())
}

/// Parses source text with the given configuration.
///
/// # Errors
///
/// Returns an [`InternalError`] only when the parser itself misbehaves.
pub fn parse_with(source: &str, config: &ParseConfig) -> Result<Parse, InternalError> {
    let parser = Parser::new(source, *config);
    let (root, diagnostics) = parser.parse()?;
    debug!(
        bytes = source.len(),
        diagnostics = diagnostics.len(),
        "parsed source"
    );
    Ok(Parse { root, diagnostics })
}

/// Why a grammar rule stopped early.
#[derive(Debug)]
pub(crate) enum Interrupt {
    /// A syntax error was reported (or a speculative attempt failed); the
    /// nearest statement list resumes.
    Syntax,
    /// The parser broke an invariant; the parse is aborted.
    Internal(InternalError),
}

impl From<InternalError> for Interrupt {
    fn from(err: InternalError) -> Self {
        Self::Internal(err)
    }
}

pub(crate) type RuleResult = Result<(), Interrupt>;

/// The parser state. One per parse; nothing is shared between parses.
pub(crate) struct Parser<'src> {
    source: Source<'src>,
    pending: Vec<Token>,
    pub(crate) builder: TreeBuilder,
    diagnostics: Vec<Diagnostic>,
    pub(crate) config: ParseConfig,
    recovering: bool,
    speculating: u32,
}

/// Everything a speculative rule may change.
pub(crate) struct Checkpoint {
    source: SourceMark,
    pending: Vec<Token>,
    builder: BuilderMark,
    diagnostics: usize,
    bomb: DropBomb,
}

impl Checkpoint {
    fn commit(mut self) {
        self.bomb.defuse();
    }

    fn rollback(mut self, parser: &mut Parser<'_>) {
        self.bomb.defuse();
        parser.source.rewind(self.source);
        parser.pending = self.pending;
        parser.builder.rewind(self.builder);
        parser.diagnostics.truncate(self.diagnostics);
    }
}

impl<'src> Parser<'src> {
    pub(crate) fn new(text: &'src str, config: ParseConfig) -> Self {
        Self {
            source: Source::new(text),
            pending: Vec::new(),
            builder: TreeBuilder::new(),
            diagnostics: Vec::new(),
            config,
            recovering: false,
            speculating: 0,
        }
    }

    fn parse(mut self) -> Result<(Node, Vec<Diagnostic>), InternalError> {
        self.source_file()?;
        let root = self.builder.finish()?;
        Ok((root, self.diagnostics))
    }

    // =========================================================================
    // Token Helpers
    // =========================================================================

    fn mode(&self) -> ScanMode {
        if self.recovering {
            ScanMode::SkipLine
        } else {
            ScanMode::Normal
        }
    }

    pub(crate) fn current(&mut self) -> TokenKind {
        let mode = self.mode();
        self.source.current_kind(mode)
    }

    pub(crate) fn at(&mut self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    /// Moves the lookahead into the pending tokens.
    pub(crate) fn bump(&mut self) {
        let mode = self.mode();
        let token = self.source.bump(mode);
        self.pending.push(token);
    }

    /// Consumes the lookahead if it is one of `expected`, else reports it.
    pub(crate) fn expect(&mut self, expected: &[TokenKind]) -> RuleResult {
        if expected.contains(&self.current()) {
            self.bump();
            Ok(())
        } else {
            self.unexpected(expected)
        }
    }

    /// Drops the most recently consumed token.
    pub(crate) fn skip_token(&mut self) -> Result<(), InternalError> {
        self.pending
            .pop()
            .map(drop)
            .ok_or(InternalError::NothingToSkip)
    }

    // =========================================================================
    // Tree Helpers
    // =========================================================================

    pub(crate) fn add_node(&mut self, kind: NodeKind) {
        self.builder.open(kind);
    }

    /// Attaches every pending token to the focus, in order.
    pub(crate) fn add_tokens(&mut self) {
        for token in self.pending.drain(..) {
            self.builder.attach(token);
        }
    }

    pub(crate) fn walk_up(&mut self) -> Result<(), InternalError> {
        self.builder.close()
    }

    /// Absorbs a failed list item so the list can carry on.
    ///
    /// Nodes the item left open are closed back to `depth`.
    pub(crate) fn settle(&mut self, item: RuleResult, depth: usize) -> Result<(), InternalError> {
        match item {
            Ok(()) => Ok(()),
            Err(Interrupt::Syntax) => {
                self.builder.close_to(depth);
                self.pending.clear();
                Ok(())
            }
            Err(Interrupt::Internal(err)) => Err(err),
        }
    }

    // =========================================================================
    // Errors and Recovery
    // =========================================================================

    /// Reports the lookahead as a syntax error and resynchronizes.
    ///
    /// Always returns `Err(Interrupt::Syntax)` unless recovery itself faults.
    pub(crate) fn unexpected(&mut self, expected: &[TokenKind]) -> RuleResult {
        if self.speculating > 0 || self.recovering {
            return Err(Interrupt::Syntax);
        }

        let mode = self.mode();
        let fault = self.source.current_fault(mode);
        let token = self.source.current(mode);
        let message = match fault {
            Some(fault) => format!("{fault} `{}`", token.text),
            None => format!("expected {}, found {}", one_of(expected), token.kind),
        };
        let diagnostic = Diagnostic {
            line: token.line,
            column: token.column,
            range: token.range,
            message,
        };
        debug!(%diagnostic, "syntax error");
        self.diagnostics.push(diagnostic);

        self.recover(Self::skip_until_line_break)?;
        Err(Interrupt::Syntax)
    }

    /// Panic-mode recovery.
    ///
    /// Drops the offending lookahead and runs `resync` with the scanner in
    /// skip-line mode. Line breaks, end of input and closing keywords some
    /// open node is waiting for are left in place for the enclosing rules.
    fn recover(&mut self, resync: fn(&mut Self) -> RuleResult) -> Result<(), InternalError> {
        self.pending.clear();
        let found = self.current();
        if matches!(found, TokenKind::Nl | TokenKind::Eof) || self.builder.awaits(found) {
            trace!(%found, "resynchronized without skipping");
            return Ok(());
        }

        self.source.discard();
        self.recovering = true;
        let outcome = resync(self);
        self.recovering = false;
        trace!(%found, "skipped rest of line");

        match outcome {
            Err(Interrupt::Internal(err)) => Err(err),
            Ok(()) | Err(Interrupt::Syntax) => Ok(()),
        }
    }

    fn skip_until_line_break(&mut self) -> RuleResult {
        self.expect(&[TokenKind::Unknown])?;
        self.skip_token()?;
        Ok(())
    }

    // =========================================================================
    // Speculation
    // =========================================================================

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            source: self.source.mark(),
            pending: self.pending.clone(),
            builder: self.builder.mark(),
            diagnostics: self.diagnostics.len(),
            bomb: DropBomb::new("checkpoint neither committed nor rolled back"),
        }
    }

    /// Tries `rule` without committing to it.
    ///
    /// Returns `Ok(true)` and keeps its effects if the rule succeeds. On a
    /// syntax failure the scanner, pending tokens, tree and diagnostics are
    /// restored and `Ok(false)` is returned. Nothing is reported while
    /// speculating.
    pub(crate) fn peek(
        &mut self,
        rule: impl FnOnce(&mut Self) -> RuleResult,
    ) -> Result<bool, InternalError> {
        let checkpoint = self.checkpoint();
        self.speculating += 1;
        let outcome = rule(self);
        self.speculating -= 1;

        match outcome {
            Ok(()) => {
                checkpoint.commit();
                Ok(true)
            }
            Err(Interrupt::Syntax) => {
                checkpoint.rollback(self);
                Ok(false)
            }
            Err(Interrupt::Internal(err)) => {
                checkpoint.commit();
                Err(err)
            }
        }
    }
}

/// `A`, `A or B`, `A, B or C`.
fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(|kind| kind.name()).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}
