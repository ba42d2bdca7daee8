//! Subcommand implementations.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use inrush_syntax::config::find_config_file;
use inrush_syntax::{Diagnostic, Parse, ParseConfig, Positions, Token};
use serde::Serialize;
use tracing::debug;

use crate::cli::Format;
use crate::style::{self, Stream};

/// Whether the input was free of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Diagnostics,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: &'a inrush_syntax::Node,
    diagnostics: &'a [Diagnostic],
}

pub fn parse(file: &Path, format: Format, config: Option<&Path>) -> anyhow::Result<Outcome> {
    let (source, parse) = read_and_parse(file, config)?;
    match format {
        Format::Tree => {
            print!("{}", parse.root().render(Positions::Include));
            report(file, &parse);
        }
        Format::Json => {
            let output = JsonOutput {
                root: parse.root(),
                diagnostics: parse.diagnostics(),
            };
            let json = serde_json::to_string_pretty(&output)
                .context("failed to serialize syntax tree")?;
            println!("{json}");
        }
    }
    debug!(bytes = source.len(), "parse command finished");
    Ok(outcome(&parse))
}

pub fn tokens(file: &Path) -> anyhow::Result<Outcome> {
    let source = read_source(file)?;
    print!("{}", render_tokens(&inrush_syntax::tokenize(&source)));
    Ok(Outcome::Clean)
}

pub fn fmt(file: &Path, config: Option<&Path>) -> anyhow::Result<Outcome> {
    let (_, parse) = read_and_parse(file, config)?;
    if !parse.ok() {
        report(file, &parse);
        return Ok(Outcome::Diagnostics);
    }
    print!("{}", inrush_syntax::print(parse.root()));
    Ok(Outcome::Clean)
}

pub fn check(file: &Path, config: Option<&Path>) -> anyhow::Result<Outcome> {
    let (_, parse) = read_and_parse(file, config)?;
    report(file, &parse);
    if parse.ok() {
        println!(
            "{}",
            style::success(Stream::Stdout, format!("{}: no errors", file.display()))
        );
    }
    Ok(outcome(&parse))
}

fn outcome(parse: &Parse) -> Outcome {
    if parse.ok() {
        Outcome::Clean
    } else {
        Outcome::Diagnostics
    }
}

fn read_source(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn read_and_parse(file: &Path, config: Option<&Path>) -> anyhow::Result<(String, Parse)> {
    let config = load_config(config)?;
    let source = read_source(file)?;
    let parse = inrush_syntax::parse_with(&source, &config)
        .with_context(|| format!("parser failed on {}", file.display()))?;
    Ok((source, parse))
}

/// Loads the explicit config file, else `./inrush.toml`, else the defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<ParseConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("failed to resolve current directory")?;
            find_config_file(&cwd)
        }
    };
    let Some(path) = path else {
        return Ok(ParseConfig::default());
    };
    debug!(path = %path.display(), "loading parser config");
    ParseConfig::load(&path).with_context(|| format!("in config {}", path.display()))
}

fn report(file: &Path, parse: &Parse) {
    for diagnostic in parse.diagnostics() {
        eprintln!("{}", render_diagnostic(file, diagnostic));
    }
}

fn render_diagnostic(file: &Path, diagnostic: &Diagnostic) -> String {
    let at = format!(
        "{}:{}:{}",
        file.display(),
        diagnostic.line,
        diagnostic.column
    );
    format!(
        "{}: {} {}",
        style::location(Stream::Stderr, at),
        style::error(Stream::Stderr, "error:"),
        diagnostic.message
    )
}

/// One token per line: `line:column KIND "text"`.
fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let at = format!("{}:{}", token.line, token.column);
        let _ = writeln!(out, "{at:<8}{:<12}{:?}", token.kind, token.text.as_str());
    }
    out
}
