use inrush_syntax::lexer::{tokenize, ScanMode, Scanner, TokenKind};
use inrush_syntax::LexFault;

fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}

#[test]
fn test_longest_match() {
    assert_eq!(
        kinds_and_texts("12.34 IFX := <= <> >= : < ="),
        vec![
            (TokenKind::Literal, "12.34".into()),
            (TokenKind::Variable, "IFX".into()),
            (TokenKind::Assign, ":=".into()),
            (TokenKind::Le, "<=".into()),
            (TokenKind::Ne, "<>".into()),
            (TokenKind::Ge, ">=".into()),
            (TokenKind::Colon, ":".into()),
            (TokenKind::Lt, "<".into()),
            (TokenKind::Eq, "=".into()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_positions_count_characters() {
    let tokens = tokenize("PROGRAM P\n  s := \"äö\" + t;\n");
    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.line, t.column))
        .collect();
    assert_eq!(
        positions,
        vec![
            (TokenKind::KwProgram, 1, 1),
            (TokenKind::Variable, 1, 9),
            (TokenKind::Nl, 1, 10),
            (TokenKind::Variable, 2, 3),
            (TokenKind::Assign, 2, 5),
            (TokenKind::Literal, 2, 8),
            (TokenKind::Plus, 2, 13),
            (TokenKind::Variable, 2, 15),
            (TokenKind::Semicolon, 2, 16),
            (TokenKind::Nl, 2, 17),
            (TokenKind::Eof, 3, 1),
        ]
    );
    assert_eq!(tokens[5].text, "äö");
}

#[test]
fn test_crlf_scans_like_lf() {
    let crlf: Vec<_> = tokenize("x := 1;\r\ny := 2;\r\n")
        .into_iter()
        .map(|t| (t.kind, t.text.to_string(), t.line))
        .collect();
    let lf: Vec<_> = tokenize("x := 1;\ny := 2;\n")
        .into_iter()
        .map(|t| (t.kind, t.text.to_string(), t.line))
        .collect();
    assert_eq!(crlf, lf);
}

#[test]
fn test_faults_surface_as_unknown() {
    let faults: Vec<_> = Scanner::new("x @ 7. \"open")
        .filter_map(Result::err)
        .map(|err| (err.fault, err.token.text.to_string()))
        .collect();
    assert_eq!(
        faults,
        vec![
            (LexFault::UnexpectedCharacter, "@".to_string()),
            (LexFault::MalformedFraction, "7.".to_string()),
            (LexFault::UnterminatedString, "\"open".to_string()),
        ]
    );

    let kinds: Vec<_> = tokenize("x @ y").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Variable,
            TokenKind::Unknown,
            TokenKind::Variable,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_skip_line_mode_then_resume() {
    let mut scanner = Scanner::new("a := 1 2 3;\nb");
    for _ in 0..3 {
        scanner.next_token(ScanMode::Normal).unwrap();
    }
    let skipped = scanner.next_token(ScanMode::SkipLine).unwrap();
    assert_eq!(skipped.kind, TokenKind::Unknown);
    assert_eq!(skipped.text, "2 3;");
    assert_eq!((skipped.line, skipped.column), (1, 8));

    let nl = scanner.next_token(ScanMode::Normal).unwrap();
    assert_eq!(nl.kind, TokenKind::Nl);
    let b = scanner.next_token(ScanMode::Normal).unwrap();
    assert_eq!((b.text.as_str(), b.line, b.column), ("b", 2, 1));
}

#[test]
fn test_worked_example_token_stream() {
    insta::assert_snapshot!(
        tokenize("IF a THEN\n  b := b + 1;\nEND_IF")
            .iter()
            .map(|t| format!("{} {:?} @{}:{}", t.kind, t.text.as_str(), t.line, t.column))
            .collect::<Vec<_>>()
            .join("\n"),
        @r#"
    IF "IF" @1:1
    VARIABLE "a" @1:4
    THEN "THEN" @1:6
    NL "\n" @1:10
    VARIABLE "b" @2:3
    ASSIGN ":=" @2:5
    VARIABLE "b" @2:8
    PLUS "+" @2:10
    LITERAL "1" @2:12
    SEMICOLON ";" @2:13
    NL "\n" @2:14
    END_IF "END_IF" @3:1
    EOF "" @3:7
    "#
    );
}
