mod common;
use common::*;

use inrush_syntax::print;

const SOURCES: &[&str] = &[
    r#"PROGRAM TestProgram
  VAR
    a : BOOL;
    b : INT;
  END_VAR
  a := TRUE;
  b := 5;
  IF a THEN
    b := b + 1;
  END_IF
END_PROGRAM
"#,
    r#"' leading comment
PROGRAM Mixer ' main loop
VAR
    speed : REAL;
    name : STRING;
END_VAR
speed := (speed * 0.95) + (target - speed) / 10;
name := "mixer 1";
start(speed);
stop();
IF running THEN
    IF overheated THEN
        cool(2);
    END_IF
ELSE
    speed := 0;
END_IF
END_PROGRAM

PROGRAM Second
x := ((1));
y := (-x) * (- 2 + x);
END_PROGRAM
"#,
];

fn assert_round_trip(source: &str, config: &ParseConfig) {
    let first = parse_with(source, config).unwrap();
    assert!(first.ok(), "{:?}", first.diagnostics());
    let printed = print(first.root());
    let second = parse_with(&printed, config).unwrap();
    assert!(second.ok(), "printed source has errors: {:?}\n{printed}", second.diagnostics());
    assert_eq!(
        first.root().render(Positions::Omit),
        second.root().render(Positions::Omit),
        "printed source:\n{printed}"
    );
    assert_eq!(print(second.root()), printed);
}

#[test]
fn test_round_trip_default_config() {
    for source in SOURCES {
        assert_round_trip(source, &ParseConfig::default());
    }
}

#[test]
fn test_round_trip_with_extensions() {
    let config = ParseConfig {
        branch_nodes: true,
        relational_conditions: true,
    };
    for source in SOURCES {
        assert_round_trip(source, &config);
    }
    assert_round_trip(
        "PROGRAM P\nIF level <> 3 THEN\n  x := 1;\nELSE\n  x := 2;\nEND_IF\nEND_PROGRAM\n",
        &config,
    );
}

#[test]
fn test_print_worked_example() {
    let parsed = parse(SOURCES[0]).unwrap();
    insta::assert_snapshot!(print(parsed.root()), @r#"
    PROGRAM TestProgram
        VAR
            a : BOOL;
            b : INT;
        END_VAR
        a := TRUE;
        b := 5;
        IF a THEN
            b := b + 1;
        END_IF
    END_PROGRAM
    "#);
}
