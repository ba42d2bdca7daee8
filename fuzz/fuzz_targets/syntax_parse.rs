#![no_main]

use inrush_syntax::{parse_with, print, ParseConfig, Positions};
use libfuzzer_sys::fuzz_target;

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let config = ParseConfig {
        branch_nodes: data[0] & 1 == 1,
        relational_conditions: data[0] & 2 == 2,
    };
    let raw = decode_source(&data[1..]);

    // Arbitrary bytes alone rarely get past the program header.
    let sources = [raw.clone(), format!("PROGRAM Fuzz\n{raw}\nEND_PROGRAM\n")];

    for source in &sources {
        let parsed = match parse_with(source, &config) {
            Ok(parsed) => parsed,
            Err(err) => panic!("internal parser error: {err}"),
        };
        for diagnostic in parsed.diagnostics() {
            assert!(diagnostic.line >= 1 && diagnostic.column >= 1);
            assert!(usize::from(diagnostic.range.end()) <= source.len());
        }
        if !parsed.ok() {
            continue;
        }

        let printed = print(parsed.root());
        let reparsed = parse_with(&printed, &config).expect("internal parser error");
        assert!(reparsed.ok(), "printed source has errors:\n{printed}");
        assert_eq!(
            parsed.root().render(Positions::Omit),
            reparsed.root().render(Positions::Omit)
        );
    }
});
