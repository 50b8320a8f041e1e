#![no_main]

use libfuzzer_sys::fuzz_target;
use ray::{ParserConfig, parse_reader, parse_with};

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must come back as an error, never a panic.
    let Ok(parse) = parse_reader(data) else {
        return;
    };

    for statement in parse.statements() {
        assert_eq!(statement.syntax().children().len(), 3);
    }
    assert!(parse.diagnostics().windows(2).all(|w| w[0].span.start <= w[1].span.start));

    // A tight recursion limit must fail rules, not the process.
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = parse_with(source, &ParserConfig::default().with_recursion_limit(2));
    }
});
