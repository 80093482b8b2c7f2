#![no_main]

use libfuzzer_sys::fuzz_target;
use tanglaw::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexing never fails outright; parse whatever tokens it produced
        let (tokens, _) = lexer::tokenize("fuzz.lit", s);
        let (program, _) = parser::parse(&tokens);
        if let Some(program) = program {
            let _ = program.to_string();
        }
    }
});
