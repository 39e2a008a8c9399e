//! Fuzz target for the formula lexer
//!
//! The lexer must return tokens or an error for any input, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quantis::eval::{TokenKind, lex};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data)
        && let Ok(tokens) = lex(source)
    {
        // Always terminated, spans inside the source
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        for token in &tokens {
            assert!(token.span.end <= source.len());
        }
    }
});
