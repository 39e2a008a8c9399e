//! Fuzz target for the full formula pipeline
//!
//! Lex, parse and fold arbitrary text. Errors are fine; panics are bugs, and
//! every unit produced must carry a positive finite factor.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quantis::eval::eval_unit;

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);
    if let Ok(unit) = eval_unit(&source, &[]) {
        assert!(unit.factor > 0.0 && unit.factor.is_finite());
    }
});
