//! Fuzz target for numeric literal parsing
//!
//! Any accepted literal must denote a finite number.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quantis::eval::parse_number;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(number) = parse_number(text)
    {
        assert!(number.as_f64().is_finite());
    }
});
