//! Fuzz target for the entries, watchlist and countries parsers.
//!
//! Goal: The parsers should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_input_parsers
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Input documents are JSON, so only UTF-8 is interesting.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = entryguard_loader::fuzz::parse_entries(text);
        let _ = entryguard_loader::fuzz::parse_watchlist(text);
        let _ = entryguard_loader::fuzz::parse_countries(text);
    }
});
